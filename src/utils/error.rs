use actix_web::HttpResponse;
use std::fmt;

/// Closed set of error kinds the API can surface. Everything the store or
/// the crypto layer throws is folded into `Internal` before it reaches a
/// handler, so driver error types never leak into the HTTP contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    DuplicateUser,
    /// Covers both unknown email and wrong password. The two cases are
    /// intentionally indistinguishable to callers.
    InvalidCredentials,
    NotFound(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::DuplicateUser => write!(f, "User already exists"),
            ApiError::InvalidCredentials => write!(f, "Invalid email or password"),
            ApiError::NotFound(what) => write!(f, "{} not found", what),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::DuplicateUser => 400,
            ApiError::InvalidCredentials => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    /// Uniform translation boundary used at the edge of every handler.
    /// Internal detail goes to the log, not to the client.
    pub fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::DuplicateUser => HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "message": self.to_string()
            })),
            ApiError::InvalidCredentials => {
                HttpResponse::Unauthorized().json(serde_json::json!({
                    "success": false,
                    "message": self.to_string()
                }))
            }
            ApiError::NotFound(_) => HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "message": self.to_string()
            })),
            ApiError::Internal(detail) => {
                log::error!("💥 Internal error: {}", detail);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "success": false,
                    "message": "Internal server error"
                }))
            }
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(e: mongodb::error::Error) -> Self {
        ApiError::Internal(format!("Database error: {}", e))
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(e: bcrypt::BcryptError) -> Self {
        ApiError::Internal(format!("Password hashing error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::DuplicateUser.status_code(), 400);
        assert_eq!(ApiError::InvalidCredentials.status_code(), 401);
        assert_eq!(ApiError::NotFound("Project".to_string()).status_code(), 404);
        assert_eq!(ApiError::Internal("boom".to_string()).status_code(), 500);
    }

    #[test]
    fn test_response_status_matches_variant() {
        let cases = [
            (ApiError::DuplicateUser, 400),
            (ApiError::InvalidCredentials, 401),
            (ApiError::NotFound("Project".to_string()), 404),
            (ApiError::Internal("store down".to_string()), 500),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status().as_u16(), expected);
        }
    }

    #[test]
    fn test_internal_detail_never_reaches_display_of_response() {
        // The Display impl carries the detail for the log; the HTTP body is
        // built with a generic message inside error_response().
        let error = ApiError::Internal("connection refused 10.0.0.5:27017".to_string());
        assert!(error.to_string().contains("connection refused"));
        assert_eq!(error.error_response().status().as_u16(), 500);
    }
}
