use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServerStatus {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses(
        (status = 200, description = "Service is up", body = ServerStatus)
    )
)]
pub async fn server_status() -> impl Responder {
    HttpResponse::Ok().json(ServerStatus {
        message: "Server is running smoothly".to_string(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_server_status_route() {
        let app = test::init_service(
            App::new().route("/", web::get().to(server_status)),
        )
        .await;

        let before = Utc::now();
        let request = test::TestRequest::get().uri("/").to_request();
        let status: ServerStatus = test::call_and_read_body_json(&app, request).await;

        assert_eq!(status.message, "Server is running smoothly");
        assert!(status.timestamp >= before);
        assert!(status.timestamp <= Utc::now());
    }
}
