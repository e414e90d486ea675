use crate::{database::MongoDB, models::User, utils::error::ApiError};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

const COLLECTION: &str = "users";

// JWT claims: identity is the email, lifetime comes from configuration.
// Nothing is persisted server-side; verification is purely cryptographic.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "default-secret-change-me".to_string())
}

pub fn get_token_lifetime() -> Duration {
    let hours = std::env::var("JWT_EXPIRES_IN_HOURS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(24);
    Duration::hours(hours)
}

// Generate JWT token
pub fn generate_jwt(email: &str) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        email: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + get_token_lifetime()).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_jwt_secret().as_ref()),
    )
    .map_err(|e| ApiError::Internal(format!("Failed to generate token: {}", e)))
}

// Verify JWT token (signature + expiry)
pub fn verify_token(token: &str) -> Result<Claims, ApiError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_jwt_secret().as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::InvalidCredentials)
}

// User registration
pub async fn register(db: &MongoDB, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    let collection = db.collection::<User>(COLLECTION);

    // Uniqueness by pre-insert check only. There is no unique index, so two
    // concurrent registrations for the same email can both pass this lookup.
    let existing = collection.find_one(doc! { "email": &request.email }).await?;
    if existing.is_some() {
        return Err(ApiError::DuplicateUser);
    }

    let hashed = hash(&request.password, DEFAULT_COST)?;

    collection
        .insert_one(User {
            id: None,
            name: request.name.clone(),
            email: request.email.clone(),
            password: hashed,
        })
        .await?;

    Ok(RegisterResponse {
        success: true,
        message: "User registered successfully".to_string(),
    })
}

// User login
pub async fn login(db: &MongoDB, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let collection = db.collection::<User>(COLLECTION);

    let user = collection
        .find_one(doc! { "email": &request.email })
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let valid = verify(&request.password, &user.password)?;
    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    let token = generate_jwt(&user.email)?;

    Ok(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
    })
}
