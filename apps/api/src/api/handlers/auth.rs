use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::{jwt, password};
use crate::domain::repositories::{RepositoryError, User};
use crate::domain::user::Email;

/// Email and password, as sent to both register and login
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub user_id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub user_id: Uuid,
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid credentials")
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<RegisteredUser>), ApiError> {
    let email = Email::new(&credentials.email).map_err(ApiError::bad_request)?;
    password::validate_password(&credentials.password).map_err(ApiError::bad_request)?;

    let password_hash = password::hash_password(&credentials.password).map_err(|e| {
        tracing::error!(error = %e, "bcrypt hashing failed");
        ApiError::internal_server_error("Could not register user")
    })?;

    let new_user = User {
        id: Uuid::new_v4(),
        email,
        password_hash,
    };

    let user_id = match state.users.create(new_user).await {
        Ok(id) => id,
        Err(RepositoryError::Conflict(_)) => {
            return Err(ApiError::conflict("Email already registered"))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store user");
            return Err(ApiError::internal_server_error("Could not register user"));
        }
    };

    tracing::info!(%user_id, "User registered");

    let body = RegisteredUser {
        user_id,
        message: "User registered successfully".to_string(),
    };
    Ok((StatusCode::CREATED, Json(body)))
}

/// Exchanges valid credentials for a bearer token
///
/// Unknown emails and wrong passwords get the same 401.
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<IssuedToken>, ApiError> {
    let email = Email::new(&credentials.email).map_err(|_| invalid_credentials())?;

    let Some(user) = state.users.find_by_email(&email).await.map_err(|e| {
        tracing::error!(error = %e, "User lookup failed");
        ApiError::internal_server_error("Could not log in")
    })?
    else {
        return Err(invalid_credentials());
    };

    let matches = password::verify_password(&credentials.password, &user.password_hash)
        .map_err(|e| {
            tracing::error!(error = %e, "bcrypt verification failed");
            ApiError::internal_server_error("Could not log in")
        })?;
    if !matches {
        return Err(invalid_credentials());
    }

    let ttl = chrono::Duration::try_hours(state.config.token_ttl_hours)
        .ok_or_else(|| ApiError::internal_server_error("Token lifetime out of range"))?;
    let token = jwt::create_token(user.id, &state.config.jwt_secret, ttl)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(Json(IssuedToken {
        token,
        user_id: user.id,
    }))
}

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
