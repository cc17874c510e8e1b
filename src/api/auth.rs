use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::payload::UserBody;
use crate::api::state::AppState;
use crate::auth::{hash_password, verify_password};
use crate::db::UserRepository;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    pub token: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let password = req
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("Password is required".to_string()))?;

    let password_hash = hash_password(password)?;

    let user = UserRepository::create(&state.db, &req.name, &req.email, &password_hash).await?;

    tracing::debug!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// POST /signin
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, AppError> {
    // Unknown email and bad password take the same exit so the response
    // never says which one was wrong
    let user = UserRepository::find_by_email(&state.db, &req.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.tokens.issue(&user.id)?;

    Ok(Json(SigninResponse {
        token,
        user_id: user.id,
        name: user.name,
        email: user.email,
    }))
}

/// GET /getProfile (requires auth via middleware)
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user_id): Extension<String>,
) -> Result<Json<UserBody>, AppError> {
    let user = UserRepository::find_by_id(&state.db, &user_id)
        .await?
        .ok_or_else(|| AppError::Internal("User not found".to_string()))?;

    Ok(Json(UserBody::from(user)))
}
