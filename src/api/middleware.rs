use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;
use crate::error::AppError;

/// Authentication middleware - validates bearer tokens.
/// Logs outcomes only; the raw header and token never reach the log.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    // Extract token from "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid Authorization format".to_string()))?;

    let user_id = state.tokens.verify(token).inspect_err(|_| {
        tracing::debug!("rejected bearer token");
    })?;

    tracing::debug!(%user_id, "request authenticated");

    // Store user_id in request extensions
    request.extensions_mut().insert(user_id);

    Ok(next.run(request).await)
}
