//! Authentication endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use noticeboard_common::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::middleware::AppState;

/// Create auth router.
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response.
///
/// A credential mismatch is a distinct outcome from a server error: it keeps
/// the `{success, message}` shape and answers with 401 instead of 500.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::UNAUTHORIZED
        };
        (status, Json(self)).into_response()
    }
}

/// Check a username/password pair against the users relation.
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<LoginResponse> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let matched = state.auth_service.login(&req.username, &req.password).await?;

    if matched {
        info!(username = %req.username, "Login succeeded");
        Ok(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
        })
    } else {
        info!(username = %req.username, "Login failed");
        Ok(LoginResponse {
            success: false,
            message: "Invalid username or password".to_string(),
        })
    }
}
