//! Notice endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, put},
};
use chrono::{DateTime, NaiveDate, Utc};
use noticeboard_common::{AppError, AppResult};
use noticeboard_core::NoticeInput;
use noticeboard_db::entities::notice;
use noticeboard_db::entities::notice::NoticeStatus;
use serde::Serialize;
use tracing::info;

use crate::middleware::AppState;

/// Create notice router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_active).post(create_notice))
        .route("/archived", get(list_archived))
        .route("/archive/{id}", put(archive_notice))
        .route("/unarchive/{id}", put(unarchive_notice))
        .route("/{id}", put(update_notice).delete(delete_notice))
}

/// Notice response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeResponse {
    pub id: i32,
    pub notice_title: String,
    pub notice_date: NaiveDate,
    pub upload_time: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub notice_link: String,
    pub status: NoticeStatus,
}

impl From<notice::Model> for NoticeResponse {
    fn from(notice: notice::Model) -> Self {
        Self {
            id: notice.id,
            notice_title: notice.notice_title,
            notice_date: notice.notice_date,
            upload_time: notice.upload_time,
            deadline: notice.deadline,
            notice_link: notice.notice_link,
            status: notice.status,
        }
    }
}

/// Confirmation message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// List active notices. Sweeps expired ones to `archived` first.
async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<NoticeResponse>>> {
    let notices = state.notice_service.list_active().await?;

    Ok(Json(notices.into_iter().map(NoticeResponse::from).collect()))
}

/// List archived notices.
async fn list_archived(State(state): State<AppState>) -> AppResult<Json<Vec<NoticeResponse>>> {
    let notices = state.notice_service.list_archived().await?;

    Ok(Json(notices.into_iter().map(NoticeResponse::from).collect()))
}

/// Create a notice.
async fn create_notice(
    State(state): State<AppState>,
    payload: Result<Json<NoticeInput>, JsonRejection>,
) -> AppResult<Json<NoticeResponse>> {
    // A missing or malformed field is the caller's fault: answer 400, not 422.
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    info!(title = %req.notice_title, "Creating notice");

    let notice = state.notice_service.create(req).await?;

    Ok(Json(NoticeResponse::from(notice)))
}

/// Replace the four mutable fields of a notice.
async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<NoticeInput>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    info!(notice_id = id, "Updating notice");

    state.notice_service.update(id, req).await?;

    Ok(Json(MessageResponse::new("Updated successfully!")))
}

/// Archive a notice regardless of its deadline.
async fn archive_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    info!(notice_id = id, "Archiving notice");

    state.notice_service.archive(id).await?;

    Ok(Json(MessageResponse::new("Archived!")))
}

/// Move a notice back to the active list, even past its deadline.
async fn unarchive_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    info!(notice_id = id, "Unarchiving notice");

    state.notice_service.unarchive(id).await?;

    Ok(Json(MessageResponse::new("Unarchived!")))
}

/// Delete a notice permanently.
async fn delete_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    info!(notice_id = id, "Deleting notice");

    state.notice_service.delete(id).await?;

    Ok(Json(MessageResponse::new("Deleted!")))
}
