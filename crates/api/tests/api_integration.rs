//! API integration tests.
//!
//! These tests drive the full router over a mocked database connection.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{NaiveDate, Utc};
use noticeboard_api::{middleware::AppState, router};
use noticeboard_core::{AuthService, NoticeService};
use noticeboard_db::entities::notice::{self, NoticeStatus};
use noticeboard_db::entities::user;
use noticeboard_db::repositories::{NoticeRepository, UserRepository};
use sea_orm::{DatabaseConnection, MockExecResult};
use std::sync::Arc;
use tower::ServiceExt;

/// Build an app over the given mocked connection.
fn create_app(db: DatabaseConnection) -> Router {
    let db = Arc::new(db);
    let state = AppState {
        notice_service: NoticeService::new(NoticeRepository::new(Arc::clone(&db))),
        auth_service: AuthService::new(UserRepository::new(db)),
    };
    router().with_state(state)
}

fn mock_db() -> sea_orm::MockDatabase {
    sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::MySql)
}

fn test_notice(id: i32, title: &str, status: NoticeStatus) -> notice::Model {
    notice::Model {
        id,
        notice_title: title.to_string(),
        notice_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        upload_time: Utc::now(),
        deadline: "2024-01-15T00:00:00Z".parse().unwrap(),
        notice_link: "http://example.com/exam.pdf".to_string(),
        status,
    }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_home_route_answers() {
    let app = create_app(mock_db().into_connection());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_active_returns_bare_json_array() {
    let db = mock_db()
        // Sweep update first, then the select.
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .append_query_results([[test_notice(1, "Exam Schedule", NoticeStatus::Active)]])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/notices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.starts_with('['));
    assert!(body.contains("\"noticeTitle\":\"Exam Schedule\""));
    assert!(body.contains("\"status\":\"active\""));
}

#[tokio::test]
async fn test_list_active_still_serves_when_sweep_fails() {
    let db = mock_db()
        .append_exec_errors([sea_orm::DbErr::Custom("sweep failed".to_string())])
        .append_query_results([[test_notice(1, "Exam Schedule", NoticeStatus::Active)]])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/notices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_archived_returns_archived_notices() {
    let db = mock_db()
        .append_query_results([[test_notice(2, "Old Circular", NoticeStatus::Archived)]])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/notices/archived")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"archived\""));
}

#[tokio::test]
async fn test_create_notice_echoes_assigned_id() {
    let db = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .append_query_results([[test_notice(1, "Exam Schedule", NoticeStatus::Active)]])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(json_request(
            "POST",
            "/notices",
            r#"{
                "noticeTitle": "Exam Schedule",
                "noticeDate": "2024-01-10",
                "deadline": "2024-01-15T00:00:00Z",
                "noticeLink": "http://example.com/exam.pdf"
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("\"id\":1"));
    assert!(body.contains("\"noticeTitle\":\"Exam Schedule\""));
}

#[tokio::test]
async fn test_create_notice_with_empty_title_is_400() {
    let app = create_app(mock_db().into_connection());

    let response = app
        .oneshot(json_request(
            "POST",
            "/notices",
            r#"{
                "noticeTitle": "",
                "noticeDate": "2024-01-10",
                "deadline": "2024-01-15T00:00:00Z",
                "noticeLink": "http://example.com/exam.pdf"
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_notice_with_missing_field_is_400() {
    let app = create_app(mock_db().into_connection());

    let response = app
        .oneshot(json_request(
            "POST",
            "/notices",
            r#"{"noticeTitle": "Exam Schedule"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_notice_is_still_a_confirmation() {
    let db = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(json_request(
            "PUT",
            "/notices/999",
            r#"{
                "noticeTitle": "Exam Schedule",
                "noticeDate": "2024-01-10",
                "deadline": "2024-01-15T00:00:00Z",
                "noticeLink": "http://example.com/exam.pdf"
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Updated successfully!"));
}

#[tokio::test]
async fn test_update_with_empty_title_is_accepted() {
    // Emptiness checks apply to create only; an update writes whatever it is
    // given and answers with the usual confirmation.
    let db = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(json_request(
            "PUT",
            "/notices/1",
            r#"{
                "noticeTitle": "",
                "noticeDate": "2024-01-10",
                "deadline": "2024-01-15T00:00:00Z",
                "noticeLink": "http://example.com/exam.pdf"
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Updated successfully!"));
}

#[tokio::test]
async fn test_archive_and_unarchive_confirm() {
    let db = mock_db()
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ])
        .into_connection();

    let app = create_app(db);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/notices/archive/5", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Archived!"));

    let response = app
        .oneshot(json_request("PUT", "/notices/unarchive/5", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Unarchived!"));
}

#[tokio::test]
async fn test_delete_notice_confirms_even_without_match() {
    let db = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/notices/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Deleted!"));
}

#[tokio::test]
async fn test_login_success() {
    let db = mock_db()
        .append_query_results([[user::Model {
            username: "admin".to_string(),
            password: "secret".to_string(),
        }]])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            r#"{"username": "admin", "password": "secret"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("\"success\":true"));
}

#[tokio::test]
async fn test_login_mismatch_is_401_not_500() {
    let db = mock_db()
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            r#"{"username": "admin", "password": "wrong"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_string(response).await;
    assert!(body.contains("\"success\":false"));
}

#[tokio::test]
async fn test_login_with_empty_username_is_400() {
    let app = create_app(mock_db().into_connection());

    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            r#"{"username": "", "password": "secret"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_failure_surfaces_as_500() {
    let db = mock_db()
        .append_query_errors([sea_orm::DbErr::Custom("connection lost".to_string())])
        .into_connection();

    let app = create_app(db);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/notices/archived")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
