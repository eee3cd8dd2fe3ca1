//! Notice service.

use chrono::{DateTime, NaiveDate, Utc};
use noticeboard_common::AppResult;
use noticeboard_db::entities::notice;
use noticeboard_db::entities::notice::NoticeStatus;
use noticeboard_db::repositories::NoticeRepository;
use serde::Deserialize;
use tracing::warn;
use validator::Validate;

/// The four caller-supplied notice fields, used by both create and update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NoticeInput {
    /// Title of the notice.
    #[validate(length(min = 1, message = "noticeTitle is required"))]
    pub notice_title: String,

    /// Calendar date the notice refers to.
    pub notice_date: NaiveDate,

    /// Instant after which the notice expires.
    pub deadline: DateTime<Utc>,

    /// Link to the notice document.
    #[validate(length(min = 1, message = "noticeLink is required"))]
    pub notice_link: String,
}

/// Service for managing the notice lifecycle.
#[derive(Clone)]
pub struct NoticeService {
    notice_repo: NoticeRepository,
}

impl NoticeService {
    /// Create a new notice service.
    #[must_use]
    pub const fn new(notice_repo: NoticeRepository) -> Self {
        Self { notice_repo }
    }

    /// List all active notices, newest upload first.
    ///
    /// Before reading, expired notices are swept to `archived` in bulk. The
    /// sweep and the read are two independent statements: a sweep failure is
    /// logged and swallowed so it never blocks the read, and a concurrent
    /// status change between the two statements simply wins by commit order.
    pub async fn list_active(&self) -> AppResult<Vec<notice::Model>> {
        match self.notice_repo.archive_expired(Utc::now()).await {
            Ok(swept) if swept > 0 => {
                tracing::debug!(swept, "Archived expired notices");
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Auto-archive sweep failed, serving list anyway");
            }
        }

        self.notice_repo.find_active().await
    }

    /// List all archived notices, newest upload first. No sweep is performed.
    pub async fn list_archived(&self) -> AppResult<Vec<notice::Model>> {
        self.notice_repo.find_archived().await
    }

    /// Create a new notice.
    ///
    /// All four fields must be present and non-empty; the new record starts
    /// `active` with `upload_time` set to the creation instant.
    pub async fn create(&self, input: NoticeInput) -> AppResult<notice::Model> {
        input.validate()?;

        self.notice_repo
            .create(
                input.notice_title,
                input.notice_date,
                input.deadline,
                input.notice_link,
            )
            .await
    }

    /// Replace the four mutable fields of an existing notice.
    ///
    /// `status` and `upload_time` are untouched. An id that matches no row is
    /// a silent no-op, matching the permissive contract of the store. Unlike
    /// create, the text fields are written as given, empty or not; only the
    /// create path enforces non-empty text.
    pub async fn update(&self, id: i32, input: NoticeInput) -> AppResult<()> {
        let matched = self
            .notice_repo
            .update_fields(
                id,
                input.notice_title,
                input.notice_date,
                input.deadline,
                input.notice_link,
            )
            .await?;

        if matched == 0 {
            tracing::debug!(notice_id = id, "Update matched no rows");
        }

        Ok(())
    }

    /// Archive a notice unconditionally, regardless of its deadline.
    pub async fn archive(&self, id: i32) -> AppResult<()> {
        self.notice_repo
            .set_status(id, NoticeStatus::Archived)
            .await?;
        Ok(())
    }

    /// Re-activate a notice unconditionally.
    ///
    /// No deadline re-check: an expired notice stays active until the next
    /// sweep flips it back.
    pub async fn unarchive(&self, id: i32) -> AppResult<()> {
        self.notice_repo.set_status(id, NoticeStatus::Active).await?;
        Ok(())
    }

    /// Physically delete a notice. Unknown ids are a silent no-op.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.notice_repo.delete(id).await?;
        Ok(())
    }
}
