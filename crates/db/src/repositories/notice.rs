//! Notice repository.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use noticeboard_common::{AppError, AppResult};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{Notice, notice};
use crate::entities::notice::NoticeStatus;

/// Repository for notice operations.
///
/// Mutations by id (`update_fields`, `set_status`, `delete`) are issued as
/// filtered bulk statements: an id that matches no row is a successful no-op,
/// never an error.
#[derive(Clone)]
pub struct NoticeRepository {
    db: Arc<DatabaseConnection>,
}

impl NoticeRepository {
    /// Create a new notice repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Archive every active notice whose deadline has passed.
    ///
    /// Returns the number of rows flipped to `archived`.
    pub async fn archive_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = Notice::update_many()
            .col_expr(notice::Column::Status, Expr::value(NoticeStatus::Archived))
            .filter(notice::Column::Status.eq(NoticeStatus::Active))
            .filter(notice::Column::Deadline.lt(now))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }

    /// Find all active notices, newest upload first.
    pub async fn find_active(&self) -> AppResult<Vec<notice::Model>> {
        self.find_by_status(NoticeStatus::Active).await
    }

    /// Find all archived notices, newest upload first.
    pub async fn find_archived(&self) -> AppResult<Vec<notice::Model>> {
        self.find_by_status(NoticeStatus::Archived).await
    }

    async fn find_by_status(&self, status: NoticeStatus) -> AppResult<Vec<notice::Model>> {
        Notice::find()
            .filter(notice::Column::Status.eq(status))
            .order_by(notice::Column::UploadTime, Order::Desc)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a new notice with `status = active` and `upload_time = now`.
    pub async fn create(
        &self,
        title: String,
        date: NaiveDate,
        deadline: DateTime<Utc>,
        link: String,
    ) -> AppResult<notice::Model> {
        let active_model = notice::ActiveModel {
            notice_title: Set(title),
            notice_date: Set(date),
            upload_time: Set(Utc::now()),
            deadline: Set(deadline),
            notice_link: Set(link),
            status: Set(NoticeStatus::Active),
            ..Default::default()
        };

        active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Replace the four mutable fields of the notice matching `id`.
    ///
    /// `status` and `upload_time` are left untouched. Returns the number of
    /// rows matched (zero when the id does not exist).
    pub async fn update_fields(
        &self,
        id: i32,
        title: String,
        date: NaiveDate,
        deadline: DateTime<Utc>,
        link: String,
    ) -> AppResult<u64> {
        let result = Notice::update_many()
            .col_expr(notice::Column::NoticeTitle, Expr::value(title))
            .col_expr(notice::Column::NoticeDate, Expr::value(date))
            .col_expr(notice::Column::Deadline, Expr::value(deadline))
            .col_expr(notice::Column::NoticeLink, Expr::value(link))
            .filter(notice::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }

    /// Set the status of the notice matching `id` unconditionally.
    ///
    /// No deadline check is made in either direction.
    pub async fn set_status(&self, id: i32, status: NoticeStatus) -> AppResult<u64> {
        let result = Notice::update_many()
            .col_expr(notice::Column::Status, Expr::value(status))
            .filter(notice::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }

    /// Physically remove the notice matching `id`.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = Notice::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
