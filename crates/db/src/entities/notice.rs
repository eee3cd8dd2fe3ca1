//! Notice entity.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a notice.
///
/// `active → archived` happens on an explicit archive call or lazily when the
/// active list is read and the deadline has passed. `archived → active` only
/// happens on an explicit unarchive call, with no deadline re-check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    /// Visible on the board.
    #[sea_orm(string_value = "active")]
    Active,
    /// Moved off the board, still retrievable.
    #[sea_orm(string_value = "archived")]
    Archived,
}

/// Notice model for board announcements.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notices")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique notice ID, assigned by the store on creation.
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Title of the notice.
    pub notice_title: String,

    /// Calendar date the notice refers to (no time component).
    pub notice_date: NaiveDate,

    /// When the notice was created. Set once, immutable.
    pub upload_time: DateTime<Utc>,

    /// Instant after which the notice is considered expired.
    pub deadline: DateTime<Utc>,

    /// Link to the notice document.
    pub notice_link: String,

    /// Current lifecycle state.
    pub status: NoticeStatus,
}

/// Relationships.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
