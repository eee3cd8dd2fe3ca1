//! User entity.
//!
//! The `users` relation pre-exists in the database and is read-only from this
//! service's perspective; there is no signup path.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User model for board administrators.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Login name.
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,

    /// Opaque credential, compared by exact equality.
    pub password: String,
}

/// Relationships.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
