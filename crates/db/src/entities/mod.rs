//! Database entities.

pub mod notice;
pub mod user;

pub use notice::Entity as Notice;
pub use user::Entity as User;
