//! Business logic services.

pub mod auth;
pub mod notice;

pub use auth::AuthService;
pub use notice::{NoticeInput, NoticeService};
