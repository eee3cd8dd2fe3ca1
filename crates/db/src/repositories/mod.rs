//! Database repositories.

mod notice;
mod user;

pub use notice::NoticeRepository;
pub use user::UserRepository;
