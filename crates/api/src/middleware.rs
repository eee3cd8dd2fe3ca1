//! API middleware and shared state.

use noticeboard_core::{AuthService, NoticeService};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Notice lifecycle service.
    pub notice_service: NoticeService,
    /// Login check service.
    pub auth_service: AuthService,
}
