//! Authentication service.
//!
//! Credentials are checked by exact equality against the pre-existing `users`
//! relation. This preserves the plaintext-comparison contract of the legacy
//! data; it is a known weakness of that schema, not something this service
//! can fix without changing the stored credentials.

use noticeboard_common::{AppError, AppResult};
use noticeboard_db::repositories::UserRepository;

/// Service for the login check.
#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
}

impl AuthService {
    /// Create a new auth service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// Check a username/password pair.
    ///
    /// Returns `Ok(true)` on a match and `Ok(false)` when no user matches;
    /// the mismatch is an outcome, not an error. Empty fields fail validation
    /// and a failed query surfaces as a database error.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<bool> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let user = self.user_repo.find_by_credentials(username, password).await?;

        Ok(user.is_some())
    }
}
