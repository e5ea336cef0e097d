//! Authentication collaborator.

use crate::error::Result;

/// Verifies sign-in credentials.
pub trait Authenticator: Send + Sync {
    /// Checks a screen name and password.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuddyError::AuthenticationFailed`] when rejected.
    fn authenticate(&self, username: &str, password: &str) -> Result<()>;
}

/// Accepts any credentials.
///
/// The shell has no account backend, so this is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Authenticator for AcceptAll {
    fn authenticate(&self, _username: &str, _password: &str) -> Result<()> {
        Ok(())
    }
}
