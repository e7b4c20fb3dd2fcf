//! Authentication collaborator.

use async_trait::async_trait;

use super::model::{Credentials, SocialProvider, UserSession};
use crate::error::Result;

/// Abstracts the authentication backend.
///
/// The view-state controller only reads session presence; the sign-in and
/// sign-out operations back the home and sign-in views.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Returns the current session, or `None` when signed out.
    async fn current_session(&self) -> Result<Option<UserSession>>;

    /// Whether the session lookup is still in flight.
    fn is_pending(&self) -> bool;

    async fn sign_in_email(&self, credentials: &Credentials) -> Result<UserSession>;

    /// Starts an OAuth flow; the backend redirects to `callback_url` when done.
    async fn sign_in_social(&self, provider: SocialProvider, callback_url: &str) -> Result<()>;

    async fn sign_up_email(&self, name: &str, credentials: &Credentials) -> Result<UserSession>;

    async fn sign_out(&self) -> Result<()>;
}
