//! In-memory auth collaborator.

use async_trait::async_trait;
use meetai_core::MeetError;
use meetai_core::error::Result;
use meetai_core::user::{AuthService, Credentials, SocialProvider, UserSession};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Account {
    session: UserSession,
    password: String,
}

/// Email/password accounts and a single current session, kept in memory.
///
/// Social sign-in completes immediately with a provider-named account.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthService {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    session: Arc<RwLock<Option<UserSession>>>,
    pending: Arc<AtomicBool>,
}

impl InMemoryAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `session` already signed in.
    pub fn signed_in(session: UserSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(Some(session))),
            ..Self::default()
        }
    }

    /// Simulates the client still resolving the session.
    pub fn set_pending(&self, pending: bool) {
        self.pending.store(pending, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn current_session(&self) -> Result<Option<UserSession>> {
        Ok(self.session.read().await.clone())
    }

    fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    async fn sign_in_email(&self, credentials: &Credentials) -> Result<UserSession> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(&credentials.email)
            .filter(|account| account.password == credentials.password)
            .ok_or_else(|| MeetError::backend("Invalid email or password"))?;

        let session = account.session.clone();
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_in_social(&self, provider: SocialProvider, callback_url: &str) -> Result<()> {
        let session = UserSession {
            user_id: Uuid::new_v4().to_string(),
            name: format!("{} user", provider),
            email: format!("user@{}.example", provider),
            image: None,
        };
        tracing::debug!("[InMemoryAuth] {} sign-in, callback {}", provider, callback_url);
        *self.session.write().await = Some(session);
        Ok(())
    }

    async fn sign_up_email(&self, name: &str, credentials: &Credentials) -> Result<UserSession> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&credentials.email) {
            return Err(MeetError::backend("User already exists"));
        }

        let session = UserSession {
            user_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: credentials.email.clone(),
            image: None,
        };
        accounts.insert(
            credentials.email.clone(),
            Account {
                session: session.clone(),
                password: credentials.password.clone(),
            },
        );
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        let mut session = self.session.write().await;
        if session.is_none() {
            return Err(MeetError::Unauthorized);
        }
        *session = None;
        Ok(())
    }
}
