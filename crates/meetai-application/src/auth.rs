//! Home and sign-in flows over the auth collaborator.

use meetai_core::MeetError;
use meetai_core::config::RouteSettings;
use meetai_core::error::Result;
use meetai_core::user::{AuthService, Credentials, SocialProvider};
use meetai_core::view::{Navigator, Notifier};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub greeting: String,
    pub signed_in: bool,
}

pub struct HomeUseCase {
    auth: Arc<dyn AuthService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    routes: RouteSettings,
}

impl HomeUseCase {
    pub fn new(
        auth: Arc<dyn AuthService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        routes: RouteSettings,
    ) -> Self {
        Self {
            auth,
            navigator,
            notifier,
            routes,
        }
    }

    /// "Logged in as {name}", or as guest without a session.
    pub async fn load(&self) -> HomeView {
        let session = self.auth.current_session().await.unwrap_or_else(|e| {
            tracing::warn!("[Home] session lookup failed: {}", e);
            None
        });

        match session {
            Some(session) => HomeView {
                greeting: format!("Logged in as {}", session.display_name()),
                signed_in: true,
            },
            None => HomeView {
                greeting: "Logged in as guest".to_string(),
                signed_in: false,
            },
        }
    }

    pub async fn sign_out(&self) -> Result<()> {
        match self.auth.sign_out().await {
            Ok(()) => {
                tracing::info!("[Home] signed out");
                self.navigator.push(&self.routes.sign_in);
                Ok(())
            }
            Err(e) => {
                self.notifier.error(&e.user_message());
                Err(e)
            }
        }
    }
}

/// Sign-in form state.
///
/// `pending` disables the form while a request runs; `error` holds the last
/// message from the auth collaborator and is cleared on each attempt.
pub struct SignInUseCase {
    auth: Arc<dyn AuthService>,
    navigator: Arc<dyn Navigator>,
    routes: RouteSettings,
    pending: AtomicBool,
    error: Mutex<Option<String>>,
}

impl SignInUseCase {
    pub fn new(auth: Arc<dyn AuthService>, navigator: Arc<dyn Navigator>, routes: RouteSettings) -> Self {
        Self {
            auth,
            navigator,
            routes,
            pending: AtomicBool::new(false),
            error: Mutex::new(None),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn error(&self) -> Option<String> {
        self.error.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub async fn sign_in_email(&self, credentials: Credentials) -> Result<()> {
        if credentials.email.trim().is_empty() {
            return Err(MeetError::validation("Email is required"));
        }
        if credentials.password.is_empty() {
            return Err(MeetError::validation("Password is required"));
        }

        let _pending = self.begin()?;
        match self.auth.sign_in_email(&credentials).await {
            Ok(session) => {
                tracing::info!("[SignIn] signed in as {}", session.user_id);
                self.navigator.push(&self.routes.home);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Starts a social sign-in; the provider redirects back to home.
    pub async fn sign_in_social(&self, provider: SocialProvider) -> Result<()> {
        let _pending = self.begin()?;
        self.auth
            .sign_in_social(provider, &self.routes.home)
            .await
            .map_err(|e| self.fail(e))
    }

    fn begin(&self) -> Result<PendingFlag<'_>> {
        if self.pending.swap(true, Ordering::SeqCst) {
            return Err(MeetError::validation("Sign-in already in progress"));
        }
        *self.error.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(PendingFlag(&self.pending))
    }

    fn fail(&self, e: MeetError) -> MeetError {
        let message = e.user_message();
        tracing::warn!("[SignIn] failed: {}", message);
        *self.error.lock().unwrap_or_else(|e| e.into_inner()) = Some(message);
        e
    }
}

struct PendingFlag<'a>(&'a AtomicBool);

impl Drop for PendingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
