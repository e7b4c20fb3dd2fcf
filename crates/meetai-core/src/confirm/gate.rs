//! The destructive-action confirmation gate.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio::sync::oneshot;

use super::request::{
    ConfirmationPrompt, ConfirmationRequest, ConfirmationResponder, OutstandingSlot,
    PendingConfirmation,
};
use crate::error::{MeetError, Result};

/// Confirmation UI collaborator (the "are you sure?" dialog).
///
/// `present` must return promptly; the dialog keeps the responder and
/// resolves it when the user clicks a button or closes the dialog.
pub trait ConfirmationPresenter: Send + Sync {
    fn present(&self, prompt: ConfirmationPrompt);
}

/// Ensures destructive actions only run after an explicit user confirmation.
///
/// At most one request is outstanding per gate. A second request made while
/// one is unresolved is rejected with [`MeetError::ConfirmationPending`]
/// rather than queued.
#[derive(Clone)]
pub struct ConfirmationGate {
    presenter: Arc<dyn ConfirmationPresenter>,
    outstanding: Arc<AtomicBool>,
}

impl ConfirmationGate {
    pub fn new(presenter: Arc<dyn ConfirmationPresenter>) -> Self {
        Self {
            presenter,
            outstanding: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Presents `request` and returns the waiting half.
    pub fn open(&self, request: ConfirmationRequest) -> Result<PendingConfirmation> {
        let slot = OutstandingSlot::claim(&self.outstanding).ok_or_else(|| {
            tracing::warn!(title = %request.title, "confirmation rejected: another is pending");
            MeetError::ConfirmationPending
        })?;

        let (sender, receiver) = oneshot::channel();
        tracing::debug!(title = %request.title, "presenting confirmation");
        self.presenter.present(ConfirmationPrompt {
            request,
            responder: ConfirmationResponder::new(sender),
        });

        Ok(PendingConfirmation::new(receiver, slot))
    }

    /// Asks the user and waits for the answer.
    pub async fn request_confirmation(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<bool> {
        let pending = self.open(ConfirmationRequest::new(title, description))?;
        let decision = pending.decision().await;
        tracing::info!(decision, "confirmation resolved");
        Ok(decision)
    }

    pub fn is_outstanding(&self) -> bool {
        self.outstanding.load(std::sync::atomic::Ordering::Acquire)
    }
}

impl std::fmt::Debug for ConfirmationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmationGate")
            .field("outstanding", &self.is_outstanding())
            .finish()
    }
}
