//! Single-use confirmation request halves.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::oneshot;

/// Title and description shown to the user before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub title: String,
    pub description: String,
}

impl ConfirmationRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The UI half: submits the user's decision exactly once.
///
/// Every method consumes the responder, so a request cannot be resolved
/// twice. Dropping it without a decision (closing the dialog) resolves the
/// request as `false`.
#[derive(Debug)]
pub struct ConfirmationResponder {
    sender: Option<oneshot::Sender<bool>>,
}

impl ConfirmationResponder {
    pub(crate) fn new(sender: oneshot::Sender<bool>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    pub fn respond(mut self, decision: bool) {
        self.send(decision);
    }

    pub fn confirm(self) {
        self.respond(true);
    }

    pub fn cancel(self) {
        self.respond(false);
    }

    /// Closes the prompt without an explicit choice.
    pub fn dismiss(self) {
        drop(self);
    }

    fn send(&mut self, decision: bool) {
        if let Some(sender) = self.sender.take() {
            // The waiting side may already be gone; nothing to resolve then.
            let _ = sender.send(decision);
        }
    }
}

impl Drop for ConfirmationResponder {
    fn drop(&mut self) {
        self.send(false);
    }
}

/// What the presenter receives: the copy to display and the responder.
#[derive(Debug)]
pub struct ConfirmationPrompt {
    pub request: ConfirmationRequest,
    pub responder: ConfirmationResponder,
}

/// Marks the gate busy while its request is unresolved.
#[derive(Debug)]
pub(crate) struct OutstandingSlot(Arc<AtomicBool>);

impl OutstandingSlot {
    /// Claims the slot, or returns `None` when another request holds it.
    pub(crate) fn claim(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for OutstandingSlot {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The caller half: waits for the user's decision.
#[derive(Debug)]
pub struct PendingConfirmation {
    receiver: oneshot::Receiver<bool>,
    _slot: OutstandingSlot,
}

impl PendingConfirmation {
    pub(crate) fn new(receiver: oneshot::Receiver<bool>, slot: OutstandingSlot) -> Self {
        Self {
            receiver,
            _slot: slot,
        }
    }

    /// Suspends until the user answers. A dismissed prompt yields `false`.
    pub async fn decision(self) -> bool {
        self.receiver.await.unwrap_or(false)
    }
}
