//! Confirmed removal flow shared by the agent and meeting detail views.
//!
//! Order of operations is fixed: confirmation, then the mutation, then cache
//! invalidation, then navigation. A failed mutation stops after a
//! notification and leaves the view where it is.

use meetai_core::MeetError;
use meetai_core::confirm::{ConfirmationGate, ConfirmationRequest};
use meetai_core::error::Result;
use meetai_core::query::{QueryFamily, QueryInvalidator, QueryKey};
use meetai_core::view::{Navigator, Notifier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Title of every removal confirmation.
pub const REMOVE_CONFIRMATION_TITLE: &str = "Are you sure?";

/// How a removal attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum RemovalOutcome {
    /// Confirmed, removed, caches invalidated and navigated away.
    Removed,
    /// The user declined or dismissed the confirmation.
    Aborted,
    /// The backend rejected the removal; the message was shown to the user.
    Failed(String),
    /// A removal of this record, or another confirmation, is already running.
    Busy,
}

/// Tracks records with a removal in flight.
#[derive(Debug, Default)]
struct InFlight {
    ids: Mutex<HashSet<String>>,
}

impl InFlight {
    fn claim(self: &Arc<Self>, id: &str) -> Option<InFlightGuard> {
        let mut ids = self.ids.lock().unwrap_or_else(|e| e.into_inner());
        if ids.insert(id.to_string()) {
            Some(InFlightGuard {
                owner: Arc::clone(self),
                id: id.to_string(),
            })
        } else {
            None
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(id)
    }
}

struct InFlightGuard {
    owner: Arc<InFlight>,
    id: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.owner
            .ids
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.id);
    }
}

/// What to invalidate and where to go once a removal succeeds.
#[derive(Debug, Clone)]
pub struct RemovalPlan {
    pub request: ConfirmationRequest,
    pub invalidate: Vec<QueryKey>,
    pub invalidate_families: Vec<QueryFamily>,
    pub redirect: String,
}

/// Runs destructive mutations behind the confirmation gate.
pub struct ConfirmedRemoval {
    gate: ConfirmationGate,
    invalidator: Arc<dyn QueryInvalidator>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    in_flight: Arc<InFlight>,
}

impl ConfirmedRemoval {
    pub fn new(
        gate: ConfirmationGate,
        invalidator: Arc<dyn QueryInvalidator>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gate,
            invalidator,
            navigator,
            notifier,
            in_flight: Arc::new(InFlight::default()),
        }
    }

    /// Whether a removal of `record_id` is running (its trigger should be disabled).
    pub fn is_pending(&self, record_id: &str) -> bool {
        self.in_flight.contains(record_id)
    }

    pub(crate) fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Asks for confirmation, then runs `mutation` for `record_id`.
    pub async fn run<T, F, Fut>(&self, record_id: &str, plan: RemovalPlan, mutation: F) -> RemovalOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let Some(_guard) = self.in_flight.claim(record_id) else {
            tracing::warn!("[Removal] already in flight: {}", record_id);
            return RemovalOutcome::Busy;
        };

        let confirmed = match self
            .gate
            .request_confirmation(plan.request.title, plan.request.description)
            .await
        {
            Ok(confirmed) => confirmed,
            Err(MeetError::ConfirmationPending) => return RemovalOutcome::Busy,
            Err(e) => {
                self.notifier.error(&e.user_message());
                return RemovalOutcome::Failed(e.user_message());
            }
        };

        if !confirmed {
            tracing::info!("[Removal] aborted by user: {}", record_id);
            return RemovalOutcome::Aborted;
        }

        if let Err(e) = mutation().await {
            let message = e.user_message();
            tracing::warn!("[Removal] failed for {}: {}", record_id, message);
            self.notifier.error(&message);
            return RemovalOutcome::Failed(message);
        }

        for key in &plan.invalidate {
            self.invalidator.invalidate(key).await;
        }
        for family in &plan.invalidate_families {
            self.invalidator.invalidate_family(*family).await;
        }
        tracing::info!("[Removal] removed {}, navigating to {}", record_id, plan.redirect);
        self.navigator.push(&plan.redirect);

        RemovalOutcome::Removed
    }
}
