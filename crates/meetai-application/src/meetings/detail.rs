use meetai_core::MeetError;
use meetai_core::config::RouteSettings;
use meetai_core::confirm::ConfirmationRequest;
use meetai_core::meeting::{Affordance, Meeting, MeetingRenderState, MeetingRepository};
use meetai_core::query::QueryKey;
use meetai_core::view::{DetailView, StateCopy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cache::QueryCache;
use crate::removal::{ConfirmedRemoval, REMOVE_CONFIRMATION_TITLE, RemovalOutcome, RemovalPlan};

/// Everything the meeting detail screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetail {
    pub meeting: Meeting,
    pub render_state: MeetingRenderState,
    pub affordances: Vec<Affordance>,
}

/// Meeting detail view: status-driven rendering plus confirmed removal.
pub struct MeetingDetailUseCase {
    repository: Arc<dyn MeetingRepository>,
    cache: Arc<QueryCache>,
    removal: Arc<ConfirmedRemoval>,
    routes: RouteSettings,
}

impl MeetingDetailUseCase {
    pub fn new(
        repository: Arc<dyn MeetingRepository>,
        cache: Arc<QueryCache>,
        removal: Arc<ConfirmedRemoval>,
        routes: RouteSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            removal,
            routes,
        }
    }

    pub fn loading() -> DetailView<MeetingDetail> {
        DetailView::Loading(StateCopy::loading("Meeting"))
    }

    /// The last loaded copy, shown while [`Self::load`] refetches.
    pub async fn cached(&self, meeting_id: &str) -> Option<MeetingDetail> {
        let key = QueryKey::Meeting(meeting_id.to_string());
        let meeting: Meeting = self.cache.get(&key, &meeting_id).await?;
        Some(Self::detail(meeting))
    }

    /// Refetches the meeting; the persisted status picks the branch.
    pub async fn load(&self, meeting_id: &str) -> DetailView<MeetingDetail> {
        let key = QueryKey::Meeting(meeting_id.to_string());
        let fetched = self
            .cache
            .refresh(&key, &meeting_id, || self.repository.get_one(meeting_id))
            .await;

        match fetched {
            Ok(meeting) => DetailView::Ready(Self::detail(meeting)),
            Err(e) => {
                tracing::warn!("[MeetingDetail] load failed for {}: {}", meeting_id, e);
                DetailView::Error(StateCopy::error("Meeting"))
            }
        }
    }

    /// Removes the meeting once the user confirms.
    pub async fn remove(&self, meeting_id: &str) -> RemovalOutcome {
        match self.repository.get_one(meeting_id).await {
            Ok(meeting) => self.confirm_and_remove(&meeting).await,
            Err(e) => self.fail(e),
        }
    }

    /// The upcoming branch's cancel action.
    ///
    /// Checked against the persisted status; for anything but an upcoming
    /// meeting the call is refused without prompting.
    pub async fn cancel(&self, meeting_id: &str) -> RemovalOutcome {
        let meeting = match self.repository.get_one(meeting_id).await {
            Ok(meeting) => meeting,
            Err(e) => return self.fail(e),
        };

        let state = MeetingRenderState::resolve(&meeting);
        if !state.affordances().contains(&Affordance::CancelMeeting) {
            tracing::warn!(
                "[MeetingDetail] cancel not offered for {} in state {}",
                meeting_id,
                state.status()
            );
            return RemovalOutcome::Aborted;
        }
        self.confirm_and_remove(&meeting).await
    }

    pub fn is_removing(&self, meeting_id: &str) -> bool {
        self.removal.is_pending(meeting_id)
    }

    async fn confirm_and_remove(&self, meeting: &Meeting) -> RemovalOutcome {
        let plan = RemovalPlan {
            request: ConfirmationRequest::new(
                REMOVE_CONFIRMATION_TITLE,
                "The following action will remove the meeting.",
            ),
            invalidate: vec![
                QueryKey::MeetingsList,
                QueryKey::Meeting(meeting.id.clone()),
                // The agent's meeting count changes with it.
                QueryKey::AgentsList,
                QueryKey::Agent(meeting.agent_id.clone()),
            ],
            invalidate_families: Vec::new(),
            redirect: self.routes.meetings.clone(),
        };

        self.removal
            .run(&meeting.id, plan, || self.repository.remove(&meeting.id))
            .await
    }

    fn fail(&self, e: MeetError) -> RemovalOutcome {
        let message = e.user_message();
        self.removal.notifier().error(&message);
        RemovalOutcome::Failed(message)
    }

    fn detail(meeting: Meeting) -> MeetingDetail {
        let render_state = MeetingRenderState::resolve(&meeting);
        MeetingDetail {
            affordances: render_state.affordances(),
            render_state,
            meeting,
        }
    }
}
