use meetai_core::agent::{Agent, AgentRepository};
use meetai_core::avatar::{AvatarGenerator, AvatarVariant};
use meetai_core::config::RouteSettings;
use meetai_core::confirm::ConfirmationRequest;
use meetai_core::query::{QueryFamily, QueryKey};
use meetai_core::view::{DetailView, StateCopy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cache::QueryCache;
use crate::removal::{ConfirmedRemoval, REMOVE_CONFIRMATION_TITLE, RemovalOutcome, RemovalPlan};

/// Everything the agent detail screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDetail {
    pub agent: Agent,
    pub avatar_uri: String,
    /// "1 meeting" / "3 meetings"
    pub meeting_count_label: String,
}

/// Agent detail view: load, and remove behind a confirmation.
pub struct AgentDetailUseCase {
    repository: Arc<dyn AgentRepository>,
    cache: Arc<QueryCache>,
    removal: Arc<ConfirmedRemoval>,
    avatars: Arc<dyn AvatarGenerator>,
    routes: RouteSettings,
}

impl AgentDetailUseCase {
    pub fn new(
        repository: Arc<dyn AgentRepository>,
        cache: Arc<QueryCache>,
        removal: Arc<ConfirmedRemoval>,
        avatars: Arc<dyn AvatarGenerator>,
        routes: RouteSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            removal,
            avatars,
            routes,
        }
    }

    pub fn loading() -> DetailView<AgentDetail> {
        DetailView::Loading(StateCopy::loading("Agent"))
    }

    /// The last loaded copy, shown while [`Self::load`] refetches.
    pub async fn cached(&self, agent_id: &str) -> Option<AgentDetail> {
        let key = QueryKey::Agent(agent_id.to_string());
        let agent: Agent = self.cache.get(&key, &agent_id).await?;
        Some(self.detail(agent))
    }

    pub async fn load(&self, agent_id: &str) -> DetailView<AgentDetail> {
        let key = QueryKey::Agent(agent_id.to_string());
        let fetched = self
            .cache
            .refresh(&key, &agent_id, || self.repository.get_one(agent_id))
            .await;

        match fetched {
            Ok(agent) => DetailView::Ready(self.detail(agent)),
            Err(e) => {
                tracing::warn!("[AgentDetail] load failed for {}: {}", agent_id, e);
                DetailView::Error(StateCopy::error("Agent"))
            }
        }
    }

    /// Removes the agent (and its meetings) once the user confirms.
    ///
    /// The confirmation names how many meetings go with it, read fresh from
    /// the backend.
    pub async fn remove(&self, agent_id: &str) -> RemovalOutcome {
        let agent = match self.repository.get_one(agent_id).await {
            Ok(agent) => agent,
            Err(e) => {
                let message = e.user_message();
                self.removal.notifier().error(&message);
                return RemovalOutcome::Failed(message);
            }
        };

        let plan = RemovalPlan {
            request: ConfirmationRequest::new(
                REMOVE_CONFIRMATION_TITLE,
                format!(
                    "The following action will remove {} associated meetings.",
                    agent.meeting_count
                ),
            ),
            invalidate: vec![
                QueryKey::AgentsList,
                QueryKey::Agent(agent_id.to_string()),
                QueryKey::MeetingsList,
            ],
            // Its meetings are removed with it.
            invalidate_families: vec![QueryFamily::Meeting],
            redirect: self.routes.agents.clone(),
        };

        self.removal
            .run(agent_id, plan, || self.repository.remove(agent_id))
            .await
    }

    pub fn is_removing(&self, agent_id: &str) -> bool {
        self.removal.is_pending(agent_id)
    }

    fn detail(&self, agent: Agent) -> AgentDetail {
        AgentDetail {
            avatar_uri: self.avatars.avatar_uri(&agent.name, AvatarVariant::BotttsNeutral),
            meeting_count_label: agent.meeting_count_label(),
            agent,
        }
    }
}
