use meetai_core::agent::{Agent, AgentInput, AgentRepository};
use meetai_core::error::Result;
use meetai_core::query::{QueryFamily, QueryInvalidator, QueryKey};
use meetai_core::view::Notifier;
use std::sync::Arc;

/// Create/update form for agents.
///
/// Validation errors are returned for inline display; backend errors are
/// also shown as a notification.
pub struct AgentFormUseCase {
    repository: Arc<dyn AgentRepository>,
    invalidator: Arc<dyn QueryInvalidator>,
    notifier: Arc<dyn Notifier>,
}

impl AgentFormUseCase {
    pub fn new(
        repository: Arc<dyn AgentRepository>,
        invalidator: Arc<dyn QueryInvalidator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            invalidator,
            notifier,
        }
    }

    /// Submits the form. `initial` selects edit mode.
    pub async fn submit(&self, initial: Option<&Agent>, input: AgentInput) -> Result<Agent> {
        input.validate()?;

        let saved = match initial {
            Some(agent) => self.repository.update(&agent.id, &input).await,
            None => self.repository.create(&input).await,
        };

        match saved {
            Ok(agent) => {
                self.invalidator.invalidate(&QueryKey::AgentsList).await;
                if initial.is_some() {
                    self.invalidator
                        .invalidate(&QueryKey::Agent(agent.id.clone()))
                        .await;
                    // Meetings show the agent's name.
                    self.invalidator.invalidate(&QueryKey::MeetingsList).await;
                    self.invalidator.invalidate_family(QueryFamily::Meeting).await;
                }
                tracing::info!("[AgentForm] saved agent {}", agent.id);
                self.notifier.success(if initial.is_some() {
                    "Agent updated"
                } else {
                    "Agent created"
                });
                Ok(agent)
            }
            Err(e) => {
                self.notifier.error(&e.user_message());
                Err(e)
            }
        }
    }
}
