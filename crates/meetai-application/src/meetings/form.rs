use meetai_core::config::RouteSettings;
use meetai_core::error::Result;
use meetai_core::meeting::{Meeting, MeetingInput, MeetingRepository};
use meetai_core::query::{QueryInvalidator, QueryKey};
use meetai_core::view::{Navigator, Notifier};
use std::sync::Arc;

/// Create/update form for meetings.
///
/// A newly created meeting opens its detail view; an edit stays in place.
pub struct MeetingFormUseCase {
    repository: Arc<dyn MeetingRepository>,
    invalidator: Arc<dyn QueryInvalidator>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    routes: RouteSettings,
}

impl MeetingFormUseCase {
    pub fn new(
        repository: Arc<dyn MeetingRepository>,
        invalidator: Arc<dyn QueryInvalidator>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        routes: RouteSettings,
    ) -> Self {
        Self {
            repository,
            invalidator,
            navigator,
            notifier,
            routes,
        }
    }

    pub async fn submit(&self, initial: Option<&Meeting>, input: MeetingInput) -> Result<Meeting> {
        input.validate()?;

        let saved = match initial {
            Some(meeting) => self.repository.update(&meeting.id, &input).await,
            None => self.repository.create(&input).await,
        };

        let meeting = match saved {
            Ok(meeting) => meeting,
            Err(e) => {
                self.notifier.error(&e.user_message());
                return Err(e);
            }
        };

        self.invalidator.invalidate(&QueryKey::MeetingsList).await;
        self.invalidator.invalidate(&QueryKey::AgentsList).await;
        self.invalidator
            .invalidate(&QueryKey::Agent(meeting.agent_id.clone()))
            .await;
        // Moving a meeting to another agent changes the old agent's count too.
        if let Some(previous) = initial
            && previous.agent_id != meeting.agent_id
        {
            self.invalidator
                .invalidate(&QueryKey::Agent(previous.agent_id.clone()))
                .await;
        }
        match initial {
            Some(_) => {
                self.invalidator
                    .invalidate(&QueryKey::Meeting(meeting.id.clone()))
                    .await;
            }
            None => {
                self.navigator.push(&self.routes.meeting(&meeting.id));
            }
        }

        tracing::info!("[MeetingForm] saved meeting {}", meeting.id);
        Ok(meeting)
    }
}
