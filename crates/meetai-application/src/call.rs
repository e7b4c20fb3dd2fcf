//! Call screen gating.
//!
//! The call screen needs a signed-in user and a joinable meeting. Everything
//! else resolves to a state the screen renders instead of the call.

use meetai_core::avatar::{AvatarGenerator, AvatarVariant};
use meetai_core::config::RouteSettings;
use meetai_core::meeting::{MeetingRenderState, MeetingRepository};
use meetai_core::user::{AuthService, UserSession};
use meetai_core::view::{Navigator, StateCopy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The signed-in user as shown in the call lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParticipant {
    pub user_id: String,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum CallView {
    Loading(StateCopy),
    /// Redirected to sign-in.
    Unauthenticated,
    /// The meeting exists but its status does not allow joining.
    Unavailable(MeetingRenderState),
    Ready(CallParticipant),
    Error(StateCopy),
}

/// Screen shown after the user leaves the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallEnded {
    pub title: String,
    pub description: String,
    pub back_href: String,
}

pub struct CallUseCase {
    auth: Arc<dyn AuthService>,
    meetings: Arc<dyn MeetingRepository>,
    avatars: Arc<dyn AvatarGenerator>,
    navigator: Arc<dyn Navigator>,
    routes: RouteSettings,
}

impl CallUseCase {
    pub fn new(
        auth: Arc<dyn AuthService>,
        meetings: Arc<dyn MeetingRepository>,
        avatars: Arc<dyn AvatarGenerator>,
        navigator: Arc<dyn Navigator>,
        routes: RouteSettings,
    ) -> Self {
        Self {
            auth,
            meetings,
            avatars,
            navigator,
            routes,
        }
    }

    pub async fn load(&self, meeting_id: &str) -> CallView {
        let session = match self.auth.current_session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("[Call] session lookup failed: {}", e);
                return CallView::Error(StateCopy::error("Meeting"));
            }
        };

        let Some(session) = session else {
            if self.auth.is_pending() {
                return CallView::Loading(StateCopy::loading("Meeting"));
            }
            tracing::info!("[Call] no session, redirecting to {}", self.routes.sign_in);
            self.navigator.push(&self.routes.sign_in);
            return CallView::Unauthenticated;
        };

        let meeting = match self.meetings.get_one(meeting_id).await {
            Ok(meeting) => meeting,
            Err(e) => {
                tracing::warn!("[Call] meeting {} failed to load: {}", meeting_id, e);
                return CallView::Error(StateCopy::error("Meeting"));
            }
        };

        if !meeting.status.is_joinable() {
            return CallView::Unavailable(MeetingRenderState::resolve(&meeting));
        }

        CallView::Ready(self.participant(&session))
    }

    pub fn ended(&self) -> CallEnded {
        CallEnded {
            title: "You have ended the call".to_string(),
            description: "Summary will appear in a few minutes.".to_string(),
            back_href: self.routes.meetings.clone(),
        }
    }

    fn participant(&self, session: &UserSession) -> CallParticipant {
        let image = session
            .image
            .clone()
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| {
                self.avatars
                    .avatar_uri(&session.name, AvatarVariant::Initials)
            });

        CallParticipant {
            user_id: session.user_id.clone(),
            name: session.name.clone(),
            image,
        }
    }
}
