//! Meeting render-state resolution.
//!
//! A meeting's persisted status selects exactly one view branch. The branch is
//! a single enum so overlapping or missing branches cannot be expressed.

use serde::{Deserialize, Serialize};

use super::model::{Meeting, MeetingStatus};

/// Actions a render state exposes to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Affordance {
    /// Open the live call screen.
    JoinCall { href: String },
    /// Cancel (remove) the meeting; routed through the confirmation gate.
    CancelMeeting,
}

/// The exclusive UI branch rendered for a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MeetingRenderState {
    Upcoming { meeting_id: String },
    Active { meeting_id: String },
    Processing,
    Completed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transcript_url: Option<String>,
    },
    Cancelled,
}

impl MeetingRenderState {
    /// Resolves the render state of a meeting. Pure and total.
    pub fn resolve(meeting: &Meeting) -> Self {
        match meeting.status {
            MeetingStatus::Upcoming => Self::Upcoming {
                meeting_id: meeting.id.clone(),
            },
            MeetingStatus::Active => Self::Active {
                meeting_id: meeting.id.clone(),
            },
            MeetingStatus::Processing => Self::Processing,
            MeetingStatus::Completed => Self::Completed {
                summary: meeting.summary.clone(),
                transcript_url: meeting.transcript_url.clone(),
            },
            MeetingStatus::Cancelled => Self::Cancelled,
        }
    }

    /// The status this branch was resolved from.
    pub fn status(&self) -> MeetingStatus {
        match self {
            Self::Upcoming { .. } => MeetingStatus::Upcoming,
            Self::Active { .. } => MeetingStatus::Active,
            Self::Processing => MeetingStatus::Processing,
            Self::Completed { .. } => MeetingStatus::Completed,
            Self::Cancelled => MeetingStatus::Cancelled,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Upcoming { .. } => "Not started yet",
            Self::Active { .. } => "Meeting is active",
            Self::Processing => "Meeting completed",
            Self::Completed { .. } => "Meeting summary",
            Self::Cancelled => "Meeting cancelled",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Upcoming { .. } => "Once you start this meeting, a summary will appear here",
            Self::Active { .. } => "Meeting will end once all participants have left",
            Self::Processing => "This meeting was completed, a summary will appear soon",
            Self::Completed { .. } => "The transcript and summary of this meeting are ready",
            Self::Cancelled => "This meeting was cancelled",
        }
    }

    /// Affordances exposed by this branch. Terminal and pending branches are read-only.
    pub fn affordances(&self) -> Vec<Affordance> {
        match self {
            Self::Upcoming { meeting_id } => vec![
                Affordance::CancelMeeting,
                Affordance::JoinCall {
                    href: call_href(meeting_id),
                },
            ],
            Self::Active { meeting_id } => vec![Affordance::JoinCall {
                href: call_href(meeting_id),
            }],
            Self::Processing | Self::Completed { .. } | Self::Cancelled => Vec::new(),
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.affordances().is_empty()
    }
}

/// Route of the live call screen for a meeting.
pub fn call_href(meeting_id: &str) -> String {
    format!("/call/{}", meeting_id)
}
