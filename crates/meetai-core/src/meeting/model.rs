//! Meeting domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::MeetError;

/// Persisted lifecycle status of a meeting.
///
/// Transitions happen server-side; this crate only reads the value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MeetingStatus {
    Upcoming,
    Active,
    Processing,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    /// Parses a persisted status string.
    ///
    /// Unknown values are a data error, not a silently ignored case.
    pub fn parse(value: &str) -> Result<Self, MeetError> {
        Self::from_str(value).map_err(|_| MeetError::UnknownStatus(value.to_string()))
    }

    /// Wire form of the status (`"upcoming"`, `"active"`, ...).
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Whether a call can still be joined for a meeting in this status.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Upcoming | Self::Active)
    }

    /// Whether no further transitions are expected from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// A scheduled or executed call session with an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub name: String,
    pub agent_id: String,
    pub status: MeetingStatus,
    /// Display name of the associated agent, joined by the backend.
    #[serde(default)]
    pub agent_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Meeting {
    /// Elapsed call time, when both timestamps are known.
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) if end >= start => Some(end - start),
            _ => None,
        }
    }
}

/// Fields submitted by the meeting create/update form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInput {
    pub name: String,
    pub agent_id: String,
}

impl MeetingInput {
    pub fn new(name: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agent_id: agent_id.into(),
        }
    }

    /// Rejects blank fields before the form reaches the backend.
    pub fn validate(&self) -> Result<(), MeetError> {
        if self.name.trim().is_empty() {
            return Err(MeetError::validation("Name is required"));
        }
        if self.agent_id.trim().is_empty() {
            return Err(MeetError::validation("Agent is required"));
        }
        Ok(())
    }
}
