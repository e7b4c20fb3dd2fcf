//! Agent domain model.

use serde::{Deserialize, Serialize};

use crate::error::MeetError;

/// A configured AI assistant used to run meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub instructions: String,
    /// Number of meetings run with this agent, computed by the backend.
    #[serde(default)]
    pub meeting_count: u64,
}

impl Agent {
    /// Badge text on the agent detail view: "1 meeting" / "3 meetings".
    pub fn meeting_count_label(&self) -> String {
        if self.meeting_count == 1 {
            "1 meeting".to_string()
        } else {
            format!("{} meetings", self.meeting_count)
        }
    }
}

/// Fields submitted by the agent create/update form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgentInput {
    pub name: String,
    pub instructions: String,
}

impl AgentInput {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
        }
    }

    /// Prefills the edit form from an existing agent.
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            name: agent.name.clone(),
            instructions: agent.instructions.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), MeetError> {
        if self.name.trim().is_empty() {
            return Err(MeetError::validation("Name is required"));
        }
        if self.instructions.trim().is_empty() {
            return Err(MeetError::validation("Instructions is required"));
        }
        Ok(())
    }
}
