//! Cached query identities and the invalidation seam.
//!
//! The list/detail cache belongs to the data-fetch layer. Views never write
//! to it; they only ask for entries to be invalidated after a mutation has
//! succeeded.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identifies a cached query (or a family of them, for lists).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum QueryKey {
    /// Every page of `agents.getMany`.
    AgentsList,
    /// `agents.getOne(id)`
    Agent(String),
    /// Every page of `meetings.getMany`.
    MeetingsList,
    /// `meetings.getOne(id)`
    Meeting(String),
}

/// A procedure regardless of its input: every agent detail, every meeting
/// detail, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryFamily {
    AgentsList,
    Agent,
    MeetingsList,
    Meeting,
}

impl QueryKey {
    pub fn family(&self) -> QueryFamily {
        match self {
            Self::AgentsList => QueryFamily::AgentsList,
            Self::Agent(_) => QueryFamily::Agent,
            Self::MeetingsList => QueryFamily::MeetingsList,
            Self::Meeting(_) => QueryFamily::Meeting,
        }
    }
}

#[async_trait]
pub trait QueryInvalidator: Send + Sync {
    /// Drops cached results for `key` so the next read refetches.
    async fn invalidate(&self, key: &QueryKey);

    /// Drops cached results of every key in `family`.
    async fn invalidate_family(&self, family: QueryFamily);
}
