//! Agent data-fetch/mutation collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::model::{Agent, AgentInput};
use crate::error::Result;
use crate::pagination::Paginated;

/// Input of `agents.getMany`, derived from the agents list filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Remote agent store.
///
/// # Implementation Notes
///
/// - `meeting_count` on returned agents is computed by the implementation.
/// - `remove` also removes the agent's meetings; it succeeds or fails as a whole.
#[async_trait]
pub trait AgentRepository: Send + Sync {
    /// `agents.getOne`
    async fn get_one(&self, id: &str) -> Result<Agent>;

    /// `agents.getMany`
    async fn get_many(&self, query: &AgentsQuery) -> Result<Paginated<Agent>>;

    /// `agents.create`
    async fn create(&self, input: &AgentInput) -> Result<Agent>;

    /// `agents.update`
    async fn update(&self, id: &str, input: &AgentInput) -> Result<Agent>;

    /// `agents.remove`
    async fn remove(&self, id: &str) -> Result<Agent>;
}
