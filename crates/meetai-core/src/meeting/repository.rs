//! Meeting data-fetch/mutation collaborator.
//!
//! Defines the RPC surface the meeting views talk to.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::model::{Meeting, MeetingInput, MeetingStatus};
use crate::error::Result;
use crate::pagination::Paginated;

/// Input of `meetings.getMany`, derived from the meetings list filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingsQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MeetingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

/// Remote meeting store.
///
/// Every failure carries a message meant for the user; callers surface it in a
/// notification rather than propagating it.
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// `meetings.getOne`
    async fn get_one(&self, id: &str) -> Result<Meeting>;

    /// `meetings.getMany`
    async fn get_many(&self, query: &MeetingsQuery) -> Result<Paginated<Meeting>>;

    /// `meetings.create`
    async fn create(&self, input: &MeetingInput) -> Result<Meeting>;

    /// `meetings.update`
    async fn update(&self, id: &str, input: &MeetingInput) -> Result<Meeting>;

    /// `meetings.remove`
    ///
    /// Either removes the record or leaves it untouched; never partial.
    async fn remove(&self, id: &str) -> Result<Meeting>;
}
