//! In-memory RPC backend for agents and meetings.
//!
//! Mirrors the behavior of the remote store: newest records first,
//! case-insensitive name search, agent meeting counts computed on read, and
//! agent removal cascading to its meetings. Removal failures can be injected
//! to exercise the error paths of the views.

use async_trait::async_trait;
use chrono::Utc;
use meetai_core::MeetError;
use meetai_core::agent::{Agent, AgentInput, AgentRepository, AgentsQuery};
use meetai_core::error::Result;
use meetai_core::meeting::{Meeting, MeetingInput, MeetingRepository, MeetingStatus, MeetingsQuery};
use meetai_core::pagination::Paginated;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct AgentRecord {
    agent: Agent,
    seq: u64,
}

#[derive(Debug, Clone)]
struct MeetingRecord {
    meeting: Meeting,
    seq: u64,
}

#[derive(Debug, Default)]
struct Store {
    agents: Vec<AgentRecord>,
    meetings: Vec<MeetingRecord>,
    /// Insertion counter; higher is newer.
    last_seq: u64,
}

impl Store {
    fn next_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }

    fn meeting_count(&self, agent_id: &str) -> u64 {
        self.meetings
            .iter()
            .filter(|record| record.meeting.agent_id == agent_id)
            .count() as u64
    }

    fn agent_with_count(&self, record: &AgentRecord) -> Agent {
        Agent {
            meeting_count: self.meeting_count(&record.agent.id),
            ..record.agent.clone()
        }
    }

    fn agent_name(&self, agent_id: &str) -> Option<String> {
        self.agents
            .iter()
            .find(|record| record.agent.id == agent_id)
            .map(|record| record.agent.name.clone())
    }
}

fn matches_search(name: &str, search: Option<&str>) -> bool {
    match search {
        Some(search) => name.to_lowercase().contains(&search.to_lowercase()),
        None => true,
    }
}

/// Shared in-memory store implementing both repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    store: Arc<RwLock<Store>>,
    remove_failure: Arc<Mutex<Option<String>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `remove` call (agent or meeting) fail with `message`.
    pub async fn fail_next_remove(&self, message: impl Into<String>) {
        *self.remove_failure.lock().await = Some(message.into());
    }

    /// Moves a meeting to another status, as the call lifecycle would.
    pub async fn set_meeting_status(&self, id: &str, status: MeetingStatus) -> Result<Meeting> {
        let mut store = self.store.write().await;
        let record = store
            .meetings
            .iter_mut()
            .find(|record| record.meeting.id == id)
            .ok_or_else(|| MeetError::not_found("Meeting", id))?;

        let now = Utc::now();
        match status {
            MeetingStatus::Active => record.meeting.started_at = Some(now),
            MeetingStatus::Processing | MeetingStatus::Completed => {
                record.meeting.ended_at.get_or_insert(now);
            }
            MeetingStatus::Upcoming | MeetingStatus::Cancelled => {}
        }
        record.meeting.status = status;
        Ok(record.meeting.clone())
    }

    /// Attaches the post-processing output of a completed meeting.
    pub async fn set_meeting_summary(
        &self,
        id: &str,
        summary: impl Into<String>,
        transcript_url: Option<String>,
    ) -> Result<Meeting> {
        let mut store = self.store.write().await;
        let record = store
            .meetings
            .iter_mut()
            .find(|record| record.meeting.id == id)
            .ok_or_else(|| MeetError::not_found("Meeting", id))?;
        record.meeting.summary = Some(summary.into());
        record.meeting.transcript_url = transcript_url;
        Ok(record.meeting.clone())
    }

    async fn take_remove_failure(&self) -> Option<String> {
        self.remove_failure.lock().await.take()
    }
}

#[async_trait]
impl AgentRepository for InMemoryBackend {
    async fn get_one(&self, id: &str) -> Result<Agent> {
        let store = self.store.read().await;
        store
            .agents
            .iter()
            .find(|record| record.agent.id == id)
            .map(|record| store.agent_with_count(record))
            .ok_or_else(|| MeetError::not_found("Agent", id))
    }

    async fn get_many(&self, query: &AgentsQuery) -> Result<Paginated<Agent>> {
        let store = self.store.read().await;
        let mut matching: Vec<&AgentRecord> = store
            .agents
            .iter()
            .filter(|record| matches_search(&record.agent.name, query.search.as_deref()))
            .collect();
        matching.sort_by(|a, b| b.seq.cmp(&a.seq));

        let agents = matching
            .into_iter()
            .map(|record| store.agent_with_count(record))
            .collect();
        Ok(Paginated::from_slice(agents, query.page, query.page_size))
    }

    async fn create(&self, input: &AgentInput) -> Result<Agent> {
        input.validate()?;
        let agent = Agent {
            id: Uuid::new_v4().to_string(),
            name: input.name.clone(),
            instructions: input.instructions.clone(),
            meeting_count: 0,
        };

        let mut store = self.store.write().await;
        let seq = store.next_seq();
        store.agents.push(AgentRecord {
            agent: agent.clone(),
            seq,
        });
        tracing::debug!("[InMemoryBackend] created agent {}", agent.id);
        Ok(agent)
    }

    async fn update(&self, id: &str, input: &AgentInput) -> Result<Agent> {
        input.validate()?;
        let mut store = self.store.write().await;
        let record = store
            .agents
            .iter_mut()
            .find(|record| record.agent.id == id)
            .ok_or_else(|| MeetError::not_found("Agent", id))?;
        record.agent.name = input.name.clone();
        record.agent.instructions = input.instructions.clone();
        let record = record.clone();

        // Keep the joined agent name on meetings in sync.
        for meeting in store.meetings.iter_mut() {
            if meeting.meeting.agent_id == id {
                meeting.meeting.agent_name = input.name.clone();
            }
        }
        Ok(store.agent_with_count(&record))
    }

    async fn remove(&self, id: &str) -> Result<Agent> {
        if let Some(message) = self.take_remove_failure().await {
            return Err(MeetError::backend(message));
        }

        let mut store = self.store.write().await;
        let index = store
            .agents
            .iter()
            .position(|record| record.agent.id == id)
            .ok_or_else(|| MeetError::not_found("Agent", id))?;
        let removed = store.agents.remove(index);
        let count = store.meeting_count(id);
        store.meetings.retain(|record| record.meeting.agent_id != id);
        tracing::debug!("[InMemoryBackend] removed agent {} and {} meetings", id, count);

        Ok(Agent {
            meeting_count: count,
            ..removed.agent
        })
    }
}

#[async_trait]
impl MeetingRepository for InMemoryBackend {
    async fn get_one(&self, id: &str) -> Result<Meeting> {
        let store = self.store.read().await;
        store
            .meetings
            .iter()
            .find(|record| record.meeting.id == id)
            .map(|record| record.meeting.clone())
            .ok_or_else(|| MeetError::not_found("Meeting", id))
    }

    async fn get_many(&self, query: &MeetingsQuery) -> Result<Paginated<Meeting>> {
        let store = self.store.read().await;
        let mut matching: Vec<&MeetingRecord> = store
            .meetings
            .iter()
            .filter(|record| matches_search(&record.meeting.name, query.search.as_deref()))
            .filter(|record| query.status.is_none_or(|status| record.meeting.status == status))
            .filter(|record| {
                query
                    .agent_id
                    .as_deref()
                    .is_none_or(|agent_id| record.meeting.agent_id == agent_id)
            })
            .collect();
        matching.sort_by(|a, b| b.seq.cmp(&a.seq));

        let meetings = matching
            .into_iter()
            .map(|record| record.meeting.clone())
            .collect();
        Ok(Paginated::from_slice(meetings, query.page, query.page_size))
    }

    async fn create(&self, input: &MeetingInput) -> Result<Meeting> {
        input.validate()?;
        let mut store = self.store.write().await;
        let agent_name = store
            .agent_name(&input.agent_id)
            .ok_or_else(|| MeetError::not_found("Agent", input.agent_id.as_str()))?;

        let meeting = Meeting {
            id: Uuid::new_v4().to_string(),
            name: input.name.clone(),
            agent_id: input.agent_id.clone(),
            status: MeetingStatus::Upcoming,
            agent_name,
            started_at: None,
            ended_at: None,
            transcript_url: None,
            summary: None,
        };
        let seq = store.next_seq();
        store.meetings.push(MeetingRecord {
            meeting: meeting.clone(),
            seq,
        });
        tracing::debug!("[InMemoryBackend] created meeting {}", meeting.id);
        Ok(meeting)
    }

    async fn update(&self, id: &str, input: &MeetingInput) -> Result<Meeting> {
        input.validate()?;
        let mut store = self.store.write().await;
        let agent_name = store
            .agent_name(&input.agent_id)
            .ok_or_else(|| MeetError::not_found("Agent", input.agent_id.as_str()))?;
        let record = store
            .meetings
            .iter_mut()
            .find(|record| record.meeting.id == id)
            .ok_or_else(|| MeetError::not_found("Meeting", id))?;
        record.meeting.name = input.name.clone();
        record.meeting.agent_id = input.agent_id.clone();
        record.meeting.agent_name = agent_name;
        Ok(record.meeting.clone())
    }

    async fn remove(&self, id: &str) -> Result<Meeting> {
        if let Some(message) = self.take_remove_failure().await {
            return Err(MeetError::backend(message));
        }

        let mut store = self.store.write().await;
        let index = store
            .meetings
            .iter()
            .position(|record| record.meeting.id == id)
            .ok_or_else(|| MeetError::not_found("Meeting", id))?;
        let removed = store.meetings.remove(index);
        tracing::debug!("[InMemoryBackend] removed meeting {}", id);
        Ok(removed.meeting)
    }
}
