use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{
    AGENT_ID_KEY, ListFilter, QueryParams, STATUS_KEY, decode_page, decode_search, encode_common,
    non_empty,
};
use crate::config::DEFAULT_PAGE;
use crate::meeting::{MeetingStatus, MeetingsQuery};

/// Filter state of the meetings list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingsFilter {
    pub search: String,
    pub page: u32,
    /// `None` lists meetings of every status.
    pub status: Option<MeetingStatus>,
    /// Empty lists meetings of every agent.
    pub agent_id: String,
}

impl Default for MeetingsFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: DEFAULT_PAGE,
            status: None,
            agent_id: String::new(),
        }
    }
}

/// Partial change to a [`MeetingsFilter`]; `None` leaves a field as is.
///
/// `status: Some(None)` unsets the status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingsFilterUpdate {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub status: Option<Option<MeetingStatus>>,
    pub agent_id: Option<String>,
}

impl MeetingsFilterUpdate {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_status(mut self, status: Option<MeetingStatus>) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }
}

impl ListFilter for MeetingsFilter {
    type Update = MeetingsFilterUpdate;
    type Query = MeetingsQuery;

    fn decode(params: &QueryParams) -> Self {
        Self {
            search: decode_search(params),
            page: decode_page(params),
            status: params
                .get(STATUS_KEY)
                .and_then(|raw| MeetingStatus::from_str(raw).ok()),
            agent_id: params.get(AGENT_ID_KEY).unwrap_or_default().to_string(),
        }
    }

    fn encode(&self) -> QueryParams {
        let mut params = QueryParams::new();
        encode_common(&mut params, &self.search, self.page);
        if let Some(status) = self.status {
            params.insert(STATUS_KEY, status.as_str());
        }
        if !self.agent_id.is_empty() {
            params.insert(AGENT_ID_KEY, self.agent_id.as_str());
        }
        params
    }

    fn set(&self, update: MeetingsFilterUpdate) -> Self {
        let mut next = self.clone();
        let mut criteria_changed = false;

        if let Some(page) = update.page {
            next.page = page.max(DEFAULT_PAGE);
        }
        if let Some(search) = update.search
            && search != next.search
        {
            next.search = search;
            criteria_changed = true;
        }
        if let Some(status) = update.status
            && status != next.status
        {
            next.status = status;
            criteria_changed = true;
        }
        if let Some(agent_id) = update.agent_id
            && agent_id != next.agent_id
        {
            next.agent_id = agent_id;
            criteria_changed = true;
        }

        if criteria_changed {
            next.page = DEFAULT_PAGE;
        }
        next
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn is_any_filter_active(&self) -> bool {
        !self.search.is_empty() || self.status.is_some() || !self.agent_id.is_empty()
    }

    fn to_query(&self, page_size: u32) -> MeetingsQuery {
        MeetingsQuery {
            page: self.page,
            page_size,
            search: non_empty(&self.search),
            status: self.status,
            agent_id: non_empty(&self.agent_id),
        }
    }
}
