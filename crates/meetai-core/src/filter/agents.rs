use serde::{Deserialize, Serialize};

use super::{ListFilter, QueryParams, decode_page, decode_search, encode_common, non_empty};
use crate::agent::AgentsQuery;
use crate::config::DEFAULT_PAGE;

/// Filter state of the agents list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentsFilter {
    pub search: String,
    pub page: u32,
}

impl Default for AgentsFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: DEFAULT_PAGE,
        }
    }
}

/// Partial change to an [`AgentsFilter`]; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentsFilterUpdate {
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl AgentsFilterUpdate {
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }

    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

impl ListFilter for AgentsFilter {
    type Update = AgentsFilterUpdate;
    type Query = AgentsQuery;

    fn decode(params: &QueryParams) -> Self {
        Self {
            search: decode_search(params),
            page: decode_page(params),
        }
    }

    fn encode(&self) -> QueryParams {
        let mut params = QueryParams::new();
        encode_common(&mut params, &self.search, self.page);
        params
    }

    fn set(&self, update: AgentsFilterUpdate) -> Self {
        let mut next = self.clone();
        if let Some(page) = update.page {
            next.page = page.max(DEFAULT_PAGE);
        }
        if let Some(search) = update.search
            && search != next.search
        {
            next.search = search;
            next.page = DEFAULT_PAGE;
        }
        next
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn is_any_filter_active(&self) -> bool {
        !self.search.is_empty()
    }

    fn to_query(&self, page_size: u32) -> AgentsQuery {
        AgentsQuery {
            page: self.page,
            page_size,
            search: non_empty(&self.search),
        }
    }
}
