//! List filter state for the agents and meetings list views.
//!
//! A filter is a value object with pure `decode`/`encode`/`set`/`clear`
//! operations over a flat [`QueryParams`] map. Encoding omits every field at
//! its default, so the unfiltered first page serializes to an empty map.
//!
//! # Module Structure
//!
//! - `query`: the flat key/value representation (`QueryParams`)
//! - `agents`: `AgentsFilter` (`search`, `page`)
//! - `meetings`: `MeetingsFilter` (`search`, `page`, `status`, `agentId`)
//! - `controller`: `FilterController`, the mutable holder used by list views

mod agents;
mod controller;
mod meetings;
mod query;

pub use agents::{AgentsFilter, AgentsFilterUpdate};
pub use controller::FilterController;
pub use meetings::{MeetingsFilter, MeetingsFilterUpdate};
pub use query::QueryParams;

use crate::config::DEFAULT_PAGE;

pub const SEARCH_KEY: &str = "search";
pub const PAGE_KEY: &str = "page";
pub const STATUS_KEY: &str = "status";
pub const AGENT_ID_KEY: &str = "agentId";

/// Common contract of list filters.
pub trait ListFilter: Clone + PartialEq + Default {
    /// Partial field changes accepted by [`ListFilter::set`].
    type Update;
    /// Input of the backend `getMany` call derived from this filter.
    type Query: Clone + PartialEq;

    /// Builds a filter from a query map. Never fails: missing or invalid
    /// values fall back to the field default and unknown keys are ignored.
    fn decode(params: &QueryParams) -> Self;

    /// Emits only the fields that differ from their default.
    fn encode(&self) -> QueryParams;

    /// Merges `update` into a copy of this filter.
    ///
    /// Any change to a filter criterion resets the page to the first page.
    fn set(&self, update: Self::Update) -> Self;

    /// Resets every field to its default.
    fn clear(&self) -> Self {
        Self::default()
    }

    /// Current 1-indexed page.
    fn page(&self) -> u32;

    /// True when a filter criterion is set. The page alone does not count.
    fn is_any_filter_active(&self) -> bool;

    /// Derives the backend list query.
    fn to_query(&self, page_size: u32) -> Self::Query;

    fn from_query_string(raw: &str) -> Self {
        Self::decode(&QueryParams::parse(raw))
    }

    fn to_query_string(&self) -> String {
        self.encode().to_query_string()
    }
}

pub(crate) fn decode_search(params: &QueryParams) -> String {
    params.get(SEARCH_KEY).unwrap_or_default().to_string()
}

/// Base-10 integer ≥ 1, otherwise the first page.
pub(crate) fn decode_page(params: &QueryParams) -> u32 {
    params
        .get(PAGE_KEY)
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|page| *page >= DEFAULT_PAGE)
        .unwrap_or(DEFAULT_PAGE)
}

pub(crate) fn encode_common(params: &mut QueryParams, search: &str, page: u32) {
    if !search.is_empty() {
        params.insert(SEARCH_KEY, search);
    }
    if page != DEFAULT_PAGE {
        params.insert(PAGE_KEY, page.to_string());
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
