use anyhow::Result;
use meetai_core::filter::{
    AgentsFilter, AgentsFilterUpdate, FilterController, ListFilter, MeetingsFilter,
    MeetingsFilterUpdate, QueryParams,
};
use meetai_core::meeting::MeetingStatus;
use serde::Serialize;
use serde_json::json;

/// Edits applied to the agents filter, in order: clear, then set.
pub struct AgentsEdit {
    pub clear: bool,
    pub search: Option<String>,
    pub page: Option<u32>,
}

pub struct MeetingsEdit {
    pub clear: bool,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub status: Option<String>,
    pub any_status: bool,
    pub agent_id: Option<String>,
}

pub fn agents(query: &str, page_size: u32, edit: AgentsEdit) -> Result<()> {
    let mut filters: FilterController<AgentsFilter> =
        FilterController::mount(&QueryParams::parse(query), page_size);

    let mut refetch = false;
    if edit.clear {
        refetch |= filters.clear();
    }
    if edit.search.is_some() || edit.page.is_some() {
        refetch |= filters.set(AgentsFilterUpdate {
            search: edit.search,
            page: edit.page,
        });
    }

    print_report(&filters, refetch)
}

pub fn meetings(query: &str, page_size: u32, edit: MeetingsEdit) -> Result<()> {
    let mut filters: FilterController<MeetingsFilter> =
        FilterController::mount(&QueryParams::parse(query), page_size);

    let status = match (edit.status, edit.any_status) {
        (_, true) => Some(None),
        (Some(raw), false) => Some(Some(MeetingStatus::parse(&raw)?)),
        (None, false) => None,
    };
    let update = MeetingsFilterUpdate {
        search: edit.search,
        page: edit.page,
        status,
        agent_id: edit.agent_id,
    };

    let mut refetch = false;
    if edit.clear {
        refetch |= filters.clear();
    }
    if update != MeetingsFilterUpdate::default() {
        refetch |= filters.set(update);
    }

    print_report(&filters, refetch)
}

fn print_report<F>(filters: &FilterController<F>, refetch: bool) -> Result<()>
where
    F: ListFilter + Serialize,
    F::Query: Serialize,
{
    let report = json!({
        "state": filters.state(),
        "queryString": filters.query_string(),
        "query": filters.query(),
        "filtersActive": filters.is_any_filter_active(),
        "refetch": refetch,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
