use meetai_core::agent::{Agent, AgentRepository};
use meetai_core::config::PaginationSettings;
use meetai_core::filter::{AgentsFilter, FilterController, QueryParams};
use meetai_core::query::QueryKey;
use meetai_core::view::{DetailView, StateCopy};
use std::sync::Arc;

use crate::cache::QueryCache;
use crate::list::ListPage;

/// Agents list view: filter state in, one page of agents out.
pub struct AgentsListUseCase {
    repository: Arc<dyn AgentRepository>,
    cache: Arc<QueryCache>,
    pagination: PaginationSettings,
}

impl AgentsListUseCase {
    pub fn new(
        repository: Arc<dyn AgentRepository>,
        cache: Arc<QueryCache>,
        pagination: PaginationSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            pagination,
        }
    }

    /// Builds the view's filter state from the current URL query.
    pub fn mount(&self, params: &QueryParams) -> FilterController<AgentsFilter> {
        FilterController::mount(params, self.pagination.page_size())
    }

    /// Fetches the page selected by `filters`.
    pub async fn load(&self, filters: &FilterController<AgentsFilter>) -> DetailView<ListPage<Agent>> {
        let query = filters.query();
        let result = self
            .cache
            .refresh(&QueryKey::AgentsList, &query, || {
                self.repository.get_many(&query)
            })
            .await;

        match result {
            Ok(results) => DetailView::Ready(ListPage {
                results,
                page: filters.state().page,
                query_string: filters.query_string(),
                show_clear_filters: filters.is_any_filter_active(),
            }),
            Err(e) => {
                tracing::warn!("[AgentsList] load failed: {}", e);
                DetailView::Error(StateCopy::error("Agents"))
            }
        }
    }
}
