use meetai_core::config::PaginationSettings;
use meetai_core::filter::{FilterController, MeetingsFilter, QueryParams};
use meetai_core::meeting::{Meeting, MeetingRenderState, MeetingRepository};
use meetai_core::pagination::Paginated;
use meetai_core::query::QueryKey;
use meetai_core::view::{DetailView, StateCopy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cache::QueryCache;
use crate::list::ListPage;

/// A list row: the meeting and the branch its status badge renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRow {
    pub meeting: Meeting,
    pub render_state: MeetingRenderState,
}

/// Meetings list view.
pub struct MeetingsListUseCase {
    repository: Arc<dyn MeetingRepository>,
    cache: Arc<QueryCache>,
    pagination: PaginationSettings,
}

impl MeetingsListUseCase {
    pub fn new(
        repository: Arc<dyn MeetingRepository>,
        cache: Arc<QueryCache>,
        pagination: PaginationSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            pagination,
        }
    }

    pub fn mount(&self, params: &QueryParams) -> FilterController<MeetingsFilter> {
        FilterController::mount(params, self.pagination.page_size())
    }

    pub async fn load(
        &self,
        filters: &FilterController<MeetingsFilter>,
    ) -> DetailView<ListPage<MeetingRow>> {
        let query = filters.query();
        let result = self
            .cache
            .refresh(&QueryKey::MeetingsList, &query, || {
                self.repository.get_many(&query)
            })
            .await;

        match result {
            Ok(page) => {
                let rows = page
                    .items
                    .into_iter()
                    .map(|meeting| MeetingRow {
                        render_state: MeetingRenderState::resolve(&meeting),
                        meeting,
                    })
                    .collect();
                DetailView::Ready(ListPage {
                    results: Paginated {
                        items: rows,
                        total: page.total,
                        total_pages: page.total_pages,
                    },
                    page: filters.state().page,
                    query_string: filters.query_string(),
                    show_clear_filters: filters.is_any_filter_active(),
                })
            }
            Err(e) => {
                tracing::warn!("[MeetingsList] load failed: {}", e);
                DetailView::Error(StateCopy::error("Meetings"))
            }
        }
    }
}
