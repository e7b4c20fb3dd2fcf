use meetai_core::pagination::Paginated;
use serde::{Deserialize, Serialize};

/// One rendered page of a list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub results: Paginated<T>,
    /// Current 1-indexed page.
    pub page: u32,
    /// Canonical query string of the filters in effect.
    pub query_string: String,
    /// Whether the header shows its "Clear" affordance.
    pub show_clear_filters: bool,
}

impl<T> ListPage<T> {
    /// Whether the empty state ("create your first ...") is shown.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.results.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}
