use super::{ListFilter, QueryParams};

/// Holds the live filter state of a mounted list view.
///
/// Built from the current query on mount and dropped on unmount. Each
/// mutation reports whether the derived backend query changed, which is
/// the caller's cue to refetch.
#[derive(Debug, Clone)]
pub struct FilterController<F: ListFilter> {
    state: F,
    page_size: u32,
}

impl<F: ListFilter> FilterController<F> {
    pub fn mount(params: &QueryParams, page_size: u32) -> Self {
        Self {
            state: F::decode(params),
            page_size,
        }
    }

    pub fn state(&self) -> &F {
        &self.state
    }

    pub fn query(&self) -> F::Query {
        self.state.to_query(self.page_size)
    }

    /// Canonical shareable query string of the current state.
    pub fn query_string(&self) -> String {
        self.state.to_query_string()
    }

    pub fn is_any_filter_active(&self) -> bool {
        self.state.is_any_filter_active()
    }

    /// Applies a partial update. Returns `true` when a refetch is needed.
    pub fn set(&mut self, update: F::Update) -> bool {
        let next = self.state.set(update);
        self.replace(next)
    }

    /// Resets every field. Returns `true` when a refetch is needed.
    pub fn clear(&mut self) -> bool {
        let next = self.state.clear();
        self.replace(next)
    }

    fn replace(&mut self, next: F) -> bool {
        let before = self.query();
        self.state = next;
        let changed = self.query() != before;
        if changed {
            tracing::debug!(query = %self.query_string(), "list filter changed");
        }
        changed
    }
}
