//! Paginated list results returned by `get_many` queries.

use serde::{Deserialize, Serialize};

/// One page of a list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Number of records matching the query across all pages.
    pub total: u64,
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    /// Slices `all` (already filtered) into the requested 1-indexed page.
    pub fn from_slice(all: Vec<T>, page: u32, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let total = all.len() as u64;
        let total_pages = total.div_ceil(page_size as u64) as u32;
        let skip = (page.max(1) as usize - 1) * page_size as usize;
        let items = all
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();

        Self {
            items,
            total,
            total_pages,
        }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
