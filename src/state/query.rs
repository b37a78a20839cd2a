//! User-controlled listing parameters: search, filters, sort and paging.

use std::collections::HashMap;

use super::types::{ProductField, SortOrder};

/// Default number of rows per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Field → required value. An empty value means "no filter on that field".
pub type Filters = HashMap<ProductField, String>;

/// Parameters that govern the derived listing views.
///
/// Independent of the product list; survives CRUD mutations except where a
/// store transition resets the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    /// Free text matched against name and SKU.
    pub search_query: String,
    /// Exact-match field filters.
    pub active_filters: Filters,
    /// Field the listing is sorted by; `None` keeps list order.
    pub sort_by: Option<ProductField>,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// 1-based page index.
    pub current_page: usize,
    /// Rows per page, always greater than zero.
    pub items_per_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            active_filters: Filters::new(),
            sort_by: Some(ProductField::Id),
            sort_order: SortOrder::Desc,
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl QueryState {
    /// Filters with empty values dropped, sorted by field for stable display.
    #[must_use]
    pub fn effective_filters(&self) -> Vec<(ProductField, &str)> {
        let mut out: Vec<(ProductField, &str)> = self
            .active_filters
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        out.sort_by_key(|(k, _)| *k);
        out
    }
}
