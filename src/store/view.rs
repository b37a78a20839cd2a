//! Derived listing views: search → filter → sort → paginate.
//!
//! Each stage is recomputed from the authoritative list and the query state on
//! every call; nothing here is cached or stored.

use super::catalog::CatalogState;
use crate::logic::{compare_products, matches_filters, matches_search};
use crate::state::{Product, SortOrder};

impl CatalogState {
    /// Records whose name or SKU contain the search text.
    #[must_use]
    pub fn searched(&self) -> Vec<&Product> {
        let q = self.query.search_query.as_str();
        if q.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| matches_search(p, q))
            .collect()
    }

    /// [`Self::searched`] narrowed by the active field filters.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Product> {
        let searched = self.searched();
        if self.query.active_filters.is_empty() {
            return searched;
        }
        searched
            .into_iter()
            .filter(|p| matches_filters(p, &self.query.active_filters))
            .collect()
    }

    /// What: [`Self::filtered`] ordered by the sort key.
    ///
    /// Output:
    /// - A new vector; the authoritative list is never reordered.
    ///
    /// Details:
    /// - Stable: records with equal keys keep their relative order in both directions.
    /// - Descending reverses the comparator result, so missing values lead in that direction.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Product> {
        let mut out = self.filtered();
        let Some(field) = self.query.sort_by else {
            return out;
        };
        let order = self.query.sort_order;
        out.sort_by(|a, b| {
            let ord = compare_products(a, b, field);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        out
    }

    /// Rows of [`Self::sorted`] on the current page.
    #[must_use]
    pub fn paginated(&self) -> Vec<&Product> {
        let per_page = self.query.items_per_page.max(1);
        let start = self.query.current_page.saturating_sub(1) * per_page;
        self.sorted().into_iter().skip(start).take(per_page).collect()
    }

    /// Number of records matching search and filters.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.filtered().len()
    }

    /// `ceil(total_items / items_per_page)`; zero when nothing matches.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_items().div_ceil(self.query.items_per_page.max(1))
    }
}
