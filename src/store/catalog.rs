//! Synchronous catalog state: the authoritative list, query state and the
//! transitions the store applies to them.

use std::collections::HashSet;

use super::error::{Action, StoreError};
use crate::state::{Product, ProductDraft, ProductField, ProductId, QueryState};

/// One flag per action category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    /// A fetch is running.
    pub loading: bool,
    /// A create is running.
    pub creating: bool,
    /// An update is running.
    pub updating: bool,
    /// A delete is running.
    pub deleting: bool,
}

impl InFlight {
    /// Flag for `action`.
    #[must_use]
    pub const fn get(&self, action: Action) -> bool {
        match action {
            Action::Fetch => self.loading,
            Action::Create => self.creating,
            Action::Update => self.updating,
            Action::Delete => self.deleting,
        }
    }

    pub(crate) const fn set(&mut self, action: Action, on: bool) {
        match action {
            Action::Fetch => self.loading = on,
            Action::Create => self.creating = on,
            Action::Update => self.updating = on,
            Action::Delete => self.deleting = on,
        }
    }

    /// Whether any action is running.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.loading || self.creating || self.updating || self.deleting
    }
}

/// What: Authoritative product list plus the query state that shapes its views.
///
/// Details:
/// - Derived views live in `view.rs` and are recomputed on every call.
/// - Every transition that can shrink the view finishes with [`Self::clamp_page`],
///   so `current_page` stays within `[1, max(1, total_pages)]`.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub(crate) products: Vec<Product>,
    pub(crate) query: QueryState,
    pub(crate) in_flight: InFlight,
    pub(crate) loaded: bool,
}

impl CatalogState {
    /// Empty catalog with the given query defaults.
    #[must_use]
    pub fn new(query: QueryState) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// Authoritative records in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current query parameters.
    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// In-flight flags.
    #[must_use]
    pub const fn in_flight(&self) -> InFlight {
        self.in_flight
    }

    /// Whether at least one fetch has completed successfully.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Look a record up by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// What: Next id to hand out: one past the largest id, or 1 when empty.
    ///
    /// # Errors
    /// - `StoreError::IdsExhausted` when the largest id is `ProductId::MAX`.
    pub fn next_id(&self) -> Result<ProductId, StoreError> {
        match self.products.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(m) => m.checked_add(1).ok_or(StoreError::IdsExhausted(m)),
        }
    }

    /// Pull `current_page` back inside `[1, max(1, total_pages)]`.
    pub(crate) fn clamp_page(&mut self) {
        let max = self.total_pages().max(1);
        self.query.current_page = self.query.current_page.clamp(1, max);
    }

    // --- Query setters -------------------------------------------------

    /// What: Replace the search text.
    ///
    /// Output:
    /// - Always `true`; page resets to 1.
    pub fn set_search(&mut self, query: &str) -> bool {
        query.clone_into(&mut self.query.search_query);
        self.query.current_page = 1;
        true
    }

    /// What: Sort by `field`, toggling direction when it is already the sort key.
    ///
    /// Output:
    /// - Always `true`.
    ///
    /// Details:
    /// - A new field always starts ascending.
    pub fn set_sort(&mut self, field: ProductField) -> bool {
        if self.query.sort_by == Some(field) {
            self.query.sort_order = self.query.sort_order.toggled();
        } else {
            self.query.sort_by = Some(field);
            self.query.sort_order = crate::state::SortOrder::Asc;
        }
        true
    }

    /// What: Set or clear one field filter.
    ///
    /// Inputs:
    /// - `field`: Field to filter on
    /// - `value`: Required text; empty removes the filter
    ///
    /// Output:
    /// - `true`; page resets to 1.
    pub fn set_filter(&mut self, field: ProductField, value: &str) -> bool {
        if value.is_empty() {
            self.query.active_filters.remove(&field);
        } else {
            self.query.active_filters.insert(field, value.to_string());
        }
        self.query.current_page = 1;
        true
    }

    /// Drop every filter; page resets to 1.
    pub fn clear_filters(&mut self) -> bool {
        self.query.active_filters.clear();
        self.query.current_page = 1;
        true
    }

    /// What: Jump to `page`.
    ///
    /// Output:
    /// - `true` when `1 <= page <= max(total_pages, 1)` and the page was applied; `false`
    ///   (no state change) otherwise.
    pub fn set_page(&mut self, page: usize) -> bool {
        let max = self.total_pages().max(1);
        if (1..=max).contains(&page) {
            self.query.current_page = page;
            true
        } else {
            false
        }
    }

    /// What: Change rows per page.
    ///
    /// Output:
    /// - `false` for zero (ignored); otherwise `true` and page resets to 1.
    pub fn set_items_per_page(&mut self, per_page: usize) -> bool {
        if per_page == 0 {
            return false;
        }
        self.query.items_per_page = per_page;
        self.query.current_page = 1;
        true
    }

    // --- Commits applied once the data source acknowledged a mutation ---

    /// What: Replace the whole list with a freshly fetched one.
    ///
    /// Output:
    /// - Number of records dropped because their id was already taken.
    ///
    /// Details:
    /// - Keeps the first record for each id so ids stay unique.
    pub(crate) fn commit_fetch(&mut self, items: Vec<Product>) -> usize {
        let mut seen = HashSet::with_capacity(items.len());
        let before = items.len();
        self.products = items.into_iter().filter(|p| seen.insert(p.id)).collect();
        self.loaded = true;
        self.clamp_page();
        before - self.products.len()
    }

    /// Assign the next id to `draft` and append it; the list is untouched on error.
    pub(crate) fn commit_create(&mut self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = draft.with_id(self.next_id()?);
        self.products.push(product.clone());
        self.clamp_page();
        Ok(product)
    }

    /// Replace the record with the same id; `false` when no record matched.
    pub(crate) fn commit_update(&mut self, product: Product) -> bool {
        let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) else {
            return false;
        };
        *slot = product;
        self.clamp_page();
        true
    }

    /// What: Remove the record with `id`.
    ///
    /// Output:
    /// - `true` when a record was removed.
    ///
    /// Details:
    /// - When the viewed page ends up empty and is not the first, step back one page.
    pub(crate) fn commit_delete(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = self.products.len() != before;
        if self.paginated().is_empty() && self.query.current_page > 1 {
            self.query.current_page -= 1;
        }
        self.clamp_page();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ProductCategory, ProductStatus, SortOrder};

    fn item(id: u64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            sku: format!("SKU-{id}"),
            category: ProductCategory::Electronics,
            price: id as f64,
            status: ProductStatus::Active,
            image: None,
            image_url: None,
        }
    }

    fn catalog(n: u64, per_page: usize) -> CatalogState {
        let mut s = CatalogState::new(QueryState {
            items_per_page: per_page,
            ..QueryState::default()
        });
        s.commit_fetch((1..=n).map(|i| item(i, &format!("Item {i}"))).collect());
        s
    }

    #[test]
    /// What: Twelve records at five per page give three pages; page 4 is rejected
    fn catalog_set_page_rejects_out_of_range() {
        let mut s = catalog(12, 5);
        assert_eq!(s.total_pages(), 3);
        assert!(s.set_page(3));
        assert!(!s.set_page(4));
        assert_eq!(s.query().current_page, 3);
        assert!(!s.set_page(0));
        assert_eq!(s.query().current_page, 3);
    }

    #[test]
    /// What: Page 1 is always reachable, even with nothing to show
    fn catalog_set_page_one_on_empty() {
        let mut s = CatalogState::default();
        assert_eq!(s.total_pages(), 0);
        assert!(s.set_page(1));
        assert!(!s.set_page(2));
    }

    #[test]
    /// What: Sort toggles on the same field and resets to ascending on a new one
    fn catalog_set_sort_toggle_and_reset() {
        let mut s = CatalogState::default();
        s.set_sort(ProductField::Price);
        assert_eq!(s.query().sort_by, Some(ProductField::Price));
        assert_eq!(s.query().sort_order, SortOrder::Asc);
        s.set_sort(ProductField::Price);
        assert_eq!(s.query().sort_order, SortOrder::Desc);
        s.set_sort(ProductField::Name);
        assert_eq!(s.query().sort_by, Some(ProductField::Name));
        assert_eq!(s.query().sort_order, SortOrder::Asc);
    }

    #[test]
    /// What: Search and filter setters reset paging; empty filter removes the key
    fn catalog_search_and_filters_reset_page() {
        let mut s = catalog(12, 5);
        s.set_page(3);
        s.set_search("item");
        assert_eq!(s.query().current_page, 1);

        s.set_page(2);
        s.set_filter(ProductField::Status, "active");
        assert_eq!(s.query().current_page, 1);
        assert_eq!(s.query().active_filters.len(), 1);

        s.set_filter(ProductField::Status, "");
        assert!(s.query().active_filters.is_empty());

        s.set_filter(ProductField::Category, "Electronics");
        s.set_page(2);
        s.clear_filters();
        assert!(s.query().active_filters.is_empty());
        assert_eq!(s.query().current_page, 1);
    }

    #[test]
    /// What: New ids are one past the maximum, or 1 for an empty list
    fn catalog_next_id_uses_max_plus_one() {
        let mut s = CatalogState::default();
        assert_eq!(s.next_id().expect("id"), 1);
        s.commit_fetch(vec![item(1, "a"), item(3, "b"), item(5, "c")]);
        let created = s.commit_create(item(0, "d").into()).expect("create");
        assert_eq!(created.id, 6);
        assert_eq!(s.products().last().map(|p| p.id), Some(6));
    }

    #[test]
    /// What: A catalog holding the largest possible id refuses to create
    ///
    /// - Input: One record with id `u64::MAX`
    /// - Output: `StoreError::IdsExhausted`, list unchanged
    fn catalog_create_after_max_id_errors() {
        let mut s = CatalogState::default();
        s.commit_fetch(vec![item(u64::MAX, "last")]);
        assert!(matches!(
            s.next_id(),
            Err(StoreError::IdsExhausted(u64::MAX))
        ));
        assert!(matches!(
            s.commit_create(item(0, "overflow").into()),
            Err(StoreError::IdsExhausted(_))
        ));
        assert_eq!(s.products().len(), 1);
    }

    #[test]
    /// What: An update that drops the only row of the last filtered page steps back
    ///
    /// - Input: 11 active records, `status=active`, page 3 holding one row
    /// - Output: After marking that row inactive, page 2 is shown
    fn catalog_update_out_of_filter_clamps_page() {
        let mut s = catalog(11, 5);
        s.set_filter(ProductField::Status, "active");
        assert!(s.set_page(3));
        let mut last = s.paginated()[0].clone();
        last.status = ProductStatus::Inactive;
        assert!(s.commit_update(last));
        assert_eq!(s.total_pages(), 2);
        assert_eq!(s.query().current_page, 2);
        assert_eq!(s.paginated().len(), 5);
    }

    #[test]
    /// What: Deleting the only record on the last page steps back one page
    ///
    /// - Input: 11 records at 5 per page, viewing page 3 (one record)
    /// - Output: After delete, page is 2 and still shows five rows
    fn catalog_delete_last_record_on_page_steps_back() {
        let mut s = catalog(11, 5);
        s.set_sort(ProductField::Id); // id desc -> asc
        assert!(s.set_page(3));
        let last = s.paginated()[0].id;
        assert!(s.commit_delete(last));
        assert_eq!(s.query().current_page, 2);
        assert_eq!(s.paginated().len(), 5);
    }

    #[test]
    /// What: Unknown ids are ignored by update and delete
    fn catalog_unmatched_ids_are_noops() {
        let mut s = catalog(3, 5);
        assert!(!s.commit_update(item(42, "ghost")));
        assert!(!s.commit_delete(42));
        assert_eq!(s.products().len(), 3);
    }

    #[test]
    /// What: Fetch keeps the first record per id and clamps the page
    fn catalog_fetch_dedupes_and_clamps() {
        let mut s = catalog(12, 5);
        s.set_page(3);
        let dropped = s.commit_fetch(vec![item(1, "a"), item(1, "dup"), item(2, "b")]);
        assert_eq!(dropped, 1);
        assert_eq!(s.products().len(), 2);
        assert_eq!(s.query().current_page, 1);
        assert!(s.is_loaded());
    }

    #[test]
    /// What: Zero rows per page is ignored
    fn catalog_items_per_page_rejects_zero() {
        let mut s = catalog(12, 5);
        assert!(!s.set_items_per_page(0));
        assert_eq!(s.query().items_per_page, 5);
        assert!(s.set_items_per_page(4));
        assert_eq!(s.total_pages(), 3);
    }
}
