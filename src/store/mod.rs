//! Catalog store: authoritative product list, listing query state, derived
//! views and the asynchronous CRUD actions that go through a data source.
//!
//! [`CatalogStore`] is a cheap `Clone` handle. Actions can be spawned onto the
//! runtime while the UI keeps reading views from another clone. Each action
//! category is single-flight: a second fetch (or create, update, delete)
//! started while one is running is rejected with [`StoreError::Busy`].

use std::sync::{Arc, RwLock};

mod catalog;
mod error;
mod flight;
mod source;
mod view;

pub use catalog::{CatalogState, InFlight};
pub use error::{Action, SourceError, StoreError};
pub use source::{Latency, ProductSource, StaticSource, decode_dataset};

use flight::{FlightGuard, read, write};

use crate::state::{Product, ProductDraft, ProductField, ProductId, QueryState};

/// Everything a renderer needs for one frame, copied out under a single read lock.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogSnapshot {
    /// Rows on the current page.
    pub page: Vec<Product>,
    /// Records matching search and filters.
    pub total_items: usize,
    /// Page count for `total_items`.
    pub total_pages: usize,
    /// Size of the authoritative list.
    pub catalog_size: usize,
    /// Query parameters the page was computed with.
    pub query: QueryState,
    /// Running actions.
    pub in_flight: InFlight,
    /// Whether a fetch has completed yet.
    pub loaded: bool,
}

struct Inner<S> {
    state: RwLock<CatalogState>,
    source: S,
}

/// Shared handle to the catalog.
pub struct CatalogStore<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for CatalogStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ProductSource> CatalogStore<S> {
    /// What: Create an empty store over `source`.
    ///
    /// Inputs:
    /// - `source`: Backend used by the CRUD actions
    /// - `query`: Initial query state (sort, page size)
    ///
    /// Output:
    /// - A store that renders as empty until `fetch_products` completes.
    pub fn new(source: S, query: QueryState) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(CatalogState::new(query)),
                source,
            }),
        }
    }

    /// Run `f` against the current state under a read lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        f(&read(&self.inner.state))
    }

    /// Copy out the current page together with totals, query and flags.
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.with_state(|s| CatalogSnapshot {
            page: s.paginated().into_iter().cloned().collect(),
            total_items: s.total_items(),
            total_pages: s.total_pages(),
            catalog_size: s.products().len(),
            query: s.query().clone(),
            in_flight: s.in_flight(),
            loaded: s.is_loaded(),
        })
    }

    /// Authoritative list.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.with_state(|s| s.products().to_vec())
    }

    /// Record with `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.with_state(|s| s.get(id).cloned())
    }

    /// Current query parameters.
    #[must_use]
    pub fn query(&self) -> QueryState {
        self.with_state(|s| s.query().clone())
    }

    /// Search stage of the listing.
    #[must_use]
    pub fn searched(&self) -> Vec<Product> {
        self.with_state(|s| s.searched().into_iter().cloned().collect())
    }

    /// Search + filter stage of the listing.
    #[must_use]
    pub fn filtered(&self) -> Vec<Product> {
        self.with_state(|s| s.filtered().into_iter().cloned().collect())
    }

    /// Fully ordered listing.
    #[must_use]
    pub fn sorted(&self) -> Vec<Product> {
        self.with_state(|s| s.sorted().into_iter().cloned().collect())
    }

    /// Rows on the current page.
    #[must_use]
    pub fn paginated(&self) -> Vec<Product> {
        self.with_state(|s| s.paginated().into_iter().cloned().collect())
    }

    /// Records matching search and filters.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.with_state(CatalogState::total_items)
    }

    /// Page count; zero when nothing matches.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.with_state(CatalogState::total_pages)
    }

    /// A fetch is running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.with_state(|s| s.in_flight().loading)
    }

    /// A create is running.
    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.with_state(|s| s.in_flight().creating)
    }

    /// An update is running.
    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.with_state(|s| s.in_flight().updating)
    }

    /// A delete is running.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.with_state(|s| s.in_flight().deleting)
    }

    // --- Query setters ---------------------------------------------------

    /// Replace the search text; page resets to 1.
    pub fn set_search(&self, query: &str) -> bool {
        write(&self.inner.state).set_search(query)
    }

    /// Sort by `field`; the same field again toggles direction.
    pub fn set_sort(&self, field: ProductField) -> bool {
        write(&self.inner.state).set_sort(field)
    }

    /// Set a field filter; an empty value removes it. Page resets to 1.
    pub fn set_filter(&self, field: ProductField, value: &str) -> bool {
        write(&self.inner.state).set_filter(field, value)
    }

    /// Remove every filter; page resets to 1.
    pub fn clear_filters(&self) -> bool {
        write(&self.inner.state).clear_filters()
    }

    /// Jump to `page`; out-of-range pages are ignored and return `false`.
    pub fn set_page(&self, page: usize) -> bool {
        let applied = write(&self.inner.state).set_page(page);
        if !applied {
            tracing::debug!(page, "ignoring out-of-range page");
        }
        applied
    }

    /// Change rows per page; zero is ignored.
    pub fn set_items_per_page(&self, per_page: usize) -> bool {
        write(&self.inner.state).set_items_per_page(per_page)
    }

    // --- Actions ---------------------------------------------------------

    /// What: Replace the catalog with the data source's records.
    ///
    /// Output:
    /// - Number of records now held.
    ///
    /// # Errors
    /// - `StoreError::Busy` when a fetch is already running.
    /// - `StoreError::Source` when the source fails; the previous list is kept.
    pub async fn fetch_products(&self) -> Result<usize, StoreError> {
        let _flight = FlightGuard::acquire(&self.inner.state, Action::Fetch)?;
        let items = self.inner.source.fetch().await.inspect_err(|e| {
            tracing::warn!(error = %e, "fetching products failed");
        })?;
        let mut state = write(&self.inner.state);
        let dropped = state.commit_fetch(items);
        if dropped > 0 {
            tracing::warn!(dropped, "dropped products with duplicate ids");
        }
        let count = state.products().len();
        tracing::info!(count, "products fetched");
        Ok(count)
    }

    /// What: Create a product from `draft`.
    ///
    /// Output:
    /// - The stored record with its newly assigned id.
    ///
    /// Details:
    /// - The id (`max + 1`, or 1 when empty) is assigned when the change is committed, so it
    ///   is unique against whatever the list holds at that moment.
    ///
    /// # Errors
    /// - `StoreError::Busy` when a create is already running.
    /// - `StoreError::Source` when the source rejects the draft.
    /// - `StoreError::IdsExhausted` when the catalog already holds `ProductId::MAX`.
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let _flight = FlightGuard::acquire(&self.inner.state, Action::Create)?;
        let accepted = self.inner.source.create(draft).await.inspect_err(|e| {
            tracing::warn!(error = %e, "creating product failed");
        })?;
        let product = write(&self.inner.state)
            .commit_create(accepted)
            .inspect_err(|e| tracing::warn!(error = %e, "creating product failed"))?;
        tracing::info!(id = product.id, sku = %product.sku, "product created");
        Ok(product)
    }

    /// What: Replace the record with the same id.
    ///
    /// Output:
    /// - `true` when a record was replaced; `false` when the id was not present (ignored).
    ///
    /// # Errors
    /// - `StoreError::Busy` when an update is already running.
    /// - `StoreError::Source` when the source rejects the change.
    pub async fn update_product(&self, product: Product) -> Result<bool, StoreError> {
        let _flight = FlightGuard::acquire(&self.inner.state, Action::Update)?;
        let id = product.id;
        let accepted = self.inner.source.update(product).await.inspect_err(|e| {
            tracing::warn!(id, error = %e, "updating product failed");
        })?;
        let replaced = write(&self.inner.state).commit_update(accepted);
        if replaced {
            tracing::info!(id, "product updated");
        } else {
            tracing::debug!(id, "update for unknown product ignored");
        }
        Ok(replaced)
    }

    /// What: Remove the record with `id`.
    ///
    /// Output:
    /// - `true` when a record was removed.
    ///
    /// Details:
    /// - If the page being viewed becomes empty and is not the first, the store steps back one page.
    ///
    /// # Errors
    /// - `StoreError::Busy` when a delete is already running.
    /// - `StoreError::Source` when the source refuses the removal.
    pub async fn delete_product(&self, id: ProductId) -> Result<bool, StoreError> {
        let _flight = FlightGuard::acquire(&self.inner.state, Action::Delete)?;
        self.inner.source.delete(id).await.inspect_err(|e| {
            tracing::warn!(id, error = %e, "deleting product failed");
        })?;
        let removed = write(&self.inner.state).commit_delete(id);
        tracing::info!(id, removed, "product deleted");
        Ok(removed)
    }
}
