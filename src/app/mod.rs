//! Terminal application: UI state around the catalog store, the command
//! plumbing to its async actions, and the event loop.

use std::time::Instant;

use ratatui::widgets::TableState;

use crate::config::Settings;
use crate::notify::Toasts;
use crate::route::Route;
use crate::state::{ProductCategory, ProductField, ProductId, ProductStatus};
use crate::store::{CatalogStore, ProductSource, SourceError, StaticSource};

pub mod commands;
pub mod form;
pub mod runtime;
mod terminal;

pub use commands::{Command, Outcome, handle_outcome, spawn_command};
pub use form::{FormField, ProductForm};
pub use runtime::run;

/// What: Build the data source described by `settings`.
///
/// Output:
/// - A file-backed source when `dataset_path` is set, else the bundled dataset.
///
/// # Errors
/// - Only when the bundled dataset fails to decode.
pub fn open_source(settings: &Settings) -> Result<StaticSource, SourceError> {
    match &settings.dataset_path {
        Some(path) => Ok(StaticSource::from_path(path, settings.latency)),
        None => StaticSource::bundled(settings.latency),
    }
}

/// Everything the terminal UI owns besides the store itself.
pub struct App<S> {
    /// Shared catalog handle.
    pub store: CatalogStore<S>,
    /// Notification queue.
    pub toasts: Toasts,
    /// Current screen.
    pub route: Route,
    /// Highlighted row within the current page.
    pub table_state: TableState,
    /// Search box has keyboard focus.
    pub search_focused: bool,
    /// Form shown on the create/edit screens.
    pub form: Option<ProductForm>,
    /// Product awaiting delete confirmation.
    pub confirm_delete: Option<ProductId>,
    /// Loaded settings.
    pub settings: Settings,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl<S: ProductSource> App<S> {
    /// Wrap a store with fresh UI state.
    pub fn new(store: CatalogStore<S>, settings: Settings) -> Self {
        Self {
            store,
            toasts: Toasts::new(settings.toast_duration),
            route: Route::List,
            table_state: TableState::default().with_selected(Some(0)),
            search_focused: false,
            form: None,
            confirm_delete: None,
            settings,
            should_quit: false,
        }
    }

    /// Id of the highlighted row on the current page.
    #[must_use]
    pub fn selected_id(&self) -> Option<ProductId> {
        let idx = self.table_state.selected()?;
        self.store.with_state(|s| s.paginated().get(idx).map(|p| p.id))
    }

    /// What: Keep the highlighted row inside the current page.
    ///
    /// Details:
    /// - Called after anything that can shrink or swap the page.
    pub fn clamp_selection(&mut self) {
        let len = self.store.with_state(|s| s.paginated().len());
        let sel = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.table_state.select(sel);
    }

    /// Move the highlight by `delta` rows within the page.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.store.with_state(|s| s.paginated().len());
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let cur = self.table_state.selected().unwrap_or(0);
        let next = cur.saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(next));
    }

    /// Step `delta` pages; out-of-range steps are ignored by the store.
    pub fn step_page(&mut self, delta: isize) {
        let cur = self.store.query().current_page;
        if let Some(page) = cur.checked_add_signed(delta)
            && self.store.set_page(page)
        {
            self.table_state.select(Some(0));
        }
    }

    /// What: Cycle the status filter: all → active → inactive → all.
    pub fn cycle_status_filter(&mut self) {
        let cur = self
            .store
            .query()
            .active_filters
            .get(&ProductField::Status)
            .cloned()
            .unwrap_or_default();
        let next = match cur.as_str() {
            "" => ProductStatus::Active.as_str(),
            "active" => ProductStatus::Inactive.as_str(),
            _ => "",
        };
        self.store.set_filter(ProductField::Status, next);
        self.clamp_selection();
    }

    /// What: Cycle the category filter through every category, then back to all.
    pub fn cycle_category_filter(&mut self) {
        let cur = self
            .store
            .query()
            .active_filters
            .get(&ProductField::Category)
            .and_then(|v| ProductCategory::from_label(v));
        let next = match cur {
            None => ProductCategory::ALL[0].as_str(),
            Some(c) if c == ProductCategory::ALL[ProductCategory::ALL.len() - 1] => "",
            Some(c) => c.next().as_str(),
        };
        self.store.set_filter(ProductField::Category, next);
        self.clamp_selection();
    }

    /// What: Switch screens.
    ///
    /// Details:
    /// - `Create` opens a blank form; `Edit(id)` prefills from the store.
    /// - Editing an id that is not loaded shows an error toast and stays on the list.
    pub fn navigate(&mut self, route: Route) {
        match route {
            Route::List => {
                self.form = None;
                self.clamp_selection();
            }
            Route::Create => self.form = Some(ProductForm::create()),
            Route::Edit(id) => {
                let Some(p) = self.store.get(id) else {
                    self.toasts.error(format!("Product #{id} not found"), None);
                    return;
                };
                self.form = Some(ProductForm::edit(&p));
            }
        }
        tracing::debug!(route = %route, "navigate");
        self.route = route;
    }

    /// Periodic housekeeping: expire toasts.
    pub fn on_tick(&mut self, now: Instant) {
        self.toasts.prune_expired(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Latency;

    async fn loaded_app() -> App<StaticSource> {
        let settings = Settings {
            latency: Latency::NONE,
            ..Settings::default()
        };
        let src = open_source(&settings).expect("bundled source");
        let store = CatalogStore::new(src, settings.query_defaults());
        store.fetch_products().await.expect("fetch");
        App::new(store, settings)
    }

    #[tokio::test]
    /// What: Editing a known id opens a prefilled form; unknown id stays on the list
    async fn app_navigate_edit_known_and_unknown() {
        let mut app = loaded_app().await;
        app.navigate(Route::Edit(3));
        assert_eq!(app.route, Route::Edit(3));
        assert_eq!(app.form.as_ref().and_then(|f| f.editing), Some(3));

        app.navigate(Route::List);
        app.navigate(Route::Edit(999));
        assert_eq!(app.route, Route::List);
        assert!(app.form.is_none());
        assert_eq!(app.toasts.visible().len(), 1);
    }

    #[tokio::test]
    /// What: Status filter cycles all → active → inactive → all
    async fn app_cycle_status_filter() {
        let mut app = loaded_app().await;
        app.cycle_status_filter();
        assert_eq!(
            app.store.query().active_filters.get(&ProductField::Status),
            Some(&"active".to_string())
        );
        app.cycle_status_filter();
        assert!(
            app.store
                .filtered()
                .iter()
                .all(|p| p.status == ProductStatus::Inactive)
        );
        app.cycle_status_filter();
        assert!(app.store.query().active_filters.is_empty());
    }

    #[tokio::test]
    /// What: Category filter walks every category and wraps to "all"
    async fn app_cycle_category_filter_wraps() {
        let mut app = loaded_app().await;
        for _ in 0..ProductCategory::ALL.len() {
            app.cycle_category_filter();
            assert!(
                app.store
                    .query()
                    .active_filters
                    .contains_key(&ProductField::Category)
            );
        }
        app.cycle_category_filter();
        assert!(app.store.query().active_filters.is_empty());
    }

    #[tokio::test]
    /// What: Selection and paging stay inside bounds
    async fn app_selection_and_paging_bounds() {
        let mut app = loaded_app().await;
        app.move_selection(100);
        assert_eq!(app.table_state.selected(), Some(4));
        app.move_selection(-100);
        assert_eq!(app.table_state.selected(), Some(0));
        app.step_page(-1);
        assert_eq!(app.store.query().current_page, 1);
        app.step_page(1);
        assert_eq!(app.store.query().current_page, 2);
        app.step_page(100);
        assert_eq!(app.store.query().current_page, 2);
    }
}
