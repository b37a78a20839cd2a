//! Store actions requested by the UI and their results.
//!
//! Key handlers never await. They turn a keypress into a [`Command`], which is
//! spawned onto the runtime against a clone of the store; the finished
//! [`Outcome`] comes back over a channel and is folded into the UI by
//! [`handle_outcome`].

use tokio::sync::mpsc;

use crate::route::Route;
use crate::state::{Product, ProductDraft, ProductId};
use crate::store::{CatalogStore, ProductSource, StoreError};

use super::App;

/// Store action requested from the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Reload the catalog from the source.
    Fetch,
    /// Create a product.
    Create(ProductDraft),
    /// Replace a product.
    Update(Product),
    /// Remove a product.
    Delete(ProductId),
}

/// Finished store action.
#[derive(Debug)]
pub enum Outcome {
    /// Result of a fetch: number of records held.
    Fetched(Result<usize, StoreError>),
    /// Result of a create: the stored record.
    Created(Result<Product, StoreError>),
    /// Result of an update of `id`: whether a record was replaced.
    Updated(ProductId, Result<bool, StoreError>),
    /// Result of a delete of `id`: whether a record was removed.
    Deleted(ProductId, Result<bool, StoreError>),
}

/// What: Run `cmd` against the store on a background task.
///
/// Inputs:
/// - `store`: Store handle; a clone moves into the task
/// - `cmd`: Action to run
/// - `tx`: Channel the [`Outcome`] is sent on
///
/// Details:
/// - A closed channel (UI already gone) drops the outcome silently.
pub fn spawn_command<S: ProductSource>(
    store: &CatalogStore<S>,
    cmd: Command,
    tx: mpsc::UnboundedSender<Outcome>,
) {
    let store = store.clone();
    tokio::spawn(async move {
        let outcome = match cmd {
            Command::Fetch => Outcome::Fetched(store.fetch_products().await),
            Command::Create(draft) => Outcome::Created(store.add_product(draft).await),
            Command::Update(product) => {
                let id = product.id;
                Outcome::Updated(id, store.update_product(product).await)
            }
            Command::Delete(id) => Outcome::Deleted(id, store.delete_product(id).await),
        };
        let _ = tx.send(outcome);
    });
}

/// What: Fold a finished action into the UI.
///
/// Inputs:
/// - `app`: Application state
/// - `outcome`: Finished action
///
/// Details:
/// - Every failure becomes an error toast.
/// - A successful create or update returns to the list when the form that issued it is still open.
pub fn handle_outcome<S: ProductSource>(app: &mut App<S>, outcome: Outcome) {
    match outcome {
        Outcome::Fetched(Ok(count)) => {
            tracing::debug!(count, "fetch finished");
        }
        Outcome::Fetched(Err(e)) => {
            app.toasts.error(format!("Failed to load products: {e}"), None);
        }
        Outcome::Created(Ok(p)) => {
            app.toasts.success(format!("Created \"{}\" (#{})", p.name, p.id), None);
            if app.route == Route::Create {
                app.navigate(Route::List);
            }
        }
        Outcome::Created(Err(e)) => {
            app.toasts.error(format!("Failed to create product: {e}"), None);
        }
        Outcome::Updated(id, Ok(true)) => {
            app.toasts.success(format!("Product #{id} updated"), None);
            if app.route == Route::Edit(id) {
                app.navigate(Route::List);
            }
        }
        Outcome::Updated(id, Ok(false)) => {
            app.toasts.warning(format!("Product #{id} no longer exists"), None);
            if app.route == Route::Edit(id) {
                app.navigate(Route::List);
            }
        }
        Outcome::Updated(id, Err(e)) => {
            app.toasts.error(format!("Failed to update product #{id}: {e}"), None);
        }
        Outcome::Deleted(id, Ok(removed)) => {
            if removed {
                app.toasts.success(format!("Product #{id} deleted"), None);
            } else {
                app.toasts.warning(format!("Product #{id} was already gone"), None);
            }
            app.clamp_selection();
        }
        Outcome::Deleted(id, Err(e)) => {
            app.toasts.error(format!("Failed to delete product #{id}: {e}"), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::notify::ToastKind;
    use crate::store::{Action, Latency, StaticSource};

    fn app() -> App<StaticSource> {
        let src = StaticSource::bundled(Latency::NONE).expect("bundled");
        App::new(
            CatalogStore::new(src, Settings::default().query_defaults()),
            Settings::default(),
        )
    }

    #[tokio::test]
    /// What: Spawned commands report back over the channel
    ///
    /// - Input: Fetch then Delete(1) with zero latency
    /// - Output: Fetched(Ok(16)) followed by Deleted(1, Ok(true))
    async fn commands_roundtrip_through_channel() {
        let app = app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_command(&app.store, Command::Fetch, tx.clone());
        match rx.recv().await {
            Some(Outcome::Fetched(Ok(n))) => assert_eq!(n, 16),
            other => panic!("unexpected outcome: {other:?}"),
        }
        spawn_command(&app.store, Command::Delete(1), tx);
        match rx.recv().await {
            Some(Outcome::Deleted(1, Ok(true))) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(app.store.get(1).is_none());
    }

    #[tokio::test]
    /// What: A successful create leaves the form; a failure keeps it and toasts
    async fn commands_outcome_navigation_and_toasts() {
        let mut a = app();
        a.store.fetch_products().await.expect("fetch");
        a.navigate(Route::Create);
        handle_outcome(&mut a, Outcome::Created(Err(StoreError::Busy(Action::Create))));
        assert_eq!(a.route, Route::Create);
        assert_eq!(a.toasts.visible().last().map(|t| t.kind), Some(ToastKind::Error));

        let draft = a
            .store
            .get(2)
            .map(ProductDraft::from)
            .expect("product 2 exists");
        let created = a.store.add_product(draft).await.expect("create");
        handle_outcome(&mut a, Outcome::Created(Ok(created)));
        assert_eq!(a.route, Route::List);
        assert!(a.form.is_none());
        assert_eq!(
            a.toasts.visible().last().map(|t| t.kind),
            Some(ToastKind::Success)
        );
    }
}
