//! Keyboard handling for the TUI.
//!
//! Handlers only mutate [`App`] and queue [`Command`]s; they never await.
//! Screen-specific keys live in [`list`] and [`form`].

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::{App, Command};
use crate::route::Route;
use crate::store::ProductSource;

mod form;
mod list;

/// Dispatch a single terminal event and mutate the [`App`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event<S: ProductSource>(
    ev: CEvent,
    app: &mut App<S>,
    cmd_tx: &mpsc::UnboundedSender<Command>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    if app.confirm_delete.is_some() {
        handle_confirm_delete(ke, app, cmd_tx);
        return false;
    }
    match app.route {
        Route::List => list::handle_list_key(ke, app, cmd_tx),
        Route::Create | Route::Edit(_) => {
            form::handle_form_key(ke, app, cmd_tx);
            false
        }
    }
}

/// Delete confirmation modal: `y`/Enter confirms, anything else cancels.
fn handle_confirm_delete<S: ProductSource>(
    ke: KeyEvent,
    app: &mut App<S>,
    cmd_tx: &mpsc::UnboundedSender<Command>,
) {
    let Some(id) = app.confirm_delete.take() else {
        return;
    };
    if !matches!(ke.code, KeyCode::Char('y' | 'Y') | KeyCode::Enter) {
        return;
    }
    if app.store.is_deleting() {
        app.toasts.warning("A delete is already in progress", None);
        return;
    }
    send(app, cmd_tx, Command::Delete(id));
}

/// Queue `cmd`; a closed channel means the loop is shutting down.
fn send<S: ProductSource>(app: &App<S>, cmd_tx: &mpsc::UnboundedSender<Command>, cmd: Command) {
    if cmd_tx.send(cmd).is_err() {
        tracing::debug!(route = %app.route, "command channel closed; dropping command");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::{ProductField, ProductStatus, SortOrder};
    use crate::store::{CatalogStore, Latency, StaticSource};

    async fn app() -> App<StaticSource> {
        let src = StaticSource::bundled(Latency::NONE).expect("bundled");
        let store = CatalogStore::new(src, Settings::default().query_defaults());
        store.fetch_products().await.expect("fetch");
        App::new(store, Settings::default())
    }

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn press(
        app: &mut App<StaticSource>,
        tx: &mpsc::UnboundedSender<Command>,
        codes: &[KeyCode],
    ) -> bool {
        codes
            .iter()
            .fold(false, |quit, c| handle_event(key(*c), app, tx) || quit)
    }

    fn type_text(app: &mut App<StaticSource>, tx: &mpsc::UnboundedSender<Command>, s: &str) {
        for ch in s.chars() {
            handle_event(key(KeyCode::Char(ch)), app, tx);
        }
    }

    #[tokio::test]
    /// What: Ctrl+C and `q` quit from the list
    async fn events_quit_keys() {
        let mut a = app().await;
        let (tx, _rx) = mpsc::unbounded_channel();
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(ctrl_c, &mut a, &tx));
        assert!(press(&mut a, &tx, &[KeyCode::Char('q')]));
    }

    #[tokio::test]
    /// What: Search box captures typing and narrows the listing
    ///
    /// - Input: `/`, "router", Esc
    /// - Output: search query set, `q` typed into the box does not quit
    async fn events_search_typing() {
        let mut a = app().await;
        let (tx, _rx) = mpsc::unbounded_channel();
        press(&mut a, &tx, &[KeyCode::Char('/')]);
        assert!(a.search_focused);
        type_text(&mut a, &tx, "routerq");
        assert!(!press(&mut a, &tx, &[KeyCode::Backspace, KeyCode::Esc]));
        assert!(!a.search_focused);
        assert_eq!(a.store.query().search_query, "router");
        assert!(
            a.store
                .filtered()
                .iter()
                .all(|p| p.name.to_lowercase().contains("router")
                    || p.sku.to_lowercase().contains("router"))
        );
    }

    #[tokio::test]
    /// What: Number keys sort; pressing the same key twice toggles the order
    async fn events_sort_keys() {
        let mut a = app().await;
        let (tx, _rx) = mpsc::unbounded_channel();
        press(&mut a, &tx, &[KeyCode::Char('5')]);
        let q = a.store.query();
        assert_eq!(q.sort_by, Some(ProductField::Price));
        assert_eq!(q.sort_order, SortOrder::Asc);
        press(&mut a, &tx, &[KeyCode::Char('5')]);
        assert_eq!(a.store.query().sort_order, SortOrder::Desc);
    }

    #[tokio::test]
    /// What: Delete asks for confirmation before queuing the command
    ///
    /// - Input: `d` then Esc; `d` then `y`
    /// - Output: nothing queued after cancel; Delete(selected) after confirm
    async fn events_delete_requires_confirmation() {
        let mut a = app().await;
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = a.selected_id().expect("row selected");
        press(&mut a, &tx, &[KeyCode::Char('d')]);
        assert_eq!(a.confirm_delete, Some(id));
        press(&mut a, &tx, &[KeyCode::Esc]);
        assert!(a.confirm_delete.is_none());
        assert!(rx.try_recv().is_err());

        press(&mut a, &tx, &[KeyCode::Char('d'), KeyCode::Char('y')]);
        assert_eq!(rx.try_recv().ok(), Some(Command::Delete(id)));
    }

    #[tokio::test]
    /// What: Create form validates, then queues Create with the typed values
    async fn events_create_form_submit() {
        let mut a = app().await;
        let (tx, mut rx) = mpsc::unbounded_channel();
        press(&mut a, &tx, &[KeyCode::Char('n')]);
        assert_eq!(a.route, Route::Create);

        press(&mut a, &tx, &[KeyCode::Enter]);
        assert!(rx.try_recv().is_err());
        assert_eq!(a.route, Route::Create);

        type_text(&mut a, &tx, "Patch Panel");
        press(&mut a, &tx, &[KeyCode::Tab]);
        type_text(&mut a, &tx, "NET-PP-24");
        press(&mut a, &tx, &[KeyCode::Tab, KeyCode::Tab]);
        type_text(&mut a, &tx, "49.90");
        press(&mut a, &tx, &[KeyCode::Tab, KeyCode::Char(' '), KeyCode::Enter]);

        match rx.try_recv() {
            Ok(Command::Create(d)) => {
                assert_eq!(d.name, "Patch Panel");
                assert_eq!(d.sku, "NET-PP-24");
                assert_eq!(d.status, ProductStatus::Inactive);
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[tokio::test]
    /// What: Edit form queues Update for the edited id; Esc returns to the list
    async fn events_edit_form_submit_and_cancel() {
        let mut a = app().await;
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = a.selected_id().expect("row selected");
        press(&mut a, &tx, &[KeyCode::Char('e')]);
        assert_eq!(a.route, Route::Edit(id));
        type_text(&mut a, &tx, " v2");
        press(&mut a, &tx, &[KeyCode::Enter]);
        match rx.try_recv() {
            Ok(Command::Update(p)) => {
                assert_eq!(p.id, id);
                assert!(p.name.ends_with(" v2"));
            }
            other => panic!("expected Update, got {other:?}"),
        }
        press(&mut a, &tx, &[KeyCode::Esc]);
        assert_eq!(a.route, Route::List);
    }
}
