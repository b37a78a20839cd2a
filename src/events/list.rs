//! Keys on the product list screen.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::app::{App, Command};
use crate::route::Route;
use crate::state::ProductField;
use crate::store::ProductSource;

use super::send;

/// Sort column bound to the number keys `1`..`6`.
const SORT_KEYS: [ProductField; 6] = [
    ProductField::Id,
    ProductField::Name,
    ProductField::Sku,
    ProductField::Category,
    ProductField::Price,
    ProductField::Status,
];

/// What: Handle a key on the list screen.
///
/// Output:
/// - `true` when the user asked to quit.
///
/// Details:
/// - While the search box is focused, printable keys edit the query instead of acting as shortcuts.
pub(super) fn handle_list_key<S: ProductSource>(
    ke: KeyEvent,
    app: &mut App<S>,
    cmd_tx: &mpsc::UnboundedSender<Command>,
) -> bool {
    if app.search_focused {
        handle_search_key(ke, app);
        return false;
    }
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => app.search_focused = true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => app.step_page(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => app.step_page(1),
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(field) = "123456".find(c).and_then(|i| SORT_KEYS.get(i)) {
                app.store.set_sort(*field);
            }
        }
        KeyCode::Char('s') => app.cycle_status_filter(),
        KeyCode::Char('c') => app.cycle_category_filter(),
        KeyCode::Char('x') => {
            if app.store.clear_filters() {
                app.table_state.select(Some(0));
                app.clamp_selection();
            }
        }
        KeyCode::Char('+') => {
            let per_page = app.store.query().items_per_page;
            app.store.set_items_per_page(per_page + 1);
            app.clamp_selection();
        }
        KeyCode::Char('-') => {
            let per_page = app.store.query().items_per_page;
            app.store.set_items_per_page(per_page.saturating_sub(1));
            app.clamp_selection();
        }
        KeyCode::Char('n') => app.navigate(Route::Create),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_id() {
                app.navigate(Route::Edit(id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => app.confirm_delete = app.selected_id(),
        KeyCode::Char('t') => toggle_selected_status(app, cmd_tx),
        KeyCode::Char('r') => {
            if app.store.is_loading() {
                app.toasts.info("Already loading products", None);
            } else {
                send(app, cmd_tx, Command::Fetch);
            }
        }
        _ => {}
    }
    false
}

fn handle_search_key<S: ProductSource>(ke: KeyEvent, app: &mut App<S>) {
    let mut text = app.store.query().search_query;
    match ke.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
            app.search_focused = false;
            return;
        }
        KeyCode::Backspace => {
            text.pop();
        }
        KeyCode::Char(ch) => text.push(ch),
        _ => return,
    }
    if app.store.set_search(&text) {
        app.table_state.select(Some(0));
        app.clamp_selection();
    }
}

/// Flip active/inactive on the highlighted product.
fn toggle_selected_status<S: ProductSource>(
    app: &mut App<S>,
    cmd_tx: &mpsc::UnboundedSender<Command>,
) {
    let Some(mut product) = app.selected_id().and_then(|id| app.store.get(id)) else {
        return;
    };
    if app.store.is_updating() {
        app.toasts.warning("An update is already in progress", None);
        return;
    }
    product.status = product.status.toggled();
    send(app, cmd_tx, Command::Update(product));
}
