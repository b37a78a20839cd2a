//! Keys on the create/edit form.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::app::{App, Command, FormField};
use crate::route::Route;
use crate::store::ProductSource;

use super::send;

/// What: Handle a key on the create/edit screen.
///
/// Details:
/// - Tab/BackTab (or Down/Up) move focus; Left/Right cycle the category and status selectors.
/// - Enter validates; an invalid form stays open with an error toast.
/// - Esc discards the form and returns to the list.
pub(super) fn handle_form_key<S: ProductSource>(
    ke: KeyEvent,
    app: &mut App<S>,
    cmd_tx: &mpsc::UnboundedSender<Command>,
) {
    if ke.code == KeyCode::Esc {
        app.navigate(Route::List);
        return;
    }
    if ke.code == KeyCode::Enter {
        submit(app, cmd_tx);
        return;
    }
    let Some(form) = app.form.as_mut() else {
        return;
    };
    match (ke.code, form.focus) {
        (KeyCode::Tab | KeyCode::Down, _) => form.focus = form.focus.next(),
        (KeyCode::BackTab | KeyCode::Up, _) => form.focus = form.focus.prev(),
        (KeyCode::Left, FormField::Category) => form.category = form.category.prev(),
        (KeyCode::Right | KeyCode::Char(' '), FormField::Category) => {
            form.category = form.category.next();
        }
        (KeyCode::Left | KeyCode::Right | KeyCode::Char(' '), FormField::Status) => {
            form.status = form.status.toggled();
        }
        (KeyCode::Backspace, _) => {
            if let Some(text) = form.focused_text_mut() {
                text.pop();
            }
        }
        (KeyCode::Char(ch), _) => {
            if let Some(text) = form.focused_text_mut() {
                text.push(ch);
            }
        }
        _ => {}
    }
}

fn submit<S: ProductSource>(app: &mut App<S>, cmd_tx: &mpsc::UnboundedSender<Command>) {
    let Some(form) = app.form.as_ref() else {
        return;
    };
    let draft = match form.to_draft() {
        Ok(d) => d,
        Err(msg) => {
            app.toasts.error(msg, None);
            return;
        }
    };
    let cmd = match form.editing {
        Some(id) if app.store.is_updating() => {
            app.toasts
                .warning(format!("Still saving product #{id}"), None);
            return;
        }
        Some(id) => Command::Update(draft.with_id(id)),
        None if app.store.is_creating() => {
            app.toasts.warning("Still creating the previous product", None);
            return;
        }
        None => Command::Create(draft),
    };
    send(app, cmd_tx, cmd);
}
