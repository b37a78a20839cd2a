//! Frame rendering: header with breadcrumbs, the routed screen, footer and overlays.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::route::Route;
use crate::state::ProductId;
use crate::store::ProductSource;

mod form;
mod list;
pub mod theme;
mod toasts;

use theme::theme;

/// Draw one frame for `app`.
pub fn ui<S: ProductSource>(f: &mut Frame, app: &mut App<S>) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.settings.show_keybinds_footer);
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(5),
        Constraint::Length(footer_h),
    ])
    .areas(area);

    render_header(f, app.route, header);
    match app.route {
        Route::List => list::render_list(f, app, body),
        Route::Create | Route::Edit(_) => form::render_form(f, app, body),
    }
    if app.settings.show_keybinds_footer {
        render_footer(f, app, footer);
    }
    if let Some(id) = app.confirm_delete {
        render_confirm_delete(f, app, id, area);
    }
    toasts::render_toasts(f, &app.toasts, area);
}

fn render_header(f: &mut Frame, route: Route, area: Rect) {
    let th = theme();
    let mut spans = vec![Span::styled(
        route.title(),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("   "));
    for (i, label) in route.breadcrumbs().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(th.overlay1)));
        }
        spans.push(Span::styled(label, Style::default().fg(th.subtext0)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer<S: ProductSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let th = theme();
    let keys = match app.route {
        _ if app.confirm_delete.is_some() => "y/Enter: confirm delete  any other key: cancel",
        Route::List if app.search_focused => "type to search  Backspace: erase  Esc/Enter: done",
        Route::List => {
            "/ search  ↑↓ select  ←→ page  1-6 sort  s status  c category  x clear  +/- rows  n new  e edit  d delete  t toggle  r reload  q quit"
        }
        Route::Create | Route::Edit(_) => {
            "Tab/⇧Tab field  ←→ change  Enter save  Esc cancel"
        }
    };
    f.render_widget(
        Paragraph::new(Span::styled(keys, Style::default().fg(th.overlay1))),
        area,
    );
}

/// Rectangle of `w`×`h` centered in `area`, clipped to it.
fn centered_rect(w: u16, h: u16, area: Rect) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

fn render_confirm_delete<S: ProductSource>(
    f: &mut Frame,
    app: &App<S>,
    id: ProductId,
    area: Rect,
) {
    let th = theme();
    let name = app
        .store
        .get(id)
        .map_or_else(|| format!("#{id}"), |p| format!("\"{}\" (#{id})", p.name));
    let rect = centered_rect(52, 7, area);
    f.render_widget(Clear, rect);
    let body = vec![
        Line::from(Span::styled(
            format!("Delete {name}?"),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(th.subtext0),
        )),
    ];
    let p = Paragraph::new(body).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" Confirm ", Style::default().fg(th.red)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.red))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(p, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::store::{CatalogStore, Latency, StaticSource};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(term: &Terminal<TestBackend>) -> String {
        term.backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App<StaticSource> {
        let src = StaticSource::bundled(Latency::NONE).expect("bundled");
        App::new(
            CatalogStore::new(src, Settings::default().query_defaults()),
            Settings::default(),
        )
    }

    #[test]
    /// What: The list renders a loading state before the first fetch lands
    ///
    /// - Input: Store never fetched
    /// - Output: Frame draws without panic and shows "Loading"
    fn ui_renders_before_first_fetch() {
        let mut term = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
        let mut a = app();
        a.store.with_state(|s| assert!(!s.is_loaded()));
        term.draw(|f| ui(f, &mut a)).expect("draw");
        let text = buffer_text(&term);
        assert!(text.contains("Product Management"));
        assert!(text.contains("Loading"));
    }

    #[tokio::test]
    /// What: Loaded list, form and confirm modal all render
    ///
    /// - Input: Fetched store; list, then edit form, then delete confirmation
    /// - Output: Product names, form labels and the confirm prompt appear in the buffer
    async fn ui_renders_screens_and_overlays() {
        let mut term = Terminal::new(TestBackend::new(140, 32)).expect("terminal");
        let mut a = app();
        a.store.fetch_products().await.expect("fetch");
        term.draw(|f| ui(f, &mut a)).expect("draw list");
        assert!(buffer_text(&term).contains("Smart Door Lock"));

        a.navigate(Route::Edit(16));
        a.toasts.success("Saved", None);
        term.draw(|f| ui(f, &mut a)).expect("draw form");
        let text = buffer_text(&term);
        assert!(text.contains("Edit Product"));
        assert!(text.contains("Image URL"));
        assert!(text.contains("Saved"));

        a.navigate(Route::List);
        a.confirm_delete = Some(16);
        term.draw(|f| ui(f, &mut a)).expect("draw confirm");
        assert!(buffer_text(&term).contains("Delete \"Smart Door Lock\""));
    }

    #[test]
    /// What: Centered rect never exceeds the area
    fn ui_centered_rect_clips() {
        let area = Rect::new(0, 0, 20, 5);
        let r = centered_rect(52, 7, area);
        assert_eq!(r, area);
        let r = centered_rect(10, 3, area);
        assert_eq!((r.x, r.y, r.width, r.height), (5, 1, 10, 3));
    }
}
