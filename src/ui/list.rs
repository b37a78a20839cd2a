//! Product list screen: search box, table of the current page and a status line.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::state::{ProductField, ProductStatus, SortOrder};
use crate::store::{CatalogSnapshot, ProductSource};
use crate::util::{format_price, truncate_to_width};

use super::theme::theme;

/// Table columns, in display order.
const COLUMNS: [(ProductField, Constraint); 6] = [
    (ProductField::Id, Constraint::Length(6)),
    (ProductField::Name, Constraint::Min(20)),
    (ProductField::Sku, Constraint::Length(12)),
    (ProductField::Category, Constraint::Length(18)),
    (ProductField::Price, Constraint::Length(11)),
    (ProductField::Status, Constraint::Length(9)),
];

pub(super) fn render_list<S: ProductSource>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let snap = app.store.snapshot();
    let [search, table, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_search(f, app, &snap.query.search_query, search);
    render_table(f, app, &snap, table);
    render_status(f, &snap, status);
}

fn render_search<S: ProductSource>(f: &mut Frame, app: &App<S>, text: &str, area: Rect) {
    let th = theme();
    let focused = app.search_focused;
    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            text.to_string(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let block = Block::default()
        .title(Span::styled(" Search ", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface2 }));
    f.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let caret = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let right = area.x + area.width.saturating_sub(2);
        let x = area.x.saturating_add(3).saturating_add(caret).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn header_cell(field: ProductField, snap: &CatalogSnapshot) -> Cell<'static> {
    let arrow = match (snap.query.sort_by, snap.query.sort_order) {
        (Some(f), SortOrder::Asc) if f == field => " ▲",
        (Some(f), SortOrder::Desc) if f == field => " ▼",
        _ => "",
    };
    Cell::from(format!("{}{arrow}", field.label()))
}

fn render_table<S: ProductSource>(
    f: &mut Frame,
    app: &mut App<S>,
    snap: &CatalogSnapshot,
    area: Rect,
) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            format!(" Products ({}) ", snap.total_items),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    if !snap.loaded || snap.page.is_empty() {
        let msg = if snap.in_flight.loading || !snap.loaded {
            "Loading…"
        } else if snap.catalog_size == 0 {
            "No products yet. Press n to create one."
        } else {
            "No products match the current search and filters."
        };
        f.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(th.subtext0))).block(block),
            area,
        );
        return;
    }

    let name_w = usize::from(area.width.saturating_sub(6 + 12 + 18 + 11 + 9 + 12)).max(20);
    let rows = snap.page.iter().map(|p| {
        let status_color = match p.status {
            ProductStatus::Active => th.green,
            ProductStatus::Inactive => th.overlay1,
        };
        Row::new(vec![
            Cell::from(p.id.to_string()),
            Cell::from(truncate_to_width(&p.name, name_w)),
            Cell::from(truncate_to_width(&p.sku, 12)),
            Cell::from(p.category.as_str()),
            Cell::from(Line::from(format_price(p.price)).right_aligned()),
            Cell::from(Span::styled(p.status.as_str(), Style::default().fg(status_color))),
        ])
    });
    let header = Row::new(COLUMNS.iter().map(|(field, _)| header_cell(*field, snap)))
        .style(Style::default().fg(th.mauve).add_modifier(Modifier::BOLD));
    let table = Table::new(rows, COLUMNS.iter().map(|(_, w)| *w))
        .header(header)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .row_highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status(f: &mut Frame, snap: &CatalogSnapshot, area: Rect) {
    let th = theme();
    let mut spans = vec![Span::styled(
        format!(
            "Page {}/{}  ·  {} per page  ·  {} of {} products",
            snap.query.current_page,
            snap.total_pages.max(1),
            snap.query.items_per_page,
            snap.total_items,
            snap.catalog_size
        ),
        Style::default().fg(th.subtext0),
    )];
    for (field, value) in snap.query.effective_filters() {
        spans.push(Span::styled(
            format!("  [{}={value}]", field.as_config_key()),
            Style::default().fg(th.sapphire),
        ));
    }
    let busy: Vec<&str> = [
        (snap.in_flight.loading, "loading"),
        (snap.in_flight.creating, "creating"),
        (snap.in_flight.updating, "saving"),
        (snap.in_flight.deleting, "deleting"),
    ]
    .into_iter()
    .filter_map(|(on, label)| on.then_some(label))
    .collect();
    if !busy.is_empty() {
        spans.push(Span::styled(
            format!("  {}…", busy.join(", ")),
            Style::default().fg(th.yellow),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
