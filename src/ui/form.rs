//! Create/edit form screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, FormField, ProductForm};
use crate::store::ProductSource;

use super::theme::theme;

fn field_value(form: &ProductForm, field: FormField) -> String {
    match field {
        FormField::Name => form.name.clone(),
        FormField::Sku => form.sku.clone(),
        FormField::Category => format!("‹ {} ›", form.category),
        FormField::Price => form.price.clone(),
        FormField::Status => format!("‹ {} ›", form.status),
        FormField::ImageUrl => form.image_url.clone(),
    }
}

pub(super) fn render_form<S: ProductSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let th = theme();
    let Some(form) = app.form.as_ref() else {
        return;
    };
    let saving = match form.editing {
        Some(_) => app.store.is_updating(),
        None => app.store.is_creating(),
    };

    let mut lines = Vec::with_capacity(FormField::ORDER.len() * 2 + 2);
    for field in FormField::ORDER {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay1)
        };
        let mut spans = vec![
            Span::styled(if focused { "> " } else { "  " }, label_style),
            Span::styled(format!("{:<10}", field.label()), label_style),
            Span::styled(field_value(form, field), Style::default().fg(th.text)),
        ];
        if focused && field.is_text() {
            spans.push(Span::styled("▏", Style::default().fg(th.sapphire)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    if saving {
        lines.push(Line::from(Span::styled(
            "Saving…",
            Style::default().fg(th.yellow),
        )));
    }

    let title = match form.editing {
        Some(id) => format!(" Product #{id} "),
        None => " New product ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
