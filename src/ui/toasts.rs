//! Toast overlay anchored to the bottom-right corner.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::notify::Toasts;

use super::theme::theme;

const MAX_WIDTH: u16 = 48;

/// Draw visible toasts stacked upward from the bottom-right, newest at the bottom.
pub(super) fn render_toasts(f: &mut Frame, toasts: &Toasts, area: Rect) {
    let th = theme();
    let mut bottom = area.y + area.height;
    for toast in toasts.visible().iter().rev() {
        let text_w = u16::try_from(toast.message.width()).unwrap_or(u16::MAX);
        let w = text_w.saturating_add(4).min(MAX_WIDTH).min(area.width);
        let inner_w = w.saturating_sub(2).max(1);
        let lines = text_w.div_ceil(inner_w).max(1);
        let h = lines + 2;
        if bottom < area.y + h {
            break;
        }
        bottom -= h;
        let rect = Rect::new(area.x + area.width - w, bottom, w, h);
        let color = th.toast_color(toast.kind);
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(Span::styled(toast.message.as_str(), Style::default().fg(th.text)))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(th.mantle)),
                ),
            rect,
        );
    }
}
