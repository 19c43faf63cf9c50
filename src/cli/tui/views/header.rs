//! Header navigation bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::cli::tui::app::{App, Focus};
use crate::router::{use_is_active, use_location};
use crate::site::{nav_style, StyleToken};

pub fn draw(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let focused = app.focus() == Focus::Header;
    let mut spans = Vec::new();

    for (i, item) in app.nav_items().iter().enumerate() {
        let active = !item.external && use_is_active(item.to, item.end);
        let mut style = match nav_style(active) {
            StyleToken::Active => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            StyleToken::Inactive => Style::default(),
        };
        if focused && i == app.nav_index() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let label = if item.external {
            format!(" {} ↗ ", item.label)
        } else {
            format!(" {} ", item.label)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!("ahaha {}", use_location()))
            .borders(Borders::ALL)
            .border_style(border),
    );

    frame.render_widget(paragraph, area);
}
