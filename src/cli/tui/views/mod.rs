//! Browser screens
//!
//! Every view draws inside the browser's router scope, so links read their
//! active state from the router instead of from the app.

mod header;
mod page;
mod toys;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, InputMode};
use crate::site::Page;

/// Draw the whole screen
pub fn draw(frame: &mut Frame, app: &App<'_>) {
    app.handle().provide(|| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header links
                Constraint::Min(8),    // Page
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        header::draw(frame, app, chunks[0]);

        match app.page() {
            Page::ToySpace => toys::draw_listing(frame, app, chunks[1]),
            Page::ToyDetail { .. } => toys::draw_detail(frame, app, chunks[1]),
            _ => page::draw(frame, app, chunks[1]),
        }

        draw_status_bar(frame, app, chunks[2]);
    });
}

fn draw_status_bar(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let text = match (app.input_mode(), app.status_message()) {
        (InputMode::Search, _) => format!("Search: {}_", app.criteria().query),
        (InputMode::Normal, Some(message)) => message.to_string(),
        (InputMode::Normal, None) => "?:help q:quit".to_string(),
    };

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(paragraph, area);
}
