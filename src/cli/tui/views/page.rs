//! Static pages

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::cli::tui::app::App;

pub fn draw(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let page = app.page();
    let mut lines: Vec<Line> = Vec::new();

    if let Some(copy) = page.copy() {
        for line in copy.lines {
            lines.push(Line::from(*line));
        }

        if !copy.links.is_empty() {
            lines.push(Line::from(""));
            for (i, (label, to)) in copy.links.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::raw(*label),
                    Span::styled(format!("  {}", to), Style::default().fg(Color::DarkGray)),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(page.title()).borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
