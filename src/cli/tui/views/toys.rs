//! Toy Space listing and detail

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::cli::tui::app::{App, Focus};
use crate::cli::tui::utils::{tag_color, truncate_str};
use crate::domain::ToyEntry;

fn toy_list<'t>(app: &App<'_>, toys: &[&'t ToyEntry], title: String) -> (List<'t>, ListState) {
    let items: Vec<ListItem> = toys
        .iter()
        .map(|toy| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", toy.last_updated),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(truncate_str(&toy.title, 40)),
                Span::styled(
                    format!("  {} / {}", toy.category, toy.difficulty),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let focused = app.focus() == Focus::Content;
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(if focused { Color::DarkGray } else { Color::Black })
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !toys.is_empty() {
        state.select(Some(app.toy_index()));
    }

    (list, state)
}

pub fn draw_listing(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let criteria = app.criteria();
    let catalog = app.site().catalog();

    let mut tag_spans = Vec::new();
    for (i, tag) in catalog.tags().iter().enumerate() {
        let accent = tag_color(tag).unwrap_or(Color::Cyan);
        let style = if criteria.is_tag_selected(&tag.id) {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tag_spans.push(Span::styled(format!("[{}]{} ", i + 1, tag.label), style));
    }

    let filters = Paragraph::new(vec![
        Line::from(format!(
            "search: {:?}  category: {}  difficulty: {}  sort: {}",
            criteria.query, criteria.category, criteria.difficulty, criteria.sort_order
        )),
        Line::from(tag_spans),
    ])
    .block(Block::default().title("Toy Space").borders(Borders::ALL));
    frame.render_widget(filters, chunks[0]);

    let toys = app.visible_toys();
    let title = format!("{} of {} toys", toys.len(), catalog.len());
    let (list, mut state) = toy_list(app, &toys, title);
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

pub fn draw_detail(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let Some(toy) = app.current_toy() else {
        return;
    };
    let catalog = app.site().catalog();

    let related = app.visible_toys();
    let related_height = if related.is_empty() {
        0
    } else {
        related.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(related_height)])
        .split(area);

    let mut meta = vec![Span::raw(format!(
        "{} / {}  updated {}  tags:",
        toy.category, toy.difficulty, toy.last_updated
    ))];
    for id in &toy.tags {
        let style = catalog
            .tag(id)
            .and_then(tag_color)
            .map_or_else(Style::default, |color| Style::default().fg(color));
        meta.push(Span::styled(format!(" [{}]", catalog.tag_label(id)), style));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            toy.summary.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(meta),
    ];
    if let Some(url) = &toy.repository_url {
        lines.push(Line::from(Span::styled(
            url.as_str(),
            Style::default().fg(Color::Blue),
        )));
    }
    lines.push(Line::from(""));
    lines.extend(toy.content.lines().map(Line::from));

    let body = Paragraph::new(lines)
        .block(Block::default().title(toy.title.as_str()).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[0]);

    if !related.is_empty() {
        let (list, mut state) = toy_list(app, &related, "Related".to_string());
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }
}
