//! Template selection list

use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::render::TEMPLATES;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem> = TEMPLATES
        .iter()
        .map(|template| {
            let marker = if template.id == app.state.template.id {
                "● "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(template.name),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Templates ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
    render_scrollable_list(frame, chunks[0], list, app.state.picker_index);

    if let Some(template) = TEMPLATES.get(app.state.picker_index) {
        let details = Paragraph::new(vec![
            Line::from(Span::styled(
                template.name,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(template.description),
            Line::from(""),
            Line::from(vec![
                Span::styled("Layout: ", Style::default().fg(Color::Gray)),
                Span::raw(template.layout.tag()),
            ]),
            Line::from(vec![
                Span::styled("Typography: ", Style::default().fg(Color::Gray)),
                Span::raw(template.typography.tag()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "j/k:move  Enter:use template  Esc:back",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(details, chunks[1]);
    }
}
