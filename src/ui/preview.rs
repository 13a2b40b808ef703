//! Resume preview drawing (final preview and step preview content)

use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use crate::render::{Column, LayoutKind, PreviewDocument, PreviewSection, Typography};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::forms::draw_help_text;

/// Heading style for a typography profile
fn heading_style(typography: Typography) -> Style {
    let base = Style::default().fg(Color::Yellow);
    match typography {
        Typography::Serif => base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        Typography::Sans => base.add_modifier(Modifier::BOLD),
        Typography::Mono => base,
    }
}

fn heading_text(title: &str, typography: Typography) -> String {
    match typography {
        Typography::Serif => title.to_uppercase(),
        Typography::Sans => title.to_string(),
        Typography::Mono => format!("# {title}"),
    }
}

/// Lines for one preview section; placeholder values are dimmed
pub fn section_lines(section: &PreviewSection, typography: Typography) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        heading_text(section.title, typography),
        heading_style(typography),
    ))];

    for (index, entry) in section.entries.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        for field in &entry.fields {
            let value_style = if field.is_placeholder {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![Span::styled(
                format!("{}: ", field.label),
                Style::default().fg(Color::Gray),
            )];
            let mut value_lines = field.value.split('\n');
            if let Some(first) = value_lines.next() {
                spans.push(Span::styled(first.to_string(), value_style));
            }
            lines.push(Line::from(spans));
            for rest in value_lines {
                lines.push(Line::from(Span::styled(format!("  {rest}"), value_style)));
            }
        }
    }
    lines
}

fn column_lines<'a>(
    sections: impl Iterator<Item = &'a PreviewSection>,
    typography: Typography,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in sections {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(section_lines(section, typography));
    }
    lines
}

fn draw_column(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, scroll: usize) {
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Draw a preview document into an area
pub fn draw_preview_document(
    frame: &mut Frame,
    area: Rect,
    preview: &PreviewDocument,
    scroll: usize,
) {
    if preview.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nothing to preview yet. Go back and add a section.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let typography = preview.style.typography;
    match preview.style.layout {
        LayoutKind::SingleColumn => {
            let lines = column_lines(preview.sections.iter(), typography);
            draw_column(frame, area, lines, scroll);
        }
        LayoutKind::TwoColumn => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(area);
            let sidebar = column_lines(preview.column(Column::Sidebar), typography);
            let main = column_lines(preview.column(Column::Main), typography);

            let sidebar_block = Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(Color::DarkGray));
            let sidebar_inner = sidebar_block.inner(chunks[0]);
            frame.render_widget(sidebar_block, chunks[0]);
            draw_column(frame, sidebar_inner, sidebar, scroll);

            let main_area = Rect {
                x: chunks[1].x + 1,
                width: chunks[1].width.saturating_sub(1),
                ..chunks[1]
            };
            draw_column(frame, main_area, main, scroll);
        }
    }
}

/// Draw the final preview of the finished resume
pub fn draw_final(frame: &mut Frame, area: Rect, app: &App) {
    let preview = app.state.preview();

    let block = Block::default()
        .title(format!(
            " Preview · {} ({}) ",
            app.state.template.name, preview.style
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    draw_preview_document(frame, chunks[0], &preview, app.state.scroll_offset);

    draw_help_text(
        frame,
        chunks[1],
        &[
            ("e", "export"),
            ("m", "markdown"),
            ("j", "json"),
            ("t", "template"),
            (COPY_SHORTCUT, "copy"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
    );
}
