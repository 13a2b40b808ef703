//! Draft editor for the current section

use super::field_renderer::{draw_field, draw_help_text, field_height};
use crate::app::App;
use crate::platform::{ADD_ENTRY_SHORTCUT, REMOVE_ENTRY_SHORTCUT, SAVE_SHORTCUT, SUGGESTION_SHORTCUT};
use crate::state::StepDefinition;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the fields of every draft entry, scrolled so the focused field
/// stays visible
pub fn draw_section_form(frame: &mut Frame, area: Rect, app: &App, step: &StepDefinition) {
    let state = &app.state;
    let draft = state.wizard.draft();

    let block = Block::default()
        .title(format!(" {} ", step.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Fields
            Constraint::Length(1), // Suggestions
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    // Flatten entries into rows: an entry header (repeatable only) then fields
    let mut rows: Vec<Row> = Vec::new();
    for (entry_index, entry) in draft.entries().iter().enumerate() {
        if step.repeatable {
            rows.push(Row::Header(entry_index));
        }
        for (field_index, field) in step.fields.iter().enumerate() {
            rows.push(Row::Field {
                entry: entry_index,
                field: field_index,
                height: field_height(field, entry.get(field.name)),
            });
        }
    }

    let focused = rows
        .iter()
        .position(|r| {
            matches!(r, Row::Field { entry, field, .. }
                if *entry == state.cursor.entry && *field == state.cursor.field)
        })
        .unwrap_or(0);
    let first = first_visible_row(&rows, focused, chunks[0].height);

    let mut y = chunks[0].y;
    let bottom = chunks[0].y + chunks[0].height;
    for row in &rows[first..] {
        let height = row.height();
        if y + height > bottom {
            break;
        }
        let row_area = Rect::new(chunks[0].x, y, chunks[0].width, height);
        match *row {
            Row::Header(entry_index) => {
                let header = Paragraph::new(Line::from(Span::styled(
                    format!("Entry {} of {}", entry_index + 1, draft.entry_count()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
                frame.render_widget(header, row_area);
            }
            Row::Field { entry, field, .. } => {
                let def = &step.fields[field];
                let value = draft.entry(entry).map(|r| r.get(def.name)).unwrap_or("");
                let is_active = state.cursor.entry == entry && state.cursor.field == field;
                let error = state
                    .wizard
                    .errors()
                    .for_field(def.name, entry, step.repeatable);
                draw_field(frame, row_area, def, value, is_active, error);
            }
        }
        y += height;
    }

    draw_suggestions(frame, chunks[1], app);

    let mut hints = vec![
        ("Tab", "next field"),
        (SAVE_SHORTCUT, "save & preview"),
        (SUGGESTION_SHORTCUT, "suggest"),
    ];
    if step.repeatable {
        hints.push((ADD_ENTRY_SHORTCUT, "add entry"));
        hints.push((REMOVE_ENTRY_SHORTCUT, "remove entry"));
    }
    hints.push(("Esc", "back"));
    draw_help_text(frame, chunks[2], &hints);
}

enum Row {
    Header(usize),
    Field {
        entry: usize,
        field: usize,
        height: u16,
    },
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Header(_) => 1,
            Row::Field { height, .. } => *height,
        }
    }
}

/// First row to draw so that `focused` fits in `available` rows
fn first_visible_row(rows: &[Row], focused: usize, available: u16) -> usize {
    let mut used = 0u16;
    let mut first = focused.min(rows.len().saturating_sub(1));
    // Walk upwards from the focused row while rows still fit
    for index in (0..=first).rev() {
        let height = rows.get(index).map(Row::height).unwrap_or(0);
        if used + height > available && index != focused {
            break;
        }
        used += height;
        first = index;
    }
    first
}

fn draw_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let Some(field) = app.state.active_field() else {
        return;
    };
    if field.suggestions.is_empty() {
        return;
    }
    let mut spans = vec![Span::styled(
        "Suggestions: ",
        Style::default().fg(Color::DarkGray),
    )];
    let current = app.state.active_value();
    for suggestion in field.suggestions {
        let style = if *suggestion == current {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!("[{suggestion}]"), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
