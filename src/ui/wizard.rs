//! Yes/no question screen for the current step

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{Decision, StepDefinition};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the question for a step with Yes/No buttons
pub fn draw_decision(frame: &mut Frame, area: Rect, app: &App, step: &StepDefinition) {
    let block = Block::default()
        .title(format!(" {} ", step.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding
            Constraint::Length(3),             // Question
            Constraint::Length(1),             // Previous answer
            Constraint::Length(1),             // Gap
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),                // Bottom padding
        ])
        .split(inner);

    let question = Paragraph::new(Line::from(Span::styled(
        step.question,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(question, chunks[1]);

    if let Some(previous) = previous_answer(app, step) {
        let note = Paragraph::new(Span::styled(previous, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center);
        frame.render_widget(note, chunks[2]);
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(14),
            Constraint::Length(2),
            Constraint::Length(14),
            Constraint::Min(0),
        ])
        .split(chunks[4]);

    let focus = app.state.decision_focus;
    render_button(frame, buttons[1], "y", "Yes", focus == Decision::Yes);
    render_button(frame, buttons[3], "n", "No", focus == Decision::No);
}

/// Note about what was committed for this step on an earlier pass
fn previous_answer(app: &App, step: &StepDefinition) -> Option<&'static str> {
    let value = app.state.wizard.document().get(step.key)?;
    Some(if value.is_declined() {
        "Previously skipped"
    } else {
        "Previously filled in"
    })
}

/// Shown briefly between the last step and the final preview
pub fn draw_completed(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "All steps answered",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to open the preview",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}
