//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{View, WizardPhase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Step progress such as "Step 3/6 · Work Experience"
pub fn progress_label(app: &App) -> String {
    let wizard = &app.state.wizard;
    match wizard.current_step() {
        Some(step) => format!(
            "Step {}/{} · {}",
            wizard.step_index() + 1,
            wizard.step_count(),
            step.title
        ),
        None => format!("Done · {} steps", wizard.step_count()),
    }
}

/// Draw the header with progress and the active template
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            " Resume Wizard ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(progress_label(app), Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(
            format!("template: {}", app.state.template.name),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.wizard.phase()),
        Style::default().fg(Color::Cyan),
    )];

    spans.push(Span::styled(
        view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(app: &App) -> &'static str {
    match app.state.current_view {
        View::Wizard => match app.state.wizard.phase() {
            WizardPhase::AwaitingDecision => "y/n:answer  ←/→:focus  Enter:choose  Esc:back",
            WizardPhase::EditingDraft => "Tab:next field  Esc:back",
            WizardPhase::PreviewingStep => "Enter:continue  Esc:edit",
            WizardPhase::Completed => "any key:preview",
        },
        View::FinalPreview => "↑/↓:scroll  t:template  e:export",
        View::TemplatePicker => "j/k:move  Enter:select  Esc:back",
    }
}
