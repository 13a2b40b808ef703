//! Step preview overlay shown after a section validates

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::render::{PreviewSection, Typography};
use crate::ui::preview::section_lines;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

/// Render the committed section as it will appear in the resume
pub fn render_step_preview(
    frame: &mut Frame,
    section: Option<&PreviewSection>,
    typography: Typography,
    is_last_step: bool,
) {
    let body = match section {
        Some(section) => section_lines(section, typography),
        None => vec![Line::from(Span::styled(
            "This section is blank and will be left out of the preview.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let confirm = if is_last_step { "finish" } else { "next step" };
    render_dialog(
        frame,
        DialogConfig {
            title: "Section Preview",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            body,
            hint: Some(key_hint(&[
                ("Enter", confirm),
                ("Esc", "edit"),
                ("Backspace", "previous step"),
            ])),
            max_width: 72,
            max_height: 30,
        },
    );
}
