//! Error dialog component

use super::base::{key_hint, render_dialog, wrap_text, DialogConfig};
use ratatui::{style::Color, text::Line, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let max_width = 60u16;
    let body = wrap_text(error_message, (max_width - 6) as usize)
        .into_iter()
        .map(Line::from)
        .collect();

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            title_color: Color::Red,
            border_color: Color::Red,
            body,
            hint: Some(key_hint(&[("Enter/Esc", "dismiss")])),
            max_width,
            ..Default::default()
        },
    );
}
