//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod preview;
mod template_picker;
mod widgets;
mod wizard;

use crate::app::App;
use crate::state::{View, WizardPhase};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Wizard => draw_wizard(frame, main_area, app),
        View::FinalPreview => preview::draw_final(frame, main_area, app),
        View::TemplatePicker => template_picker::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays
    if app.state.current_view == View::Wizard && app.state.wizard.is_preview_open() {
        let style = app.state.style();
        let wizard = &app.state.wizard;
        let is_last_step = wizard.step_index() + 1 == wizard.step_count();
        components::render_step_preview(
            frame,
            wizard.step_preview(style).as_ref(),
            style.typography,
            is_last_step,
        );
    }

    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

fn draw_wizard(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let wizard = &app.state.wizard;
    let Some(step) = wizard.current_step() else {
        wizard::draw_completed(frame, area);
        return;
    };

    match wizard.phase() {
        WizardPhase::AwaitingDecision => wizard::draw_decision(frame, area, app, step),
        // The form stays visible underneath the step preview
        WizardPhase::EditingDraft | WizardPhase::PreviewingStep => {
            forms::draw_section_form(frame, area, app, step)
        }
        WizardPhase::Completed => wizard::draw_completed(frame, area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WizardConfig;
    use crate::export::MockExporter;
    use crate::state::Decision;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let mut app = App::new(WizardConfig::default(), Box::new(MockExporter::new()));
        app.persist_config = false;
        app
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_first_question() {
        let app = test_app();
        let screen = screen_text(&app);
        assert!(screen.contains("Step 1/6"));
        assert!(screen.contains("[y] Yes"));
        assert!(screen.contains("[n] No"));
    }

    #[test]
    fn test_draws_section_form_after_yes() {
        let mut app = test_app();
        app.state.wizard.answer(0, Decision::Yes).unwrap();
        let screen = screen_text(&app);
        assert!(screen.contains("Personal Information"));
        assert!(screen.contains("Full Name"));
    }

    #[test]
    fn test_draws_step_preview_overlay() {
        let mut app = test_app();
        app.state.wizard.answer(0, Decision::Yes).unwrap();
        app.state
            .wizard
            .update_field(0, "fullName", "Jane Doe".to_string())
            .unwrap();
        app.state
            .wizard
            .update_field(0, "email", "jane@x.com".to_string())
            .unwrap();
        app.state.wizard.validate_and_proceed().unwrap();

        let screen = screen_text(&app);
        assert!(screen.contains("Section Preview"));
        assert!(screen.contains("Jane Doe"));
    }

    #[test]
    fn test_draws_error_dialog_on_top() {
        let mut app = test_app();
        app.push_error("disk full");
        let screen = screen_text(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("disk full"));
    }

    #[test]
    fn test_draws_final_preview_when_empty() {
        let mut app = test_app();
        for step in 0..app.state.wizard.step_count() {
            app.state.wizard.answer(step, Decision::No).unwrap();
        }
        app.state.current_view = View::FinalPreview;
        let screen = screen_text(&app);
        assert!(screen.contains("Nothing to preview yet"));
    }
}
