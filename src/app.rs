//! Application state and core logic

use crate::config::WizardConfig;
use crate::export::{ExportFormat, Exporter};
use crate::render::template_by_id;
use crate::state::{AppState, Decision, Progress, View, WizardError, WizardPhase};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};
use uuid::Uuid;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Writes finished resumes
    exporter: Box<dyn Exporter>,
    config: WizardConfig,
    /// Whether template changes are written back to the config file
    pub persist_config: bool,
    /// Identifies this session in the log
    pub session_id: Uuid,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: WizardConfig, exporter: Box<dyn Exporter>) -> Self {
        let template = template_by_id(config.template_id());
        let session_id = Uuid::new_v4();
        info!(%session_id, template = template.id, "Starting wizard session");
        Self {
            state: AppState::new(template),
            exporter,
            config,
            persist_config: true,
            session_id,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Wizard => self.handle_wizard_key(key),
            View::FinalPreview => self.handle_final_preview_key(key).await?,
            View::TemplatePicker => self.handle_template_picker_key(key),
        }
        Ok(())
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        match self.state.wizard.phase() {
            WizardPhase::AwaitingDecision => self.handle_decision_key(key),
            WizardPhase::EditingDraft => self.handle_editing_key(key),
            WizardPhase::PreviewingStep => self.handle_step_preview_key(key),
            WizardPhase::Completed => self.state.current_view = View::FinalPreview,
        }
    }

    fn handle_decision_key(&mut self, key: KeyEvent) {
        let decision = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Decision::Yes,
            KeyCode::Char('n') | KeyCode::Char('N') => Decision::No,
            KeyCode::Enter => self.state.decision_focus,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.state.toggle_decision_focus();
                return;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.go_back();
                return;
            }
            _ => return,
        };

        let step = self.state.wizard.step_index();
        let result = self.state.wizard.answer(step, decision);
        self.apply_progress(result);
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let result = match key.code {
            KeyCode::Char('s') if ctrl => {
                self.submit_draft();
                return;
            }
            KeyCode::Char('n') if ctrl => self.state.add_entry().map(|_| {
                self.state.status_message = Some("Entry added".to_string());
            }),
            KeyCode::Char('x') if ctrl => self.state.remove_entry().map(|_| {
                self.state.status_message = Some("Entry removed".to_string());
            }),
            KeyCode::Char('t') if ctrl => self.state.cycle_suggestion().map(|applied| {
                if applied.is_none() {
                    self.state.status_message = Some("No suggestions for this field".to_string());
                }
            }),
            KeyCode::Char(c) if !ctrl => self.state.form_input_char(c),
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_form_field();
                Ok(())
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_form_field();
                Ok(())
            }
            KeyCode::Enter => self.state.form_newline().map(|inserted| {
                if !inserted {
                    self.state.next_form_field();
                }
            }),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Esc => {
                self.go_back();
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(err) = result {
            self.report_wizard_error(err);
        }
    }

    fn handle_step_preview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let result = self.state.wizard.confirm_preview_and_advance();
                self.apply_progress(result);
            }
            KeyCode::Esc => {
                if let Err(err) = self.state.wizard.close_preview() {
                    self.report_wizard_error(err);
                }
            }
            KeyCode::Backspace => self.go_back(),
            _ => {}
        }
    }

    /// Validate the open draft, opening the step preview on success
    fn submit_draft(&mut self) {
        match self.state.wizard.validate_and_proceed() {
            Ok(()) => {
                self.state.status_message = None;
            }
            Err(err) => self.report_wizard_error(err),
        }
    }

    fn go_back(&mut self) {
        self.state.wizard.go_back();
        self.state.on_step_changed();
        self.state.current_view = View::Wizard;
        self.state.status_message = None;
    }

    fn apply_progress(&mut self, result: Result<Progress, WizardError>) {
        match result {
            Ok(Progress::Step(_)) => self.state.on_step_changed(),
            Ok(Progress::Editing(_)) => {
                self.state.cursor.reset();
                self.state.status_message = None;
            }
            Ok(Progress::Completed) => {
                self.state.on_step_changed();
                self.state.current_view = View::FinalPreview;
                self.state.status_message = Some("Your resume is ready".to_string());
            }
            Err(err) => self.report_wizard_error(err),
        }
    }

    fn report_wizard_error(&mut self, err: WizardError) {
        match err {
            WizardError::Validation(errors) => {
                let noun = if errors.len() == 1 { "field" } else { "fields" };
                self.state.status_message =
                    Some(format!("{} required {} missing", errors.len(), noun));
                self.state.focus_first_error();
            }
            other => {
                warn!("Wizard rejected input: {other}");
                self.state.status_message = Some(other.to_string());
            }
        }
    }

    async fn handle_final_preview_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('y') if ctrl => self.copy_preview(),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('t') => self.state.open_template_picker(),
            KeyCode::Char('e') => self.export(self.config.export_format()).await,
            KeyCode::Char('m') => self.export(ExportFormat::Markdown).await,
            KeyCode::Char('j') => self.export(ExportFormat::Json).await,
            KeyCode::Down => self.state.scroll_down(),
            KeyCode::Up => self.state.scroll_up(),
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
        Ok(())
    }

    fn handle_template_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.move_picker_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_picker_up(),
            KeyCode::Enter => {
                let template = self.state.select_picked_template();
                info!(template = template.id, "Template selected");
                self.state.status_message = Some(format!("Template: {}", template.name));
                self.config.default_template = Some(template.id.to_string());
                if self.persist_config {
                    if let Err(e) = self.config.save() {
                        self.push_error(format!("Failed to save settings: {e}"));
                    }
                }
            }
            KeyCode::Esc => self.state.current_view = View::FinalPreview,
            _ => {}
        }
    }

    /// Export the committed document; failures are shown, not propagated
    async fn export(&mut self, format: ExportFormat) {
        let result = self
            .exporter
            .export(self.state.wizard.document(), self.state.template.id, format)
            .await;
        match result {
            Ok(path) => {
                self.state.status_message = Some(format!(
                    "Saved {} to {}",
                    format.label(),
                    path.display()
                ));
                self.state.last_export = Some(path);
            }
            Err(e) => self.push_error(format!("Export failed: {e:#}")),
        }
    }

    fn copy_preview(&mut self) {
        let text = self.state.preview().to_plain_text();
        match self.copy_to_clipboard(&text) {
            Ok(()) => {
                self.state.status_message = Some(copied_status(&text));
            }
            Err(e) => self.push_error(format!("Clipboard unavailable: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Status line after a copy, counted in characters rather than bytes
fn copied_status(text: &str) -> String {
    format!("Copied {} chars", text.chars().count())
}
