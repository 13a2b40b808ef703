//! Application state definitions

use std::collections::VecDeque;
use std::path::PathBuf;

use tracing::warn;

use super::forms::{Decision, FieldCursor, FieldDefinition, Wizard, WizardError};
use crate::render::{self, template_by_id, PreviewDocument, StyleSelection, Template, TEMPLATES};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Wizard,
    /// Full preview of the finished document
    FinalPreview,
    TemplatePicker,
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Wizard session
    pub wizard: Wizard,
    pub cursor: FieldCursor,
    /// Highlighted button on a yes/no question
    pub decision_focus: Decision,

    // Styling
    pub template: &'static Template,
    pub picker_index: usize,

    // UI state
    pub scroll_offset: usize,
    pub status_message: Option<String>,
    pub last_export: Option<PathBuf>,
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(template_by_id("classic"))
    }
}

impl AppState {
    pub fn new(template: &'static Template) -> Self {
        Self {
            current_view: View::Wizard,
            wizard: Wizard::new(),
            cursor: FieldCursor::default(),
            decision_focus: Decision::Yes,
            template,
            picker_index: 0,
            scroll_offset: 0,
            status_message: None,
            last_export: None,
            error_queue: VecDeque::new(),
        }
    }

    pub fn style(&self) -> StyleSelection {
        self.template.style()
    }

    /// Preview of the whole document in the selected style
    pub fn preview(&self) -> PreviewDocument {
        render::render(self.wizard.document(), self.style())
    }

    // Error queue

    pub fn push_error(&mut self, message: String) {
        warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    // Form editing

    /// Definition of the focused field, if a draft is open
    pub fn active_field(&self) -> Option<&'static FieldDefinition> {
        self.wizard
            .current_step()
            .and_then(|step| step.fields.get(self.cursor.field))
    }

    /// Current draft value of the focused field
    pub fn active_value(&self) -> &str {
        match (self.active_field(), self.wizard.draft().entry(self.cursor.entry)) {
            (Some(field), Some(entry)) => entry.get(field.name),
            _ => "",
        }
    }

    fn field_count(&self) -> usize {
        self.wizard
            .current_step()
            .map(|step| step.fields.len())
            .unwrap_or(0)
    }

    pub fn next_form_field(&mut self) {
        let (fields, entries) = (self.field_count(), self.wizard.draft().entry_count());
        self.cursor.next(fields, entries);
    }

    pub fn prev_form_field(&mut self) {
        let (fields, entries) = (self.field_count(), self.wizard.draft().entry_count());
        self.cursor.prev(fields, entries);
    }

    /// Replace the focused field's value through the wizard
    fn set_active_value(&mut self, value: String) -> Result<(), WizardError> {
        let Some(field) = self.active_field() else {
            return Ok(());
        };
        self.wizard.update_field(self.cursor.entry, field.name, value)
    }

    /// Type a character into the focused field; rejected characters are dropped
    pub fn form_input_char(&mut self, c: char) -> Result<(), WizardError> {
        let Some(field) = self.active_field() else {
            return Ok(());
        };
        if !field.kind.accepts_char(c) {
            return Ok(());
        }
        let mut value = self.active_value().to_string();
        value.push(c);
        self.set_active_value(value)
    }

    /// Insert a line break; only multi-line fields take one
    pub fn form_newline(&mut self) -> Result<bool, WizardError> {
        match self.active_field() {
            Some(field) if field.kind.is_multiline() => {
                let mut value = self.active_value().to_string();
                value.push('\n');
                self.set_active_value(value)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn form_backspace(&mut self) -> Result<(), WizardError> {
        let mut value = self.active_value().to_string();
        if value.pop().is_none() {
            return Ok(());
        }
        self.set_active_value(value)
    }

    /// Fill the focused field with its next canned suggestion
    pub fn cycle_suggestion(&mut self) -> Result<Option<&'static str>, WizardError> {
        let Some(field) = self.active_field() else {
            return Ok(None);
        };
        let Some(suggestion) = field.next_suggestion(self.active_value()) else {
            return Ok(None);
        };
        self.wizard
            .apply_suggestion(self.cursor.entry, field.name, suggestion)?;
        Ok(Some(suggestion))
    }

    /// Append an entry to the draft and focus it
    pub fn add_entry(&mut self) -> Result<(), WizardError> {
        let index = self.wizard.add_entry()?;
        self.cursor.focus_entry(index);
        Ok(())
    }

    /// Remove the focused entry from the draft
    pub fn remove_entry(&mut self) -> Result<(), WizardError> {
        self.wizard.remove_entry(self.cursor.entry)?;
        let (fields, entries) = (self.field_count(), self.wizard.draft().entry_count());
        self.cursor.clamp(fields, entries);
        Ok(())
    }

    /// Focus the first field with a validation error, if any
    pub fn focus_first_error(&mut self) {
        let Some(step) = self.wizard.current_step() else {
            return;
        };
        let repeatable = step.repeatable;
        for (entry, _) in self.wizard.draft().entries().iter().enumerate() {
            for (index, field) in step.fields.iter().enumerate() {
                if self
                    .wizard
                    .errors()
                    .for_field(field.name, entry, repeatable)
                    .is_some()
                {
                    self.cursor = FieldCursor {
                        entry,
                        field: index,
                    };
                    return;
                }
            }
        }
    }

    /// Reset per-step UI state after the wizard changed step
    pub fn on_step_changed(&mut self) {
        self.cursor.reset();
        self.decision_focus = Decision::Yes;
        self.scroll_offset = 0;
    }

    // Decision buttons

    pub fn toggle_decision_focus(&mut self) {
        self.decision_focus = match self.decision_focus {
            Decision::Yes => Decision::No,
            Decision::No => Decision::Yes,
        };
    }

    // Template picker

    pub fn open_template_picker(&mut self) {
        self.picker_index = render::template_index(self.template.id).unwrap_or(0);
        self.current_view = View::TemplatePicker;
    }

    pub fn move_picker_down(&mut self) {
        if self.picker_index + 1 < TEMPLATES.len() {
            self.picker_index += 1;
        }
    }

    pub fn move_picker_up(&mut self) {
        self.picker_index = self.picker_index.saturating_sub(1);
    }

    /// Apply the highlighted template and return to the final preview
    pub fn select_picked_template(&mut self) -> &'static Template {
        if let Some(template) = TEMPLATES.get(self.picker_index) {
            self.template = template;
        }
        let last_line = self.preview().line_count().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(last_line);
        self.current_view = View::FinalPreview;
        self.template
    }

    // Scrolling

    /// Scroll the final preview, stopping at its last line
    pub fn scroll_down(&mut self) {
        let last_line = self.preview().line_count().saturating_sub(1);
        if self.scroll_offset < last_line {
            self.scroll_offset += 1;
        } else {
            self.scroll_offset = last_line;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}
