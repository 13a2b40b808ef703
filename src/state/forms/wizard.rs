//! Stepwise wizard: gates each section on a yes/no answer, edits a draft,
//! validates it and commits it into the form document.
//!
//! The draft and the committed document are separate values; a draft is
//! copied into the document only by [`Wizard::validate_and_proceed`].

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::document::{FormDocument, Record, SectionValue};
use super::steps::{StepDefinition, STEPS};
use crate::render::{self, PreviewSection, StyleSelection};

/// Answer to a step's gating question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Yes,
    No,
}

/// Where the wizard is in its state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    AwaitingDecision,
    EditingDraft,
    PreviewingStep,
    Completed,
}

impl WizardPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AwaitingDecision => "awaiting decision",
            Self::EditingDraft => "editing",
            Self::PreviewingStep => "previewing",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for WizardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of an operation that may finish the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Now on the given step, waiting for its answer
    Step(usize),
    /// An answer was "yes"; the section's draft is open for editing
    Editing(usize),
    Completed,
}

/// Uncommitted edit buffer for the current section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Single(Record),
    Multiple(Vec<Record>),
}

impl Draft {
    /// Empty draft shaped for the step
    pub fn empty_for(step: &StepDefinition) -> Self {
        if step.repeatable {
            Draft::Multiple(vec![Record::new()])
        } else {
            Draft::Single(Record::new())
        }
    }

    /// Draft initialised from a committed value, or empty when there is none
    pub fn from_committed(step: &StepDefinition, value: Option<&SectionValue>) -> Self {
        match value {
            Some(SectionValue::Single(record)) if !step.repeatable => Draft::Single(record.clone()),
            Some(SectionValue::Multiple(records)) if step.repeatable && !records.is_empty() => {
                Draft::Multiple(records.clone())
            }
            Some(SectionValue::Single(record)) if step.repeatable => {
                Draft::Multiple(vec![record.clone()])
            }
            Some(SectionValue::Multiple(records)) if !step.repeatable && !records.is_empty() => {
                Draft::Single(records[0].clone())
            }
            _ => Self::empty_for(step),
        }
    }

    pub fn entries(&self) -> &[Record] {
        match self {
            Draft::Single(record) => std::slice::from_ref(record),
            Draft::Multiple(records) => records,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries().len()
    }

    pub fn is_repeatable(&self) -> bool {
        matches!(self, Draft::Multiple(_))
    }

    /// Entry at `index`; single drafts ignore the index
    fn entry_mut(&mut self, index: usize) -> Option<&mut Record> {
        match self {
            Draft::Single(record) => Some(record),
            Draft::Multiple(records) => records.get_mut(index),
        }
    }

    pub fn entry(&self, index: usize) -> Option<&Record> {
        match self {
            Draft::Single(record) => Some(record),
            Draft::Multiple(records) => records.get(index),
        }
    }

    fn to_section_value(&self) -> SectionValue {
        match self {
            Draft::Single(record) => SectionValue::Single(record.clone()),
            Draft::Multiple(records) => SectionValue::Multiple(records.clone()),
        }
    }
}

/// Per-field validation messages, keyed by field name (single sections)
/// or field name followed by the entry index (repeatable sections)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Message for a field of a given entry
    pub fn for_field(&self, field: &str, entry: usize, repeatable: bool) -> Option<&str> {
        self.get(&Self::key(field, entry, repeatable))
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn key(field: &str, entry: usize, repeatable: bool) -> String {
        if repeatable {
            format!("{field}{entry}")
        } else {
            field.to_string()
        }
    }

    fn insert(&mut self, key: String, message: String) {
        self.0.insert(key, message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Errors returned by wizard operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("cannot {operation} while {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: WizardPhase,
    },

    #[error("step {requested} is not the current step ({current})")]
    StepMismatch { requested: usize, current: usize },

    #[error("section '{0}' does not accept multiple entries")]
    NotRepeatable(&'static str),

    #[error("section '{section}' has no field '{field}'")]
    UnknownField {
        section: &'static str,
        field: String,
    },

    #[error("entry {index} is out of range ({count} entries)")]
    EntryOutOfRange { index: usize, count: usize },
}

/// A wizard session over a static step table
#[derive(Debug, Clone)]
pub struct Wizard {
    steps: &'static [StepDefinition],
    step_index: usize,
    phase: WizardPhase,
    draft: Draft,
    errors: ValidationErrors,
    document: FormDocument,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Start a session over the built-in resume steps
    pub fn new() -> Self {
        Self::with_steps(STEPS)
    }

    /// Start a session over a custom step table.
    ///
    /// The table must contain at least one step.
    pub fn with_steps(steps: &'static [StepDefinition]) -> Self {
        assert!(!steps.is_empty(), "wizard needs at least one step");
        Self {
            steps,
            step_index: 0,
            phase: WizardPhase::AwaitingDecision,
            draft: Draft::empty_for(&steps[0]),
            errors: ValidationErrors::default(),
            document: FormDocument::new(),
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the current step. Equals the step count once completed.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Definition of the current step, `None` once completed
    pub fn current_step(&self) -> Option<&'static StepDefinition> {
        self.steps.get(self.step_index)
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn is_completed(&self) -> bool {
        self.phase == WizardPhase::Completed
    }

    pub fn is_preview_open(&self) -> bool {
        self.phase == WizardPhase::PreviewingStep
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    /// Answer the current step's question.
    ///
    /// "No" declines the section and moves on; "yes" opens a draft seeded
    /// from whatever was committed for the section before.
    pub fn answer(&mut self, step_index: usize, decision: Decision) -> Result<Progress, WizardError> {
        self.expect_phase("answer", WizardPhase::AwaitingDecision)?;
        if step_index != self.step_index {
            return Err(WizardError::StepMismatch {
                requested: step_index,
                current: self.step_index,
            });
        }
        let step = self.current_step_or_err("answer")?;

        match decision {
            Decision::No => {
                info!(section = step.key, "Section declined");
                self.document.decline(step.key);
                Ok(self.advance())
            }
            Decision::Yes => {
                debug!(section = step.key, "Opening draft");
                self.draft = Draft::from_committed(step, self.document.get(step.key));
                self.errors = ValidationErrors::default();
                self.phase = WizardPhase::EditingDraft;
                Ok(Progress::Editing(self.step_index))
            }
        }
    }

    /// Write a value into the draft. Single sections ignore `entry_index`.
    pub fn update_field(
        &mut self,
        entry_index: usize,
        field_name: &str,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.expect_phase("edit a field", WizardPhase::EditingDraft)?;
        let step = self.current_step_or_err("edit a field")?;
        if step.field(field_name).is_none() {
            return Err(WizardError::UnknownField {
                section: step.key,
                field: field_name.to_string(),
            });
        }
        let count = self.draft.entry_count();
        let record = self
            .draft
            .entry_mut(entry_index)
            .ok_or(WizardError::EntryOutOfRange {
                index: entry_index,
                count,
            })?;
        record.set(field_name, value);
        debug!(section = step.key, field = field_name, entry_index, "Field updated");
        Ok(())
    }

    /// Fill a field with one of its canned suggestions
    pub fn apply_suggestion(
        &mut self,
        entry_index: usize,
        field_name: &str,
        suggestion: &str,
    ) -> Result<(), WizardError> {
        self.update_field(entry_index, field_name, suggestion)
    }

    /// Append an empty entry to a repeatable section's draft
    pub fn add_entry(&mut self) -> Result<usize, WizardError> {
        self.expect_phase("add an entry", WizardPhase::EditingDraft)?;
        let step = self.current_step_or_err("add an entry")?;
        match &mut self.draft {
            Draft::Multiple(records) => {
                records.push(Record::new());
                debug!(section = step.key, entries = records.len(), "Entry added");
                Ok(records.len() - 1)
            }
            Draft::Single(_) => Err(WizardError::NotRepeatable(step.key)),
        }
    }

    /// Remove an entry from a repeatable section's draft, keeping at least one
    pub fn remove_entry(&mut self, entry_index: usize) -> Result<(), WizardError> {
        self.expect_phase("remove an entry", WizardPhase::EditingDraft)?;
        let step = self.current_step_or_err("remove an entry")?;
        let Draft::Multiple(records) = &mut self.draft else {
            return Err(WizardError::NotRepeatable(step.key));
        };
        if entry_index >= records.len() {
            return Err(WizardError::EntryOutOfRange {
                index: entry_index,
                count: records.len(),
            });
        }
        records.remove(entry_index);
        if records.is_empty() {
            records.push(Record::new());
        }
        self.errors = ValidationErrors::default();
        Ok(())
    }

    /// Check required fields in every entry of the draft.
    ///
    /// On success the draft is committed and the step preview opens; the
    /// step index does not move until the preview is confirmed.
    pub fn validate_and_proceed(&mut self) -> Result<(), WizardError> {
        self.expect_phase("validate", WizardPhase::EditingDraft)?;
        let step = self.current_step_or_err("validate")?;

        let errors = validate_draft(step, &self.draft);
        if !errors.is_empty() {
            warn!(section = step.key, count = errors.len(), "Validation failed");
            self.errors = errors.clone();
            return Err(WizardError::Validation(errors));
        }

        self.document.set(step.key, self.draft.to_section_value());
        self.errors = ValidationErrors::default();
        self.phase = WizardPhase::PreviewingStep;
        info!(
            section = step.key,
            entries = self.draft.entry_count(),
            "Section committed"
        );
        Ok(())
    }

    /// Close the step preview and move to the next step
    pub fn confirm_preview_and_advance(&mut self) -> Result<Progress, WizardError> {
        self.expect_phase("confirm the preview", WizardPhase::PreviewingStep)?;
        Ok(self.advance())
    }

    /// Close the step preview and keep editing the same section
    pub fn close_preview(&mut self) -> Result<(), WizardError> {
        self.expect_phase("close the preview", WizardPhase::PreviewingStep)?;
        self.phase = WizardPhase::EditingDraft;
        Ok(())
    }

    /// Step back one section, discarding unsaved draft edits.
    ///
    /// The draft is restored from the committed value of the step landed on.
    /// The document is never modified.
    pub fn go_back(&mut self) -> Progress {
        // With no earlier step, back returns to the first step's question
        let at_first_step = self.step_index == 0;
        self.step_index = self.step_index.saturating_sub(1);
        let step = &self.steps[self.step_index];
        let committed = self.document.get(step.key);

        self.draft = Draft::from_committed(step, committed);
        self.errors = ValidationErrors::default();
        self.phase = match committed {
            Some(SectionValue::Single(_) | SectionValue::Multiple(_)) if !at_first_step => {
                WizardPhase::EditingDraft
            }
            _ => WizardPhase::AwaitingDecision,
        };
        debug!(section = step.key, phase = %self.phase, "Went back");

        match self.phase {
            WizardPhase::EditingDraft => Progress::Editing(self.step_index),
            _ => Progress::Step(self.step_index),
        }
    }

    /// Renderer output for the current section only
    pub fn step_preview(&self, style: StyleSelection) -> Option<PreviewSection> {
        let step = self.current_step()?;
        render::project_section(step, self.document.get(step.key), style)
    }

    fn advance(&mut self) -> Progress {
        self.errors = ValidationErrors::default();
        if self.step_index + 1 >= self.steps.len() {
            self.step_index = self.steps.len();
            self.phase = WizardPhase::Completed;
            info!(sections = self.document.len(), "Wizard completed");
            return Progress::Completed;
        }
        self.step_index += 1;
        self.phase = WizardPhase::AwaitingDecision;
        self.draft = Draft::empty_for(&self.steps[self.step_index]);
        Progress::Step(self.step_index)
    }

    fn expect_phase(&self, operation: &'static str, expected: WizardPhase) -> Result<(), WizardError> {
        if self.phase == expected {
            Ok(())
        } else {
            warn!(operation, phase = %self.phase, "Rejected wizard operation");
            Err(WizardError::InvalidTransition {
                operation,
                phase: self.phase,
            })
        }
    }

    fn current_step_or_err(&self, operation: &'static str) -> Result<&'static StepDefinition, WizardError> {
        self.current_step().ok_or(WizardError::InvalidTransition {
            operation,
            phase: self.phase,
        })
    }
}

/// One message per required field left blank, per entry
fn validate_draft(step: &StepDefinition, draft: &Draft) -> ValidationErrors {
    let repeatable = draft.is_repeatable();
    let mut errors = ValidationErrors::default();
    for (index, entry) in draft.entries().iter().enumerate() {
        for field in step.required_fields() {
            if entry.get(field.name).trim().is_empty() {
                let message = if repeatable {
                    format!("{} is required for entry {}", field.label, index + 1)
                } else {
                    format!("{} is required", field.label)
                };
                errors.insert(ValidationErrors::key(field.name, index, repeatable), message);
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{LayoutKind, Typography};
    use crate::state::forms::field::FieldDefinition;
    use pretty_assertions::assert_eq;

    const NAME_FIELDS: &[FieldDefinition] = &[
        FieldDefinition::text("fullName", "Full Name").required(),
        FieldDefinition::text("email", "Email").required(),
        FieldDefinition::text("phone", "Phone"),
    ];
    const SKILL_FIELDS: &[FieldDefinition] = &[
        FieldDefinition::text("skill", "Skill").required(),
        FieldDefinition::text("level", "Level"),
    ];
    static TEST_STEPS: &[StepDefinition] = &[
        StepDefinition {
            question: "Add personal info?",
            key: "personal",
            title: "Personal",
            fields: NAME_FIELDS,
            repeatable: false,
        },
        StepDefinition {
            question: "Add skills?",
            key: "skills",
            title: "Skills",
            fields: SKILL_FIELDS,
            repeatable: true,
        },
    ];

    fn wizard() -> Wizard {
        Wizard::with_steps(TEST_STEPS)
    }

    fn style() -> StyleSelection {
        StyleSelection::new(LayoutKind::SingleColumn, Typography::Sans)
    }

    /// Complete the personal step with valid values and confirm its preview
    fn complete_personal(w: &mut Wizard) {
        w.answer(0, Decision::Yes).unwrap();
        w.update_field(0, "fullName", "Jane Doe").unwrap();
        w.update_field(0, "email", "jane@x.com").unwrap();
        w.validate_and_proceed().unwrap();
        w.confirm_preview_and_advance().unwrap();
    }

    mod answering {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state() {
            let w = wizard();
            assert_eq!(w.step_index(), 0);
            assert_eq!(w.phase(), WizardPhase::AwaitingDecision);
            assert!(w.document().is_empty());
        }

        #[test]
        fn test_all_no_declines_every_section_and_completes() {
            let mut w = wizard();
            let mut decisions = 0;
            while !w.is_completed() {
                w.answer(w.step_index(), Decision::No).unwrap();
                decisions += 1;
            }
            assert_eq!(decisions, w.step_count());
            for step in TEST_STEPS {
                assert_eq!(w.document().get(step.key), Some(&SectionValue::Declined));
            }
        }

        #[test]
        fn test_all_no_on_builtin_steps() {
            let mut w = Wizard::new();
            for i in 0..STEPS.len() {
                let progress = w.answer(i, Decision::No).unwrap();
                if i + 1 == STEPS.len() {
                    assert_eq!(progress, Progress::Completed);
                } else {
                    assert_eq!(progress, Progress::Step(i + 1));
                }
            }
            assert!(w.is_completed());
            assert_eq!(w.document().len(), STEPS.len());
        }

        #[test]
        fn test_yes_opens_single_empty_record() {
            let mut w = wizard();
            assert_eq!(w.answer(0, Decision::Yes).unwrap(), Progress::Editing(0));
            assert_eq!(w.phase(), WizardPhase::EditingDraft);
            assert_eq!(w.draft(), &Draft::Single(Record::new()));
        }

        #[test]
        fn test_yes_on_repeatable_opens_one_element_list() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            w.answer(1, Decision::Yes).unwrap();
            assert_eq!(w.draft(), &Draft::Multiple(vec![Record::new()]));
        }

        #[test]
        fn test_answer_wrong_step_is_rejected() {
            let mut w = wizard();
            let err = w.answer(1, Decision::No).unwrap_err();
            assert_eq!(
                err,
                WizardError::StepMismatch {
                    requested: 1,
                    current: 0
                }
            );
            assert!(w.document().is_empty());
        }

        #[test]
        fn test_answer_while_editing_is_rejected() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            let err = w.answer(0, Decision::No).unwrap_err();
            assert!(matches!(err, WizardError::InvalidTransition { .. }));
            assert!(w.document().get("personal").is_none());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_field_single_ignores_entry_index() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(5, "fullName", "Jane").unwrap();
            assert_eq!(w.draft().entry(0).unwrap().get("fullName"), "Jane");
        }

        #[test]
        fn test_update_field_does_not_touch_document() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "fullName", "Jane").unwrap();
            assert!(w.document().get("personal").is_none());
        }

        #[test]
        fn test_update_unknown_field() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            let err = w.update_field(0, "skill", "Go").unwrap_err();
            assert!(matches!(err, WizardError::UnknownField { .. }));
        }

        #[test]
        fn test_update_entry_out_of_range() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            w.answer(1, Decision::Yes).unwrap();
            let err = w.update_field(3, "skill", "Go").unwrap_err();
            assert_eq!(err, WizardError::EntryOutOfRange { index: 3, count: 1 });
        }

        #[test]
        fn test_apply_suggestion_writes_value() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            w.answer(1, Decision::Yes).unwrap();
            w.apply_suggestion(0, "skill", "Rust").unwrap();
            assert_eq!(w.draft().entry(0).unwrap().get("skill"), "Rust");
        }

        #[test]
        fn test_add_entry_requires_repeatable() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            assert_eq!(w.add_entry(), Err(WizardError::NotRepeatable("personal")));
        }

        #[test]
        fn test_remove_entry_keeps_one() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            w.answer(1, Decision::Yes).unwrap();
            w.update_field(0, "skill", "Go").unwrap();
            w.remove_entry(0).unwrap();
            assert_eq!(w.draft(), &Draft::Multiple(vec![Record::new()]));
        }

        #[test]
        fn test_remove_entry_middle() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            w.answer(1, Decision::Yes).unwrap();
            w.update_field(0, "skill", "Go").unwrap();
            w.add_entry().unwrap();
            w.update_field(1, "skill", "C").unwrap();
            w.add_entry().unwrap();
            w.update_field(2, "skill", "Rust").unwrap();
            w.remove_entry(1).unwrap();
            let skills: Vec<&str> = w.draft().entries().iter().map(|r| r.get("skill")).collect();
            assert_eq!(skills, vec!["Go", "Rust"]);
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_one_error_per_missing_required_field() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "phone", "555").unwrap();
            let err = w.validate_and_proceed().unwrap_err();
            let WizardError::Validation(errors) = err else {
                panic!("expected validation error");
            };
            assert_eq!(errors.len(), 2);
            assert_eq!(errors.get("fullName"), Some("Full Name is required"));
            assert_eq!(errors.get("email"), Some("Email is required"));
            assert_eq!(w.phase(), WizardPhase::EditingDraft);
            assert_eq!(w.errors(), &errors);
            assert!(w.document().get("personal").is_none());
        }

        #[test]
        fn test_whitespace_counts_as_missing() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "fullName", "   ").unwrap();
            w.update_field(0, "email", "a@b.c").unwrap();
            assert!(w.validate_and_proceed().is_err());
            assert_eq!(w.errors().len(), 1);
        }

        #[test]
        fn test_repeatable_errors_keyed_by_entry() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            w.answer(1, Decision::Yes).unwrap();
            w.update_field(0, "skill", "Go").unwrap();
            w.add_entry().unwrap();
            w.add_entry().unwrap();
            w.update_field(2, "level", "expert").unwrap();
            assert!(w.validate_and_proceed().is_err());
            let keys: Vec<&str> = w.errors().iter().map(|(k, _)| k).collect();
            assert_eq!(keys, vec!["skill1", "skill2"]);
            assert_eq!(w.errors().for_field("skill", 1, true), Some("Skill is required for entry 2"));
        }

        #[test]
        fn test_success_commits_and_opens_preview_without_advancing() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "fullName", "Jane Doe").unwrap();
            w.update_field(0, "email", "jane@x.com").unwrap();
            w.validate_and_proceed().unwrap();
            assert_eq!(w.phase(), WizardPhase::PreviewingStep);
            assert!(w.is_preview_open());
            assert_eq!(w.step_index(), 0);
            assert!(w.errors().is_empty());
            let committed = w.document().get("personal").unwrap();
            assert_eq!(committed.entries()[0].get("fullName"), "Jane Doe");
        }

        #[test]
        fn test_fixing_errors_clears_them() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            assert!(w.validate_and_proceed().is_err());
            w.update_field(0, "fullName", "Jane").unwrap();
            w.update_field(0, "email", "j@x.com").unwrap();
            w.validate_and_proceed().unwrap();
            assert!(w.errors().is_empty());
        }

        #[test]
        fn test_repeatable_commit_keeps_insertion_order() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            w.answer(1, Decision::Yes).unwrap();
            let skills = ["Go", "Rust", "SQL", "C"];
            w.update_field(0, "skill", skills[0]).unwrap();
            for skill in &skills[1..] {
                let index = w.add_entry().unwrap();
                w.update_field(index, "skill", *skill).unwrap();
            }
            w.validate_and_proceed().unwrap();
            let committed = w.document().get("skills").unwrap();
            let values: Vec<&str> = committed.entries().iter().map(|r| r.get("skill")).collect();
            assert_eq!(values, skills.to_vec());
            assert!(matches!(committed, SectionValue::Multiple(v) if v.len() == 4));
        }

        #[test]
        fn test_draft_is_copied_not_aliased() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "fullName", "Jane").unwrap();
            w.update_field(0, "email", "j@x.com").unwrap();
            w.validate_and_proceed().unwrap();
            w.close_preview().unwrap();
            w.update_field(0, "fullName", "Changed").unwrap();
            let committed = w.document().get("personal").unwrap();
            assert_eq!(committed.entries()[0].get("fullName"), "Jane");
        }
    }

    mod preview {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_confirm_advances() {
            let mut w = wizard();
            complete_personal(&mut w);
            assert_eq!(w.step_index(), 1);
            assert_eq!(w.phase(), WizardPhase::AwaitingDecision);
        }

        #[test]
        fn test_confirm_on_last_step_completes() {
            let mut w = wizard();
            complete_personal(&mut w);
            w.answer(1, Decision::Yes).unwrap();
            w.update_field(0, "skill", "Go").unwrap();
            w.validate_and_proceed().unwrap();
            assert_eq!(w.confirm_preview_and_advance().unwrap(), Progress::Completed);
            assert!(w.is_completed());
            assert!(w.current_step().is_none());
        }

        #[test]
        fn test_confirm_requires_preview() {
            let mut w = wizard();
            assert!(w.confirm_preview_and_advance().is_err());
        }

        #[test]
        fn test_close_preview_returns_to_editing() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "fullName", "Jane").unwrap();
            w.update_field(0, "email", "j@x.com").unwrap();
            w.validate_and_proceed().unwrap();
            w.close_preview().unwrap();
            assert_eq!(w.phase(), WizardPhase::EditingDraft);
            assert_eq!(w.draft().entry(0).unwrap().get("fullName"), "Jane");
        }

        #[test]
        fn test_step_preview_shows_committed_section() {
            let mut w = Wizard::new();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "fullName", "Jane Doe").unwrap();
            w.update_field(0, "email", "jane@x.com").unwrap();
            assert!(w.step_preview(style()).is_none());
            w.validate_and_proceed().unwrap();
            let section = w.step_preview(style()).unwrap();
            assert_eq!(section.key, "personal");
            assert_eq!(section.entries[0].value_of("fullName"), Some("Jane Doe"));
        }
    }

    mod going_back {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_go_back_restores_committed_value() {
            let mut w = wizard();
            complete_personal(&mut w);
            let before = w.document().clone();
            w.answer(1, Decision::Yes).unwrap();
            w.update_field(0, "skill", "Unsaved").unwrap();

            assert_eq!(w.go_back(), Progress::Editing(0));
            assert_eq!(w.step_index(), 0);
            assert_eq!(w.phase(), WizardPhase::EditingDraft);
            assert_eq!(w.draft().entry(0).unwrap().get("fullName"), "Jane Doe");
            assert_eq!(w.document(), &before);
        }

        #[test]
        fn test_go_back_to_declined_step_awaits_decision() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            assert_eq!(w.go_back(), Progress::Step(0));
            assert_eq!(w.phase(), WizardPhase::AwaitingDecision);
            assert_eq!(w.draft(), &Draft::Single(Record::new()));
            assert_eq!(w.document().get("personal"), Some(&SectionValue::Declined));
        }

        #[test]
        fn test_declined_step_can_be_changed_to_yes() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            w.go_back();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "fullName", "Jane").unwrap();
            w.update_field(0, "email", "j@x.com").unwrap();
            w.validate_and_proceed().unwrap();
            assert!(matches!(
                w.document().get("personal"),
                Some(SectionValue::Single(_))
            ));
        }

        #[test]
        fn test_go_back_floors_at_first_step() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "fullName", "Draft").unwrap();
            assert_eq!(w.go_back(), Progress::Step(0));
            assert_eq!(w.step_index(), 0);
            assert_eq!(w.draft(), &Draft::Single(Record::new()));
        }

        #[test]
        fn test_go_back_clears_errors_and_preview() {
            let mut w = wizard();
            complete_personal(&mut w);
            w.answer(1, Decision::Yes).unwrap();
            assert!(w.validate_and_proceed().is_err());
            assert!(!w.errors().is_empty());
            w.go_back();
            assert!(w.errors().is_empty());
            assert!(!w.is_preview_open());
        }

        #[test]
        fn test_go_back_from_preview_keeps_commit() {
            let mut w = wizard();
            w.answer(0, Decision::Yes).unwrap();
            w.update_field(0, "fullName", "Jane").unwrap();
            w.update_field(0, "email", "j@x.com").unwrap();
            w.validate_and_proceed().unwrap();
            assert_eq!(w.go_back(), Progress::Step(0));
            assert_eq!(w.phase(), WizardPhase::AwaitingDecision);
            assert!(w.document().get("personal").is_some());
        }

        #[test]
        fn test_committed_first_step_can_be_declined_again() {
            let mut w = wizard();
            complete_personal(&mut w);
            assert_eq!(w.go_back(), Progress::Editing(0));
            assert_eq!(w.go_back(), Progress::Step(0));
            assert_eq!(w.go_back(), Progress::Step(0));

            assert_eq!(w.answer(0, Decision::No).unwrap(), Progress::Step(1));
            assert_eq!(w.document().get("personal"), Some(&SectionValue::Declined));
        }

        #[test]
        fn test_yes_after_backing_to_first_question_reseeds_draft() {
            let mut w = wizard();
            complete_personal(&mut w);
            w.go_back();
            w.go_back();
            w.answer(0, Decision::Yes).unwrap();
            assert_eq!(w.draft().entry(0).unwrap().get("fullName"), "Jane Doe");
        }

        #[test]
        fn test_go_back_from_completed_lands_on_last_step() {
            let mut w = wizard();
            w.answer(0, Decision::No).unwrap();
            w.answer(1, Decision::No).unwrap();
            assert!(w.is_completed());
            assert_eq!(w.go_back(), Progress::Step(1));
            assert_eq!(w.current_step().map(|s| s.key), Some("skills"));
        }

        #[test]
        fn test_uncommitted_step_reopens_empty() {
            let mut w = wizard();
            complete_personal(&mut w);
            w.answer(1, Decision::Yes).unwrap();
            w.update_field(0, "skill", "Go").unwrap();
            w.go_back();
            assert_eq!(w.step_index(), 0);
            assert!(w.document().get("skills").is_none());

            w.validate_and_proceed().unwrap();
            w.confirm_preview_and_advance().unwrap();
            w.answer(1, Decision::Yes).unwrap();
            assert_eq!(w.draft(), &Draft::Multiple(vec![Record::new()]));
        }
    }

    mod draft {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_committed_declined_is_empty() {
            let step = &TEST_STEPS[1];
            assert_eq!(
                Draft::from_committed(step, Some(&SectionValue::Declined)),
                Draft::Multiple(vec![Record::new()])
            );
        }

        #[test]
        fn test_from_committed_empty_list_is_empty_default() {
            let step = &TEST_STEPS[1];
            assert_eq!(
                Draft::from_committed(step, Some(&SectionValue::Multiple(vec![]))),
                Draft::Multiple(vec![Record::new()])
            );
        }
    }
}
