//! Form domain layer
//!
//! Static step/field definitions, the form document, and the wizard that
//! builds the document one section at a time.

mod cursor;
mod document;
mod field;
mod steps;
mod wizard;

pub use cursor::FieldCursor;
pub use document::{FormDocument, Record, SectionValue};
pub use field::FieldDefinition;
pub use steps::{StepDefinition, STEPS};
pub use wizard::{Decision, Progress, Wizard, WizardError, WizardPhase};

#[cfg(test)]
pub use field::FieldKind;
#[cfg(test)]
pub use steps::step_by_key;
#[cfg(test)]
pub use wizard::Draft;
