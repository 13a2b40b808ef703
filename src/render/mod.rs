//! Preview renderer
//!
//! A pure projection of a [`FormDocument`] through a [`StyleSelection`].
//! Blank fields show placeholder text so the preview reads like a resume;
//! those placeholders are flagged and never reach an exporter.

mod template;

pub use template::{
    template_by_id, template_index, LayoutKind, StyleSelection, Template, Typography, TEMPLATES,
};

use crate::state::{FormDocument, Record, SectionValue, StepDefinition, STEPS};

/// Sections placed in the sidebar of a two-column layout
const SIDEBAR_SECTIONS: &[&str] = &["personal", "skills"];

/// Column a section is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Main,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    /// The value is placeholder text, not user input
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub fields: Vec<PreviewField>,
}

impl PreviewEntry {
    /// User-entered value of a field; `None` when blank or unknown
    #[cfg(test)]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name && !f.is_placeholder)
            .map(|f| f.value.as_str())
    }

    /// Fields holding user input
    pub fn filled(&self) -> impl Iterator<Item = &PreviewField> {
        self.fields.iter().filter(|f| !f.is_placeholder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSection {
    pub key: &'static str,
    pub title: &'static str,
    pub column: Column,
    pub entries: Vec<PreviewEntry>,
}

impl PreviewSection {
    /// Lines drawn for the section: a heading, one per value line, and a
    /// blank line between entries
    pub fn line_count(&self) -> usize {
        let values: usize = self
            .entries
            .iter()
            .flat_map(|entry| &entry.fields)
            .map(|field| field.value.split('\n').count())
            .sum();
        1 + self.entries.len().saturating_sub(1) + values
    }
}

fn column_line_count<'a>(sections: impl Iterator<Item = &'a PreviewSection>) -> usize {
    let mut total = 0;
    for (index, section) in sections.enumerate() {
        if index > 0 {
            total += 1;
        }
        total += section.line_count();
    }
    total
}

/// Read-only display document produced by [`render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
    pub style: StyleSelection,
    pub sections: Vec<PreviewSection>,
}

impl PreviewDocument {
    #[cfg(test)]
    pub fn section(&self, key: &str) -> Option<&PreviewSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections of one column, in declaration order
    pub fn column(&self, column: Column) -> impl Iterator<Item = &PreviewSection> {
        self.sections.iter().filter(move |s| s.column == column)
    }

    /// Unwrapped height of the preview; two-column layouts use the taller
    /// column
    pub fn line_count(&self) -> usize {
        match self.style.layout {
            LayoutKind::SingleColumn => column_line_count(self.sections.iter()),
            LayoutKind::TwoColumn => column_line_count(self.column(Column::Main))
                .max(column_line_count(self.column(Column::Sidebar))),
        }
    }

    /// Plain text of the user's content, placeholders left out
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(section.title);
            out.push('\n');
            for entry in &section.entries {
                let values: Vec<&str> = entry.filled().map(|f| f.value.as_str()).collect();
                if !values.is_empty() {
                    out.push_str("  ");
                    out.push_str(&values.join(" | "));
                    out.push('\n');
                }
            }
            out.push('\n');
        }
        out.trim_end().to_string()
    }
}

/// Project a document through a style.
///
/// A section appears only when it was not declined and at least one field
/// of one entry is non-empty. Section order follows the step table; keys
/// unknown to it are ignored.
pub fn render(document: &FormDocument, style: StyleSelection) -> PreviewDocument {
    let sections = STEPS
        .iter()
        .filter_map(|step| project_section(step, document.get(step.key), style))
        .collect();
    PreviewDocument { style, sections }
}

/// Project the committed value of one step, as the step-level preview does
pub fn project_section(
    step: &'static StepDefinition,
    value: Option<&SectionValue>,
    style: StyleSelection,
) -> Option<PreviewSection> {
    let value = value?;
    if !value.has_content() {
        return None;
    }
    Some(PreviewSection {
        key: step.key,
        title: step.title,
        column: column_for(step.key, style.layout),
        entries: value
            .entries()
            .iter()
            .map(|record| project_entry(step, record))
            .collect(),
    })
}

fn project_entry(step: &'static StepDefinition, record: &Record) -> PreviewEntry {
    let fields = step
        .fields
        .iter()
        .map(|def| {
            let value = record.get(def.name);
            if value.is_empty() {
                let placeholder = if def.placeholder.is_empty() {
                    def.label
                } else {
                    def.placeholder
                };
                PreviewField {
                    name: def.name,
                    label: def.label,
                    value: placeholder.to_string(),
                    is_placeholder: true,
                }
            } else {
                PreviewField {
                    name: def.name,
                    label: def.label,
                    value: value.to_string(),
                    is_placeholder: false,
                }
            }
        })
        .collect();
    PreviewEntry { fields }
}

fn column_for(key: &str, layout: LayoutKind) -> Column {
    match layout {
        LayoutKind::TwoColumn if SIDEBAR_SECTIONS.contains(&key) => Column::Sidebar,
        _ => Column::Main,
    }
}
