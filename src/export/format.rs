//! Serialisation of the committed form document

use anyhow::Result;
use serde_json::json;

use super::ExportFormat;
use crate::render::template_by_id;
use crate::state::{FormDocument, Record, SectionValue, StepDefinition, STEPS};

/// Serialise a document in the given format.
///
/// Works on committed values only. Sections that were never answered,
/// declined, or hold no entries become a placeholder line; sections
/// committed with blank fields are written as-is.
pub fn format_document(
    document: &FormDocument,
    template_id: &str,
    format: ExportFormat,
) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(format_text(document, template_id)),
        ExportFormat::Markdown => Ok(format_markdown(document, template_id)),
        ExportFormat::Json => format_json(document, template_id),
    }
}

/// Marker written for sections with nothing committed
pub fn placeholder_line(step: &StepDefinition) -> String {
    format!("[{}: not provided]", step.title)
}

fn committed_entries<'a>(document: &'a FormDocument, step: &StepDefinition) -> Option<&'a [Record]> {
    match document.get(step.key) {
        None | Some(SectionValue::Declined) => None,
        Some(value) if value.entries().is_empty() => None,
        Some(value) => Some(value.entries()),
    }
}

fn format_text(document: &FormDocument, template_id: &str) -> String {
    let template = template_by_id(template_id);
    let mut lines = vec![
        "RESUME".to_string(),
        format!("Template: {}", template.name),
        String::new(),
    ];

    for step in STEPS {
        lines.push(format!("== {} ==", step.title));
        match committed_entries(document, step) {
            None => lines.push(placeholder_line(step)),
            Some(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    if step.repeatable {
                        lines.push(format!("[{}]", index + 1));
                    }
                    for field in step.fields {
                        let line = format!("{}: {}", field.label, entry.get(field.name));
                        lines.push(line.trim_end().to_string());
                    }
                }
            }
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

fn format_markdown(document: &FormDocument, template_id: &str) -> String {
    let template = template_by_id(template_id);
    let mut out = format!("# Resume\n\n_Template: {}_\n", template.name);

    for step in STEPS {
        out.push_str(&format!("\n## {}\n\n", step.title));
        match committed_entries(document, step) {
            None => {
                out.push_str(&placeholder_line(step));
                out.push('\n');
            }
            Some(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    if step.repeatable {
                        if index > 0 {
                            out.push('\n');
                        }
                        out.push_str(&format!("### Entry {}\n\n", index + 1));
                    }
                    for field in step.fields {
                        let line = format!("- **{}:** {}", field.label, entry.get(field.name));
                        out.push_str(line.trim_end());
                        out.push('\n');
                    }
                }
            }
        }
    }
    out
}

fn format_json(document: &FormDocument, template_id: &str) -> Result<String> {
    let sections = serde_json::to_value(document)?;
    let body = json!({
        "template": template_by_id(template_id).id,
        "sections": sections,
    });
    Ok(serde_json::to_string_pretty(&body)?)
}
