//! Export of the finished form document to a file

mod file;
mod format;

pub use file::FileExporter;
pub use format::format_document;

use crate::state::FormDocument;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Artifact format produced by an exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Markdown => "Markdown",
            Self::Json => "JSON",
        }
    }
}

/// Trait for export operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Write the document as an artifact and return where it was written
    async fn export(
        &self,
        document: &FormDocument,
        template_id: &str,
        format: ExportFormat,
    ) -> Result<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Text.extension(), "txt");
        assert_eq!(ExportFormat::Markdown.extension(), "md");
        assert_eq!(ExportFormat::Json.extension(), "json");
    }

    #[test]
    fn test_format_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExportFormat::Markdown).unwrap(),
            r#""markdown""#
        );
        let parsed: ExportFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(parsed, ExportFormat::Json);
    }

    #[test]
    fn test_mock_exporter_returns_path() {
        let mut mock = MockExporter::new();
        mock.expect_export()
            .withf(|_, template, format| template == "classic" && *format == ExportFormat::Text)
            .times(1)
            .returning(|_, _, _| Ok(PathBuf::from("/tmp/resume.txt")));

        let path = tokio_test::block_on(mock.export(
            &FormDocument::new(),
            "classic",
            ExportFormat::Text,
        ))
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/resume.txt"));
    }
}
