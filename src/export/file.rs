//! Exporter writing artifacts into a directory

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Local;
use std::path::PathBuf;
use tracing::info;

use super::{format_document, ExportFormat, Exporter};
use crate::render::template_by_id;
use crate::state::FormDocument;

/// Writes exports as `resume-<template>-<timestamp>.<ext>` files
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_name(template_id: &str, format: ExportFormat) -> String {
        format!(
            "resume-{}-{}.{}",
            template_by_id(template_id).id,
            Local::now().format("%Y%m%d-%H%M%S"),
            format.extension()
        )
    }
}

#[async_trait]
impl Exporter for FileExporter {
    async fn export(
        &self,
        document: &FormDocument,
        template_id: &str,
        format: ExportFormat,
    ) -> Result<PathBuf> {
        let content = format_document(document, template_id, format)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create export directory {}", self.dir.display()))?;

        let path = self.dir.join(Self::file_name(template_id, format));
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(path = %path.display(), format = format.label(), "Resume exported");
        Ok(path)
    }
}
