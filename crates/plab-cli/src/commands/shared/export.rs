use std::path::{Path, PathBuf};

use anyhow::Context;
use plab_core::export::ExportDocument;
use serde::Serialize;

/// Where a file ended up, for command output.
#[derive(Debug, Serialize)]
pub struct SavedFile {
    pub path: String,
    pub bytes: usize,
}

impl SavedFile {
    #[must_use]
    pub fn new(path: &Path, bytes: usize) -> Self {
        Self {
            path: path.display().to_string(),
            bytes,
        }
    }
}

/// Write the export document into `dir` under its timestamped name.
pub async fn write_export(doc: &ExportDocument, dir: &Path) -> anyhow::Result<(PathBuf, usize)> {
    let body = doc.to_json().context("failed to serialize export document")?;
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join(doc.file_name());
    tokio::fs::write(&path, &body)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), "export written");
    Ok((path, body.len()))
}
