//! Filesystem infrastructure: implements `TunnelFiles`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::TunnelFiles;

/// Extension of tunnel credential files (`<tunnel-id>.json`).
pub const CREDENTIAL_EXTENSION: &str = "json";

/// Production filesystem implementation of `TunnelFiles`.
pub struct LocalFs;

impl TunnelFiles for LocalFs {
    async fn credential_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot list {}", dir.display()));
            }
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("cannot list {}", dir.display()))?
        {
            let path = entry.path();
            let is_file = entry.file_type().await.is_ok_and(|t| t.is_file());
            if is_file && is_credential_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("cannot read {}", path.display()))
    }
}

/// Whether `path` follows the `<name>.json` credentials naming convention.
#[must_use]
pub fn is_credential_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CREDENTIAL_EXTENSION))
}
