use std::path::{Path, PathBuf};

use eyre::{Context, Result};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the generated content and was left untouched
    Unchanged,
}

/// A generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, skipping the write when the content on disk is identical.
    pub fn write(&self) -> Result<WriteResult> {
        if let Ok(existing) = std::fs::read_to_string(&self.path) {
            if existing == self.content {
                return Ok(WriteResult::Unchanged);
            }
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}
