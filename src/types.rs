//! Core types for the grader.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fallback MIME type when the extension is unknown.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// One selected homework file.
///
/// Mirrors what a browser file picker yields: a bare name, an optional
/// slash-separated path relative to the selected directory, the byte size and a
/// MIME type. `source` is where the bytes live on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    pub size: u64,
    pub mime_type: String,
    #[serde(skip)]
    pub source: PathBuf,
}

impl UploadedFile {
    /// Create an entry with no relative path, guessing the MIME type from the name.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let mime_type = guess_mime(&name);
        Self {
            source: PathBuf::from(&name),
            name,
            relative_path: None,
            size,
            mime_type,
        }
    }

    /// Attach a relative path (directory selection).
    pub fn with_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        self.relative_path = Some(relative_path.into());
        self
    }

    /// Point the entry at its bytes on disk.
    pub fn with_source(mut self, source: impl AsRef<Path>) -> Self {
        self.source = source.as_ref().to_path_buf();
        self
    }

    /// Relative path when present and non-empty, otherwise the bare name.
    pub fn display_path(&self) -> &str {
        match self.relative_path.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => &self.name,
        }
    }
}

/// Guess a MIME type from a file name's extension.
pub fn guess_mime(name: &str) -> String {
    mime_guess::from_path(name)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| OCTET_STREAM.to_string())
}
