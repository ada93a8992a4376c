//! File selection from command-line paths.
//!
//! A plain file argument behaves like picking files in a browser file dialog
//! (no relative path). A directory argument behaves like picking a directory:
//! every file beneath it is selected with a relative path rooted at the
//! directory's own name, e.g. `hw3/scripts/backup.sh`.

use crate::config::SelectionConfig;
use crate::error::ApiError;
use crate::types::{guess_mime, UploadedFile};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Files chosen for one grading session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileSelection {
    pub files: Vec<UploadedFile>,
    /// True when at least one directory was selected.
    pub is_directory: bool,
}

impl FileSelection {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Select files and directories given on the command line, in argument order.
pub fn select_paths(paths: &[PathBuf], config: &SelectionConfig) -> Result<FileSelection, ApiError> {
    let mut selection = FileSelection::default();

    for path in paths {
        let metadata = std::fs::metadata(path).map_err(|e| {
            ApiError::Selection(format!("Cannot read {}: {}", path.display(), e))
        })?;

        if metadata.is_dir() {
            selection.is_directory = true;
            select_directory(path, config, &mut selection.files)?;
        } else {
            selection.files.push(select_file(path, metadata.len())?);
        }
    }

    info!(
        files = selection.len(),
        is_directory = selection.is_directory,
        "File selection complete"
    );
    Ok(selection)
}

fn select_file(path: &Path, size: u64) -> Result<UploadedFile, ApiError> {
    let name = file_name(path)?;
    let mime_type = guess_mime(&name);
    Ok(UploadedFile {
        name,
        relative_path: None,
        size,
        mime_type,
        source: path.to_path_buf(),
    })
}

fn select_directory(
    dir: &Path,
    config: &SelectionConfig,
    out: &mut Vec<UploadedFile>,
) -> Result<(), ApiError> {
    let root_name = root_name(dir)?;
    let mut walker = WalkDir::new(dir)
        .follow_links(config.follow_symlinks)
        .sort_by_file_name();
    if let Some(max_depth) = config.max_depth {
        walker = walker.max_depth(max_depth);
    }

    let include_hidden = config.include_hidden;
    let entries = walker
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || include_hidden || !is_hidden(entry));

    for entry in entries {
        let entry = entry.map_err(|e| {
            ApiError::Selection(format!("Failed to walk {}: {}", dir.display(), e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let inner = entry.path().strip_prefix(dir).map_err(|e| {
            ApiError::Selection(format!(
                "{} is outside {}: {}",
                entry.path().display(),
                dir.display(),
                e
            ))
        })?;
        let mut relative_path = root_name.clone();
        for component in inner.components() {
            relative_path.push('/');
            relative_path.push_str(&component.as_os_str().to_string_lossy());
        }

        let size = entry
            .metadata()
            .map_err(|e| ApiError::Selection(format!("Failed to stat {}: {}", entry.path().display(), e)))?
            .len();
        let mut file = select_file(entry.path(), size)?;
        debug!(path = %relative_path, size, "Selected file");
        file.relative_path = Some(relative_path);
        out.push(file);
    }
    Ok(())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}

fn file_name(path: &Path) -> Result<String, ApiError> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ApiError::Selection(format!("{} has no file name", path.display())))
}

/// Name of a selected directory; `.` and `..` resolve to the real directory name.
fn root_name(dir: &Path) -> Result<String, ApiError> {
    match dir.file_name() {
        Some(name) => Ok(name.to_string_lossy().into_owned()),
        None => {
            let canonical = dir.canonicalize().map_err(|e| {
                ApiError::Selection(format!("Failed to resolve {}: {}", dir.display(), e))
            })?;
            Ok(canonical
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "homework".to_string()))
        }
    }
}
