//! Per-category tally of a file selection.

use crate::types::UploadedFile;
use serde::{Deserialize, Serialize};
use std::fmt;

const WORD_EXTENSIONS: &[&str] = &["doc", "docx"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "sh", "bash", "c", "cpp", "py", "java"];

/// Extension-derived file category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Pdf,
    Word,
    Image,
    TextCode,
    Other,
}

impl FileCategory {
    pub const ALL: [FileCategory; 5] = [
        FileCategory::Pdf,
        FileCategory::Word,
        FileCategory::Image,
        FileCategory::TextCode,
        FileCategory::Other,
    ];

    /// Label used on summary cards.
    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Pdf => "PDFs",
            FileCategory::Word => "DOCX",
            FileCategory::Image => "Images",
            FileCategory::TextCode => "Text/Code",
            FileCategory::Other => "Other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lowercased text after the last `.`, if the name has one.
pub fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Classify a file name by extension.
pub fn classify(name: &str) -> FileCategory {
    let Some(ext) = extension(name) else {
        return FileCategory::Other;
    };
    let ext = ext.as_str();
    if ext == "pdf" {
        FileCategory::Pdf
    } else if WORD_EXTENSIONS.contains(&ext) {
        FileCategory::Word
    } else if IMAGE_EXTENSIONS.contains(&ext) {
        FileCategory::Image
    } else if TEXT_EXTENSIONS.contains(&ext) {
        FileCategory::TextCode
    } else {
        FileCategory::Other
    }
}

/// Fixed-shape tally over a selection. `total` always equals the input length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub total: usize,
    pub pdfs: usize,
    pub docx: usize,
    pub images: usize,
    pub text: usize,
    pub other: usize,
    pub total_bytes: u64,
}

impl FileStats {
    pub fn count(&self, category: FileCategory) -> usize {
        match category {
            FileCategory::Pdf => self.pdfs,
            FileCategory::Word => self.docx,
            FileCategory::Image => self.images,
            FileCategory::TextCode => self.text,
            FileCategory::Other => self.other,
        }
    }

    /// Sum of all category counters.
    pub fn category_sum(&self) -> usize {
        FileCategory::ALL.iter().map(|c| self.count(*c)).sum()
    }

    fn record(&mut self, file: &UploadedFile) {
        self.total += 1;
        self.total_bytes += file.size;
        match classify(&file.name) {
            FileCategory::Pdf => self.pdfs += 1,
            FileCategory::Word => self.docx += 1,
            FileCategory::Image => self.images += 1,
            FileCategory::TextCode => self.text += 1,
            FileCategory::Other => self.other += 1,
        }
    }
}

/// Tally a selection by category.
pub fn get_file_stats(files: &[UploadedFile]) -> FileStats {
    let mut stats = FileStats::default();
    for file in files {
        stats.record(file);
    }
    stats
}
