//! hwgrade: Linux homework AI grader
//!
//! Collects homework files (or a whole directory) from the command line, shows
//! what was selected as a directory tree and a per-category summary, submits the
//! files to a grading endpoint and renders the returned grade report.

pub mod config;
pub mod error;
pub mod grading;
pub mod logging;
pub mod report;
pub mod selection;
pub mod summary;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::ApiError;
pub use grading::{GradeDetail, GradeReport, GradeResult, GradeSource};
pub use selection::FileSelection;
pub use summary::{get_file_stats, FileCategory, FileStats};
pub use tree::{build_tree, NodeKind, TreeNode};
pub use types::UploadedFile;
