//! Terminal rendering of selections, trees and grade reports.

pub mod grade;
pub mod progress;
pub mod style;
pub mod summary;
pub mod tree;

pub use grade::format_grade_report;
pub use progress::{LoadingIndicator, LOADING_MESSAGES};
pub use style::Palette;
pub use summary::format_file_summary;
pub use tree::format_tree;
