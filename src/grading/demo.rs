//! Offline grader returning a fixed sample result.

use crate::error::ApiError;
use crate::grading::backend::GradingBackend;
use crate::grading::result::{GradeDetail, GradeResult};
use crate::types::UploadedFile;
use async_trait::async_trait;
use std::time::Duration;

/// Returns the sample Linux-homework grade after a simulated delay.
pub struct DemoGrader {
    delay: Duration,
}

impl DemoGrader {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl GradingBackend for DemoGrader {
    fn name(&self) -> &str {
        "demo"
    }

    async fn grade(&self, _files: &[UploadedFile]) -> Result<GradeResult, ApiError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(demo_result())
    }
}

/// The fixed sample grade.
pub fn demo_result() -> GradeResult {
    let detail = |category: &str, points: f64, max_points: f64, comment: &str| GradeDetail {
        category: category.to_string(),
        points,
        max_points,
        comment: comment.to_string(),
    };
    GradeResult {
        score: 85.0,
        max_score: 100.0,
        grade: "B+".to_string(),
        feedback: "Good work on understanding Linux commands! Your shell script demonstrates \
                   solid knowledge of file manipulation and piping. Consider adding error \
                   handling for edge cases."
            .to_string(),
        details: vec![
            detail("File Operations", 20.0, 25.0, "Correct use of cp, mv, and rm commands"),
            detail("Shell Scripting", 25.0, 25.0, "Excellent script structure and logic"),
            detail("Permissions", 15.0, 20.0, "Good understanding of chmod, but missed setgid"),
            detail("Process Management", 15.0, 15.0, "Perfect use of ps, kill, and bg/fg"),
            detail("Documentation", 10.0, 15.0, "Add more comments to explain complex sections"),
        ],
    }
}
