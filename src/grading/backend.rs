//! Grading backend contract.

use crate::error::ApiError;
use crate::grading::result::GradeResult;
use crate::types::UploadedFile;
use async_trait::async_trait;

/// Something that turns a set of homework files into a grade.
#[async_trait]
pub trait GradingBackend: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Grade the submitted files. May perform network requests.
    async fn grade(&self, files: &[UploadedFile]) -> Result<GradeResult, ApiError>;
}
