//! HTTP grading backend.
//!
//! Posts the selection as `multipart/form-data`: part `file_<i>` carries the
//! bytes of the i-th file and, for directory selections, part `path_<i>`
//! carries its relative path. The response body is a JSON `GradeResult`.

use crate::error::ApiError;
use crate::grading::backend::GradingBackend;
use crate::grading::result::GradeResult;
use crate::types::UploadedFile;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("hwgrade/", env!("CARGO_PKG_VERSION"));

/// One multipart field, before any bytes are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField<'a> {
    File { name: String, file: &'a UploadedFile },
    Path { name: String, value: &'a str },
}

/// Lay out the multipart fields for a submission.
pub fn form_fields(files: &[UploadedFile]) -> Vec<FormField<'_>> {
    let mut fields = Vec::with_capacity(files.len() * 2);
    for (index, file) in files.iter().enumerate() {
        fields.push(FormField::File {
            name: format!("file_{}", index),
            file,
        });
        if let Some(path) = file.relative_path.as_deref().filter(|p| !p.is_empty()) {
            fields.push(FormField::Path {
                name: format!("path_{}", index),
                value: path,
            });
        }
    }
    fields
}

/// Grading backend reached over HTTP.
pub struct HttpGradingClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGradingClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Grading(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn build_form(files: &[UploadedFile]) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for field in form_fields(files) {
            form = match field {
                FormField::File { name, file } => {
                    let bytes = tokio::fs::read(&file.source).await.map_err(|e| {
                        ApiError::Grading(format!(
                            "Failed to read {}: {}",
                            file.source.display(),
                            e
                        ))
                    })?;
                    let part = Part::bytes(bytes)
                        .file_name(file.name.clone())
                        .mime_str(&file.mime_type)
                        .map_err(|e| {
                            ApiError::Grading(format!("Invalid MIME type {}: {}", file.mime_type, e))
                        })?;
                    form.part(name, part)
                }
                FormField::Path { name, value } => form.text(name, value.to_string()),
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl GradingBackend for HttpGradingClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn grade(&self, files: &[UploadedFile]) -> Result<GradeResult, ApiError> {
        let form = Self::build_form(files).await?;
        info!(endpoint = %self.endpoint, files = files.len(), "Submitting homework");

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        debug!(%status, "Grading endpoint responded");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Grading(format!(
                "Grading endpoint returned {}: {}",
                status,
                body.trim()
            )));
        }

        let body = response.text().await?;
        serde_json::from_str::<GradeResult>(&body)
            .map_err(|e| ApiError::Grading(format!("Unexpected grading response: {}", e)))
    }
}
