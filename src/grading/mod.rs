//! Grading: backends, the grade result model and the submission service.

pub mod backend;
pub mod client;
pub mod demo;
pub mod result;

pub use backend::GradingBackend;
pub use client::HttpGradingClient;
pub use demo::{demo_result, DemoGrader};
pub use result::{DetailBand, GradeDetail, GradeResult, ScoreTier};

use crate::config::{FallbackMode, GradingConfig};
use crate::error::ApiError;
use crate::selection::FileSelection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Where a grade came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeSource {
    Backend,
    Demo,
}

/// A grade plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    pub result: GradeResult,
    pub source: GradeSource,
    pub graded_at: DateTime<Utc>,
}

impl GradeReport {
    pub fn new(result: GradeResult, source: GradeSource) -> Self {
        Self {
            result,
            source,
            graded_at: Utc::now(),
        }
    }
}

/// Submits a selection to a backend, with an optional demo fallback.
pub struct GradingService {
    backend: Box<dyn GradingBackend>,
    source: GradeSource,
    fallback: Option<DemoGrader>,
}

impl GradingService {
    pub fn new(backend: Box<dyn GradingBackend>, source: GradeSource) -> Self {
        Self {
            backend,
            source,
            fallback: None,
        }
    }

    /// Substitute the demo result when the backend fails.
    pub fn with_demo_fallback(mut self, delay: Duration) -> Self {
        self.fallback = Some(DemoGrader::new(delay));
        self
    }

    /// Build the service described by config.
    ///
    /// `force_demo` skips the network entirely. Without an endpoint, only a
    /// configured demo fallback can grade.
    pub fn from_config(config: &GradingConfig, force_demo: bool) -> Result<Self, ApiError> {
        let demo_delay = Duration::from_millis(config.demo_delay_ms);
        if force_demo {
            return Ok(Self::new(
                Box::new(DemoGrader::new(demo_delay)),
                GradeSource::Demo,
            ));
        }

        match (&config.endpoint, config.fallback) {
            (Some(endpoint), fallback) => {
                let client =
                    HttpGradingClient::new(endpoint.clone(), Duration::from_secs(config.timeout_secs))?;
                let service = Self::new(Box::new(client), GradeSource::Backend);
                Ok(match fallback {
                    FallbackMode::Demo => service.with_demo_fallback(demo_delay),
                    FallbackMode::None => service,
                })
            }
            (None, FallbackMode::Demo) => {
                warn!("No grading endpoint configured; using the demo grader");
                Ok(Self::new(
                    Box::new(DemoGrader::new(demo_delay)),
                    GradeSource::Demo,
                ))
            }
            (None, FallbackMode::None) => Err(ApiError::ConfigError(
                "No grading endpoint configured. Set grading.endpoint, pass --endpoint, or use --demo."
                    .to_string(),
            )),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Grade a selection.
    pub async fn grade(&self, selection: &FileSelection) -> Result<GradeReport, ApiError> {
        if selection.is_empty() {
            return Err(ApiError::NoFiles);
        }

        match self.backend.grade(&selection.files).await {
            Ok(result) => {
                info!(
                    backend = self.backend.name(),
                    grade = %result.grade,
                    score = result.score,
                    max_score = result.max_score,
                    "Grading complete"
                );
                Ok(GradeReport::new(result, self.source))
            }
            Err(err) => match &self.fallback {
                Some(demo) => {
                    warn!(backend = self.backend.name(), error = %err, "Grading failed; using demo result");
                    let result = demo.grade(&selection.files).await?;
                    Ok(GradeReport::new(result, GradeSource::Demo))
                }
                None => Err(err),
            },
        }
    }
}
