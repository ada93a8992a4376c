//! Grade result returned by a grading backend.

use serde::{Deserialize, Serialize};

/// Score breakdown for one rubric category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDetail {
    pub category: String,
    pub points: f64,
    pub max_points: f64,
    #[serde(default)]
    pub comment: String,
}

impl GradeDetail {
    /// Fraction of points earned, 0 when `max_points` is not positive.
    pub fn ratio(&self) -> f64 {
        ratio(self.points, self.max_points)
    }

    pub fn band(&self) -> DetailBand {
        DetailBand::from_ratio(self.ratio())
    }
}

/// Overall grade as sent by the backend (`maxScore`, `maxPoints` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub score: f64,
    pub max_score: f64,
    pub grade: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<GradeDetail>,
}

impl GradeResult {
    /// Rounded percentage score.
    pub fn percentage(&self) -> u32 {
        (ratio(self.score, self.max_score) * 100.0).round() as u32
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percentage(ratio(self.score, self.max_score) * 100.0)
    }
}

fn ratio(points: f64, max: f64) -> f64 {
    if max > 0.0 && points.is_finite() {
        (points / max).max(0.0)
    } else {
        0.0
    }
}

/// Colour band of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            ScoreTier::Excellent
        } else if percentage >= 70.0 {
            ScoreTier::Good
        } else if percentage >= 50.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }
}

/// Colour band of a single rubric line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailBand {
    Good,
    Fair,
    Poor,
}

impl DetailBand {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.7 {
            DetailBand::Good
        } else if ratio >= 0.5 {
            DetailBand::Fair
        } else {
            DetailBand::Poor
        }
    }
}
