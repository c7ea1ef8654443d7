use serde::{Deserialize, Serialize};

use super::{DatasetSummary, DescriptionRecord};

/// Self-reported trait scores, each on a 1–10 scale in 0.5 steps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    #[serde(default = "default_score")]
    pub introversion: f64,
    #[serde(default = "default_score")]
    pub sensing: f64,
    #[serde(default = "default_score")]
    pub thinking: f64,
}

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

fn default_score() -> f64 {
    5.0
}

impl Default for TraitScores {
    fn default() -> Self {
        Self {
            introversion: default_score(),
            sensing: default_score(),
            thinking: default_score(),
        }
    }
}

impl TraitScores {
    /// Named scores, for validation messages
    pub fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("introversion", self.introversion),
            ("sensing", self.sensing),
            ("thinking", self.thinking),
        ]
    }
}

/// Analysis request submitted by the front-end
///
/// `personality` and `age` are optional at the serde level so that a missing
/// field becomes a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub trait_scores: TraitScores,
}

/// Result of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Normalized personality code that was analyzed
    pub personality: String,
    /// Dataset snapshot the statistical match was computed from
    pub dataset: DatasetSummary,
    pub recommendations: Vec<DescriptionRecord>,
}
