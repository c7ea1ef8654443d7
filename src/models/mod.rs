use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod analysis;
pub mod personality;
pub mod recommendation;

pub use analysis::{AnalysisRequest, AnalysisResponse, TraitScores};
pub use personality::PersonalityType;
pub use recommendation::{DescriptionRecord, RecommendationSlot, SlotSource};

/// One observation from the statistical dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRecord {
    /// Upper-cased personality code (e.g., "INFJ")
    pub personality: String,
    pub interest: String,
}

impl InterestRecord {
    pub fn new(personality: impl Into<String>, interest: impl Into<String>) -> Self {
        Self {
            personality: personality.into().to_uppercase(),
            interest: interest.into(),
        }
    }
}

/// Where the active dataset came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DatasetOrigin {
    /// Bundled in-memory dataset
    Default,
    /// Static asset fetched over HTTP or read from disk
    Asset { location: String },
    /// Raw text uploaded through the API
    Upload {
        #[serde(rename = "fileName")]
        file_name: String,
    },
}

impl Display for DatasetOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetOrigin::Default => write!(f, "default"),
            DatasetOrigin::Asset { location } => write!(f, "asset:{}", location),
            DatasetOrigin::Upload { file_name } => write!(f, "upload:{}", file_name),
        }
    }
}

/// An immutable, fully-parsed dataset. Loads replace it wholesale.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<InterestRecord>,
    pub origin: DatasetOrigin,
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(records: Vec<InterestRecord>, origin: DatasetOrigin) -> Self {
        Self {
            records,
            origin,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Summary of the active dataset returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub origin: DatasetOrigin,
    pub records: usize,
    pub loaded_at: DateTime<Utc>,
}

impl From<&Dataset> for DatasetSummary {
    fn from(dataset: &Dataset) -> Self {
        Self {
            origin: dataset.origin.clone(),
            records: dataset.len(),
            loaded_at: dataset.loaded_at,
        }
    }
}
