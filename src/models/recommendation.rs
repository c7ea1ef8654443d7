use serde::{Deserialize, Serialize};

/// Provenance of a recommendation slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotSource {
    /// Most frequent interest in the active dataset
    Statistical,
    /// Entry from the static reference catalog
    Reference,
}

impl SlotSource {
    /// User-facing label shown next to each slot
    pub fn label(&self) -> &'static str {
        match self {
            SlotSource::Statistical => "Pilihan Data",
            SlotSource::Reference => "Saran MBTI",
        }
    }
}

/// One of the (up to) three recommendations produced per analysis
///
/// Fields are private so `source` cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RecommendationSlot {
    interest: String,
    source: SlotSource,
    label: String,
}

impl RecommendationSlot {
    pub fn new(interest: impl Into<String>, source: SlotSource) -> Self {
        Self {
            interest: interest.into(),
            source,
            label: source.label().to_string(),
        }
    }

    pub fn statistical(interest: impl Into<String>) -> Self {
        Self::new(interest, SlotSource::Statistical)
    }

    pub fn reference(interest: impl Into<String>) -> Self {
        Self::new(interest, SlotSource::Reference)
    }

    pub fn interest(&self) -> &str {
        &self.interest
    }

    pub fn source(&self) -> SlotSource {
        self.source
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Display-ready payload for one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRecord {
    pub title: String,
    pub interest: String,
    pub intro_category: String,
    pub intro_focus: String,
    pub age_focus: String,
    pub source: SlotSource,
    pub label: String,
    /// Placeholder invitation link, never dereferenced
    pub mock_link: String,
}
