use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Dataset, DatasetOrigin, InterestRecord},
};

pub mod parser;
pub mod sources;

pub use parser::{decode_dataset, parse_dataset};
pub use sources::{DatasetSource, FileDatasetSource, HttpDatasetSource};

/// Bundled (personality, interest) observations used until a dataset is loaded
const DEFAULT_OBSERVATIONS: &[(&str, &str)] = &[
    ("INFJ", "Writing"),
    ("INFJ", "Psychology"),
    ("INTJ", "Programming"),
    ("INTJ", "Chess"),
    ("ENTP", "Debating"),
    ("ENTP", "Entrepreneurship"),
    ("INFP", "Poetry"),
    ("INFP", "Art"),
    ("ENFP", "Traveling"),
    ("ISTJ", "Accounting"),
    ("ESTP", "Sports"),
    ("ESFJ", "Cooking"),
    ("ISTP", "Mechanics"),
    ("ISFP", "Design"),
    ("ESTJ", "Management"),
    ("ENTJ", "Leadership"),
    ("UNKNOWN", "Reading"),
];

/// Builds the bundled default dataset
pub fn default_dataset() -> Dataset {
    let records = DEFAULT_OBSERVATIONS
        .iter()
        .map(|(personality, interest)| InterestRecord::new(*personality, *interest))
        .collect();
    Dataset::new(records, DatasetOrigin::Default)
}

/// Holds the active dataset as an immutable snapshot
///
/// Readers clone the inner `Arc` and keep a consistent view for the whole
/// request. Loads never mutate a dataset; they swap in a new one.
#[derive(Clone)]
pub struct DatasetStore {
    active: Arc<RwLock<Arc<Dataset>>>,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(default_dataset())
    }
}

impl DatasetStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            active: Arc::new(RwLock::new(Arc::new(dataset))),
        }
    }

    /// Current dataset snapshot
    pub async fn snapshot(&self) -> Arc<Dataset> {
        self.active.read().await.clone()
    }

    /// Replaces the active dataset wholesale
    pub async fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let dataset = Arc::new(dataset);
        *self.active.write().await = dataset.clone();
        dataset
    }

    /// Restores the bundled default dataset
    pub async fn reset(&self) -> Arc<Dataset> {
        self.replace(default_dataset()).await
    }

    /// Parses `text` and swaps it in if at least one row qualifies
    ///
    /// On an empty parse the active dataset is left untouched and a
    /// `DatasetFormat` advisory is returned.
    pub async fn load_text(&self, text: &str, origin: DatasetOrigin) -> AppResult<Arc<Dataset>> {
        let records = parse_dataset(text);

        if records.is_empty() {
            tracing::warn!(
                origin = %origin,
                "No usable rows in dataset; keeping active dataset"
            );
            return Err(AppError::DatasetFormat(
                "expected a header line followed by rows with at least 9 comma-separated fields"
                    .to_string(),
            ));
        }

        let dataset = self.replace(Dataset::new(records, origin)).await;

        tracing::info!(
            origin = %dataset.origin,
            records = dataset.len(),
            "Dataset loaded"
        );

        Ok(dataset)
    }
}

/// Loads the dataset from `source`, keeping the active dataset on any failure
pub async fn load_from_source(
    store: &DatasetStore,
    source: &dyn DatasetSource,
) -> AppResult<Arc<Dataset>> {
    let origin = source.origin();

    let text = match source.fetch_text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                origin = %origin,
                error = %e,
                "Dataset fetch failed; keeping active dataset"
            );
            return Err(e);
        }
    };

    store.load_text(&text, origin).await
}
