use std::sync::Arc;

use crate::{
    config::Config,
    services::dataset::{DatasetSource, DatasetStore, FileDatasetSource, HttpDatasetSource},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Active dataset snapshot holder
    pub dataset: DatasetStore,
    /// Configured static asset, if any; used at startup and by reload
    pub dataset_source: Option<Arc<dyn DatasetSource>>,
    pub invite_base_url: String,
}

impl AppState {
    pub fn new(
        dataset: DatasetStore,
        dataset_source: Option<Arc<dyn DatasetSource>>,
        invite_base_url: impl Into<String>,
    ) -> Self {
        Self {
            dataset,
            dataset_source,
            invite_base_url: invite_base_url.into(),
        }
    }

    /// Builds state from configuration, starting on the bundled dataset
    ///
    /// A dataset URL takes precedence over a dataset path.
    pub fn from_config(config: &Config) -> Self {
        let dataset_source: Option<Arc<dyn DatasetSource>> =
            match (&config.dataset_url, &config.dataset_path) {
                (Some(url), _) => Some(Arc::new(HttpDatasetSource::new(url.clone()))),
                (None, Some(path)) => Some(Arc::new(FileDatasetSource::new(path.clone()))),
                (None, None) => None,
            };

        Self::new(
            DatasetStore::default(),
            dataset_source,
            config.invite_base_url.clone(),
        )
    }
}
