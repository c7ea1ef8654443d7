pub mod analysis;
pub mod catalog;
pub mod composer;
pub mod dataset;
pub mod description;
pub mod matcher;

pub use analysis::analyze;
pub use dataset::{load_from_source, DatasetSource, DatasetStore};
