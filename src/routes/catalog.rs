use axum::{extract::Path, Json};
use serde::Serialize;

use crate::{
    models::PersonalityType,
    services::catalog::{interests_for, reference_interests},
};

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub personality: String,
    pub interests: Vec<&'static str>,
    /// True when the code is unknown and the generic list was returned
    pub fallback: bool,
}

/// Lists the reference interests of every known personality type
pub async fn list() -> Json<Vec<CatalogEntry>> {
    let entries = PersonalityType::ALL
        .iter()
        .map(|personality| CatalogEntry {
            personality: personality.code().to_string(),
            interests: interests_for(*personality).to_vec(),
            fallback: false,
        })
        .collect();
    Json(entries)
}

/// Reference interests for one code; unknown codes get the fallback list
pub async fn lookup(Path(code): Path<String>) -> Json<CatalogEntry> {
    let personality = code.trim().to_uppercase();
    let fallback = personality.parse::<PersonalityType>().is_err();
    let interests = reference_interests(&personality).to_vec();

    Json(CatalogEntry {
        personality,
        interests,
        fallback,
    })
}
