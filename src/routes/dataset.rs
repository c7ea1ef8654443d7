use axum::{
    body::Bytes,
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{DatasetOrigin, DatasetSummary},
    routes::AppState,
    services::dataset::{decode_dataset, load_from_source},
};

/// File name recorded for uploads that do not name themselves
const UNNAMED_UPLOAD: &str = "upload.csv";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadQuery {
    file_name: Option<String>,
}

/// Summary of the active dataset
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    let dataset = state.dataset.snapshot().await;
    Json(DatasetSummary::from(dataset.as_ref()))
}

/// Replaces the active dataset with an uploaded CSV body
///
/// The body is taken as raw bytes; invalid UTF-8 is replaced rather than
/// rejected. Responds 422 and keeps the current dataset when no row qualifies.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> AppResult<Json<DatasetSummary>> {
    let file_name = query
        .file_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNNAMED_UPLOAD.to_string());

    tracing::info!(
        request_id = %request_id,
        file_name = %file_name,
        bytes = body.len(),
        "Processing dataset upload"
    );

    let text = decode_dataset(&body);
    let dataset = state
        .dataset
        .load_text(&text, DatasetOrigin::Upload { file_name })
        .await?;

    Ok(Json(DatasetSummary::from(dataset.as_ref())))
}

/// Re-fetches the configured dataset asset
pub async fn reload(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<DatasetSummary>> {
    let source = state
        .dataset_source
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No dataset source configured".to_string()))?;

    tracing::info!(
        request_id = %request_id,
        origin = %source.origin(),
        "Reloading dataset"
    );

    let dataset = load_from_source(&state.dataset, source.as_ref()).await?;
    Ok(Json(DatasetSummary::from(dataset.as_ref())))
}

/// Restores the bundled default dataset
pub async fn reset(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> Json<DatasetSummary> {
    let dataset = state.dataset.reset().await;
    tracing::info!(request_id = %request_id, "Dataset reset to default");
    Json(DatasetSummary::from(dataset.as_ref()))
}
