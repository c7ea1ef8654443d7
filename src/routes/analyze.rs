use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{AnalysisRequest, AnalysisResponse},
    routes::AppState,
    services::analysis,
};

/// Handler for the analysis endpoint
///
/// Body rejections (bad JSON, wrong field types, negative age) surface as
/// 400 `{"error": …}` like every other validation failure.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> AppResult<Json<AnalysisResponse>> {
    let Json(request) = payload.inspect_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Analysis body rejected");
    })?;

    tracing::info!(
        request_id = %request_id,
        personality = request.personality.as_deref().unwrap_or(""),
        "Processing analysis request"
    );

    // One snapshot for the whole request, even if a load lands meanwhile
    let dataset = state.dataset.snapshot().await;

    let response = analysis::analyze(
        &request,
        &dataset,
        &state.invite_base_url,
        &mut rand::thread_rng(),
    )
    .inspect_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Analysis request rejected");
    })?;

    tracing::info!(
        request_id = %request_id,
        personality = %response.personality,
        dataset_origin = %response.dataset.origin,
        recommendations = response.recommendations.len(),
        "Analysis completed"
    );

    Ok(Json(response))
}
