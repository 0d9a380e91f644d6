use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    error::AppResult, middleware::RequestId, models::RecommendationResponse, routes::AppState,
};

/// Handler for the recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(title): Path<String>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        title = %title,
        "Processing recommendation request"
    );

    let recommendations = state.recommender.recommend(&title).map_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Recommendation rejected");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        returned = recommendations.len(),
        "Recommendation completed"
    );

    Ok(Json(RecommendationResponse {
        title,
        recommendations,
    }))
}
