use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    error::AppResult, middleware::RequestId, models::ReleaseCount, routes::AppState,
    services::releases,
};

/// Handler for releases per Spanish month name
pub async fn by_month(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(month): Path<String>,
) -> AppResult<Json<ReleaseCount>> {
    tracing::info!(request_id = %request_id, month = %month, "Counting releases by month");
    let count = releases::count_by_month(&state.catalog, &month)?;
    Ok(Json(count))
}

/// Handler for releases per Spanish weekday name
pub async fn by_weekday(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(day): Path<String>,
) -> AppResult<Json<ReleaseCount>> {
    tracing::info!(request_id = %request_id, day = %day, "Counting releases by weekday");
    let count = releases::count_by_weekday(&state.catalog, &day)?;
    Ok(Json(count))
}
