use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{ActorReport, DirectorReport},
    routes::AppState,
    services::people,
};

/// Handler for actor success report
pub async fn actor(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(name): Path<String>,
) -> AppResult<Json<ActorReport>> {
    tracing::info!(request_id = %request_id, actor = %name, "Building actor report");
    let report = people::actor_report(&state.catalog, &name)?;
    Ok(Json(report))
}

/// Handler for director success report
pub async fn director(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(name): Path<String>,
) -> AppResult<Json<DirectorReport>> {
    tracing::info!(request_id = %request_id, director = %name, "Building director report");
    let report = people::director_report(&state.catalog, &name)?;

    tracing::info!(
        request_id = %request_id,
        movies = report.movies.len(),
        "Director report completed"
    );

    Ok(Json(report))
}
