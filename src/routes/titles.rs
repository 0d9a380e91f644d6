use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{TitleScore, TitleVotes},
    routes::AppState,
    services::titles,
};

/// Handler for title popularity lookup
pub async fn score(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<TitleScore>> {
    let score = titles::title_score(&state.catalog, &title)?;
    Ok(Json(score))
}

/// Handler for title vote statistics
pub async fn votes(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<TitleVotes>> {
    let votes = titles::title_votes(&state.catalog, &title)?;
    Ok(Json(votes))
}
