use std::sync::Arc;

use axum::{
    http::{Method, StatusCode},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    catalog::Catalog,
    middleware::{make_span_with_request_id, request_id_middleware},
    services::{IndexStrategy, Recommender},
};

pub mod people;
pub mod recommendations;
pub mod releases;
pub mod titles;

/// Shared application state
///
/// Built once before the server starts; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Wraps the catalog and builds the similarity index over its titles
    pub fn new(catalog: Catalog, strategy: IndexStrategy) -> Self {
        let catalog = Arc::new(catalog);
        let recommender = Recommender::build(catalog.clone(), strategy);
        Self {
            catalog,
            recommender: Arc::new(recommender),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(cors),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/releases/month/:month", get(releases::by_month))
        .route("/releases/weekday/:day", get(releases::by_weekday))
        .route("/titles/:title/score", get(titles::score))
        .route("/titles/:title/votes", get(titles::votes))
        .route("/actors/:name", get(people::actor))
        .route("/directors/:name", get(people::director))
        .route("/recommendations/:title", get(recommendations::recommend))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
