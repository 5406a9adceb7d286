//! trueage-api
//!
//! JSON HTTP surface over the TrueAge scoring engine. Handlers are thin:
//! they decode a form state, call `trueage_scoring::assess`, and encode the
//! report. Nothing is stored server-side.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Catalog (reference data)
        .route("/metrics", get(routes::metrics::list_metrics))
        .route("/metrics/{id}", get(routes::metrics::get_metric_detail))
        // Scoring
        .route("/assess", post(routes::assess::assess_form))
        .route("/assess", get(routes::assess::assess_query))
        // Form state helpers
        .route("/demo", get(routes::share::demo_form))
        .route("/share", post(routes::share::share_form))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
