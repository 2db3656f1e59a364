//! Axum router: maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    calculator::calculator_page,
    evaluate::api_evaluate,
    scenarios::{api_scenarios, api_scenario_detail, api_balance},
    report::api_report,
    genes::api_gene_lookup,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(calculator_page))

        // API endpoints
        .route("/api/evaluate",          post(api_evaluate))
        .route("/api/report",            post(api_report))
        .route("/api/scenarios",         get(api_scenarios))
        .route("/api/scenarios/{name}",  get(api_scenario_detail))
        .route("/api/balance",           get(api_balance))
        .route("/api/genes/{symbol}",    get(api_gene_lookup))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
