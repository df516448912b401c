use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Builds the application router. Route names mirror the operations the
/// dashboard client calls.
pub fn create_router(db: Database) -> Router {
    let state = AppState { db };

    Router::new()
        .route("/healthcheck", get(handlers::healthcheck))
        .route("/predict", post(handlers::predict))
        .route("/getDashboardStats", get(handlers::get_dashboard_stats))
        .route("/getRouteStats", get(handlers::get_route_stats))
        .route("/getRecentQueries", get(handlers::get_recent_queries))
        .route("/getAllQueries", get(handlers::get_all_queries))
        .with_state(state)
}
