use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::{error::ApiError, routes::AppState},
    db::models::{DashboardStats, NewQuery, PredictionOutput, QueryRecord, RouteStats},
    predictor::Prediction,
};

const DEFAULT_RECENT_LIMIT: usize = 10;

/// Cap for the admin/debug listing endpoint.
const ALL_QUERIES_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct PredictionInput {
    pub route: String,
    pub stop: String,
    pub datetime: DateTime<Utc>,
}

fn validate_input(input: &PredictionInput) -> Result<(), ApiError> {
    if input.route.is_empty() {
        return Err(ApiError::Validation("Route is required".to_string()));
    }
    if input.stop.is_empty() {
        return Err(ApiError::Validation("Stop ID is required".to_string()));
    }
    Ok(())
}

/// Generates a synthetic prediction for the request and persists it as a
/// query record before responding.
pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<PredictionInput>,
) -> Result<Json<PredictionOutput>, ApiError> {
    validate_input(&input)?;

    let prediction = Prediction::generate(&mut rand::thread_rng());

    let record = state
        .db
        .insert_query(NewQuery {
            route: input.route,
            stop: input.stop,
            datetime: input.datetime,
            weather: Some(prediction.weather.to_string()),
            prediction: prediction.delay_minutes,
            confidence: prediction.confidence,
        })
        .await?;

    Ok(Json(PredictionOutput::from_record(record, prediction.label)))
}

pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    let stats = state.db.dashboard_stats().await?;
    Ok(Json(stats))
}

pub async fn get_route_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<RouteStats>>, ApiError> {
    let stats = state.db.route_stats().await?;
    Ok(Json(stats))
}

#[derive(Debug, Deserialize)]
pub struct RecentQueriesParams {
    pub limit: Option<usize>,
}

pub async fn get_recent_queries(
    State(state): State<AppState>,
    Query(params): Query<RecentQueriesParams>,
) -> Result<Json<Vec<QueryRecord>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let records = state.db.recent_queries(limit).await?;
    Ok(Json(records))
}

pub async fn get_all_queries(
    State(state): State<AppState>,
) -> Result<Json<Vec<QueryRecord>>, ApiError> {
    let records = state.db.recent_queries(ALL_QUERIES_LIMIT).await?;
    Ok(Json(records))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(route: &str, stop: &str) -> PredictionInput {
        PredictionInput {
            route: route.to_string(),
            stop: stop.to_string(),
            datetime: Utc::now(),
        }
    }

    #[test]
    fn rejects_empty_route() {
        let err = validate_input(&input("", "stop-1")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn rejects_empty_stop() {
        let err = validate_input(&input("42", "")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn accepts_non_empty_route_and_stop() {
        assert!(validate_input(&input("42", "stop-1")).is_ok());
    }
}
