//! Handler-level tests: the HTTP operations exercised against a temp-dir
//! database, without going through a network socket.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use tempfile::TempDir;
use transit_predictor::api::error::ApiError;
use transit_predictor::api::handlers::{self, PredictionInput, RecentQueriesParams};
use transit_predictor::api::routes::AppState;
use transit_predictor::db::models::NewQuery;
use transit_predictor::predictor::{DelayLabel, ON_TIME_THRESHOLD_MINUTES};
use transit_predictor::Database;

fn test_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = Database::new(dir.path().join("transit.db")).expect("open database");
    (dir, AppState { db })
}

fn prediction_input(route: &str, stop: &str) -> PredictionInput {
    PredictionInput {
        route: route.to_string(),
        stop: stop.to_string(),
        datetime: Utc::now(),
    }
}

#[tokio::test]
async fn predict_persists_and_labels_the_record() {
    let (_dir, state) = test_state();

    let Json(output) = handlers::predict(
        State(state.clone()),
        Json(prediction_input("42", "stop-9")),
    )
    .await
    .expect("predict");

    assert!(output.id > 0);
    assert_eq!(output.route, "42");
    assert_eq!(output.stop, "stop-9");
    assert!((0..=15).contains(&output.prediction));
    assert!(output.confidence >= 70.0 && output.confidence <= 95.0);

    let expected_on_time = output.prediction <= ON_TIME_THRESHOLD_MINUTES;
    assert_eq!(output.label == DelayLabel::OnTime, expected_on_time);

    let weather = output.weather.as_deref().expect("predict always sets weather");
    assert!(["Clear", "Rainy", "Cloudy", "Snowy"].contains(&weather));

    let stored = state.db.recent_queries(1).await.expect("recent queries");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, output.id);
    assert_eq!(stored[0].prediction, output.prediction);
}

#[tokio::test]
async fn predict_rejects_empty_route_before_touching_the_store() {
    let (_dir, state) = test_state();

    let err = handlers::predict(
        State(state.clone()),
        Json(prediction_input("", "stop-9")),
    )
    .await
    .expect_err("empty route must be rejected");

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(state.db.count_queries().await.expect("count"), 0);
}

#[tokio::test]
async fn recent_queries_default_limit_is_ten() {
    let (_dir, state) = test_state();

    for i in 0..12i64 {
        state
            .db
            .insert_query(NewQuery {
                route: "7".to_string(),
                stop: "stop-1".to_string(),
                datetime: Utc::now(),
                weather: None,
                prediction: i,
                confidence: 80.0,
            })
            .await
            .expect("insert query");
    }

    let Json(records) = handlers::get_recent_queries(
        State(state),
        Query(RecentQueriesParams { limit: None }),
    )
    .await
    .expect("recent queries");

    assert_eq!(records.len(), 10);
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let before = Utc::now();
    let Json(health) = handlers::healthcheck().await;
    assert_eq!(health.status, "ok");
    assert!(health.timestamp >= before);
}
