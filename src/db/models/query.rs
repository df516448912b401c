use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::predictor::DelayLabel;

/// One persisted prediction event. `id` and `created_at` are assigned by the
/// store at insertion and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRecord {
    pub id: i64,
    pub route: String,
    pub stop: String,
    pub datetime: DateTime<Utc>,
    pub weather: Option<String>,
    pub prediction: i64,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a record; the store fills in `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewQuery {
    pub route: String,
    pub stop: String,
    pub datetime: DateTime<Utc>,
    pub weather: Option<String>,
    pub prediction: i64,
    pub confidence: f64,
}

/// Response shape for the predict operation: the persisted record plus the
/// delay label, which is derived rather than stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutput {
    pub id: i64,
    pub route: String,
    pub stop: String,
    pub datetime: DateTime<Utc>,
    pub weather: Option<String>,
    pub prediction: i64,
    pub confidence: f64,
    pub label: DelayLabel,
    pub created_at: DateTime<Utc>,
}

impl PredictionOutput {
    pub fn from_record(record: QueryRecord, label: DelayLabel) -> Self {
        Self {
            id: record.id,
            route: record.route,
            stop: record.stop,
            datetime: record.datetime,
            weather: record.weather,
            prediction: record.prediction,
            confidence: record.confidence,
            label,
            created_at: record.created_at,
        }
    }
}
