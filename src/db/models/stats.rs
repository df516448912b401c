use serde::Serialize;

use super::QueryRecord;

/// Dashboard-wide aggregates. Figures are rounded to 2 decimal places; an
/// empty store yields the all-zero value rather than an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_queries: i64,
    pub average_delay: f64,
    pub on_time_percentage: f64,
    pub recent_queries: Vec<QueryRecord>,
}

impl DashboardStats {
    pub fn empty() -> Self {
        Self {
            total_queries: 0,
            average_delay: 0.0,
            on_time_percentage: 0.0,
            recent_queries: Vec::new(),
        }
    }
}

/// Per-route aggregates, rounded to 1 decimal place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStats {
    pub route: String,
    pub average_delay: f64,
    pub query_count: i64,
    pub on_time_percentage: f64,
}
