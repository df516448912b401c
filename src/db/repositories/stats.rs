//! Aggregate queries over the `queries` table. All figures are computed in
//! SQL on read; nothing here is persisted.

use anyhow::Result;
use rusqlite::params;

use super::queries::row_to_query;
use crate::db::{
    models::{DashboardStats, RouteStats},
    Database,
};
use crate::predictor::ON_TIME_THRESHOLD_MINUTES;

/// How many records the dashboard shows under "recent activity".
const RECENT_QUERIES_LIMIT: i64 = 5;

/// Rounds half away from zero, so an average of -0.25 at one decimal place
/// becomes -0.3.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl Database {
    /// Store-wide totals plus the five newest records. An empty store returns
    /// the defined zero-valued result; an average over zero rows is undefined
    /// and never computed.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.execute(|conn| {
            let total_queries: i64 =
                conn.query_row("SELECT COUNT(*) FROM queries", [], |row| row.get(0))?;

            if total_queries == 0 {
                return Ok(DashboardStats::empty());
            }

            let average_delay: f64 =
                conn.query_row("SELECT AVG(prediction) FROM queries", [], |row| row.get(0))?;

            let on_time_count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM queries WHERE prediction <= ?1",
                params![ON_TIME_THRESHOLD_MINUTES],
                |row| row.get(0),
            )?;
            let on_time_percentage = (on_time_count as f64 / total_queries as f64) * 100.0;

            let mut stmt = conn.prepare(
                "SELECT id, route, stop, datetime, weather, prediction, confidence, created_at
                 FROM queries
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?1",
            )?;
            let mut rows = stmt.query(params![RECENT_QUERIES_LIMIT])?;
            let mut recent_queries = Vec::new();
            while let Some(row) = rows.next()? {
                recent_queries.push(row_to_query(row)?);
            }

            Ok(DashboardStats {
                total_queries,
                average_delay: round_to(average_delay, 2),
                on_time_percentage: round_to(on_time_percentage, 2),
                recent_queries,
            })
        })
        .await
    }

    /// One entry per distinct route, ordered by query count descending with
    /// route name ascending as the tiebreak so ties are deterministic.
    pub async fn route_stats(&self) -> Result<Vec<RouteStats>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT route,
                        COUNT(*) AS query_count,
                        AVG(prediction) AS average_delay,
                        COUNT(CASE WHEN prediction <= ?1 THEN 1 END) AS on_time_count
                 FROM queries
                 GROUP BY route
                 ORDER BY COUNT(*) DESC, route ASC",
            )?;

            let mut rows = stmt.query(params![ON_TIME_THRESHOLD_MINUTES])?;
            let mut stats = Vec::new();
            while let Some(row) = rows.next()? {
                let query_count: i64 = row.get("query_count")?;
                let average_delay: f64 = row.get("average_delay")?;
                let on_time_count: i64 = row.get("on_time_count")?;

                let on_time_percentage = if query_count > 0 {
                    (on_time_count as f64 / query_count as f64) * 100.0
                } else {
                    0.0
                };

                stats.push(RouteStats {
                    route: row.get("route")?,
                    average_delay: round_to(average_delay, 1),
                    query_count,
                    on_time_percentage: round_to(on_time_percentage, 1),
                });
            }

            Ok(stats)
        })
        .await
    }
}
