use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Row};

use crate::db::{
    helpers::{format_datetime, parse_datetime},
    models::{NewQuery, QueryRecord},
    Database,
};

pub(crate) fn row_to_query(row: &Row) -> Result<QueryRecord> {
    let datetime: String = row.get("datetime")?;
    let created_at: String = row.get("created_at")?;

    Ok(QueryRecord {
        id: row.get("id")?,
        route: row.get("route")?,
        stop: row.get("stop")?,
        datetime: parse_datetime(&datetime, "datetime")?,
        weather: row.get("weather")?,
        prediction: row.get("prediction")?,
        confidence: row.get("confidence")?,
        created_at: parse_datetime(&created_at, "created_at")?,
    })
}

impl Database {
    /// Inserts a query record and returns it with the store-assigned `id` and
    /// `created_at`. The insert and the read-back run in one worker task, so
    /// the record either persists fully or not at all.
    pub async fn insert_query(&self, input: NewQuery) -> Result<QueryRecord> {
        self.execute(move |conn| {
            let created_at = Utc::now();
            conn.execute(
                "INSERT INTO queries (route, stop, datetime, weather, prediction, confidence, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    input.route,
                    input.stop,
                    format_datetime(&input.datetime),
                    input.weather,
                    input.prediction,
                    input.confidence,
                    format_datetime(&created_at),
                ],
            )
            .with_context(|| "failed to insert query record")?;

            let id = conn.last_insert_rowid();
            let mut stmt = conn.prepare(
                "SELECT id, route, stop, datetime, weather, prediction, confidence, created_at
                 FROM queries
                 WHERE id = ?1",
            )?;
            let record = stmt.query_row(params![id], |row| Ok(row_to_query(row)))??;

            Ok(record)
        })
        .await
    }

    /// The newest records first, `created_at` descending with `id` as the
    /// tiebreak. A limit of 0 yields an empty list; a limit beyond the row
    /// count yields everything.
    pub async fn recent_queries(&self, limit: usize) -> Result<Vec<QueryRecord>> {
        let limit = limit as i64;
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, route, stop, datetime, weather, prediction, confidence, created_at
                 FROM queries
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?1",
            )?;

            let mut rows = stmt.query(params![limit])?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                records.push(row_to_query(row)?);
            }

            Ok(records)
        })
        .await
    }

    /// All records in insertion order.
    pub async fn list_queries(&self) -> Result<Vec<QueryRecord>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, route, stop, datetime, weather, prediction, confidence, created_at
                 FROM queries
                 ORDER BY id ASC",
            )?;

            let mut rows = stmt.query([])?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                records.push(row_to_query(row)?);
            }

            Ok(records)
        })
        .await
    }

    pub async fn count_queries(&self) -> Result<i64> {
        self.execute(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM queries", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
    }
}
