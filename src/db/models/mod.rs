pub mod query;
pub mod stats;

pub use query::{NewQuery, PredictionOutput, QueryRecord};
pub use stats::{DashboardStats, RouteStats};
