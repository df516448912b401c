pub mod api;
pub mod config;
pub mod db;
pub mod predictor;

pub use api::routes::create_router;
pub use config::Config;
pub use db::Database;
