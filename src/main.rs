use std::net::SocketAddr;

use log::info;
use transit_predictor::{create_router, Config, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    let db = Database::new(config.database_path.clone())?;

    let app = create_router(db);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Transit delay predictor listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
