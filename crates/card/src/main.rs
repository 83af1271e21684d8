use anyhow::{Context, Result};
use card::{config::ServerConfig, shutdown, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let logger = Logger::new("card-service", is_dev);

    let config = Config::init().context("Failed to load configuration")?;

    let server_config = ServerConfig::from_config(&config)?;

    let db_pool = ConnectionManager::new_pool(
        &server_config.database_url,
        server_config.max_connections,
        server_config.run_migrations,
    )
    .await
    .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool)
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Card service ready");

    shutdown::wait_for_shutdown(shutdown::listen_for_ctrl_c()).await;

    info!("🛑 Closing database pool...");

    let shutdown_result =
        tokio::time::timeout(server_config.shutdown_timeout, state.db.close()).await;

    match shutdown_result {
        Ok(()) => info!("✅ Database pool closed"),
        Err(_) => warn!("⚠️  Shutdown timeout reached, forcing exit"),
    }

    info!("✅ Card Service shutdown complete.");

    logger.shutdown();

    Ok(())
}
