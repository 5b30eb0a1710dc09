mod common;
mod config;
mod routes;
mod services;
mod storage;

mod discards;
mod plantings;
mod sowings;
mod trays;

use crate::config::Config;
use crate::services::nursery::Nursery;
use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up tracing/logging
    tracing_subscriber::fmt::init();

    // Load configuration and environment variables to pass to the application
    let config: Config = Config::from_env();

    tracing::info!(
        "Starting server {} ({} deployment) ...",
        config.app_name,
        config.deployment.to_uppercase()
    );

    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("Cannot create data directory {}", config.data_dir.display()))?;
    let nursery = Nursery::load(&config.data_dir)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Cannot bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let router = routes::build_router(nursery, &config);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
