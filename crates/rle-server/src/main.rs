use anyhow::{Context, Result};
use rle_core::RleConfig;
use rle_server::{app_with_state, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = RleConfig::load().context("Failed to load configuration")?;
    let addr = config.bind_addr();
    let state = AppState::from_config(config.clone()).context("Invalid codec configuration")?;

    info!(
        %addr,
        marker = %config.codec.marker,
        escape = ?config.codec.escape,
        max_body_bytes = config.server.max_body_bytes,
        "rle-server starting"
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app_with_state(state)).await?;
    Ok(())
}
