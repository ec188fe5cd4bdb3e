//! TaskTrack HTTP server entry point.

use tasktrack::{api, config::AppConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "tasktrack=info,tower_http=info";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = api::AppState::in_memory()?;

    info!(addr = %config.socket_addr(), "starting TaskTrack");
    api::serve(config.socket_addr(), state).await?;
    Ok(())
}
