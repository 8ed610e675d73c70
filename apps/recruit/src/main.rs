mod api_client;
mod cli;
mod config;
mod errors;
mod models;
mod state;
mod workflows;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting recruitment assistant v{}", env!("CARGO_PKG_VERSION"));
    let state = AppState::from_config(config);

    let stdin = BufReader::new(tokio::io::stdin());
    cli::run_menu(&state, stdin, std::io::stdout()).await?;

    Ok(())
}
