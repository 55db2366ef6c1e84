mod app;
mod config;
mod handlers;
mod seed;
mod state;
mod storage;

use std::path::PathBuf;

use anyhow::Result;
use catalog_server::{bind_listener, init_tracing, shutdown_signal, ServeArgs};
use clap::Parser;

use crate::{app::create_app, config::Config, seed::load_seed_file, state::AppState};

/// Metadata lookup - Schema, channel and de-identification reference queries
#[derive(Parser, Debug)]
#[command(name = "metadata-lookup")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,

    /// JSON file of reference rows to load before serving
    #[arg(long, env = "SEED_PATH")]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing("metadata_lookup=debug,tower_http=debug");

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let state = AppState::from_config(&config).await?;

    if let Some(path) = &cli.seed {
        load_seed_file(path, state.reference_repo.as_ref()).await?;
    }

    let app = create_app(state, &config);

    let listener = bind_listener(&cli.serve).await?;
    tracing::info!(
        policy = ?config.miss_policy,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
