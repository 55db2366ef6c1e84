mod app;
mod config;
mod handlers;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use catalog_server::{bind_listener, init_tracing, shutdown_signal, ServeArgs};

use crate::{app::create_app, config::Config, state::AppState};

/// Tagging - Items and the tags that describe them
#[derive(Parser, Debug)]
#[command(name = "tagging")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing("tagging=debug,tower_http=debug");

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let state = AppState::from_config(&config).await?;
    let app = create_app(state, &config);

    let listener = bind_listener(&cli.serve).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
