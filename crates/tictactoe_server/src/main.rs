//! Tic-Tac-Toe - unified CLI for the console game and the HTTP service.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_server::cli::{Cli, Command};
use tictactoe_server::{AppState, SharedGame, console, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => console::run(),
        Command::Serve {
            host,
            port,
            static_dir,
        } => serve(host, port, static_dir).await,
    }
}

/// Runs the HTTP game server until interrupted.
async fn serve(host: String, port: u16, static_dir: PathBuf) -> Result<()> {
    let state = AppState {
        game: SharedGame::new(),
        static_dir,
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(%host, port, "Tic-Tac-Toe server listening on http://{host}:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
