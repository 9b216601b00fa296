//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand};

/// Tic-Tac-Toe - console game and HTTP service over one rules core
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "Play tic-tac-toe in the terminal or serve it over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Run the HTTP game server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Directory of static files for the browser client
        #[arg(long, default_value = "public")]
        static_dir: std::path::PathBuf,
    },
}
