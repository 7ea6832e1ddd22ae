//! Playground application shell server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser location            ┌──────────────────────────────────────────┐
//!     (link click / address bar)  │               SHELL SERVER               │
//!     ────────────────────────────┼─▶ http ──▶ routing ──▶ shell composer    │
//!                                 │   server    (table)     nav │ view │ foot │
//!     ◀───────────────────────────┼── response ◀──────────────────────────┘  │
//!                                 │                                          │
//!                                 │  config (+watcher) · observability       │
//!                                 │  lifecycle · security                    │
//!                                 └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use playground_shell::lifecycle::{self, Shutdown, StartupOptions};

#[derive(Parser)]
#[command(name = "playground-shell")]
#[command(version, about = "Serve the playground application shell", long_about = None)]
struct Args {
    /// TOML configuration file (watched for changes).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let running = lifecycle::start(StartupOptions {
        config_path: args.config,
        bind_address: args.bind,
    })
    .await?;

    tracing::info!(address = %running.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();
    running.serve(&shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
