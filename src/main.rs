//! Secret file watcher.
//!
//! Polls the JSON file a secrets agent renders, logs every change with the
//! values masked, and simulates putting the recognized secrets to use.
//!
//! # Architecture Overview
//!
//! ```text
//!   secrets agent ──renders──▶ secret.json
//!                                  │ read every 10s
//!                                  ▼
//!                          ┌───────────────┐      ┌──────────────────┐
//!                          │ SecretWatcher │─────▶│ stdout + log file│
//!                          └───────┬───────┘      └──────────────────┘
//!                                  ▲
//!                 SIGINT/SIGTERM ──┘ shutdown
//! ```

use std::path::PathBuf;

use clap::Parser;

use secret_watcher::config::{load_config, WatcherConfig};
use secret_watcher::lifecycle::{signals, Shutdown};
use secret_watcher::observability::init_logging;
use secret_watcher::SecretWatcher;

#[derive(Parser)]
#[command(name = "secret-watcher")]
#[command(about = "Watch an agent-rendered secret file and log changes", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Poll once and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WatcherConfig::default(),
    };

    init_logging(&config)?;

    let mut watcher = SecretWatcher::new(config);

    if cli.once {
        watcher.tick();
        return Ok(());
    }

    let shutdown = Shutdown::new();
    let signal_rx = shutdown.subscribe();
    tokio::spawn(signals::forward_signals(shutdown));

    watcher.run(signal_rx).await;
    Ok(())
}
