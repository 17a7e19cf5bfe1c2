//! Muscle Hustle - Workout Tracker
//!
//! Command-line front-end over the workout store.

use clap::Parser;
use muscle_hustle::storage::config::{self, StorageBackend};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

use app::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(config::get_data_dir);
    let mut config = config::load_config_from(&data_dir)?;

    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting Muscle Hustle v{}", env!("CARGO_PKG_VERSION"));

    if config.storage.backend == StorageBackend::Memory {
        tracing::warn!("Memory backend selected; changes will not persist");
    }

    app::execute(cli.command, &config).await
}
