mod api;
mod config;
mod error;
mod server;
mod space;
mod store;
mod util;

use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use config::{Config, LogConfig};
use server::Server;
use store::SpaceStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// SpaceDB - REST API over an in-memory collection of spaces
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Listening address, overrides `server_addr` from the config file
    #[arg(short, long)]
    addr: Option<String>,
}

fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(addr) = args.addr {
        config.server_addr = addr;
    }

    init_logging(&config.log)?;

    info!("Starting SpaceDB - in-memory spaces REST API");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(SpaceStore::with_seed(util::time::now()));
    info!("Store seeded with {} spaces", store.list()?.len());

    let server = Server::bind(config, store)
        .await
        .context("failed to bind HTTP listener")?;
    info!("Server listening on: {}", server.local_addr());

    server.run().await?;

    Ok(())
}
