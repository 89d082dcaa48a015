use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use fighterdex::api::HttpCatalogApi;
use fighterdex::config::{Config, ConfigStore};
use fighterdex::logging::init_tracing;
use fighterdex::ui::runtime;

/// Browse fighters by universe.
#[derive(Debug, Parser)]
#[command(name = "fighterdex", version, about)]
struct Cli {
    /// Config file (default: ~/.config/fighterdex/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog API base URL, overrides `api.base_url`
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Log filter, overrides `logging.level` (RUST_LOG still wins)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Log file, overrides `logging.file`
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, path) = match &cli.config {
        Some(path) => (Config::load_from(path)?, path.clone()),
        None => (Config::load()?, Config::config_path()),
    };
    let store = ConfigStore::new(config, path);
    apply_overrides(&store, &cli)?;

    let config = store.get();
    let log_path = init_tracing(&config.logging).context("Failed to initialize logging")?;
    let api = HttpCatalogApi::new(&config.api)?;
    tracing::info!(
        config = %store.path().display(),
        log = %log_path.display(),
        api = %api.base_url(),
        "Starting fighterdex"
    );

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime::run(store, Arc::new(api), tokio_runtime.handle())?;

    tokio_runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    Ok(())
}

fn apply_overrides(store: &ConfigStore, cli: &Cli) -> anyhow::Result<()> {
    store.update(|config| {
        if let Some(url) = &cli.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(level) = &cli.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &cli.log_file {
            config.logging.file = Some(file.clone());
        }
    });
    store.get().validate()?;
    Ok(())
}
