//! E-Bank web main entry point

use anyhow::Context;
use clap::Parser;
use ebank_api::start_server;
use ebank_config::{Config, ConfigError};
use ebank_core::Bank;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "ebank-web")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight HTMX web front-end for an E-Bank REST backend", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Override backend.base_url
    #[arg(long)]
    backend_url: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

/// Load the config file; a missing file means defaults plus a warning to log
/// once logging is up.
fn load_config(path: &Path) -> anyhow::Result<(Config, Option<String>)> {
    match Config::load(path) {
        Ok(config) => Ok((config, None)),
        Err(e @ ConfigError::FileNotFound { .. }) => Ok((
            Config::default(),
            Some(format!("{}, using built-in defaults", e)),
        )),
        Err(e) => Err(anyhow::anyhow!("{}", e.to_details()))
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (mut config, warning) = load_config(&args.config)?;
    if let Some(url) = args.backend_url {
        config.backend.base_url = url;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("{}", e.to_details()))
        .context("Invalid configuration")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str()))
        .init();

    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    log::info!(
        "Config loaded: backend={}, page_size={}",
        config.backend.base_url,
        config.pagination.page_size
    );

    let bank = Bank::from_config(config).map_err(|e| anyhow::anyhow!("{}", e.to_details()))?;

    let rt = Runtime::new()?;
    rt.block_on(start_server(bank))
        .context("Server error")?;

    Ok(())
}
