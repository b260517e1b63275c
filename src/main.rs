//! ontofactory CLI - resolve ontology handles into loaded ontologies
//!
//! Usage: ontofactory <COMMAND>
//!
//! Commands:
//!   load      Resolve a handle (or the default ontology) and summarise it
//!   classify  Show how a handle would be resolved
//!   cache     Inspect the conversion cache

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ontofactory::config::{log_warnings, with_env_overrides};
use ontofactory::Config;

mod cli;
mod commands;

use cli::{CacheAction, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;

    match &cli.command {
        Commands::Load { handle, json } => {
            commands::load::cmd_load(&config, handle.as_deref(), *json)
        }
        Commands::Classify { handle, json } => {
            commands::classify::cmd_classify(&config, handle, *json)
        }
        Commands::Cache { action } => match action {
            CacheAction::Path => commands::cache::cmd_cache_path(&config),
            CacheAction::List { json } => commands::cache::cmd_cache_list(&config, *json),
        },
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "ontofactory=warn",
        1 => "ontofactory=info",
        _ => "ontofactory=debug",
    }
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_explicit(path)?,
        None => {
            let cwd = std::env::current_dir().ok();
            Config::load_or_default(cwd.as_deref())
        }
    };

    if let Some(dir) = &cli.cache_dir {
        config.cache.root = dir.clone();
    }
    if let Some(program) = &cli.converter {
        config.converter.program = program.clone();
    }
    Ok(config)
}

fn load_explicit(path: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_with_warnings(path)?;
    log_warnings(&warnings);
    Ok(with_env_overrides(config))
}
