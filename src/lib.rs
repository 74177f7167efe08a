//! rCheckin library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind the daily check-in cycle.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod geo;
pub mod models;
pub mod remote;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Jitter { .. } => cli::commands::jitter::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    // Load configuration once; `init` must work even when the file is broken.
    let mut cfg = match (&cli.command, Config::load_from(&config_path)) {
        (_, Ok(cfg)) => cfg,
        (Commands::Init { .. }, Err(_)) => Config::default(),
        (_, Err(e)) => return Err(e),
    };

    if let Some(custom_log) = &cli.log {
        cfg.log_file = custom_log.clone();
    }

    dispatch(&cli, &cfg, &config_path)
}
