//! rWorktime library root.
//! Exposes the rounding engine and work duration calculator, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::calculator::duration::compute_work_duration;
pub use crate::core::rounding::{
    apply_time_rounding, apply_to_span, round_duration, round_timestamp,
};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Round { .. } => cli::commands::round::handle(&cli.command, cfg),
        Commands::RoundDuration { .. } => cli::commands::round::handle_duration(&cli.command, cfg),
        Commands::Span { .. } => cli::commands::span::handle(&cli.command, cfg),
        Commands::Compute { .. } => cli::commands::compute::handle(&cli.command, cfg),
        Commands::Presets { .. } => cli::commands::presets::handle(&cli.command),
        Commands::Batch { .. } => cli::commands::batch::handle(&cli.command, cfg),
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // a second init (tests calling run twice) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // 2️⃣ load the config ONCE (explicit --config wins)
    let cfg_path: PathBuf = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    let cfg = Config::load(&cfg_path)?;
    tracing::debug!(path = %cfg_path.display(), region = cfg.region.code(), "configuration loaded");

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &cfg_path)
}
