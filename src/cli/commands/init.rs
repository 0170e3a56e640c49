use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command: write the configuration file with defaults.
pub fn handle(cmd: &Commands, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if Config::init_all(cfg_path, *force)? {
            tracing::info!(path = %cfg_path.display(), "configuration written");
            success(format!("Config file: {}", cfg_path.display()));
        } else {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                cfg_path.display()
            ));
        }
    }

    Ok(())
}
