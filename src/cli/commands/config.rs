use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config || !(*check || *run_migrate) {
            header(format!("Current configuration ({})", cfg_path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if (*check || *run_migrate) && !cfg_path.exists() {
            warning(format!(
                "Config file not found: {} (defaults in use, run `rworktime init`)",
                cfg_path.display()
            ));
            return Ok(());
        }

        // ---- CHECK ----
        if *check {
            let missing = migrate::missing_keys(cfg_path)?;
            if missing.is_empty() {
                success("Configuration file is up to date.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }

        // ---- MIGRATE ----
        if *run_migrate {
            let added = migrate::migrate(cfg_path)?;
            if added.is_empty() {
                info("No migration needed.");
            } else {
                tracing::info!(added = ?added, "configuration migrated");
                success(format!("Added fields: {}", added.join(", ")));
            }
        }
    }

    Ok(())
}
