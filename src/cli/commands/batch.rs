use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::batch::read_batch;
use crate::export::{DayExport, EntryExport, ExportLogic};
use crate::models::RoundingPolicy;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// Handle `batch`: process every CSV row like `compute` and export the results.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch {
        input,
        output,
        format,
        force,
        daily,
        breaks,
        rounding,
        no_rounding,
    } = cmd
    {
        let cfg = breaks.apply(cfg)?;
        let input_path = expand_tilde(input);
        let output_path = expand_tilde(output);

        if !input_path.exists() {
            return Err(AppError::Export(format!(
                "input file not found: {}",
                input_path.display()
            )));
        }

        let rounding_policy = if *no_rounding {
            RoundingPolicy::disabled()
        } else {
            rounding.policy(&cfg)
        };
        let break_policy = cfg.break_policy();

        let records = read_batch(&input_path)?;
        let mut outcomes = Vec::with_capacity(records.len());

        // rows are numbered as in the file (header = line 1)
        for (i, rec) in records.iter().enumerate() {
            let line = i + 2;
            let processed = rec.resolve().and_then(|(arr, dep, brk)| {
                Core::process_entry(arr, dep, brk, &rounding_policy, &break_policy)
            });

            match processed {
                Ok(o) => outcomes.push(o),
                Err(e) => {
                    tracing::debug!(line, error = %e, "batch row skipped");
                    warning(format!("Line {line} skipped: {e}"));
                }
            }
        }

        info(format!(
            "{} of {} entries processed",
            outcomes.len(),
            records.len()
        ));

        if *daily {
            let days: Vec<DayExport> =
                Core::build_daily_summary(&outcomes, cfg.expected_daily_seconds())
                    .iter()
                    .map(DayExport::from)
                    .collect();
            ExportLogic::export_days(&days, *format, &output_path, *force)?;
        } else {
            let rows: Vec<EntryExport> = outcomes
                .iter()
                .map(|o| EntryExport::from_outcome(o, cfg.time_format()))
                .collect();
            ExportLogic::export_entries(&rows, *format, &output_path, *force)?;
        }
    }

    Ok(())
}
