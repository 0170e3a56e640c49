use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::WorkRegion;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

/// Handle `presets`: list regional working-time rules.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Presets { region } = cmd {
        let regions: Vec<WorkRegion> = match region {
            Some(code) => vec![
                WorkRegion::from_code(code).ok_or_else(|| AppError::InvalidRegion(code.clone()))?,
            ],
            None => WorkRegion::all().to_vec(),
        };

        let mut table = Table::new(vec![
            Column::new("Code", 10),
            Column::new("Region", 15),
            Column::new("h/day", 6),
            Column::new("h/week", 7),
            Column::new("Break", 14),
            Column::new("Overtime", 9),
            Column::new("Weekly OT", 10),
        ]);

        for r in regions {
            let p = r.preset();
            let brk = if p.require_breaks {
                format!("{}m > {}h", p.break_duration_minutes, p.break_after_hours)
            } else {
                "-".to_string()
            };
            let overtime = if p.overtime_enabled {
                format!("x{}", p.overtime_rate)
            } else {
                "-".to_string()
            };

            table.add_row(vec![
                r.code().to_string(),
                r.name().to_string(),
                format!("{:.1}", p.standard_hours_per_day),
                format!("{:.1}", p.standard_hours_per_week),
                brk,
                overtime,
                format!("{}h x{}", p.weekly_overtime_threshold, p.weekly_overtime_rate),
            ]);
        }

        header("Regional presets");
        print!("{}", table.render());
    }

    Ok(())
}
