//! Batch input: one entry per CSV row (`date,arrival,departure,break`).

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use crate::utils::time::{parse_datetime, parse_duration};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BatchRecord {
    pub date: String,
    pub arrival: String,
    pub departure: String,
    #[serde(rename = "break", default)]
    pub break_time: Option<String>,
}

impl BatchRecord {
    /// Arrival, departure and logged break in seconds.
    /// Bare clock times are taken on the record date.
    pub fn resolve(&self) -> AppResult<(NaiveDateTime, NaiveDateTime, u64)> {
        let date = parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;

        let arrival = parse_datetime(&self.arrival, date)?;
        let departure = parse_datetime(&self.departure, date)?;

        let logged_break = match self.break_time.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(b) => parse_duration(b)?,
        };

        Ok((arrival, departure, logged_break))
    }
}

pub fn read_batch(path: &Path) -> AppResult<Vec<BatchRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut records = Vec::new();
    for rec in rdr.deserialize() {
        records.push(rec?);
    }

    Ok(records)
}
