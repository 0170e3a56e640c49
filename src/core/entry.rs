//! Live time entry with pause/resume tracking.

use crate::core::calculator::summary::EntryOutcome;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::{BreakPolicy, RoundingPolicy};
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    pub arrival: NaiveDateTime,
    pub departure: Option<NaiveDateTime>,
    pub paused_since: Option<NaiveDateTime>,
    pub total_break_seconds: u64,
}

impl TimeEntry {
    pub fn arrive(at: NaiveDateTime) -> Self {
        Self {
            arrival: at,
            departure: None,
            paused_since: None,
            total_break_seconds: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.departure.is_none()
    }

    pub fn is_paused(&self) -> bool {
        self.paused_since.is_some()
    }

    /// Start a pause, or end the running one and add it to the break total.
    /// Returns `true` when the entry is paused after the call.
    pub fn toggle_pause(&mut self, now: NaiveDateTime) -> AppResult<bool> {
        if !self.is_open() {
            return Err(AppError::EntryState(
                "cannot pause an entry that has already ended".to_string(),
            ));
        }

        match self.paused_since.take() {
            Some(start) => {
                self.total_break_seconds += elapsed_seconds(start, now);
                Ok(false)
            }
            None => {
                self.paused_since = Some(now);
                Ok(true)
            }
        }
    }

    /// Close the entry at `now`. A running pause ends at `now` as well.
    ///
    /// The entry is left untouched when the computation fails.
    pub fn leave(
        &mut self,
        now: NaiveDateTime,
        rounding: &RoundingPolicy,
        breaks: &BreakPolicy,
    ) -> AppResult<EntryOutcome> {
        if !self.is_open() {
            return Err(AppError::EntryState("entry has already ended".to_string()));
        }

        let pending = self
            .paused_since
            .map(|start| elapsed_seconds(start, now))
            .unwrap_or(0);
        let total_break = self.total_break_seconds + pending;

        let outcome = Core::process_entry(self.arrival, now, total_break, rounding, breaks)?;

        self.paused_since = None;
        self.total_break_seconds = total_break;
        self.departure = Some(now);

        Ok(outcome)
    }
}

fn elapsed_seconds(from: NaiveDateTime, to: NaiveDateTime) -> u64 {
    (to - from).num_seconds().max(0) as u64
}
