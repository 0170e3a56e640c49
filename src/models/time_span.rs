use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Arrival/departure pair. An open span (still running) has no departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    pub arrival: NaiveDateTime,
    pub departure: Option<NaiveDateTime>,
}

impl TimeSpan {
    pub fn open(arrival: NaiveDateTime) -> Self {
        Self {
            arrival,
            departure: None,
        }
    }

    /// Finalized span: `departure` must be strictly after `arrival`.
    pub fn closed(arrival: NaiveDateTime, departure: NaiveDateTime) -> AppResult<Self> {
        if departure <= arrival {
            return Err(AppError::InvalidSpan { arrival, departure });
        }
        Ok(Self {
            arrival,
            departure: Some(departure),
        })
    }

    /// Closed span without the ordering check, for values the rounding
    /// engine has already corrected.
    pub(crate) fn from_parts(arrival: NaiveDateTime, departure: NaiveDateTime) -> Self {
        Self {
            arrival,
            departure: Some(departure),
        }
    }

    pub fn is_open(&self) -> bool {
        self.departure.is_none()
    }

    /// Seconds between arrival and departure; `None` while the span is open.
    pub fn raw_duration_seconds(&self) -> Option<i64> {
        self.departure.map(|d| (d - self.arrival).num_seconds())
    }
}
