//! Unified application error type.
//! All modules (core, config, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDateTime;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date/time format: {0}")]
    InvalidDateTime(String),

    #[error("Invalid duration format: {0}")]
    InvalidDuration(String),

    #[error("Invalid work region: {0}")]
    InvalidRegion(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid span: departure {departure} is not after arrival {arrival}")]
    InvalidSpan {
        arrival: NaiveDateTime,
        departure: NaiveDateTime,
    },

    #[error("Time entry error: {0}")]
    EntryState(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
