#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktime")
}

/// Unique config path inside the system temp dir; any existing file is removed
pub fn setup_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktime.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output/input file path inside tempdir, removed if present
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktime.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `YYYY-MM-DD HH:MM:SS` → NaiveDateTime
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}
