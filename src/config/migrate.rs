//! Configuration file upgrades: detect and add keys introduced by newer
//! versions, keeping every value (and unknown key) already in the file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config(
            "default configuration is not a mapping".to_string(),
        )),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        // empty file
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys known to this version but absent from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;

    Ok(default_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add missing keys with their default values.
/// Returns the names of the keys that were added (empty → file untouched).
pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, value) in default_mapping()? {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, yaml)?;
    }

    Ok(added)
}
