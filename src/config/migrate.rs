//! Config file maintenance: detect keys missing from an older config file
//! and fill them in with their default values, keeping everything the user
//! already set.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use super::Config;
use crate::errors::{AppError, AppResult};

/// Top-level mapping of a YAML config file. A missing or empty file is an
/// empty mapping.
fn read_mapping(path: &Path) -> AppResult<Mapping> {
    if !path.exists() {
        return Ok(Mapping::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// Keys known to [`Config`] that the file at `path` does not set.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
/// Returns the keys that were added; the file is left alone when none are.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        // Make sure the merged file still parses as a Config before writing.
        let merged = Value::Mapping(current);
        serde_yaml::from_value::<Config>(merged.clone())?;
        crate::utils::path::ensure_parent_dir(path)?;
        fs::write(path, serde_yaml::to_string(&merged)?)?;
    }

    Ok(added)
}
