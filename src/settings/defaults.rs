//! Default settings

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::error::SettingsError;

/// Data path keys and their defaults, relative to the project root.
const DEFAULT_ENTRIES: [(&str, &str); 4] = [
    ("TRAIN_DATA_PATH", "input/"),
    ("TEST_DATA_PATH", "input/"),
    ("MODEL_PATH", "working/"),
    ("SUBMISSION_PATH", "working/"),
];

/// Fallback values for every data path key, in canonical order.
///
/// These are also exactly the keys whose values get anchored to absolute
/// paths when a document is loaded.
pub static DEFAULT_SETTINGS: Lazy<Map<String, Value>> = Lazy::new(|| {
    DEFAULT_ENTRIES
        .iter()
        .map(|(key, value)| ((*key).to_string(), Value::String((*value).to_string())))
        .collect()
});

/// Write the default settings to `path` as compact JSON.
pub fn write_defaults(path: &Path) -> Result<(), SettingsError> {
    let body = serde_json::to_string(&*DEFAULT_SETTINGS)
        .map_err(|e| SettingsError::Write { path: path.to_path_buf(), source: e.into() })?;
    fs::write(path, body)
        .map_err(|source| SettingsError::Write { path: path.to_path_buf(), source })?;
    tracing::info!("Wrote default settings to {}", path.display());
    Ok(())
}
