//! Settings file loading

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::defaults::DEFAULT_SETTINGS;
use super::document::SettingsDocument;
use super::error::SettingsError;
use crate::utils::paths::{absolute_dir, anchor_path, path_to_string, project_root};

/// Filename looked up next to the project root when no path is given.
pub const DEFAULT_FILENAME: &str = "settings.json";

/// Loads settings documents relative to a base directory.
///
/// The base directory defaults to the directory holding this crate's sources,
/// so `settings.json` and the default data paths resolve against the crate
/// root.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    base_dir: PathBuf,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self { base_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("src") }
    }

    /// Loader over another base directory. A relative `base_dir` is taken
    /// against the current directory so anchored paths stay absolute.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: absolute_dir(&base_dir.into()) }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path that a load with these arguments would read.
    pub fn resolve_path(&self, filename: &str, settings_path: Option<&Path>) -> PathBuf {
        match settings_path {
            Some(path) => path.to_path_buf(),
            None => project_root(&self.base_dir).join(filename),
        }
    }

    /// Load, default and path-resolve a settings document.
    ///
    /// `settings_path`, when given, overrides `filename`. Every default key
    /// ends up present and holding an absolute path; other keys are passed
    /// through untouched.
    pub fn load(
        &self,
        filename: &str,
        settings_path: Option<&Path>,
    ) -> Result<SettingsDocument, SettingsError> {
        let path = self.resolve_path(filename, settings_path);

        tracing::info!("PWD={:?}", working_dir());
        tracing::info!("Reading settings from {}", path.display());

        let mut document = read_document(&path)?;
        fill_defaults(&mut document);
        self.anchor_paths(&mut document, &path)?;

        tracing::debug!("Loaded {} settings keys from {}", document.len(), path.display());
        Ok(document)
    }

    fn anchor_paths(
        &self,
        document: &mut SettingsDocument,
        source: &Path,
    ) -> Result<(), SettingsError> {
        for key in DEFAULT_SETTINGS.keys() {
            let Some(value) = document.get_str(key) else {
                return Err(SettingsError::parse(
                    source,
                    format!("value for {key} must be a string path"),
                ));
            };
            let anchored = path_to_string(&anchor_path(&self.base_dir, value));
            document.insert(key.as_str(), Value::String(anchored));
        }
        Ok(())
    }
}

/// Load settings with the default base directory.
pub fn load_settings(
    filename: &str,
    settings_path: Option<&Path>,
) -> Result<SettingsDocument, SettingsError> {
    SettingsLoader::new().load(filename, settings_path)
}

fn read_document(path: &Path) -> Result<SettingsDocument, SettingsError> {
    let bytes = fs::read(path)
        .map_err(|source| SettingsError::NotFound { path: path.to_path_buf(), source })?;

    let content = String::from_utf8(bytes)
        .map_err(|e| SettingsError::parse(path, format!("file is not valid UTF-8 ({e})")))?;

    let value: Value = serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
        source: Some(e),
    })?;

    match value {
        Value::Object(map) => Ok(SettingsDocument::from(map)),
        other => Err(SettingsError::parse(
            path,
            format!("top-level value must be an object, found {}", json_type_name(&other)),
        )),
    }
}

fn fill_defaults(document: &mut SettingsDocument) {
    for (key, default) in DEFAULT_SETTINGS.iter() {
        if !document.contains_key(key) {
            tracing::debug!("Defaulting {} to {}", key, default);
            document.insert(key.as_str(), default.clone());
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn working_dir() -> Option<PathBuf> {
    std::env::var_os("PWD").map(PathBuf::from).or_else(|| std::env::current_dir().ok())
}
