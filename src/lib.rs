//! settings-loader: JSON settings with defaults and anchored data paths
//!
//! Reads a `settings.json` document, fills in the well-known data path keys
//! that are missing, and rewrites those keys into absolute paths rooted at the
//! project directory.

pub mod settings;
pub mod utils;

pub use settings::{
    load_settings, write_defaults, ErrorKind, SettingsDocument, SettingsError, SettingsLoader,
    DEFAULT_SETTINGS,
};
