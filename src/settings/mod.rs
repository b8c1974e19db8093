//! Settings loading, defaulting and path resolution

pub mod defaults;
pub mod document;
pub mod error;
pub mod loader;

pub use defaults::{write_defaults, DEFAULT_SETTINGS};
pub use document::SettingsDocument;
pub use error::{ErrorKind, SettingsError};
pub use loader::{load_settings, SettingsLoader, DEFAULT_FILENAME};
