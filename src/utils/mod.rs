//! Shared helpers

pub mod paths;

pub use paths::{absolute_dir, anchor_path, path_to_string, project_root};
