//! Path anchoring

use std::path::{Path, PathBuf};

/// Make `dir` absolute against the current directory without touching the
/// filesystem. An empty path means the current directory.
pub fn absolute_dir(dir: &Path) -> PathBuf {
    let dir = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

/// The directory that relative settings paths hang off: `base_dir/..`.
pub fn project_root(base_dir: &Path) -> PathBuf {
    base_dir.join("..")
}

/// Anchor a settings path value at `base_dir/..`.
///
/// Absolute values are returned unchanged. Relative values are joined as-is,
/// without normalizing `..` components or trailing separators.
pub fn anchor_path(base_dir: &Path, value: &str) -> PathBuf {
    let value = Path::new(value);
    if value.is_absolute() {
        return value.to_path_buf();
    }
    project_root(base_dir).join(value)
}

/// Convert a path to the string stored in a settings document.
pub fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
