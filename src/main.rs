//! settings-loader: JSON settings with defaults and anchored data paths
//!
//! Reads a settings file, fills in missing data path keys and prints the
//! resolved document as JSON.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
