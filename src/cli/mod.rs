//! Command-line interface for settings-loader
//!
//! Loads a settings file and prints the resolved document, optionally writing
//! a defaults file first or running the built-in self-check.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use settings_loader::{write_defaults, SettingsLoader};

mod selfcheck;

/// Load settings.json, fill in default data paths and print the result
#[derive(Debug, Parser)]
#[command(name = "settings-loader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings filename, resolved against the project root
    #[arg(short, long, value_name = "NAME", default_value = settings_loader::settings::DEFAULT_FILENAME)]
    filename: String,

    /// Full path to the settings file (overrides --filename)
    #[arg(long, value_name = "PATH")]
    path: Option<PathBuf>,

    /// Write the default settings to PATH, then load from it
    #[arg(short, long, value_name = "PATH")]
    write_defaults: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Run the built-in self-check instead of printing settings
    #[arg(short, long)]
    test: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::INFO
        }
    }
}

pub fn run() -> Result<()> {
    let mut cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; the flag level is the
    // fallback. Logs go to stderr; stdout carries only the settings JSON.
    let filter =
        EnvFilter::builder().with_default_directive(cli.log_level().into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    tracing::debug!("args: {:?}", cli);

    let loader = SettingsLoader::new();

    if cli.test {
        return selfcheck::run(&loader, &cli.filename, cli.path.as_deref());
    }

    if let Some(defaults_path) = cli.write_defaults.take() {
        write_defaults(&defaults_path).context("Failed to write default settings")?;
        cli.path = Some(defaults_path);
    }

    let document = loader
        .load(&cli.filename, cli.path.as_deref())
        .context("Failed to load settings")?;
    println!("{}", document.to_pretty_json()?);
    Ok(())
}
