//! Runtime self-check behind `--test`

use anyhow::{bail, Result};
use std::path::Path;

use settings_loader::{ErrorKind, SettingsLoader, DEFAULT_SETTINGS};

struct Check {
    name: &'static str,
    outcome: Result<()>,
}

pub fn run(loader: &SettingsLoader, filename: &str, settings_path: Option<&Path>) -> Result<()> {
    let checks = [
        Check { name: "missing_filename_is_not_found", outcome: missing_filename(loader) },
        Check { name: "missing_path_is_not_found", outcome: missing_path(loader) },
        Check {
            name: "settings_have_default_keys",
            outcome: default_keys_present(loader, filename, settings_path),
        },
    ];

    let mut failed = 0;
    for check in &checks {
        match &check.outcome {
            Ok(()) => println!("check {} ... ok", check.name),
            Err(e) => {
                failed += 1;
                println!("check {} ... FAILED: {:#}", check.name, e);
            }
        }
    }

    println!(
        "\nself-check result: {}. {} passed; {} failed",
        if failed == 0 { "ok" } else { "FAILED" },
        checks.len() - failed,
        failed
    );

    if failed > 0 {
        bail!("{} self-check(s) failed", failed);
    }
    Ok(())
}

fn expect_not_found(loader: &SettingsLoader, filename: &str, path: Option<&Path>) -> Result<()> {
    match loader.load(filename, path) {
        Ok(_) => bail!("expected NotFound, but the load succeeded"),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => {
            bail!("expected NotFound for {}, got {:?}: {}", e.path().display(), e.kind(), e)
        }
    }
}

fn missing_filename(loader: &SettingsLoader) -> Result<()> {
    expect_not_found(loader, "SETTINGZ.json", None)
}

fn missing_path(loader: &SettingsLoader) -> Result<()> {
    expect_not_found(loader, "settings.json", Some(Path::new("/settings..json")))
}

fn default_keys_present(
    loader: &SettingsLoader,
    filename: &str,
    settings_path: Option<&Path>,
) -> Result<()> {
    let document = loader.load(filename, settings_path)?;
    for key in DEFAULT_SETTINGS.keys() {
        match document.path(key) {
            Some(path) if path.is_absolute() => {}
            Some(path) => bail!("{} is not absolute: {}", key, path.display()),
            None => bail!("{} is missing", key),
        }
    }
    Ok(())
}
