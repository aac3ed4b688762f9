use anyhow::{Context, Result};
use folio_common::Settings;
use std::path::Path;

/// Resolve settings for this run: an explicit `--config` file wins, otherwise
/// `folio.config.json` in the working directory, otherwise defaults.
pub fn load_settings(cwd: &Path, explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read config {}", path.display()))?;
            Settings::from_json(&content)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Settings::load(cwd).context("Cannot load folio.config.json"),
    }
}
