use std::path::Path;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self {
            base_url: base_url.into(),
        }
        .validated()
    }

    pub fn validated(self) -> Result<Self> {
        let raw = self.base_url.trim();
        let parsed =
            Url::parse(raw).with_context(|| format!("invalid roster service url '{raw}'"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "roster service url '{raw}' must use http or https, not '{}'",
                parsed.scheme()
            );
        }
        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }
}

pub fn load_settings() -> Result<ClientSettings> {
    build_settings(Path::new(DEFAULT_SETTINGS_FILE), false)
}

pub fn load_settings_from(path: &Path) -> Result<ClientSettings> {
    build_settings(path, true)
}

fn build_settings(path: &Path, required: bool) -> Result<ClientSettings> {
    let settings: ClientSettings = Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .add_source(File::from(path).format(FileFormat::Toml).required(required))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("failed to read settings from '{}'", path.display()))?
        .try_deserialize()
        .context("failed to decode client settings")?;
    settings.validated()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
