use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level rota configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RotaConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

/// Output settings.
///
/// Presentation only: the rotation schemes themselves are fixed and take no
/// configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Output format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,

    /// Mark the live duty cells in text output.
    #[serde(default = "default_true")]
    pub highlight: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            highlight: true,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
fn default_true() -> bool {
    true
}

impl RotaConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
