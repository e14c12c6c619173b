// crates/infra/src/settings.rs
//! Optional settings file (`.json`, `.yaml`, `.yml`) supplying run parameters.

use std::path::Path;

use modulo_counter_domain::{IncrementMode, OutputFormat};
use modulo_counter_shared_kernel::{Base, DigitCount, ErrorContext, InfrastructureError, Result};
use serde::Deserialize;

use crate::persistence::FileReader;

/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub digits: Option<DigitCount>,
    pub base: Option<Base>,
    pub iterations: Option<usize>,
    pub mode: Option<IncrementMode>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    fn detect(path: &Path) -> std::result::Result<Self, InfrastructureError> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(InfrastructureError::UnsupportedFormat { path: path.to_path_buf() }),
        }
    }
}

/// Load settings from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
///
/// Returns an error if the extension is not recognised, the file cannot be
/// read, or it does not parse into [`Settings`].
pub fn load_settings(path: &Path) -> Result<Settings> {
    let format = SettingsFormat::detect(path)?;
    let text = FileReader::read_to_string(path)?;
    log::debug!("loaded settings file {}", path.display());
    parse_settings(&text, format)
        .with_context(|| format!("invalid settings file '{}'", path.display()))
}

fn parse_settings(text: &str, format: SettingsFormat) -> std::result::Result<Settings, InfrastructureError> {
    match format {
        SettingsFormat::Json => Ok(serde_json::from_str(text)?),
        SettingsFormat::Yaml if text.trim().is_empty() => Ok(Settings::default()),
        SettingsFormat::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}
