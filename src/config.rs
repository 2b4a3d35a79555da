use std::path::Path;

use serde::Deserialize;

use crate::core::locale;
use crate::error::ConfigError;

/// Declarative picker setup, usually loaded from YAML:
///
/// ```yaml
/// name: dateOfBirth
/// value: 1990-11-05
/// placeholder: jj/mm/aaaa
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickerConfig {
    /// Hidden-field name used on form submission.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    locale::DEFAULT_PLACEHOLDER.to_string()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            name: None,
            value: None,
            placeholder: default_placeholder(),
        }
    }
}

impl PickerConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }
}
