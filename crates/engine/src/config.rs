#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub errors: ErrorsConfig,
}

impl Config {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Adds the error code under `extensions.code` of every error. Disabled by default.
    pub include_codes: bool,
    /// Order of the errors in the response. Defaults to the order in which they were recorded.
    pub order: ErrorOrder,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorOrder {
    #[default]
    Completion,
    /// Sorted by the position of their path in the response.
    Path,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
