//! Runtime configuration, read from environment variables.

use thiserror::Error;

use tally_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "TALLY_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "TALLY_OUTPUT";
pub const CODE_VAR: &str = "TALLY_CODE";
pub const AGE_PRODUCT_VAR: &str = "TALLY_AGE_PRODUCT";

pub const DEFAULT_CODE: &str = "yyy";
pub const DEFAULT_AGE_PRODUCT: &str = "Product B";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Numbered, human-readable sections.
    #[default]
    Text,
    /// One JSON object per report.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    pub output: OutputFormat,
    /// Activation code checked by the first report.
    pub code: String,
    /// Name of the product whose average buyer age is reported.
    pub age_product: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
            code: DEFAULT_CODE.to_string(),
            age_product: DEFAULT_AGE_PRODUCT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            config.log_format = LogFormat::parse(&value).ok_or(ConfigError::InvalidValue {
                key: LOG_FORMAT_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = OutputFormat::parse(&value).ok_or(ConfigError::InvalidValue {
                key: OUTPUT_VAR,
                value,
            })?;
        }

        if let Some(code) = lookup(CODE_VAR) {
            config.code = code;
        }

        if let Some(name) = lookup(AGE_PRODUCT_VAR) {
            config.age_product = name;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.code, "yyy");
        assert_eq!(config.age_product, "Product B");
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            (LOG_FORMAT_VAR, "json"),
            (OUTPUT_VAR, "JSON"),
            (CODE_VAR, "xxx"),
            (AGE_PRODUCT_VAR, "Product A"),
        ]))
        .unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.code, "xxx");
        assert_eq!(config.age_product, "Product A");
    }

    #[test]
    fn rejects_unknown_formats() {
        let err = AppConfig::from_lookup(lookup(&[(OUTPUT_VAR, "yaml")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: OUTPUT_VAR,
                value: "yaml".to_string()
            }
        );

        let err = AppConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(err.to_string().contains(LOG_FORMAT_VAR));
    }
}
