//! Environment-driven logging configuration.

use core::str::FromStr;

use thiserror::Error;

/// Env var holding the `EnvFilter` directive.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Env var selecting the output format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "IDLEKIT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format: {0} (expected `json` or `pretty`)")]
    UnknownFormat(String),
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, with timestamps.
    #[default]
    Json,
    /// Human-readable, multi-line output for local play-testing.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read [`FILTER_ENV`] and [`FORMAT_ENV`].
    ///
    /// Missing or unrecognised values fall back to the defaults (`info`, JSON).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ObservabilityConfig::from_env`], reading values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = lookup(FORMAT_ENV)
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();

        Self { filter, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            ("RUST_LOG", "idlekit_wallet=debug"),
            ("IDLEKIT_LOG_FORMAT", "Pretty"),
        ]));
        assert_eq!(config.filter, "idlekit_wallet=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[("IDLEKIT_LOG_FORMAT", "xml")]));
        assert_eq!(config.format, LogFormat::Json);

        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownFormat("xml".to_string()));
    }

    #[test]
    fn blank_filter_uses_default() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[("RUST_LOG", "  ")]));
        assert_eq!(config.filter, "info");
    }
}
