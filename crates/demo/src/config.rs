//! Host configuration, read from environment variables.

use core::str::FromStr;

use revledger_observability::{LogFormat, UnknownLogFormat};

pub const NAME_VAR: &str = "REVLEDGER_NAME";
pub const REPORT_FORMAT_VAR: &str = "REVLEDGER_REPORT_FORMAT";
pub const LOG_FORMAT_VAR: &str = "REVLEDGER_LOG_FORMAT";

const DEFAULT_NAME: &str = "main bank";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown report format {0:?} (expected \"text\" or \"json\")")]
    UnknownReportFormat(String),

    #[error(transparent)]
    LogFormat(#[from] UnknownLogFormat),
}

/// How ledger reports are printed to stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownReportFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ledger_name: String,
    pub report_format: ReportFormat,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_name: DEFAULT_NAME.to_string(),
            report_format: ReportFormat::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(name) = lookup(NAME_VAR).filter(|n| !n.trim().is_empty()) {
            config.ledger_name = name;
        }

        if let Some(format) = lookup(REPORT_FORMAT_VAR) {
            config.report_format = format.parse()?;
        }

        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }
}
