//! Environment-driven engine configuration.
//!
//! # Responsibility
//! - Resolve log level, log directory and evaluation-year override once, at
//!   the process boundary.
//! - Keep the calculation core free of ambient environment reads.
//!
//! # Invariants
//! - Blank variables behave as unset.
//! - Values are validated here; callers never see a half-parsed config.

use crate::logging::{default_log_level, normalize_level};
use crate::service::report_service::{FixedYear, SystemYear, YearSource};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Log level override (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "NUMEROLOGY_LOG_LEVEL";
/// Absolute directory for rolling log files; file logging is off when unset.
pub const ENV_LOG_DIR: &str = "NUMEROLOGY_LOG_DIR";
/// Pins the personal-year evaluation year instead of reading the clock.
pub const ENV_CURRENT_YEAR: &str = "NUMEROLOGY_CURRENT_YEAR";

/// Resolved engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
    pub current_year: Option<i32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            current_year: None,
        }
    }
}

impl EngineConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    /// - `InvalidLogLevel` for an unsupported level.
    /// - `InvalidCurrentYear` for a non-numeric or non-positive year.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_level = match read(ENV_LOG_LEVEL) {
            Some(raw) => normalize_level(&raw).map_err(|_| ConfigError::InvalidLogLevel(raw))?,
            None => default_log_level(),
        };
        let log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        let current_year = read(ENV_CURRENT_YEAR).map(parse_year).transpose()?;

        Ok(Self {
            log_level,
            log_dir,
            current_year,
        })
    }

    /// Returns the year source this configuration selects.
    pub fn year_source(&self) -> ConfiguredYear {
        match self.current_year {
            Some(year) => ConfiguredYear::Fixed(FixedYear(year)),
            None => ConfiguredYear::System(SystemYear),
        }
    }
}

/// Parses a positive calendar year.
pub fn parse_year(raw: String) -> Result<i32, ConfigError> {
    match raw.trim().parse::<i32>() {
        Ok(year) if year >= 1 => Ok(year),
        _ => Err(ConfigError::InvalidCurrentYear(raw)),
    }
}

/// Year source chosen by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredYear {
    Fixed(FixedYear),
    System(SystemYear),
}

impl YearSource for ConfiguredYear {
    fn current_year(&self) -> i32 {
        match self {
            Self::Fixed(source) => source.current_year(),
            Self::System(source) => source.current_year(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    InvalidCurrentYear(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(value) => write!(
                f,
                "{ENV_LOG_LEVEL}=`{value}` is unsupported; expected trace|debug|info|warn|error"
            ),
            Self::InvalidCurrentYear(value) => write!(
                f,
                "{ENV_CURRENT_YEAR}=`{value}` is invalid; expected a positive year"
            ),
        }
    }
}

impl Error for ConfigError {}
