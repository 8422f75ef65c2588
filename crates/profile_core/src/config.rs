//! Session configuration.
//!
//! # Responsibility
//! - Hold tunables for one wizard session (entry cap, logging).
//! - Apply environment overrides on top of built-in defaults.
//!
//! # Invariants
//! - `max_entries` is within `1..=MAX_ENTRIES`.
//! - `log_dir`, when set, is an absolute path.

use crate::entry::collection::MAX_ENTRIES;
use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_MAX_ENTRIES: &str = "PROFILE_WIZARD_MAX_ENTRIES";
pub const ENV_LOG_LEVEL: &str = "PROFILE_WIZARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PROFILE_WIZARD_LOG_DIR";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidMaxEntries(String),
    MaxEntriesOutOfRange { value: usize, max: usize },
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMaxEntries(value) => {
                write!(f, "max_entries must be a positive integer, got `{value}`")
            }
            Self::MaxEntriesOutOfRange { value, max } => {
                write!(f, "max_entries must be within 1..={max}, got {value}")
            }
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be an absolute path, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Tunables for one wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Cap applied to each history collection.
    pub max_entries: usize,
    /// `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Rolling log directory. Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            max_entries: MAX_ENTRIES,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl WizardConfig {
    /// Defaults with `PROFILE_WIZARD_*` environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides taken from `lookup`.
    ///
    /// Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(raw) = lookup(ENV_MAX_ENTRIES) {
            config.max_entries = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMaxEntries(raw.clone()))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level.trim().to_string();
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir.trim()));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entries == 0 || self.max_entries > MAX_ENTRIES {
            return Err(ConfigError::MaxEntriesOutOfRange {
                value: self.max_entries,
                max: MAX_ENTRIES,
            });
        }
        if let Some(dir) = &self.log_dir {
            if !Path::new(dir).is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        Ok(())
    }
}
