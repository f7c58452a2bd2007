// Configuration for the skimmer reader, web scraper and logging.
// Every field has a serde default so a partial skimmer.toml is valid.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when `$SKIMMER_CONFIG` is unset
pub const CONFIG_FILE: &str = "skimmer.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "SKIMMER_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Master configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reader: ReaderConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Playback settings and the initial contents of the size/speed fields
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReaderConfig {
    /// Initial size field, kept as text like anything typed into the field
    #[serde(default = "default_size")]
    pub size: String,

    /// Initial speed field (words per minute)
    #[serde(default = "default_speed")]
    pub speed: String,

    /// Words captured before the cursor on pause, and the paging stride
    #[serde(default = "default_context_words")]
    pub context_words: usize,

    /// Words longer than this many characters get extra display time
    #[serde(default = "default_long_word_threshold")]
    pub long_word_threshold: usize,

    /// A long word is shown for `length / divisor` times the base delay
    #[serde(default = "default_long_word_divisor")]
    pub long_word_divisor: f64,

    /// Amount `+`/`-` move the speed field by
    #[serde(default = "default_speed_step")]
    pub speed_step: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            speed: default_speed(),
            context_words: default_context_words(),
            long_word_threshold: default_long_word_threshold(),
            long_word_divisor: default_long_word_divisor(),
            speed_step: default_speed_step(),
        }
    }
}

impl ReaderConfig {
    /// Rejects values that would make delays or context indices unusable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.long_word_divisor.is_finite() && self.long_word_divisor > 0.0) {
            return Err(format!(
                "reader.long_word_divisor must be a positive number, got {}",
                self.long_word_divisor
            ));
        }
        if isize::try_from(self.context_words).is_err() {
            return Err(format!(
                "reader.context_words is too large: {}",
                self.context_words
            ));
        }
        if i32::try_from(self.speed_step).is_err() {
            return Err(format!(
                "reader.speed_step is too large: {}",
                self.speed_step
            ));
        }
        Ok(())
    }

    pub fn timing(&self) -> TimingConfig {
        TimingConfig {
            long_word_threshold: self.long_word_threshold,
            long_word_divisor: self.long_word_divisor,
        }
    }
}

/// Per-word delay tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Word length threshold for the long-word scaling (default 8 chars)
    pub long_word_threshold: usize,

    /// Divisor applied to the length of a long word (default 6.0)
    pub long_word_divisor: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        ReaderConfig::default().timing()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogConfig {
    /// Log destination; the terminal belongs to the UI
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    /// Default filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_size() -> String {
    "50".into()
}
fn default_speed() -> String {
    "400".into()
}
fn default_context_words() -> usize {
    20
}
fn default_long_word_threshold() -> usize {
    8
}
fn default_long_word_divisor() -> f64 {
    6.0
}
fn default_speed_step() -> u32 {
    25
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_user_agent() -> String {
    concat!("skimmer/", env!("CARGO_PKG_VERSION")).into()
}
fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("skimmer.log")
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Loads `$SKIMMER_CONFIG`, falling back to `skimmer.toml` in the working
    /// directory. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config
            .reader
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                path: path.to_path_buf(),
                reason,
            })?;

        Ok(config)
    }
}
