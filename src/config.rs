//! Configuration Module
//!
//! Process configuration loaded from environment variables, and the live
//! settings the cache and engine read on every operation.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AtlasError, Result};
use crate::language::Language;

/// Default cache TTL: five minutes.
pub const DEFAULT_CACHE_TIMEOUT_MS: u64 = 300_000;

// == Settings ==
/// Runtime settings. Changes take effect on the next cache operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Language used when a request names none, or an unknown one in lenient mode
    pub default_language: Language,
    /// When false the cache behaves as always-empty
    pub enable_caching: bool,
    /// Default TTL in milliseconds for entries stored without an explicit TTL
    pub cache_timeout_ms: u64,
    /// Reject unknown languages instead of falling back to the default
    pub strict_validation: bool,
    /// Raise the default log level to debug
    pub debug_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: Language::English,
            enable_caching: true,
            cache_timeout_ms: DEFAULT_CACHE_TIMEOUT_MS,
            strict_validation: false,
            debug_mode: false,
        }
    }
}

// == Settings Update ==
/// Partial settings update, validated before it is applied.
///
/// Fields are loosely typed because they arrive from untrusted input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub default_language: Option<String>,
    #[serde(default)]
    pub enable_caching: Option<bool>,
    #[serde(default)]
    pub cache_timeout_ms: Option<i64>,
    #[serde(default)]
    pub strict_validation: Option<bool>,
    #[serde(default)]
    pub debug_mode: Option<bool>,
}

impl SettingsUpdate {
    /// Checks every present field; returns the first violation.
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.cache_timeout_ms {
            if timeout < 0 {
                return Err(AtlasError::InvalidConfig(
                    "Cache timeout must be non-negative".to_string(),
                ));
            }
        }
        if let Some(language) = &self.default_language {
            language.parse::<Language>().map_err(|_| {
                AtlasError::InvalidConfig(format!("Invalid default language: {}", language))
            })?;
        }
        Ok(())
    }
}

// == Settings Handle ==
/// Shared, live view of [`Settings`].
///
/// Cloning the handle shares the same underlying settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsHandle {
    inner: Arc<RwLock<Settings>>,
}

impl SettingsHandle {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Returns a copy of the current settings.
    pub fn snapshot(&self) -> Settings {
        self.inner.read().clone()
    }

    pub fn is_caching_enabled(&self) -> bool {
        self.inner.read().enable_caching
    }

    pub fn set_caching_enabled(&self, enabled: bool) {
        self.inner.write().enable_caching = enabled;
    }

    pub fn cache_timeout_ms(&self) -> u64 {
        self.inner.read().cache_timeout_ms
    }

    pub fn set_cache_timeout_ms(&self, timeout_ms: u64) {
        self.inner.write().cache_timeout_ms = timeout_ms;
    }

    pub fn default_language(&self) -> Language {
        self.inner.read().default_language
    }

    pub fn set_default_language(&self, language: Language) {
        self.inner.write().default_language = language;
    }

    pub fn is_strict_validation(&self) -> bool {
        self.inner.read().strict_validation
    }

    pub fn set_strict_validation(&self, enabled: bool) {
        self.inner.write().strict_validation = enabled;
    }

    pub fn is_debug_mode(&self) -> bool {
        self.inner.read().debug_mode
    }

    pub fn set_debug_mode(&self, enabled: bool) {
        self.inner.write().debug_mode = enabled;
    }

    // == Apply ==
    /// Validates and merges a partial update, returning the new settings.
    ///
    /// Nothing is changed if validation fails.
    pub fn apply(&self, update: SettingsUpdate) -> Result<Settings> {
        update.validate()?;

        let mut guard = self.inner.write();
        if let Some(language) = update.default_language {
            guard.default_language = language.parse()?;
        }
        if let Some(enabled) = update.enable_caching {
            guard.enable_caching = enabled;
        }
        if let Some(timeout) = update.cache_timeout_ms {
            // validate() rejected negatives
            guard.cache_timeout_ms = timeout as u64;
        }
        if let Some(strict) = update.strict_validation {
            guard.strict_validation = strict;
        }
        if let Some(debug) = update.debug_mode {
            guard.debug_mode = debug;
        }

        info!(settings = ?*guard, "Settings updated");
        Ok(guard.clone())
    }

    // == Reset ==
    /// Restores the default settings.
    pub fn reset(&self) -> Settings {
        let defaults = Settings::default();
        *self.inner.write() = defaults.clone();
        info!("Settings reset to defaults");
        defaults
    }
}

// == Config ==
/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Dataset file; the embedded dataset is used when unset
    pub dataset_path: Option<PathBuf>,
    /// Initial runtime settings
    pub settings: Settings,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `DATASET_PATH` - JSON dataset file (default: embedded dataset)
    /// - `ENABLE_CACHING` - Enable the lookup cache (default: true)
    /// - `CACHE_TIMEOUT_MS` - Default cache TTL in milliseconds (default: 300000)
    /// - `DEFAULT_LANGUAGE` - english, french or arabic (default: english)
    /// - `STRICT_VALIDATION` - Reject unknown languages (default: false)
    /// - `DEBUG_MODE` - Debug logging (default: false)
    pub fn from_env() -> Self {
        let defaults = Settings::default();

        Self {
            server_port: parse_env("SERVER_PORT").unwrap_or(3000),
            cleanup_interval: parse_env("CLEANUP_INTERVAL").unwrap_or(60),
            dataset_path: env::var("DATASET_PATH").ok().map(PathBuf::from),
            settings: Settings {
                default_language: parse_env("DEFAULT_LANGUAGE")
                    .unwrap_or(defaults.default_language),
                enable_caching: parse_env("ENABLE_CACHING").unwrap_or(defaults.enable_caching),
                cache_timeout_ms: parse_env("CACHE_TIMEOUT_MS")
                    .unwrap_or(defaults.cache_timeout_ms),
                strict_validation: parse_env("STRICT_VALIDATION")
                    .unwrap_or(defaults.strict_validation),
                debug_mode: parse_env("DEBUG_MODE").unwrap_or(defaults.debug_mode),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval: 60,
            dataset_path: None,
            settings: Settings::default(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
