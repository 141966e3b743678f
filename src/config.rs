//! Configuration file support.
//!
//! The configuration names the event (used in exported reports), the storage
//! keys, key bindings and log verbosity. Missing or invalid configuration
//! always falls back to the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{event, storage};
use crate::keybindings::KeyBindings;
use crate::storage::{KeyValueStore, StorageError};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Event details printed in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    /// Person the event celebrates
    pub subject_name: String,
    /// Human-readable event date
    pub event_date: String,
    /// Messaging number the report is sent to
    pub contact: String,
    /// Title line of the text summary
    pub summary_title: String,
}

impl EventInfo {
    /// Instruction line placed at the top of the report.
    pub fn instructions(&self) -> String {
        format!(
            "⚠️ IMPORTANTE: Por favor envía este archivo por WhatsApp al {}",
            self.contact
        )
    }
}

impl Default for EventInfo {
    fn default() -> Self {
        Self {
            subject_name: event::SUBJECT_NAME.to_string(),
            event_date: event::EVENT_DATE.to_string(),
            contact: event::CONTACT.to_string(),
            summary_title: event::SUMMARY_TITLE.to_string(),
        }
    }
}

/// Keys under which state is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    #[serde(default = "default_selections_key")]
    pub selections: String,
    #[serde(default = "default_feedback_key")]
    pub feedback: String,
}

fn default_selections_key() -> String {
    storage::SELECTIONS_KEY.to_string()
}

fn default_feedback_key() -> String {
    storage::FEEDBACK_KEY.to_string()
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            selections: default_selections_key(),
            feedback: default_feedback_key(),
        }
    }
}

/// User preferences section of the config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    #[serde(default)]
    pub event: EventInfo,

    #[serde(default)]
    pub storage: StorageKeys,

    #[serde(default)]
    pub preferences: UserPreferences,

    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            event: EventInfo::default(),
            storage: StorageKeys::default(),
            preferences: UserPreferences::default(),
            keybindings: KeyBindings::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "fotosel-config.json"
    }

    /// Load from `key` in a key-value store.
    /// Returns None if not found or can't be parsed.
    pub fn load_from_store<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Self> {
        match store.get_item(key) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from '{}'", key);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config from '{}': {}", key, e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("No config found under '{}'", key);
                None
            }
            Err(e) => {
                log::warn!("Failed to read config: {}", e);
                None
            }
        }
    }

    /// Save to `key` in a key-value store.
    pub fn save_to_store<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        key: &str,
    ) -> Result<(), ConfigError> {
        let json = self.to_json()?;
        store.set_item(key, &json)?;
        log::info!("Saved configuration under '{}'", key);
        Ok(())
    }

    /// Get the default config file path for auto-load/save.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("fotosel").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("fotosel")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from a file.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Option<Self> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Try to load configuration from the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        Self::load_from_path(&Self::default_path()?)
    }

    /// Save configuration to a file, creating parent directories.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Storage error (localStorage in WASM)
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}
