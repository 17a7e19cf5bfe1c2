//! Application configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::database::Database;
use super::file_store::FileStore;
use super::kv::{KeyValueStore, MemoryStore, StorageError};

/// Default key under which the workout log is stored.
pub const DEFAULT_WORKOUTS_KEY: &str = "workouts";

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key in the data directory
    #[default]
    File,
    /// SQLite key-value table
    Sqlite,
    /// Process memory, lost on exit
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Sqlite => write!(f, "sqlite"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::ParseError(format!(
                "unknown storage backend '{other}'"
            ))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Storage settings
    pub storage: StorageSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            storage: StorageSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl AppConfig {
    /// Open the configured key-value backend.
    pub async fn open_store(&self) -> Result<Arc<dyn KeyValueStore>, StorageError> {
        let store: Arc<dyn KeyValueStore> = match self.storage.backend {
            StorageBackend::File => Arc::new(FileStore::open(&self.data_dir).await?),
            StorageBackend::Sqlite => Arc::new(Database::open(&self.database_path())?),
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
        };

        tracing::debug!(
            "Opened {} storage in {}",
            self.storage.backend,
            self.data_dir.display()
        );
        Ok(store)
    }

    /// Full path of the SQLite database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage.database_file)
    }
}

/// Storage-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Backend holding the workout log
    pub backend: StorageBackend,
    /// Key under which the workout list is persisted
    pub workouts_key: String,
    /// SQLite file name, relative to the data directory
    pub database_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            workouts_key: DEFAULT_WORKOUTS_KEY.to_string(),
            database_file: "muscle_hustle.db".to_string(),
        }
    }
}

/// Logging-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "musclehustle", "MuscleHustle")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path inside a data directory.
pub fn config_path_in(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Load application configuration from `data_dir/config.toml`.
///
/// A missing file yields the defaults.
pub fn load_config_from(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = config_path_in(data_dir);

    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig {
            data_dir: data_dir.to_path_buf(),
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir.to_path_buf();

    Ok(config)
}

/// Save application configuration into its data directory.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path_in(&config.data_dir);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
