//! Storage module for key-value backends and configuration.

pub mod config;
pub mod database;
pub mod file_store;
pub mod kv;
pub mod schema;

pub use config::{AppConfig, ConfigError, LoggingSettings, StorageBackend, StorageSettings};
pub use database::{Database, DatabaseError};
pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore, StorageError};
