//! Muscle Hustle - Workout Tracking Core
//!
//! Keeps the user's workout log in durable key-value storage and exposes the
//! operations the app's screens are built on: add, edit, delete and finish
//! workouts, progress totals, fitness events, sharing and an image gallery.

pub mod media;
pub mod social;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use media::ImageGallery;
pub use social::{ContactBook, EventCatalog};
pub use storage::config::AppConfig;
pub use storage::{KeyValueStore, StorageError};
pub use workouts::{StoreEvent, WorkoutRecord, WorkoutStore, WorkoutStoreError};
