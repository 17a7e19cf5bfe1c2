//! Persisted workout log.
//!
//! Every operation reads the list fresh from storage and every mutation writes
//! the whole list back. There is no locking between callers: two interleaved
//! read-modify-write cycles resolve as last-write-wins.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

use super::events::StoreEvent;
use super::types::{WorkoutList, WorkoutRecord};
use crate::storage::config::DEFAULT_WORKOUTS_KEY;
use crate::storage::kv::{KeyValueStore, StorageError};

/// Capacity of the notification channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Single source of truth for the user's workouts.
#[derive(Clone)]
pub struct WorkoutStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    event_tx: broadcast::Sender<StoreEvent>,
}

impl WorkoutStore {
    /// Create a store over `storage` using the default key.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, DEFAULT_WORKOUTS_KEY)
    }

    /// Create a store that persists under a custom key.
    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            storage,
            key: key.into(),
            event_tx,
        }
    }

    /// Storage key holding the list.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Subscribe to notifications for successful mutations.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    /// Read the current list. An absent value is an empty list.
    pub async fn load(&self) -> Result<WorkoutList, WorkoutStoreError> {
        let Some(raw) = self.storage.get(&self.key).await? else {
            tracing::debug!("No stored workouts under '{}'", self.key);
            return Ok(Vec::new());
        };

        let list: WorkoutList =
            serde_json::from_str(&raw).map_err(|e| StorageError::Parse(e.to_string()))?;

        tracing::debug!("Loaded {} workouts", list.len());
        Ok(list)
    }

    /// Overwrite the stored list with `list`.
    pub async fn save(&self, list: &[WorkoutRecord]) -> Result<(), WorkoutStoreError> {
        let raw =
            serde_json::to_string(list).map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.storage.set(&self.key, &raw).await?;
        tracing::debug!("Saved {} workouts", list.len());
        Ok(())
    }

    /// Record at `index` in the current list.
    pub async fn get(&self, index: usize) -> Result<WorkoutRecord, WorkoutStoreError> {
        let list = self.load().await?;
        let len = list.len();

        list.into_iter()
            .nth(index)
            .ok_or(WorkoutStoreError::IndexOutOfBounds { index, len })
    }

    /// Append a record.
    pub async fn add(&self, record: WorkoutRecord) -> Result<WorkoutList, WorkoutStoreError> {
        let mut list = self.load().await?;
        list.push(record.clone());
        self.save(&list).await?;

        let index = list.len() - 1;
        tracing::info!("Added workout '{}' at {}", record.workout_name, index);
        self.notify(StoreEvent::Added { index, record });

        Ok(list)
    }

    /// Replace the record at `index`.
    pub async fn update_at(
        &self,
        index: usize,
        record: WorkoutRecord,
    ) -> Result<WorkoutList, WorkoutStoreError> {
        let mut list = self.load().await?;
        check_index(index, list.len())?;

        let previous = std::mem::replace(&mut list[index], record.clone());
        self.save(&list).await?;

        tracing::info!("Updated workout at {}", index);
        self.notify(StoreEvent::Updated {
            index,
            previous,
            record,
        });

        Ok(list)
    }

    /// Delete the record at `index`.
    pub async fn remove_at(&self, index: usize) -> Result<WorkoutList, WorkoutStoreError> {
        let (list, record) = self.take_at(index).await?;

        tracing::info!("Removed workout '{}' from {}", record.workout_name, index);
        self.notify(StoreEvent::Removed { index, record });

        Ok(list)
    }

    /// Complete the record at `index`, taking it off the list.
    pub async fn finish_at(&self, index: usize) -> Result<WorkoutList, WorkoutStoreError> {
        let (list, record) = self.take_at(index).await?;

        tracing::info!("Finished workout '{}'", record.workout_name);
        self.notify(StoreEvent::Finished { index, record });

        Ok(list)
    }

    async fn take_at(
        &self,
        index: usize,
    ) -> Result<(WorkoutList, WorkoutRecord), WorkoutStoreError> {
        let mut list = self.load().await?;
        check_index(index, list.len())?;

        let record = list.remove(index);
        self.save(&list).await?;

        Ok((list, record))
    }

    fn notify(&self, event: StoreEvent) {
        // No subscribers is fine.
        let _ = self.event_tx.send(event);
    }
}

fn check_index(index: usize, len: usize) -> Result<(), WorkoutStoreError> {
    if index < len {
        Ok(())
    } else {
        tracing::warn!("Rejected workout index {} (list has {})", index, len);
        Err(WorkoutStoreError::IndexOutOfBounds { index, len })
    }
}

/// Workout store errors.
#[derive(Debug, Error)]
pub enum WorkoutStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Workout index {index} is out of bounds (list has {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}
