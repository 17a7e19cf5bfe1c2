//! Notifications emitted by the workout store after a successful mutation.
//!
//! Presentation code subscribes to these to drive feedback (haptics, sounds,
//! celebration effects) instead of interleaving them with persistence.

use super::types::WorkoutRecord;

/// A change that has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A record was appended at `index`.
    Added { index: usize, record: WorkoutRecord },
    /// The record at `index` was replaced.
    Updated {
        index: usize,
        previous: WorkoutRecord,
        record: WorkoutRecord,
    },
    /// The record at `index` was deleted.
    Removed { index: usize, record: WorkoutRecord },
    /// The record at `index` was completed and taken off the list.
    Finished { index: usize, record: WorkoutRecord },
}

impl StoreEvent {
    /// Position the event refers to, as of the moment it was applied.
    pub fn index(&self) -> usize {
        match self {
            StoreEvent::Added { index, .. }
            | StoreEvent::Updated { index, .. }
            | StoreEvent::Removed { index, .. }
            | StoreEvent::Finished { index, .. } => *index,
        }
    }

    /// Record as it is after the change (or as it was when it left the list).
    pub fn record(&self) -> &WorkoutRecord {
        match self {
            StoreEvent::Added { record, .. }
            | StoreEvent::Updated { record, .. }
            | StoreEvent::Removed { record, .. }
            | StoreEvent::Finished { record, .. } => record,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreEvent::Added { .. } => "added",
            StoreEvent::Updated { .. } => "updated",
            StoreEvent::Removed { .. } => "removed",
            StoreEvent::Finished { .. } => "finished",
        }
    }
}
