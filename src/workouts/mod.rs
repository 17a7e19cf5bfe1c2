//! Workout log: records, persistence and progress.

pub mod events;
pub mod progress;
pub mod store;
pub mod types;

pub use events::StoreEvent;
pub use progress::{AchievementTracker, ProgressSummary};
pub use store::{WorkoutStore, WorkoutStoreError};
pub use types::{parse_count, WorkoutList, WorkoutRecord};
