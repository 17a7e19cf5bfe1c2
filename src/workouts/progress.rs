//! Progress totals and achievement points.

use serde::Serialize;

use super::events::StoreEvent;
use super::types::WorkoutRecord;

/// Points awarded for each finished workout.
pub const POINTS_PER_FINISH: u32 = 1;

/// Totals over the current workout list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    /// Number of logged workouts
    pub workouts: usize,
    /// Sum of reps across workouts
    pub total_reps: u64,
    /// Sum of sets across workouts
    pub total_sets: u64,
    /// Sum of reps x sets across workouts
    pub total_volume: u64,
}

impl ProgressSummary {
    /// Compute totals for a list.
    pub fn from_records(records: &[WorkoutRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.workouts += 1;
            acc.total_reps += u64::from(record.reps);
            acc.total_sets += u64::from(record.sets);
            acc.total_volume += record.volume();
            acc
        })
    }
}

/// Counts points earned by finishing workouts.
#[derive(Debug, Clone, Default)]
pub struct AchievementTracker {
    points: u32,
    finished: Vec<WorkoutRecord>,
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a store notification. Returns true if it earned points.
    pub fn apply(&mut self, event: &StoreEvent) -> bool {
        match event {
            StoreEvent::Finished { record, .. } => {
                self.points = self.points.saturating_add(POINTS_PER_FINISH);
                self.finished.push(record.clone());
                tracing::debug!("Achievement: {} points", self.points);
                true
            }
            _ => false,
        }
    }

    /// Total points earned.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Workouts finished, oldest first.
    pub fn finished(&self) -> &[WorkoutRecord] {
        &self.finished
    }
}
