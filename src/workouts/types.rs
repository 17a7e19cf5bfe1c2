//! Workout record types.

use serde::{Deserialize, Deserializer, Serialize};

/// One logged exercise entry.
///
/// Records carry no identifier; a record is addressed by its position in the
/// [`WorkoutList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// User-supplied exercise name (not unique)
    #[serde(rename = "workoutName")]
    pub workout_name: String,
    /// Repetitions per set
    #[serde(deserialize_with = "deserialize_count")]
    pub reps: u32,
    /// Number of sets
    #[serde(deserialize_with = "deserialize_count")]
    pub sets: u32,
}

/// Ordered workout log; insertion order is display order.
pub type WorkoutList = Vec<WorkoutRecord>;

impl WorkoutRecord {
    /// Create a new record.
    pub fn new(workout_name: impl Into<String>, reps: u32, sets: u32) -> Self {
        Self {
            workout_name: workout_name.into(),
            reps,
            sets,
        }
    }

    /// Total repetitions across all sets.
    pub fn volume(&self) -> u64 {
        u64::from(self.reps) * u64::from(self.sets)
    }

    /// Plain-text body used when sharing the record.
    pub fn share_message(&self) -> String {
        format!(
            "Workout Name: {}\nReps: {}\nSets: {}",
            self.workout_name, self.reps, self.sets
        )
    }
}

impl std::fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} reps x {} sets)", self.workout_name, self.reps, self.sets)
    }
}

/// Reps and sets come from free-text numeric inputs, so older values may be
/// stored as strings, fractions or negatives.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(f64),
    Text(String),
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawCount::deserialize(deserializer)? {
        RawCount::Number(n) => n,
        RawCount::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed.parse::<f64>().map_err(|_| {
                serde::de::Error::custom(format!("'{trimmed}' is not a number"))
            })?
        }
    };

    stored_count(value)
        .ok_or_else(|| serde::de::Error::custom(format!("'{value}' is not a finite number")))
}

/// Fit a stored number into a count: fractions truncate toward zero,
/// negatives read as zero and oversized values saturate.
fn stored_count(value: f64) -> Option<u32> {
    // `as` saturates at the u32 bounds.
    value.is_finite().then(|| value.trunc() as u32)
}

/// Parse a count typed into a numeric field. Blank input counts as zero.
///
/// Stricter than reading stored data: new input must be a whole
/// non-negative number.
pub fn parse_count(text: &str) -> Result<u32, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| format!("'{trimmed}' is not a whole non-negative number"))
}
