//! Unit tests for workout record parsing and formatting.

use muscle_hustle::workouts::{parse_count, WorkoutList, WorkoutRecord};

#[test]
fn test_parse_count_accepts_form_input() {
    assert_eq!(parse_count("12"), Ok(12));
    assert_eq!(parse_count("  7 "), Ok(7));
    assert_eq!(parse_count(""), Ok(0));
}

#[test]
fn test_parse_count_rejects_garbage() {
    assert!(parse_count("twelve").is_err());
    assert!(parse_count("-3").is_err());
    assert!(parse_count("2.5").is_err());
}

#[test]
fn test_list_mixed_count_encodings() {
    let raw = r#"[
        {"workoutName":"Squats","reps":10,"sets":3},
        {"workoutName":"Lunges","reps":"12","sets":"3"}
    ]"#;

    let list: WorkoutList = serde_json::from_str(raw).unwrap();
    assert_eq!(
        list,
        vec![
            WorkoutRecord::new("Squats", 10, 3),
            WorkoutRecord::new("Lunges", 12, 3),
        ]
    );

    // Written back, counts are always numbers.
    let written = serde_json::to_string(&list).unwrap();
    assert!(written.contains(r#""reps":12"#));
    assert!(!written.contains(r#""12""#));
}

#[test]
fn test_missing_field_is_an_error() {
    let result: Result<WorkoutList, _> = serde_json::from_str(r#"[{"workoutName":"Squats"}]"#);
    assert!(result.is_err());
}

#[test]
fn test_duplicate_names_allowed() {
    let list = vec![
        WorkoutRecord::new("Squats", 10, 3),
        WorkoutRecord::new("Squats", 10, 3),
    ];
    let json = serde_json::to_string(&list).unwrap();
    let back: WorkoutList = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 2);
}

#[test]
fn test_display() {
    let record = WorkoutRecord::new("Deadlift", 5, 5);
    assert_eq!(record.to_string(), "Deadlift (5 reps x 5 sets)");
}
