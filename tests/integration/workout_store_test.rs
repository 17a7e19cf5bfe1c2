//! Integration tests for the workout store.
//!
//! Runs the list properties against every storage backend:
//! - appends preserve order
//! - removal and replacement touch only the addressed position
//! - out-of-bounds indices fail without writing
//! - save/load round-trips
//! - backends shared between tasks keep each write whole

use std::sync::Arc;

use muscle_hustle::storage::{Database, FileStore, KeyValueStore, MemoryStore};
use muscle_hustle::workouts::{WorkoutRecord, WorkoutStore, WorkoutStoreError};
use tempfile::TempDir;

/// Test helper holding a backend and whatever keeps it alive.
struct Backend {
    name: &'static str,
    storage: Arc<dyn KeyValueStore>,
    _dir: Option<TempDir>,
}

async fn backends() -> Vec<Backend> {
    let file_dir = TempDir::new().unwrap();
    let file_store = FileStore::open(file_dir.path()).await.unwrap();

    let db_dir = TempDir::new().unwrap();
    let database = Database::open(&db_dir.path().join("store.db")).unwrap();

    vec![
        Backend {
            name: "memory",
            storage: Arc::new(MemoryStore::new()),
            _dir: None,
        },
        Backend {
            name: "file",
            storage: Arc::new(file_store),
            _dir: Some(file_dir),
        },
        Backend {
            name: "sqlite",
            storage: Arc::new(database),
            _dir: Some(db_dir),
        },
    ]
}

fn records() -> Vec<WorkoutRecord> {
    vec![
        WorkoutRecord::new("Squats", 10, 3),
        WorkoutRecord::new("Bench Press", 8, 4),
        WorkoutRecord::new("Squats", 10, 3),
        WorkoutRecord::new("Deadlift", 5, 5),
    ]
}

#[tokio::test]
async fn test_adds_preserve_order() {
    for backend in backends().await {
        let store = WorkoutStore::new(backend.storage.clone());

        for record in records() {
            store.add(record).await.unwrap();
        }

        assert_eq!(store.load().await.unwrap(), records(), "{}", backend.name);
    }
}

#[tokio::test]
async fn test_remove_keeps_relative_order() {
    for backend in backends().await {
        let store = WorkoutStore::new(backend.storage.clone());
        store.save(&records()).await.unwrap();

        let returned = store.remove_at(1).await.unwrap();

        let mut expected = records();
        expected.remove(1);
        assert_eq!(returned, expected, "{}", backend.name);
        assert_eq!(store.load().await.unwrap(), expected, "{}", backend.name);
    }
}

#[tokio::test]
async fn test_update_changes_only_target() {
    for backend in backends().await {
        let store = WorkoutStore::new(backend.storage.clone());
        store.save(&records()).await.unwrap();

        let replacement = WorkoutRecord::new("Front Squats", 6, 5);
        store.update_at(2, replacement.clone()).await.unwrap();

        let mut expected = records();
        expected[2] = replacement;
        assert_eq!(store.load().await.unwrap(), expected, "{}", backend.name);
    }
}

#[tokio::test]
async fn test_out_of_bounds_does_not_write() {
    for backend in backends().await {
        let store = WorkoutStore::new(backend.storage.clone());
        store.save(&records()).await.unwrap();
        let before = backend.storage.get("workouts").await.unwrap();

        let len = records().len();
        for index in [len, len + 10, usize::MAX] {
            assert!(
                matches!(
                    store.remove_at(index).await,
                    Err(WorkoutStoreError::IndexOutOfBounds { .. })
                ),
                "{}",
                backend.name
            );
            assert!(matches!(
                store.update_at(index, WorkoutRecord::new("X", 1, 1)).await,
                Err(WorkoutStoreError::IndexOutOfBounds { .. })
            ));
            assert!(matches!(
                store.finish_at(index).await,
                Err(WorkoutStoreError::IndexOutOfBounds { .. })
            ));
        }

        assert_eq!(backend.storage.get("workouts").await.unwrap(), before);
    }
}

#[tokio::test]
async fn test_save_roundtrip_and_idempotence() {
    for backend in backends().await {
        let store = WorkoutStore::new(backend.storage.clone());

        store.save(&[]).await.unwrap();
        assert!(store.load().await.unwrap().is_empty(), "{}", backend.name);

        store.save(&records()).await.unwrap();
        store.save(&records()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), records(), "{}", backend.name);
    }
}

#[tokio::test]
async fn test_squats_scenario() {
    for backend in backends().await {
        let store = WorkoutStore::new(backend.storage.clone());

        assert!(store.load().await.unwrap().is_empty());

        store.add(WorkoutRecord::new("Squats", 10, 3)).await.unwrap();
        assert_eq!(
            store.load().await.unwrap(),
            vec![WorkoutRecord::new("Squats", 10, 3)]
        );

        store
            .update_at(0, WorkoutRecord::new("Squats", 12, 3))
            .await
            .unwrap();
        assert_eq!(
            store.load().await.unwrap(),
            vec![WorkoutRecord::new("Squats", 12, 3)]
        );

        store.remove_at(0).await.unwrap();
        assert!(store.load().await.unwrap().is_empty(), "{}", backend.name);
    }
}

#[tokio::test]
async fn test_reads_legacy_string_counts() {
    for backend in backends().await {
        backend
            .storage
            .set(
                "workouts",
                r#"[{"workoutName":"Push Ups","reps":"20","sets":"2"}]"#,
            )
            .await
            .unwrap();

        let store = WorkoutStore::new(backend.storage.clone());
        assert_eq!(
            store.load().await.unwrap(),
            vec![WorkoutRecord::new("Push Ups", 20, 2)],
            "{}",
            backend.name
        );
    }
}

#[tokio::test]
async fn test_loads_fractional_and_negative_counts() {
    for backend in backends().await {
        backend
            .storage
            .set(
                "workouts",
                r#"[{"workoutName":"Squats","reps":"10","sets":"3"},{"workoutName":"Plank","reps":"1.5","sets":"-2"}]"#,
            )
            .await
            .unwrap();

        let store = WorkoutStore::new(backend.storage.clone());
        assert_eq!(
            store.load().await.unwrap(),
            vec![
                WorkoutRecord::new("Squats", 10, 3),
                WorkoutRecord::new("Plank", 1, 0),
            ],
            "{}",
            backend.name
        );

        // The rest of the list stays editable.
        let list = store.remove_at(1).await.unwrap();
        assert_eq!(list, vec![WorkoutRecord::new("Squats", 10, 3)], "{}", backend.name);
    }
}

/// Run concurrent whole-value writes against one key from separate tasks.
async fn assert_concurrent_sets_are_atomic(name: &str, storage: Arc<dyn KeyValueStore>) {
    let values: Vec<String> = (0..16)
        .map(|i| {
            let list = vec![WorkoutRecord::new(format!("Workout {i}"), i, i); 2_000];
            serde_json::to_string(&list).unwrap()
        })
        .collect();

    for _ in 0..5 {
        let handles: Vec<_> = values
            .iter()
            .cloned()
            .map(|value| {
                let storage = storage.clone();
                tokio::spawn(async move { storage.set("workouts", &value).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap_or_else(|e| panic!("{name}: {e}"));
        }

        let stored = storage.get("workouts").await.unwrap().unwrap();
        assert!(values.contains(&stored), "{name}: stored value matches no write");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sets_file_store() {
    let dir = TempDir::new().unwrap();
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).await.unwrap());
    assert_concurrent_sets_are_atomic("file", storage).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sets_database() {
    let dir = TempDir::new().unwrap();
    let storage: Arc<dyn KeyValueStore> =
        Arc::new(Database::open(&dir.path().join("store.db")).unwrap());
    assert_concurrent_sets_are_atomic("sqlite", storage).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_from_tasks_all_succeed() {
    for backend in backends().await {
        let store = WorkoutStore::new(backend.storage.clone());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.add(WorkoutRecord::new("Rows", i, 1)).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // Last write wins, so some adds may be lost, but the list always parses.
        let list = store.load().await.unwrap();
        assert!(!list.is_empty() && list.len() <= 8, "{}", backend.name);
    }
}

#[tokio::test]
async fn test_interleaved_writers_last_write_wins() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let screen_a = WorkoutStore::new(storage.clone());
    let screen_b = WorkoutStore::new(storage.clone());

    // Both screens read the same snapshot, then write independently.
    let mut a_view = screen_a.load().await.unwrap();
    let mut b_view = screen_b.load().await.unwrap();
    a_view.push(WorkoutRecord::new("From A", 1, 1));
    b_view.push(WorkoutRecord::new("From B", 2, 2));

    screen_a.save(&a_view).await.unwrap();
    screen_b.save(&b_view).await.unwrap();

    assert_eq!(
        screen_a.load().await.unwrap(),
        vec![WorkoutRecord::new("From B", 2, 2)]
    );
}
