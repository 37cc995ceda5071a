//! Practice exercises
//!
//! Exercises live beside cards and sessions in the project data directory.
//! The core only appends them and counts completions for the session brief;
//! working through an exercise happens outside this crate.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::storage::{self, next_id, HasId, Result};

/// Id prefix for the exercise sequence (`e001`, `e002`, ...).
pub const EXERCISE_ID_PREFIX: &str = "e";

/// A practice exercise tied to a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created: NaiveDateTime,
}

impl Exercise {
    /// A new, not-yet-completed exercise. The id is assigned by the store on
    /// append.
    pub fn new(title: String, now: NaiveDateTime) -> Self {
        Self {
            id: String::new(),
            title,
            topic: None,
            completed: false,
            created: now,
        }
    }
}

impl HasId for Exercise {
    fn id(&self) -> &str {
        &self.id
    }
}

/// On-disk shape of `exercises.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCollection {
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl ExerciseCollection {
    /// Completed count out of the total.
    pub fn completion_counts(&self) -> (usize, usize) {
        let completed = self.exercises.iter().filter(|e| e.completed).count();
        (completed, self.exercises.len())
    }
}

/// Store backed by one `exercises.json` file.
pub struct ExerciseStore {
    path: PathBuf,
}

impl ExerciseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the full collection. Missing file reads as empty.
    pub fn load(&self) -> Result<ExerciseCollection> {
        storage::read_collection(&self.path)
    }

    /// Persist the full collection.
    pub fn save(&self, collection: &ExerciseCollection) -> Result<()> {
        storage::write_collection(&self.path, collection)
    }

    /// Append an exercise, assigning the next id in the `e` sequence.
    /// Returns the assigned id.
    pub fn append(&self, mut exercise: Exercise) -> Result<String> {
        let mut collection = self.load()?;

        let id = next_id(&collection.exercises, EXERCISE_ID_PREFIX);
        exercise.id = id.clone();
        collection.exercises.push(exercise);

        self.save(&collection)?;
        log::info!("Added exercise {}", id);
        Ok(id)
    }
}
