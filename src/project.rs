//! Study project wiring and the session brief
//!
//! A project keeps its record collections under `<dir>/data/`:
//!
//! ```text
//! data/
//! ├── cards.json
//! ├── sessions.json
//! ├── exercises.json
//! └── topics.json
//! ```
//!
//! The brief is a read-only join of the analytics over those collections; it
//! computes nothing the individual modules don't already expose.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cards::{card_stats, due_cards, CardStats, Card, CardStore};
use crate::clock::Clock;
use crate::exercises::{ExerciseCollection, ExerciseStore};
use crate::sessions::{
    calculate_streak, session_stats, timing_analysis, Session, SessionLog, SessionStats,
    StreakInfo, TimingStats,
};
use crate::storage::Result;
use crate::topics::{Topic, TopicStore};

/// Everything a session-opening report needs, in one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionBrief {
    pub session: SessionStats,
    pub streak: StreakInfo,
    pub timing: TimingStats,
    pub cards: CardStats,
    pub due_cards_count: usize,
    pub exercises_completed: usize,
    pub exercises_total: usize,
    pub topics_count: usize,
}

/// Compose the brief from in-memory records.
pub fn session_brief(
    sessions: &[Session],
    cards: &[Card],
    exercises: &ExerciseCollection,
    topics: &[Topic],
    today: NaiveDate,
) -> SessionBrief {
    let (exercises_completed, exercises_total) = exercises.completion_counts();

    SessionBrief {
        session: session_stats(sessions),
        streak: calculate_streak(sessions, today),
        timing: timing_analysis(sessions),
        cards: card_stats(cards, today),
        due_cards_count: due_cards(cards, today).len(),
        exercises_completed,
        exercises_total,
        topics_count: topics.len(),
    }
}

/// One study project's data directory and the stores over it.
pub struct StudyProject {
    data_dir: PathBuf,
}

impl StudyProject {
    /// A project rooted at `project_dir`; records live in its `data/`
    /// subdirectory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: project_dir.as_ref().join("data"),
        }
    }

    pub fn card_store(&self) -> CardStore {
        CardStore::new(self.data_dir.join("cards.json"))
    }

    pub fn session_log(&self) -> SessionLog {
        SessionLog::new(self.data_dir.join("sessions.json"))
    }

    pub fn exercise_store(&self) -> ExerciseStore {
        ExerciseStore::new(self.data_dir.join("exercises.json"))
    }

    pub fn topic_store(&self) -> TopicStore {
        TopicStore::new(self.data_dir.join("topics.json"))
    }

    /// Load all four collections and compose the brief as of the clock's
    /// today.
    pub fn brief(&self, clock: &dyn Clock) -> Result<SessionBrief> {
        let sessions = self.session_log().load()?;
        let cards = self.card_store().load()?;
        let exercises = self.exercise_store().load()?;
        let topics = self.topic_store().load()?;

        Ok(session_brief(
            &sessions.sessions,
            &cards.cards,
            &exercises,
            &topics.topics,
            clock.today(),
        ))
    }
}
