//! Data models for study sessions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::HasId;

/// Id prefix for the session sequence (`s001`, `s002`, ...).
pub const SESSION_ID_PREFIX: &str = "s";

/// One study session. Sessions are append-only log entries: created once,
/// never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub planned_duration: u32,
    /// Planned start as an `HH:MM` 24-hour clock string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_start: Option<String>,
    /// Actual start as an `HH:MM` 24-hour clock string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start: Option<String>,
    #[serde(default)]
    pub cards_reviewed: u32,
    #[serde(default)]
    pub exercises_completed: u32,
}

impl Session {
    /// A session with the given date and zeroed counters. The id is assigned
    /// by the log on append.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: String::new(),
            date,
            duration_minutes: 0,
            planned_duration: 0,
            planned_start: None,
            actual_start: None,
            cards_reviewed: 0,
            exercises_completed: 0,
        }
    }
}

impl HasId for Session {
    fn id(&self) -> &str {
        &self.id
    }
}

/// On-disk shape of `sessions.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionCollection {
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// Aggregate statistics over the session log. All fields are zero for an
/// empty log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_sessions: usize,
    pub total_minutes: u64,
    pub total_committed_minutes: u64,
    /// Actual over planned minutes, 2 decimal places; 0 when nothing was
    /// planned.
    pub commitment_ratio: f64,
    pub avg_duration_minutes: f64,
    /// Average duration over the 7 most recent sessions by date.
    pub avg_recent_duration: f64,
    pub total_cards_reviewed: u64,
    pub total_exercises_completed: u64,
}

/// Current study streak, counted backward from today with a one-day gap
/// tolerance between counted days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakInfo {
    pub streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_session: Option<NaiveDate>,
    /// Days from today back to the most recent session; absent when the log
    /// is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_since: Option<i64>,
}

/// Late-start and short-session counts over the log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    /// Sessions carrying both a planned and an actual start time.
    pub total_with_timing: usize,
    pub late_starts: usize,
    /// Late starts as a percentage of sessions with timing data, 1 decimal
    /// place.
    pub late_start_pct: f64,
    /// Sessions running under 60% of their planned duration.
    pub short_sessions: usize,
    /// Short sessions as a percentage of all sessions, 1 decimal place.
    pub short_session_pct: f64,
}
