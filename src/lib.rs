//! Studium: spaced-repetition study tracking core
//!
//! This crate provides:
//! - SM-2 spaced repetition scheduling (pure, no I/O)
//! - Due-card queries and card statistics
//! - Append-only session logging with streak/timing/aggregate analytics
//! - JSON-file-backed stores for cards, sessions, exercises, and topics
//!
//! Front-end concerns (CLI dispatch, report rendering, project scaffolding)
//! live outside this crate: callers hand in decoded records and get decoded
//! records back.

pub mod cards;
pub mod clock;
pub mod exercises;
pub mod project;
pub mod sessions;
pub mod storage;
pub mod topics;

pub use cards::{schedule, Card, CardStats, CardStore, ReviewEvent, ScheduleUpdate};
pub use clock::{Clock, FixedClock, SystemClock};
pub use project::{session_brief, SessionBrief, StudyProject};
pub use sessions::{Session, SessionLog, SessionStats, StreakInfo, TimingStats};
pub use storage::{StoreError, Result};
