//! Study sessions
//!
//! Append-only session log plus the analytics computed over it: aggregate
//! stats, the study streak, and timing drift.

pub mod analytics;
pub mod models;
pub mod storage;

pub use analytics::{calculate_streak, session_stats, timing_analysis};
pub use models::*;
pub use storage::SessionLog;
