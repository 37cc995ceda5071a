//! Spaced-repetition cards
//!
//! This module provides:
//! - Card and review-event records (`models`)
//! - The SM-2 scheduling function (`algorithm`)
//! - Due-card queries and ordering (`query`)
//! - Collection statistics (`stats`)
//! - The JSON-file-backed card store (`storage`)

pub mod algorithm;
pub mod models;
pub mod query;
pub mod stats;
pub mod storage;

pub use algorithm::schedule;
pub use models::*;
pub use query::{due_by_deck, due_cards, overdue_cards};
pub use stats::{card_stats, review_summary};
pub use storage::CardStore;
