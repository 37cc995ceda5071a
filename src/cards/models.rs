//! Data models for spaced-repetition cards

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::storage::HasId;

/// Default ease factor for a new card (SM-2).
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Lower bound on the ease factor (SM-2).
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Id prefix for the card sequence (`c001`, `c002`, ...).
pub const CARD_ID_PREFIX: &str = "c";

/// A single memorization unit under spaced repetition.
///
/// Scheduling state (`ease_factor`, `interval_days`, `repetitions`,
/// `next_review`) is mutated only through the review path; everything else is
/// fixed at creation except the append-only `review_history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub ease_factor: f64,
    pub interval_days: u32,
    /// Consecutive-correct counter; reset to 0 on any failed review.
    pub repetitions: u32,
    pub next_review: NaiveDate,
    pub created: NaiveDateTime,
    #[serde(default)]
    pub last_reviewed: Option<NaiveDateTime>,
    #[serde(default)]
    pub review_history: Vec<ReviewEvent>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type", default = "default_card_type")]
    pub card_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<String>,
}

fn default_card_type() -> String {
    "recall".to_string()
}

impl Card {
    /// A fresh card with SM-2 defaults, due immediately. The id is assigned
    /// by the store on append.
    pub fn new(today: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            id: String::new(),
            ease_factor: DEFAULT_EASE_FACTOR,
            interval_days: 0,
            repetitions: 0,
            next_review: today,
            created: now,
            last_reviewed: None,
            review_history: Vec::new(),
            tags: Vec::new(),
            card_type: default_card_type(),
            deck: None,
        }
    }

    /// Whether the card is due as of the given date (inclusive).
    pub fn is_due(&self, as_of: NaiveDate) -> bool {
        self.next_review <= as_of
    }
}

impl HasId for Card {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One review outcome, appended to a card's history. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEvent {
    pub date: NaiveDateTime,
    /// SM-2 quality score, 0 (blackout) to 5 (perfect recall).
    pub quality: u8,
    /// Id of the session the review happened in, empty if none.
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub notes: String,
}

/// On-disk shape of `cards.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardCollection {
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Result of running the scheduler on one review outcome. The caller applies
/// it to the card and persists; the scheduler itself has no side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleUpdate {
    pub ease_factor: f64,
    pub interval_days: u32,
    pub repetitions: u32,
    pub next_review: NaiveDate,
}

/// Aggregate statistics over a card collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardStats {
    pub total: usize,
    pub due_today: usize,
    /// Cards with demonstrated durable retention:
    /// ease > 2.5, interval > 21 days, at least 3 repetitions.
    pub mature: usize,
    /// Cards never answered correctly in a row (repetitions == 0).
    pub new: usize,
    /// Mean ease factor, 2 decimal places; 0 for an empty collection.
    pub average_ease: f64,
    /// Share of the 50 most recent reviews with quality >= 3, as a
    /// percentage with 1 decimal place; 0 when no reviews exist.
    pub recent_accuracy_pct: f64,
}

/// Card statistics extended with overdue and per-deck due counts, for the
/// session brief.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    #[serde(flatten)]
    pub stats: CardStats,
    pub overdue_count: usize,
    pub due_by_deck: HashMap<String, usize>,
}
