//! Card store: one `cards.json` collection file
//!
//! Every mutating operation rewrites the whole collection immediately, so
//! callers never observe a partial write. Id assignment lives here, not on
//! the card: appended cards get the next `c`-prefixed sequence id.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};

use super::algorithm::schedule;
use super::models::{Card, CardCollection, ReviewEvent, CARD_ID_PREFIX};
use crate::storage::{self, next_id, Result, StoreError};

pub struct CardStore {
    path: PathBuf,
}

impl CardStore {
    /// A store backed by the given `cards.json` path. The file is created on
    /// first write; a store over a missing file loads as empty.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the full collection. Missing file reads as empty.
    pub fn load(&self) -> Result<CardCollection> {
        storage::read_collection(&self.path)
    }

    /// Persist the full collection.
    pub fn save(&self, collection: &CardCollection) -> Result<()> {
        storage::write_collection(&self.path, collection)
    }

    /// Append a card, assigning the next id in the `c` sequence. Returns the
    /// assigned id.
    pub fn append(&self, mut card: Card) -> Result<String> {
        let mut collection = self.load()?;

        let id = next_id(&collection.cards, CARD_ID_PREFIX);
        card.id = id.clone();
        collection.cards.push(card);

        self.save(&collection)?;
        log::info!("Added card {}", id);
        Ok(id)
    }

    /// Look up a card by id.
    pub fn find_by_id(&self, id: &str) -> Result<Card> {
        let collection = self.load()?;
        collection
            .cards
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("card {}", id)))
    }

    /// Replace the stored card matching `card.id`.
    pub fn update(&self, card: &Card) -> Result<()> {
        let mut collection = self.load()?;
        let pos = collection
            .cards
            .iter()
            .position(|c| c.id == card.id)
            .ok_or_else(|| StoreError::NotFound(format!("card {}", card.id)))?;

        collection.cards[pos] = card.clone();
        self.save(&collection)
    }

    /// Apply one graded review to a card: run the scheduler, stamp
    /// `last_reviewed`, append exactly one history event, and persist.
    /// Returns the updated card.
    ///
    /// `today` is the review date fed to the scheduler; `now` is the
    /// timestamp recorded on the card and its history event.
    pub fn review(
        &self,
        card_id: &str,
        quality: u8,
        session_id: &str,
        context: &str,
        notes: &str,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<Card> {
        let mut collection = self.load()?;
        let card = collection
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or_else(|| StoreError::NotFound(format!("card {}", card_id)))?;

        let update = schedule(
            quality,
            card.ease_factor,
            card.interval_days,
            card.repetitions,
            today,
        )?;

        card.ease_factor = update.ease_factor;
        card.interval_days = update.interval_days;
        card.repetitions = update.repetitions;
        card.next_review = update.next_review;
        card.last_reviewed = Some(now);
        card.review_history.push(ReviewEvent {
            date: now,
            quality,
            session: session_id.to_string(),
            context: context.to_string(),
            notes: notes.to_string(),
        });

        let updated = card.clone();
        self.save(&collection)?;
        log::info!(
            "Reviewed card {} (quality {}), next review {}",
            card_id,
            quality,
            updated.next_review
        );
        Ok(updated)
    }
}
