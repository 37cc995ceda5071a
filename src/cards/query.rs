//! Due-card queries
//!
//! Pure functions over an in-memory card collection; the caller decides where
//! the cards came from and what "as of" means.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::models::Card;

/// Cards due as of `as_of` (inclusive: cards due exactly that day count).
///
/// Ordered most-overdue first, then lowest ease first among cards due the
/// same day, so the hardest material surfaces at the top of the queue. The
/// sort is stable; further ties keep input order.
pub fn due_cards(cards: &[Card], as_of: NaiveDate) -> Vec<Card> {
    let mut due: Vec<Card> = cards.iter().filter(|c| c.is_due(as_of)).cloned().collect();
    sort_review_queue(&mut due);
    due
}

/// Cards strictly overdue as of `as_of` (`next_review < as_of`), same
/// ordering as [`due_cards`].
pub fn overdue_cards(cards: &[Card], as_of: NaiveDate) -> Vec<Card> {
    let mut overdue: Vec<Card> = cards
        .iter()
        .filter(|c| c.next_review < as_of)
        .cloned()
        .collect();
    sort_review_queue(&mut overdue);
    overdue
}

/// Count of due cards per deck; cards without a deck tally under `"unknown"`.
pub fn due_by_deck(cards: &[Card], as_of: NaiveDate) -> HashMap<String, usize> {
    let mut by_deck = HashMap::new();
    for card in cards.iter().filter(|c| c.is_due(as_of)) {
        let deck = card.deck.clone().unwrap_or_else(|| "unknown".to_string());
        *by_deck.entry(deck).or_insert(0) += 1;
    }
    by_deck
}

fn sort_review_queue(cards: &mut [Card]) {
    cards.sort_by(|a, b| {
        a.next_review
            .cmp(&b.next_review)
            .then(a.ease_factor.total_cmp(&b.ease_factor))
    });
}
