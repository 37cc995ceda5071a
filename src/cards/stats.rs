//! Aggregate card statistics

use chrono::NaiveDate;

use super::algorithm::round_to;
use super::models::{Card, CardStats, ReviewSummary, ReviewEvent};
use super::query::{due_by_deck, overdue_cards};

/// Collection-level statistics: totals, maturity breakdown, mean ease, and
/// recent review accuracy. All fields are zero for an empty collection.
pub fn card_stats(cards: &[Card], today: NaiveDate) -> CardStats {
    let total = cards.len();
    let due_today = cards.iter().filter(|c| c.is_due(today)).count();
    let mature = cards
        .iter()
        .filter(|c| c.ease_factor > 2.5 && c.interval_days > 21 && c.repetitions >= 3)
        .count();
    let new = cards.iter().filter(|c| c.repetitions == 0).count();

    let average_ease = if total > 0 {
        round_to(
            cards.iter().map(|c| c.ease_factor).sum::<f64>() / total as f64,
            2,
        )
    } else {
        0.0
    };

    // Accuracy over the 50 most recent reviews, pooled across all cards
    let mut reviews: Vec<&ReviewEvent> = cards.iter().flat_map(|c| &c.review_history).collect();
    reviews.sort_by(|a, b| b.date.cmp(&a.date));
    let recent = &reviews[..reviews.len().min(50)];
    let recent_accuracy_pct = if recent.is_empty() {
        0.0
    } else {
        let correct = recent.iter().filter(|r| r.quality >= 3).count();
        round_to(correct as f64 / recent.len() as f64 * 100.0, 1)
    };

    CardStats {
        total,
        due_today,
        mature,
        new,
        average_ease,
        recent_accuracy_pct,
    }
}

/// [`card_stats`] plus overdue and per-deck due counts, as consumed by the
/// session brief.
pub fn review_summary(cards: &[Card], today: NaiveDate) -> ReviewSummary {
    ReviewSummary {
        stats: card_stats(cards, today),
        overdue_count: overdue_cards(cards, today).len(),
        due_by_deck: due_by_deck(cards, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn datetime(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn card(id: &str) -> Card {
        let mut card = Card::new(date("2024-01-01"), datetime("2024-01-01T09:00:00"));
        card.id = id.to_string();
        card
    }

    fn review(date: &str, quality: u8) -> ReviewEvent {
        ReviewEvent {
            date: datetime(date),
            quality,
            session: String::new(),
            context: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn empty_collection_yields_all_zeros() {
        let stats = card_stats(&[], date("2024-01-10"));
        assert_eq!(stats, CardStats::default());
    }

    #[test]
    fn mature_requires_all_three_thresholds() {
        let mut mature = card("c001");
        mature.ease_factor = 2.6;
        mature.interval_days = 30;
        mature.repetitions = 3;

        // Long interval but ease at (not above) 2.5
        let mut almost = card("c002");
        almost.ease_factor = 2.5;
        almost.interval_days = 30;
        almost.repetitions = 5;

        // High ease but interval at (not above) 21 days
        let mut short = card("c003");
        short.ease_factor = 2.8;
        short.interval_days = 21;
        short.repetitions = 4;

        let stats = card_stats(&[mature, almost, short], date("2024-01-10"));
        assert_eq!(stats.mature, 1);
    }

    #[test]
    fn new_counts_zero_repetition_cards() {
        let fresh = card("c001");
        let mut failed_back_to_new = card("c002");
        failed_back_to_new.repetitions = 0;
        failed_back_to_new.review_history.push(review("2024-01-05T10:00:00", 2));
        let mut reviewed = card("c003");
        reviewed.repetitions = 2;

        let stats = card_stats(&[fresh, failed_back_to_new, reviewed], date("2024-01-10"));
        assert_eq!(stats.new, 2);
    }

    #[test]
    fn average_ease_rounds_to_two_places() {
        let mut a = card("c001");
        a.ease_factor = 2.5;
        let mut b = card("c002");
        b.ease_factor = 1.3;

        let stats = card_stats(&[a, b], date("2024-01-10"));
        assert_eq!(stats.average_ease, 1.9);
    }

    #[test]
    fn accuracy_pools_reviews_across_cards() {
        let mut a = card("c001");
        a.review_history.push(review("2024-01-05T10:00:00", 5));
        a.review_history.push(review("2024-01-06T10:00:00", 2));
        let mut b = card("c002");
        b.review_history.push(review("2024-01-07T10:00:00", 4));
        b.review_history.push(review("2024-01-08T10:00:00", 3));

        let stats = card_stats(&[a, b], date("2024-01-10"));
        assert_eq!(stats.recent_accuracy_pct, 75.0);
    }

    #[test]
    fn accuracy_window_keeps_only_most_recent_fifty() {
        let mut old_misses = card("c001");
        for day in 1..=25 {
            old_misses
                .review_history
                .push(review(&format!("2024-01-{:02}T08:00:00", day), 0));
        }
        let mut recent_hits = card("c002");
        for day in 1..=25 {
            recent_hits
                .review_history
                .push(review(&format!("2024-02-{:02}T08:00:00", day), 5));
        }
        for day in 1..=25 {
            recent_hits
                .review_history
                .push(review(&format!("2024-03-{:02}T08:00:00", day), 5));
        }

        // 75 reviews total; the 50 most recent are all correct
        let stats = card_stats(&[old_misses, recent_hits], date("2024-04-01"));
        assert_eq!(stats.recent_accuracy_pct, 100.0);
    }

    #[test]
    fn summary_carries_overdue_and_deck_counts() {
        let mut overdue = card("c001");
        overdue.next_review = date("2024-01-05");
        overdue.deck = Some("rust".to_string());
        let mut due_today = card("c002");
        due_today.next_review = date("2024-01-10");

        let summary = review_summary(&[overdue, due_today], date("2024-01-10"));

        assert_eq!(summary.stats.total, 2);
        assert_eq!(summary.stats.due_today, 2);
        assert_eq!(summary.overdue_count, 1);
        assert_eq!(summary.due_by_deck["rust"], 1);
        assert_eq!(summary.due_by_deck["unknown"], 1);
    }
}
