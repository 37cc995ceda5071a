//! SM-2 spaced repetition scheduling
//!
//! Quality ratings (0-5):
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but upon seeing answer, remembered
//! - 2: Incorrect, but answer seemed easy to recall
//! - 3: Correct response with serious difficulty
//! - 4: Correct response after hesitation
//! - 5: Perfect response with no hesitation

use chrono::{Days, NaiveDate};

use super::models::{ScheduleUpdate, MIN_EASE_FACTOR};
use crate::storage::{Result, StoreError};

/// Compute the next scheduling state for one review outcome.
///
/// Quality >= 3 counts as correct: the interval progresses 1 day, 6 days,
/// then `round(interval * ease)`, and `repetitions` increments. A failed
/// review resets `repetitions` to 0 and the interval to 1 day. The ease
/// factor is recalculated from the quality either way and floored at 1.3.
///
/// `today` is the review date, not necessarily the system date, so reviews
/// can be applied deterministically or backfilled.
pub fn schedule(
    quality: u8,
    ease_factor: f64,
    interval_days: u32,
    repetitions: u32,
    today: NaiveDate,
) -> Result<ScheduleUpdate> {
    if quality > 5 {
        return Err(StoreError::InvalidInput(format!(
            "quality must be 0-5, got {}",
            quality
        )));
    }

    let (interval_days, repetitions) = if quality >= 3 {
        let interval = match repetitions {
            0 => 1,
            1 => 6,
            _ => (interval_days as f64 * ease_factor).round() as u32,
        };
        (interval, repetitions + 1)
    } else {
        (1, 0)
    };

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored at 1.3
    let miss = (5 - quality) as f64;
    let ease_factor = (ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR);
    let ease_factor = round_to(ease_factor, 4);

    let next_review = today
        .checked_add_days(Days::new(interval_days as u64))
        .ok_or_else(|| {
            StoreError::InvalidInput(format!("interval of {} days overflows date", interval_days))
        })?;

    Ok(ScheduleUpdate {
        ease_factor,
        interval_days,
        repetitions,
        next_review,
    })
}

pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn first_correct_review_gives_one_day() {
        let update = schedule(5, 2.5, 0, 0, date("2024-01-10")).unwrap();

        assert_eq!(update.interval_days, 1);
        assert_eq!(update.repetitions, 1);
        assert_eq!(update.next_review, date("2024-01-11"));
        assert_eq!(update.ease_factor, 2.6);
    }

    #[test]
    fn second_correct_review_gives_six_days() {
        let update = schedule(4, 2.5, 1, 1, date("2024-01-11")).unwrap();

        assert_eq!(update.interval_days, 6);
        assert_eq!(update.repetitions, 2);
        assert_eq!(update.next_review, date("2024-01-17"));
    }

    #[test]
    fn third_correct_review_multiplies_by_ease() {
        let update = schedule(4, 2.5, 6, 2, date("2024-01-17")).unwrap();

        // round(6 * 2.5) = 15
        assert_eq!(update.interval_days, 15);
        assert_eq!(update.repetitions, 3);
        assert_eq!(update.next_review, date("2024-02-01"));
    }

    #[test]
    fn failure_resets_repetitions_and_interval() {
        for quality in 0..3 {
            let update = schedule(quality, 2.5, 30, 7, date("2024-01-10")).unwrap();

            assert_eq!(update.repetitions, 0, "quality {}", quality);
            assert_eq!(update.interval_days, 1, "quality {}", quality);
            assert_eq!(update.next_review, date("2024-01-11"));
        }
    }

    #[test]
    fn ease_factor_never_drops_below_floor() {
        for quality in 0..=5 {
            let update = schedule(quality, 1.3, 10, 4, date("2024-01-10")).unwrap();
            assert!(update.ease_factor >= MIN_EASE_FACTOR, "quality {}", quality);
        }
    }

    #[test]
    fn ease_factor_penalty_is_concave() {
        // Perfect recall gains 0.1, total blackout loses 0.8
        let perfect = schedule(5, 2.5, 6, 2, date("2024-01-10")).unwrap();
        assert_eq!(perfect.ease_factor, 2.6);

        let blackout = schedule(0, 2.5, 6, 2, date("2024-01-10")).unwrap();
        assert_eq!(blackout.ease_factor, 1.7);
    }

    #[test]
    fn ease_factor_rounds_to_four_places() {
        // quality 4: delta = 0.1 - 1 * (0.08 + 0.02) = 0
        let update = schedule(4, 2.1234, 6, 2, date("2024-01-10")).unwrap();
        assert_eq!(update.ease_factor, 2.1234);

        // quality 3: delta = 0.1 - 2 * (0.08 + 0.04) = -0.14
        let update = schedule(3, 2.0001, 6, 2, date("2024-01-10")).unwrap();
        assert_eq!(update.ease_factor, 1.8601);
    }

    #[test]
    fn out_of_range_quality_is_rejected() {
        let err = schedule(6, 2.5, 0, 0, date("2024-01-10")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }
}
