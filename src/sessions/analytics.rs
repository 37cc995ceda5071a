//! Session log analytics
//!
//! Pure computations over an in-memory session slice. Streaks depend on
//! "today", which the caller passes in (see [`crate::clock::Clock`]).

use chrono::{Days, NaiveDate};

use super::models::{Session, SessionStats, StreakInfo, TimingStats};
use crate::cards::algorithm::round_to;

/// Fraction of its planned duration a session must reach to not count as a
/// short session.
const SHORT_SESSION_FRACTION: f64 = 0.6;

/// Size of the recent-session window used for the recent-duration average.
const RECENT_WINDOW: usize = 7;

/// Aggregate statistics over the whole log. An empty log yields all zeros.
pub fn session_stats(sessions: &[Session]) -> SessionStats {
    let total = sessions.len();
    if total == 0 {
        return SessionStats::default();
    }

    let total_minutes: u64 = sessions.iter().map(|s| s.duration_minutes as u64).sum();
    let total_committed: u64 = sessions.iter().map(|s| s.planned_duration as u64).sum();

    let commitment_ratio = if total_committed > 0 {
        round_to(total_minutes as f64 / total_committed as f64, 2)
    } else {
        0.0
    };

    // Most recent sessions by date; the stable sort keeps input order among
    // same-day sessions
    let mut by_date_desc: Vec<&Session> = sessions.iter().collect();
    by_date_desc.sort_by(|a, b| b.date.cmp(&a.date));
    let recent = &by_date_desc[..total.min(RECENT_WINDOW)];
    let avg_recent = recent
        .iter()
        .map(|s| s.duration_minutes as f64)
        .sum::<f64>()
        / recent.len() as f64;

    SessionStats {
        total_sessions: total,
        total_minutes,
        total_committed_minutes: total_committed,
        commitment_ratio,
        avg_duration_minutes: round_to(total_minutes as f64 / total as f64, 1),
        avg_recent_duration: round_to(avg_recent, 1),
        total_cards_reviewed: sessions.iter().map(|s| s.cards_reviewed as u64).sum(),
        total_exercises_completed: sessions
            .iter()
            .map(|s| s.exercises_completed as u64)
            .sum(),
    }
}

/// Consecutive study-days ending at (or one day before) `today`, tolerating a
/// single missed day between any two counted days.
///
/// Walking the unique session dates newest-first: `expected` starts at today
/// (or yesterday, if the most recent session was yesterday); each date within
/// one day of `expected` counts and moves `expected` to the day before it;
/// the first gap over one day breaks the streak. A most-recent session older
/// than yesterday means no current streak, with `days_since` reporting the
/// gap.
pub fn calculate_streak(sessions: &[Session], today: NaiveDate) -> StreakInfo {
    let mut dates: Vec<NaiveDate> = sessions.iter().map(|s| s.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let Some(&last_session) = dates.first() else {
        return StreakInfo::default();
    };
    let days_since = (today - last_session).num_days();

    let mut expected = today;
    if last_session != today {
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        if last_session == yesterday {
            expected = yesterday;
        } else {
            return StreakInfo {
                streak: 0,
                last_session: Some(last_session),
                days_since: Some(days_since),
            };
        }
    }

    let mut streak = 0;
    for date in dates {
        if (expected - date).num_days() <= 1 {
            streak += 1;
            expected = date.checked_sub_days(Days::new(1)).unwrap_or(date);
        } else {
            break;
        }
    }

    StreakInfo {
        streak,
        last_session: Some(last_session),
        days_since: Some(days_since),
    }
}

/// Late-start and short-session analysis.
///
/// A session counts toward the late-start rate only when it carries both
/// clock strings; `HH:MM` compares correctly as text. Short sessions are
/// measured against all sessions with a nonzero plan.
pub fn timing_analysis(sessions: &[Session]) -> TimingStats {
    if sessions.is_empty() {
        return TimingStats::default();
    }

    let mut late_starts = 0;
    let mut short_sessions = 0;
    let mut total_with_timing = 0;

    for session in sessions {
        if let (Some(planned), Some(actual)) = (&session.planned_start, &session.actual_start) {
            total_with_timing += 1;
            if actual > planned {
                late_starts += 1;
            }
        }

        if session.planned_duration > 0
            && (session.duration_minutes as f64)
                < session.planned_duration as f64 * SHORT_SESSION_FRACTION
        {
            short_sessions += 1;
        }
    }

    let late_start_pct = if total_with_timing > 0 {
        round_to(late_starts as f64 / total_with_timing as f64 * 100.0, 1)
    } else {
        0.0
    };

    TimingStats {
        total_with_timing,
        late_starts,
        late_start_pct,
        short_sessions,
        short_session_pct: round_to(short_sessions as f64 / sessions.len() as f64 * 100.0, 1),
    }
}
