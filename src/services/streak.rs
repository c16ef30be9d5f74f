// SPDX-License-Identifier: MIT

//! Streak tracking over a user's challenge completion history.
//!
//! The completion history is the source of truth; `User::streaks` is a
//! cache written alongside each new completion record. All calendar-date
//! comparisons are in UTC.

use chrono::{DateTime, Utc};

use crate::models::CompletionRecord;

/// Compute the streak value for a completion happening at `now`.
///
/// Only the most recent record matters:
/// - empty history: this completion establishes day 1
/// - last record dated yesterday: streak continues
/// - last record dated today: streak unchanged (same-day repeat)
/// - anything else (gap of 2+ days, or a future-dated record): reset to 1
pub fn compute_streak(history: &[CompletionRecord], now: DateTime<Utc>) -> u32 {
    let last = match history.last() {
        Some(record) => record,
        None => return 1,
    };

    let days_since = (now.date_naive() - last.completed_at.date_naive()).num_days();
    match days_since {
        1 => last.streak + 1,
        0 => last.streak,
        _ => 1,
    }
}

/// Whether this specific challenge already has a completion record dated
/// today (UTC). Distinct from the same-day streak rule, which concerns
/// any challenge.
pub fn completed_today(
    history: &[CompletionRecord],
    challenge_id: &str,
    now: DateTime<Utc>,
) -> bool {
    let today = now.date_naive();
    history
        .iter()
        .any(|r| r.challenge_id == challenge_id && r.completed_at.date_naive() == today)
}
