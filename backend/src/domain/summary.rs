//! Practice summary: recent scores, day streak and accumulated practice time.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Attempt;

/// Number of most recent attempts shown in the summary.
pub const SUMMARY_WINDOW: usize = 10;

/// Nominal practice minutes credited per attempt.
pub const MINUTES_PER_ATTEMPT: u64 = 2;

/// Display format for attempt times.
const TIME_FORMAT: &str = "%H:%M";

/// Aggregated view of the learner's practice history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PracticeSummary {
    /// `HH:MM` creation times of the recent attempts, oldest first.
    pub dates: Vec<String>,
    /// Scores of the recent attempts, aligned with `dates`.
    pub scores: Vec<f64>,
    /// Consecutive practice days ending today or yesterday.
    pub current_streak: u32,
    /// Total attempts multiplied by [`MINUTES_PER_ATTEMPT`].
    pub total_minutes: u64,
}

impl PracticeSummary {
    /// Assemble a summary.
    ///
    /// `recent` must be ordered newest first, as the repository returns it.
    pub fn build(
        recent: &[Attempt],
        total_attempts: u64,
        activity_days: &[NaiveDate],
        today: NaiveDate,
    ) -> Self {
        let oldest_first = recent.iter().take(SUMMARY_WINDOW).rev();
        let (dates, scores): (Vec<String>, Vec<f64>) = oldest_first
            .map(|attempt| {
                (
                    attempt.created_at.format(TIME_FORMAT).to_string(),
                    attempt.score,
                )
            })
            .unzip();

        Self {
            dates,
            scores,
            current_streak: current_streak(activity_days, today),
            total_minutes: total_attempts.saturating_mul(MINUTES_PER_ATTEMPT),
        }
    }
}

/// Count consecutive practice days walking back from the latest one.
///
/// The streak is alive only if the latest practice day is `today` or the day
/// before. Days are UTC calendar dates; duplicates are ignored.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use worddee_backend::domain::current_streak;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 10).expect("valid date");
/// let yesterday = NaiveDate::from_ymd_opt(2024, 5, 9).expect("valid date");
/// assert_eq!(current_streak(&[yesterday, today], today), 2);
/// ```
pub fn current_streak(activity_days: &[NaiveDate], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = activity_days.iter().copied().collect();
    let mut newest_first = days.into_iter().rev();

    let Some(latest) = newest_first.next() else {
        return 0;
    };
    let alive = latest == today || today.pred_opt() == Some(latest);
    if !alive {
        return 0;
    }

    let mut streak = 1;
    let mut previous = latest;
    for day in newest_first {
        if previous.pred_opt() != Some(day) {
            break;
        }
        streak += 1;
        previous = day;
    }
    streak
}
