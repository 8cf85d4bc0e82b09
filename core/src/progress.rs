//! Progress derivation: current week, per-week status and completion percentages.
//!
//! Every function here is pure. Callers guarantee `target_hours > 0`; the
//! settings layer rejects anything else before it can reach these functions.

use crate::model::curriculum::{WeekNumber, TOTAL_WEEKS};
use crate::model::ledger::WeeklyHoursLedger;
use crate::model::status::WeekStatus;

/// Curriculum week implied by total logged hours at the given weekly pace.
///
/// The result is always in `1..=TOTAL_WEEKS`: an empty ledger starts at week 1
/// and studying beyond the full plan stays on the last week.
pub fn resolve_current_week(ledger: &WeeklyHoursLedger, target_hours_per_week: f64) -> WeekNumber {
    let total_hours = ledger.total_hours();
    let completed_weeks = (total_hours / target_hours_per_week).floor();
    if completed_weeks >= f64::from(TOTAL_WEEKS) {
        return TOTAL_WEEKS;
    }
    // completed_weeks is a non-negative integer below TOTAL_WEEKS here
    (completed_weeks.max(0.0) as WeekNumber + 1).min(TOTAL_WEEKS)
}

/// Classifies one week. Rules are checked in order and the first match wins.
pub fn classify(
    week: WeekNumber,
    studied_hours: f64,
    target_hours: f64,
    current_week: WeekNumber,
) -> WeekStatus {
    if week > current_week {
        return WeekStatus::NotStarted;
    }
    if studied_hours >= target_hours {
        return WeekStatus::Completed;
    }
    if week == current_week && studied_hours > 0.0 {
        return WeekStatus::InProgress;
    }
    if week < current_week {
        return WeekStatus::Behind;
    }
    if week == current_week {
        return WeekStatus::InProgress;
    }
    WeekStatus::NotStarted
}

/// Completion percentage capped at 100. Not clamped below zero.
pub fn percent(studied: f64, target: f64) -> f64 {
    ((studied / target) * 100.0).min(100.0)
}

/// Hours needed to finish the whole curriculum at the given pace.
pub fn total_target_hours(target_hours_per_week: f64) -> f64 {
    f64::from(TOTAL_WEEKS) * target_hours_per_week
}

/// Overall completion of the curriculum.
pub fn overall_percent(ledger: &WeeklyHoursLedger, target_hours_per_week: f64) -> f64 {
    percent(ledger.total_hours(), total_target_hours(target_hours_per_week))
}

/// Status of a week straight from the ledger.
pub fn week_status(
    ledger: &WeeklyHoursLedger,
    week: WeekNumber,
    target_hours_per_week: f64,
    current_week: WeekNumber,
) -> WeekStatus {
    classify(week, ledger.hours_for(week), target_hours_per_week, current_week)
}
