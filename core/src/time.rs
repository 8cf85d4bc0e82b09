use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, Utc};

use crate::error::{Result, TrackerError};
use crate::model::curriculum::WeekNumber;

/// Source of "now" for services, so tests can pin timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Today's date in the user's local time zone.
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(t) => t.date_naive(),
        }
    }
}

/// First day of curriculum week 1.
pub fn curriculum_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Calendar week of `date` counted from `start`: `ceil(days / 7)`, never below 1.
///
/// This only picks the ledger bucket for a logged session. It is unrelated to
/// the velocity-based current week from `progress::resolve_current_week`, and
/// the result may exceed the curriculum length.
pub fn week_from_date(date: NaiveDate, start: NaiveDate) -> u32 {
    let days = date.signed_duration_since(start).num_days();
    if days <= 0 {
        return 1;
    }
    let week = (days + 6) / 7;
    u32::try_from(week).unwrap_or(u32::MAX)
}

/// Days remaining in a curriculum week relative to the current week.
pub fn days_left_in_week(week: WeekNumber, current_week: WeekNumber, today: NaiveDate) -> u32 {
    if week < current_week {
        return 0;
    }
    if week > current_week {
        return 7;
    }
    let elapsed = today.weekday().num_days_from_sunday();
    (7 - elapsed).max(1)
}

/// Parses `today`, `yesterday`, `tomorrow`, relative offsets such as `-3d`,
/// `+2w` or `+1m`, and `YYYY-MM-DD`.
pub fn parse_human_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    let err = || TrackerError::Parse {
        what: "date",
        input: input.to_string(),
    };

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return today.checked_sub_days(Days::new(1)).ok_or_else(err),
        "tomorrow" | "tom" => return today.checked_add_days(Days::new(1)).ok_or_else(err),
        _ => {}
    }

    if let Some(sign) = input.chars().next().filter(|c| *c == '+' || *c == '-') {
        let body = &input[1..];
        let unit_start = match body.char_indices().last() {
            Some((idx, _)) if idx > 0 => idx,
            _ => return Err(err()),
        };
        let (num_str, unit) = body.split_at(unit_start);
        let count: u32 = num_str.parse().map_err(|_| err())?;
        let forward = sign == '+';

        let shifted = match unit.to_lowercase().as_str() {
            "d" => shift_days(today, u64::from(count), forward),
            "w" => shift_days(today, u64::from(count) * 7, forward),
            "m" => {
                if forward {
                    today.checked_add_months(Months::new(count))
                } else {
                    today.checked_sub_months(Months::new(count))
                }
            }
            _ => None,
        };
        return shifted.ok_or_else(err);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| err())
}

fn shift_days(date: NaiveDate, days: u64, forward: bool) -> Option<NaiveDate> {
    if forward {
        date.checked_add_days(Days::new(days))
    } else {
        date.checked_sub_days(Days::new(days))
    }
}
