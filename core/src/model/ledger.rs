use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::curriculum::{is_curriculum_week, WeekNumber};

/// Accumulated study hours per curriculum week. Missing weeks count as zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct WeeklyHoursLedger {
    hours: BTreeMap<WeekNumber, f64>,
}

impl WeeklyHoursLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hours_for(&self, week: WeekNumber) -> f64 {
        self.hours.get(&week).copied().unwrap_or(0.0)
    }

    pub fn total_hours(&self) -> f64 {
        self.hours.values().fold(0.0, |acc, h| acc + h)
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeekNumber, f64)> + '_ {
        self.hours.iter().map(|(w, h)| (*w, *h))
    }

    /// Adds hours to a week's bucket. Weeks outside the curriculum and
    /// non-positive amounts are ignored; returns whether the ledger changed.
    pub fn add(&mut self, week: WeekNumber, hours: f64) -> bool {
        if !is_curriculum_week(week) {
            warn!(week, hours, "ignoring hours for week outside the curriculum");
            return false;
        }
        if hours <= 0.0 || !hours.is_finite() {
            return false;
        }
        let entry = self.hours.entry(week).or_insert(0.0);
        *entry += hours;
        debug!(week, hours, total = *entry, "ledger updated");
        true
    }
}

impl FromIterator<(WeekNumber, f64)> for WeeklyHoursLedger {
    fn from_iter<I: IntoIterator<Item = (WeekNumber, f64)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (week, hours) in iter {
            ledger.add(week, hours);
        }
        ledger
    }
}
