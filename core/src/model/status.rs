use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle label of a curriculum week. Derived on every read, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Behind,
}

impl fmt::Display for WeekStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WeekStatus::NotStarted => "Not Started",
            WeekStatus::InProgress => "In Progress",
            WeekStatus::Completed => "Completed",
            WeekStatus::Behind => "Behind",
        };
        f.write_str(label)
    }
}
