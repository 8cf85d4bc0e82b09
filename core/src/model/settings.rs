use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TrackerError};

pub const DEFAULT_WEEKLY_HOURS: f64 = 15.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = TrackerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(TrackerError::Parse {
                what: "theme",
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Target study hours per curriculum week. Always positive once validated.
    pub default_weekly_hours: f64,
    pub theme: Theme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            default_weekly_hours: DEFAULT_WEEKLY_HOURS,
            theme: Theme::default(),
        }
    }
}

/// Rejects targets the progress engine cannot divide by.
pub fn validate_target_hours(hours: f64) -> Result<f64> {
    if hours > 0.0 && hours.is_finite() {
        Ok(hours)
    } else {
        Err(TrackerError::InvalidTargetHours(hours))
    }
}
