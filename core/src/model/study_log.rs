use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::TrackerError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionType {
    Morning,
    Afternoon,
    #[default]
    Evening,
    #[serde(rename = "Full Day")]
    FullDay,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionType::Morning => "Morning",
            SessionType::Afternoon => "Afternoon",
            SessionType::Evening => "Evening",
            SessionType::FullDay => "Full Day",
        };
        f.write_str(label)
    }
}

impl FromStr for SessionType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "m" | "morning" | "am" => Ok(SessionType::Morning),
            "a" | "afternoon" | "pm" => Ok(SessionType::Afternoon),
            "e" | "evening" | "night" => Ok(SessionType::Evening),
            "f" | "fullday" | "day" => Ok(SessionType::FullDay),
            _ => Err(TrackerError::Parse {
                what: "session type",
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: Uuid,
    pub date: NaiveDate,
    pub session_type: SessionType,
    pub hours: f64,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a user supplies when logging or editing a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDraft {
    pub date: NaiveDate,
    pub session_type: SessionType,
    pub hours: f64,
    pub topic: String,
    pub notes: Option<String>,
}

impl StudySession {
    pub fn new(draft: SessionDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            session_type: draft.session_type,
            hours: draft.hours,
            topic: draft.topic,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the user-editable fields, keeping id and creation time.
    pub fn apply(&mut self, draft: SessionDraft, now: DateTime<Utc>) {
        self.date = draft.date;
        self.session_type = draft.session_type;
        self.hours = draft.hours;
        self.topic = draft.topic;
        self.notes = draft.notes;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_parsing() {
        assert_eq!("morning".parse::<SessionType>().unwrap(), SessionType::Morning);
        assert_eq!("Full Day".parse::<SessionType>().unwrap(), SessionType::FullDay);
        assert_eq!("full-day".parse::<SessionType>().unwrap(), SessionType::FullDay);
        assert_eq!("e".parse::<SessionType>().unwrap(), SessionType::Evening);
        assert!("brunch".parse::<SessionType>().is_err());
        assert_eq!(SessionType::default(), SessionType::Evening);
    }

    #[test]
    fn test_session_json_layout() {
        let now = Utc::now();
        let session = StudySession::new(
            SessionDraft {
                date: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
                session_type: SessionType::FullDay,
                hours: 6.0,
                topic: "Docker".to_string(),
                notes: None,
            },
            now,
        );
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["sessionType"], "Full Day");
        assert_eq!(value["date"], "2025-01-08");
        assert!(value.get("notes").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
