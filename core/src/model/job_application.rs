use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::TrackerError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    #[serde(rename = "Phone Screen")]
    PhoneScreen,
    #[serde(rename = "Technical Interview")]
    TechnicalInterview,
    #[serde(rename = "Final Interview")]
    FinalInterview,
    Offer,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 7] = [
        ApplicationStatus::Applied,
        ApplicationStatus::PhoneScreen,
        ApplicationStatus::TechnicalInterview,
        ApplicationStatus::FinalInterview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ];

    /// Still waiting on an outcome.
    pub fn is_active(&self) -> bool {
        !matches!(
            self,
            ApplicationStatus::Offer | ApplicationStatus::Rejected | ApplicationStatus::Withdrawn
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::PhoneScreen => "Phone Screen",
            ApplicationStatus::TechnicalInterview => "Technical Interview",
            ApplicationStatus::FinalInterview => "Final Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
        };
        f.write_str(label)
    }
}

impl FromStr for ApplicationStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "phonescreen" | "phone" | "screen" => Ok(ApplicationStatus::PhoneScreen),
            "technicalinterview" | "technical" | "tech" => Ok(ApplicationStatus::TechnicalInterview),
            "finalinterview" | "final" => Ok(ApplicationStatus::FinalInterview),
            "offer" => Ok(ApplicationStatus::Offer),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "withdrawn" => Ok(ApplicationStatus::Withdrawn),
            _ => Err(TrackerError::Parse {
                what: "application status",
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDraft {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    pub salary: Option<String>,
    pub notes: Option<String>,
}

impl JobApplication {
    pub fn new(draft: ApplicationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company: draft.company,
            position: draft.position,
            location: draft.location,
            application_date: draft.application_date,
            status: draft.status,
            salary: draft.salary,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: ApplicationDraft, now: DateTime<Utc>) {
        self.company = draft.company;
        self.position = draft.position;
        self.location = draft.location;
        self.application_date = draft.application_date;
        self.status = draft.status;
        self.salary = draft.salary;
        self.notes = draft.notes;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_labels() {
        for status in ApplicationStatus::ALL {
            assert_eq!(status.to_string().parse::<ApplicationStatus>().unwrap(), status);
        }
        let json = serde_json::to_string(&ApplicationStatus::TechnicalInterview).unwrap();
        assert_eq!(json, r#""Technical Interview""#);
    }

    #[test]
    fn test_active_statuses() {
        assert!(ApplicationStatus::PhoneScreen.is_active());
        assert!(!ApplicationStatus::Offer.is_active());
        assert!(!ApplicationStatus::Withdrawn.is_active());
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Applied);
    }
}
