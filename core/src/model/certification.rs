use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::curriculum::find_catalog_entry;
use crate::error::TrackerError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Associate,
    Intermediate,
    Professional,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificationStatus {
    #[default]
    Planning,
    Studying,
    Scheduled,
    Completed,
    Expired,
}

impl fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for CertificationStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planning" | "plan" => Ok(CertificationStatus::Planning),
            "studying" | "study" => Ok(CertificationStatus::Studying),
            "scheduled" => Ok(CertificationStatus::Scheduled),
            "completed" | "done" | "passed" => Ok(CertificationStatus::Completed),
            "expired" => Ok(CertificationStatus::Expired),
            _ => Err(TrackerError::Parse {
                what: "certification status",
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    pub target_date: NaiveDate,
    pub status: CertificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_study_weeks: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificationDraft {
    pub name: String,
    pub target_date: NaiveDate,
    pub status: CertificationStatus,
    pub materials: Option<String>,
}

impl Certification {
    pub fn new(draft: CertificationDraft, now: DateTime<Utc>) -> Self {
        let mut cert = Self {
            id: Uuid::new_v4(),
            name: String::new(),
            provider: None,
            difficulty: None,
            target_date: draft.target_date,
            status: draft.status,
            materials: None,
            estimated_study_weeks: None,
            created_at: now,
            updated_at: now,
        };
        cert.apply(draft, now);
        cert
    }

    /// Replaces editable fields and refreshes catalog details for the name.
    pub fn apply(&mut self, draft: CertificationDraft, now: DateTime<Utc>) {
        let catalog = find_catalog_entry(&draft.name);
        self.name = catalog
            .map(|c| c.name.to_string())
            .unwrap_or(draft.name);
        self.provider = catalog.map(|c| c.provider.to_string());
        self.difficulty = catalog.map(|c| c.difficulty);
        self.estimated_study_weeks = catalog.map(|c| c.estimated_study_weeks);
        self.target_date = draft.target_date;
        self.status = draft.status;
        self.materials = draft.materials;
        self.updated_at = now;
    }
}
