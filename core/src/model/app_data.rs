use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;
use uuid::Uuid;

use super::certification::Certification;
use super::curriculum::{is_curriculum_week, WeekNumber};
use super::job_application::JobApplication;
use super::ledger::WeeklyHoursLedger;
use super::settings::{validate_target_hours, UserSettings, DEFAULT_WEEKLY_HOURS};
use super::study_log::StudySession;
use crate::time::{curriculum_start, week_from_date};

/// Everything the tracker persists. Loaded and saved as a single unit.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub study_logs: Vec<StudySession>,
    #[serde(default)]
    pub weekly_hours: WeeklyHoursLedger,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub job_applications: Vec<JobApplication>,
    #[serde(default)]
    pub weekly_notes: BTreeMap<WeekNumber, String>,
    #[serde(default)]
    pub settings: UserSettings,
}

impl AppData {
    pub fn target_hours(&self) -> f64 {
        self.settings.default_weekly_hours
    }

    /// Repairs values loaded from disk that the progress engine cannot accept.
    /// Returns true when anything was changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;

        if validate_target_hours(self.settings.default_weekly_hours).is_err() {
            warn!(
                stored = self.settings.default_weekly_hours,
                "invalid weekly target in saved data, using default"
            );
            self.settings.default_weekly_hours = DEFAULT_WEEKLY_HOURS;
            changed = true;
        }

        let ledger: WeeklyHoursLedger = self.weekly_hours.iter().collect();
        if ledger != self.weekly_hours {
            warn!("dropping invalid ledger entries from saved data");
            self.weekly_hours = ledger;
            changed = true;
        }

        let notes_before = self.weekly_notes.len();
        self.weekly_notes.retain(|week, _| is_curriculum_week(*week));
        changed |= self.weekly_notes.len() != notes_before;

        changed
    }

    /// Appends a session and credits its hours to the ledger bucket of the
    /// session's calendar week. Returns the credited week, or `None` when the
    /// week lies outside the curriculum and the ledger was left untouched.
    pub fn record_session(&mut self, session: StudySession) -> Option<WeekNumber> {
        let week = week_from_date(session.date, curriculum_start());
        let credited = self.weekly_hours.add(week, session.hours);
        self.study_logs.push(session);
        credited.then_some(week)
    }

    pub fn session_mut(&mut self, id: &Uuid) -> Option<&mut StudySession> {
        self.study_logs.iter_mut().find(|s| s.id == *id)
    }

    pub fn remove_session(&mut self, id: &Uuid) -> Option<StudySession> {
        let pos = self.study_logs.iter().position(|s| s.id == *id)?;
        Some(self.study_logs.remove(pos))
    }

    pub fn certification_mut(&mut self, id: &Uuid) -> Option<&mut Certification> {
        self.certifications.iter_mut().find(|c| c.id == *id)
    }

    pub fn remove_certification(&mut self, id: &Uuid) -> Option<Certification> {
        let pos = self.certifications.iter().position(|c| c.id == *id)?;
        Some(self.certifications.remove(pos))
    }

    pub fn application_mut(&mut self, id: &Uuid) -> Option<&mut JobApplication> {
        self.job_applications.iter_mut().find(|a| a.id == *id)
    }

    pub fn remove_application(&mut self, id: &Uuid) -> Option<JobApplication> {
        let pos = self.job_applications.iter().position(|a| a.id == *id)?;
        Some(self.job_applications.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::study_log::{SessionDraft, SessionType};
    use chrono::{NaiveDate, Utc};

    fn session(date: NaiveDate, hours: f64) -> StudySession {
        StudySession::new(
            SessionDraft {
                date,
                session_type: SessionType::Morning,
                hours,
                topic: "Linux".to_string(),
                notes: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_record_session_credits_calendar_week() {
        let mut data = AppData::default();
        let week = data.record_session(session(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), 2.5));
        assert_eq!(week, Some(2));
        assert_eq!(data.weekly_hours.hours_for(2), 2.5);
        assert_eq!(data.study_logs.len(), 1);
    }

    #[test]
    fn test_record_session_outside_curriculum_keeps_session_only() {
        let mut data = AppData::default();
        let week = data.record_session(session(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(), 2.5));
        assert_eq!(week, None);
        assert!(data.weekly_hours.is_empty());
        assert_eq!(data.study_logs.len(), 1);
    }

    #[test]
    fn test_default_json_layout() {
        let value = serde_json::to_value(AppData::default()).unwrap();
        assert_eq!(value["settings"]["defaultWeeklyHours"], 15.0);
        assert_eq!(value["settings"]["theme"], "light");
        assert!(value["studyLogs"].as_array().unwrap().is_empty());
        assert!(value["weeklyHours"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let data: AppData = serde_json::from_str(r#"{"weeklyHours":{"1":15,"3":4.5}}"#).unwrap();
        assert_eq!(data.weekly_hours.hours_for(1), 15.0);
        assert_eq!(data.weekly_hours.hours_for(3), 4.5);
        assert_eq!(data.target_hours(), 15.0);
    }

    #[test]
    fn test_normalize_repairs_invalid_values() {
        let mut data: AppData = serde_json::from_str(
            r#"{"weeklyHours":{"1":5,"30":8,"2":-1},"weeklyNotes":{"0":"x","4":"ok"},"settings":{"defaultWeeklyHours":0}}"#,
        )
        .unwrap();
        assert!(data.normalize());
        assert_eq!(data.target_hours(), 15.0);
        assert_eq!(data.weekly_hours.total_hours(), 5.0);
        assert_eq!(data.weekly_notes.len(), 1);
        assert!(!data.normalize());
    }
}
