use std::collections::BTreeMap;

use crate::model::app_data::AppData;
use crate::model::curriculum::{is_curriculum_week, topic_for_week};
use crate::model::study_log::StudySession;
use crate::service::dto::WeekHistory;
use crate::service::study_log_service::sort_sessions;
use crate::time::{curriculum_start, week_from_date};

/// Study sessions grouped by the calendar week their date falls in,
/// latest week first.
pub struct HistoryUseCase<'a> {
    data: &'a AppData,
}

impl<'a> HistoryUseCase<'a> {
    pub fn new(data: &'a AppData) -> Self {
        Self { data }
    }

    pub fn get_weekly_history(&self) -> Vec<WeekHistory> {
        let start = curriculum_start();
        let mut by_week: BTreeMap<u32, Vec<StudySession>> = BTreeMap::new();
        for session in &self.data.study_logs {
            let week = week_from_date(session.date, start);
            by_week.entry(week).or_default().push(session.clone());
        }

        by_week
            .into_iter()
            .rev()
            .map(|(week, mut sessions)| {
                sort_sessions(&mut sessions);
                let total_hours = sessions.iter().fold(0.0, |acc, s| acc + s.hours);
                WeekHistory {
                    week,
                    in_curriculum: is_curriculum_week(week),
                    topic: topic_for_week(week),
                    total_hours,
                    sessions,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::study_log::{SessionDraft, SessionType};
    use chrono::{NaiveDate, Utc};

    fn log(data: &mut AppData, date: NaiveDate, hours: f64) {
        data.record_session(StudySession::new(
            SessionDraft {
                date,
                session_type: SessionType::Afternoon,
                hours,
                topic: "Git".to_string(),
                notes: None,
            },
            Utc::now(),
        ));
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_groups_by_calendar_week() {
        let mut data = AppData::default();
        log(&mut data, day(2025, 1, 2), 1.0);
        log(&mut data, day(2025, 1, 20), 2.0);
        log(&mut data, day(2025, 1, 5), 1.5);
        log(&mut data, day(2025, 1, 22), 0.5);

        let history = HistoryUseCase::new(&data).get_weekly_history();
        assert_eq!(history.len(), 2);

        assert_eq!(history[0].week, 3);
        assert_eq!(history[0].total_hours, 2.5);
        assert_eq!(history[0].sessions[0].date, day(2025, 1, 22));
        assert_eq!(history[0].topic, "Networking & Security Fundamentals");

        assert_eq!(history[1].week, 1);
        assert_eq!(history[1].total_hours, 2.5);
        assert_eq!(history[1].sessions.len(), 2);
    }

    #[test]
    fn test_sessions_past_curriculum_are_flagged() {
        let mut data = AppData::default();
        log(&mut data, day(2025, 9, 1), 3.0);

        let history = HistoryUseCase::new(&data).get_weekly_history();
        assert_eq!(history.len(), 1);
        assert!(!history[0].in_curriculum);
        assert_eq!(history[0].topic, format!("Week {}", history[0].week));
        assert!(data.weekly_hours.is_empty());
    }

    #[test]
    fn test_empty_history() {
        let data = AppData::default();
        assert!(HistoryUseCase::new(&data).get_weekly_history().is_empty());
    }
}
