use chrono::NaiveDate;

use crate::model::app_data::AppData;
use crate::model::curriculum::{phase_for_week, topic_for_week, CurriculumPhase, WeekNumber, CURRICULUM};
use crate::progress::{classify, overall_percent, percent, resolve_current_week, total_target_hours};
use crate::service::dto::{DashboardSummary, PhaseView, WeekCard};
use crate::time::days_left_in_week;

/// Read-only dashboard figures over one snapshot of the tracker data.
///
/// The current week is resolved once on construction and shared by every
/// card, so all statuses in one view agree with each other.
pub struct DashboardUseCase<'a> {
    data: &'a AppData,
    today: NaiveDate,
    current_week: WeekNumber,
}

impl<'a> DashboardUseCase<'a> {
    pub fn new(data: &'a AppData, today: NaiveDate) -> Self {
        let current_week = resolve_current_week(&data.weekly_hours, data.target_hours());
        Self {
            data,
            today,
            current_week,
        }
    }

    pub fn current_week(&self) -> WeekNumber {
        self.current_week
    }

    pub fn summary(&self) -> DashboardSummary {
        let target = self.data.target_hours();
        DashboardSummary {
            total_hours: self.data.weekly_hours.total_hours(),
            total_target_hours: total_target_hours(target),
            overall_progress: overall_percent(&self.data.weekly_hours, target),
            current_week: self.current_week,
            hours_this_week: self.data.weekly_hours.hours_for(self.current_week),
            target_hours_per_week: target,
        }
    }

    pub fn week_card(&self, week: WeekNumber) -> WeekCard {
        let target = self.data.target_hours();
        let studied = self.data.weekly_hours.hours_for(week);
        WeekCard {
            week,
            topic: topic_for_week(week),
            studied_hours: studied,
            target_hours: target,
            status: classify(week, studied, target, self.current_week),
            progress_percent: percent(studied, target),
            days_left: days_left_in_week(week, self.current_week, self.today),
        }
    }

    pub fn phase_view(&self, phase: &CurriculumPhase) -> PhaseView {
        PhaseView {
            phase: phase.phase,
            name: phase.name.to_string(),
            description: phase.description.to_string(),
            weeks: phase.weeks().map(|w| self.week_card(w)).collect(),
        }
    }

    pub fn phase_views(&self) -> Vec<PhaseView> {
        CURRICULUM.iter().map(|p| self.phase_view(p)).collect()
    }

    /// Phase number that contains the current week; the dashboard opens on it.
    pub fn current_phase(&self) -> u32 {
        phase_for_week(self.current_week).map(|p| p.phase).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::WeekStatus;

    fn today() -> NaiveDate {
        // Wednesday
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    fn data_with(entries: &[(WeekNumber, f64)]) -> AppData {
        let mut data = AppData::default();
        for (week, hours) in entries {
            data.weekly_hours.add(*week, *hours);
        }
        data
    }

    #[test]
    fn test_empty_dashboard() {
        let data = AppData::default();
        let dashboard = DashboardUseCase::new(&data, today());
        let summary = dashboard.summary();
        assert_eq!(summary.current_week, 1);
        assert_eq!(summary.total_hours, 0.0);
        assert_eq!(summary.total_target_hours, 360.0);
        assert_eq!(summary.overall_progress, 0.0);
        assert_eq!(
            format!("{:.1}h ({:.1}%)", summary.total_hours, summary.overall_progress),
            "0.0h (0.0%)"
        );
        assert_eq!(dashboard.current_phase(), 1);

        let card = dashboard.week_card(1);
        assert_eq!(card.status, WeekStatus::InProgress);
        assert_eq!(card.days_left, 4);
        assert_eq!(dashboard.week_card(2).status, WeekStatus::NotStarted);
    }

    #[test]
    fn test_summary_and_cards() {
        let data = data_with(&[(1, 15.0), (2, 15.0), (3, 7.5)]);
        let dashboard = DashboardUseCase::new(&data, today());
        let summary = dashboard.summary();
        assert_eq!(summary.current_week, 3);
        assert_eq!(summary.hours_this_week, 7.5);
        assert_eq!(summary.total_hours, 37.5);

        let card = dashboard.week_card(3);
        assert_eq!(card.topic, "Networking & Security Fundamentals");
        assert_eq!(card.status, WeekStatus::InProgress);
        assert_eq!(card.progress_percent, 50.0);
        assert_eq!(dashboard.week_card(1).status, WeekStatus::Completed);
        assert_eq!(dashboard.week_card(1).days_left, 0);
        assert_eq!(dashboard.week_card(4).days_left, 7);
    }

    #[test]
    fn test_behind_week_when_hours_land_elsewhere() {
        // 45 hours all in week 1 moves the current week to 4
        let data = data_with(&[(1, 45.0)]);
        let dashboard = DashboardUseCase::new(&data, today());
        assert_eq!(dashboard.current_week(), 4);
        assert_eq!(dashboard.week_card(1).status, WeekStatus::Completed);
        assert_eq!(dashboard.week_card(1).progress_percent, 100.0);
        assert_eq!(dashboard.week_card(2).status, WeekStatus::Behind);
        assert_eq!(dashboard.week_card(4).status, WeekStatus::InProgress);
    }

    #[test]
    fn test_phase_views_cover_curriculum() {
        let data = data_with(&[(1, 200.0)]);
        let dashboard = DashboardUseCase::new(&data, today());
        let phases = dashboard.phase_views();
        assert_eq!(phases.len(), 4);
        assert_eq!(phases.iter().map(|p| p.weeks.len()).sum::<usize>(), 24);
        assert_eq!(phases[2].weeks[0].week, 13);
        // 200 / 15 = 13.3 -> week 14, in phase 3
        assert_eq!(dashboard.current_phase(), 3);
    }
}
