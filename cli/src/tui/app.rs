use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use curriculum_core::service::dto::{DashboardSummary, PhaseView, WeekCard};
use curriculum_core::{AppDataRepository, DashboardUseCase, SettingsService, Theme, WeekNumber};

/// Dashboard state: one phase shown at a time, one week card selected.
pub struct App<R: AppDataRepository> {
    repo: R,
    today: NaiveDate,
    pub summary: DashboardSummary,
    pub phases: Vec<PhaseView>,
    pub notes: BTreeMap<WeekNumber, String>,
    pub theme: Theme,
    pub phase_index: usize,
    pub week_index: usize,
    pub message: Option<String>,
}

impl<R: AppDataRepository> App<R> {
    /// Loads the data and opens on the phase and week currently in progress.
    pub fn new(repo: R, today: NaiveDate) -> Result<Self> {
        let mut app = Self {
            repo,
            today,
            summary: DashboardSummary {
                total_hours: 0.0,
                total_target_hours: 0.0,
                overall_progress: 0.0,
                current_week: 1,
                hours_this_week: 0.0,
                target_hours_per_week: 0.0,
            },
            phases: Vec::new(),
            notes: BTreeMap::new(),
            theme: Theme::default(),
            phase_index: 0,
            week_index: 0,
            message: None,
        };
        app.reload()?;
        app.select_week(app.summary.current_week);
        Ok(app)
    }

    /// Re-reads the data file, keeping the current selection.
    pub fn reload(&mut self) -> Result<()> {
        let data = self.repo.load()?;
        let dashboard = DashboardUseCase::new(&data, self.today);
        self.summary = dashboard.summary();
        self.phases = dashboard.phase_views();
        self.notes = data.weekly_notes.clone();
        self.theme = data.settings.theme;
        Ok(())
    }

    pub fn select_week(&mut self, week: WeekNumber) {
        for (p, phase) in self.phases.iter().enumerate() {
            if let Some(w) = phase.weeks.iter().position(|c| c.week == week) {
                self.phase_index = p;
                self.week_index = w;
                return;
            }
        }
    }

    pub fn current_phase(&self) -> Option<&PhaseView> {
        self.phases.get(self.phase_index)
    }

    pub fn selected_card(&self) -> Option<&WeekCard> {
        self.current_phase()?.weeks.get(self.week_index)
    }

    pub fn selected_notes(&self) -> Option<&str> {
        let week = self.selected_card()?.week;
        self.notes.get(&week).map(String::as_str)
    }

    pub fn next_phase(&mut self) {
        if self.phase_index + 1 < self.phases.len() {
            self.phase_index += 1;
            self.clamp_week();
        }
    }

    pub fn previous_phase(&mut self) {
        if self.phase_index > 0 {
            self.phase_index -= 1;
            self.clamp_week();
        }
    }

    pub fn next_week(&mut self) {
        let len = self.current_phase().map_or(0, |p| p.weeks.len());
        if self.week_index + 1 < len {
            self.week_index += 1;
        } else if self.phase_index + 1 < self.phases.len() {
            self.phase_index += 1;
            self.week_index = 0;
        }
    }

    pub fn previous_week(&mut self) {
        if self.week_index > 0 {
            self.week_index -= 1;
        } else if self.phase_index > 0 {
            self.phase_index -= 1;
            self.week_index = self.current_phase().map_or(0, |p| p.weeks.len().saturating_sub(1));
        }
    }

    /// Jumps back to the week in progress.
    pub fn go_to_current(&mut self) {
        self.select_week(self.summary.current_week);
    }

    pub fn toggle_theme(&mut self) {
        match SettingsService::new(&self.repo).toggle_theme() {
            Ok(settings) => {
                self.theme = settings.theme;
                self.message = Some(format!("Theme: {}", settings.theme));
            }
            Err(e) => self.message = Some(format!("Could not save theme: {}", e)),
        }
    }

    pub fn refresh(&mut self) {
        self.message = match self.reload() {
            Ok(()) => Some("Reloaded".to_string()),
            Err(e) => Some(format!("Reload failed: {}", e)),
        };
    }

    fn clamp_week(&mut self) {
        let len = self.current_phase().map_or(0, |p| p.weeks.len());
        self.week_index = self.week_index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_core::{AppData, InMemoryAppDataRepository};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    fn repo_with_hours(hours: f64) -> InMemoryAppDataRepository {
        let mut data = AppData::default();
        let mut remaining = hours;
        let mut week = 1;
        while remaining > 0.0 {
            let h = remaining.min(15.0);
            data.weekly_hours.add(week, h);
            remaining -= h;
            week += 1;
        }
        InMemoryAppDataRepository::new(data)
    }

    #[test]
    fn test_opens_on_current_week() {
        // 8 full weeks -> week 9, third card of phase 2
        let repo = repo_with_hours(120.0);
        let app = App::new(&repo, today()).unwrap();
        assert_eq!(app.summary.current_week, 9);
        assert_eq!(app.phase_index, 1);
        assert_eq!(app.week_index, 2);
        assert_eq!(app.selected_card().unwrap().week, 9);
    }

    #[test]
    fn test_week_navigation_crosses_phases() {
        let repo = repo_with_hours(0.0);
        let mut app = App::new(&repo, today()).unwrap();
        assert_eq!(app.selected_card().unwrap().week, 1);

        app.previous_week();
        assert_eq!(app.selected_card().unwrap().week, 1);

        for _ in 0..6 {
            app.next_week();
        }
        assert_eq!(app.phase_index, 1);
        assert_eq!(app.selected_card().unwrap().week, 7);

        app.previous_week();
        assert_eq!(app.selected_card().unwrap().week, 6);
    }

    #[test]
    fn test_phase_navigation_stops_at_edges() {
        let repo = repo_with_hours(0.0);
        let mut app = App::new(&repo, today()).unwrap();
        app.previous_phase();
        assert_eq!(app.phase_index, 0);
        for _ in 0..10 {
            app.next_phase();
        }
        assert_eq!(app.phase_index, 3);
        assert_eq!(app.current_phase().unwrap().weeks[0].week, 19);

        app.go_to_current();
        assert_eq!(app.phase_index, 0);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let repo = repo_with_hours(0.0);
        let mut app = App::new(&repo, today()).unwrap();
        assert_eq!(app.theme, Theme::Light);
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(repo.snapshot().settings.theme, Theme::Dark);
    }

    #[test]
    fn test_notes_follow_selection() {
        let mut data = AppData::default();
        data.weekly_notes.insert(2, "Finally got awk".to_string());
        let repo = InMemoryAppDataRepository::new(data);
        let mut app = App::new(&repo, today()).unwrap();
        assert!(app.selected_notes().is_none());
        app.next_week();
        assert_eq!(app.selected_notes(), Some("Finally got awk"));
    }
}
