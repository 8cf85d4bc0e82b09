use tracing::info;

use crate::error::Result;
use crate::model::settings::{validate_target_hours, Theme, UserSettings};
use crate::repository::AppDataRepository;

pub struct SettingsService<R: AppDataRepository> {
    repo: R,
}

impl<R: AppDataRepository> SettingsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_settings(&self) -> Result<UserSettings> {
        Ok(self.repo.load()?.settings)
    }

    /// Changes the weekly target. Non-positive or non-finite values are
    /// rejected here so the progress engine never sees them.
    pub fn set_target_hours(&self, hours: f64) -> Result<UserSettings> {
        let hours = validate_target_hours(hours)?;
        let mut data = self.repo.load()?;
        data.settings.default_weekly_hours = hours;
        self.repo.save(&data)?;
        info!(hours, "updated weekly target");
        Ok(data.settings)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<UserSettings> {
        let mut data = self.repo.load()?;
        data.settings.theme = theme;
        self.repo.save(&data)?;
        info!(%theme, "updated theme");
        Ok(data.settings)
    }

    pub fn toggle_theme(&self) -> Result<UserSettings> {
        let current = self.get_settings()?.theme;
        self.set_theme(current.toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::repository::InMemoryAppDataRepository;

    #[test]
    fn test_set_target_hours() {
        let repo = InMemoryAppDataRepository::default();
        let service = SettingsService::new(&repo);
        let settings = service.set_target_hours(10.0).unwrap();
        assert_eq!(settings.default_weekly_hours, 10.0);
        assert_eq!(repo.snapshot().target_hours(), 10.0);
    }

    #[test]
    fn test_invalid_target_never_saved() {
        let repo = InMemoryAppDataRepository::default();
        let service = SettingsService::new(&repo);
        for bad in [0.0, -2.0, f64::NAN] {
            assert!(matches!(
                service.set_target_hours(bad),
                Err(TrackerError::InvalidTargetHours(_))
            ));
        }
        assert_eq!(repo.save_count(), 0);
        assert_eq!(repo.snapshot().target_hours(), 15.0);
    }

    #[test]
    fn test_toggle_theme() {
        let repo = InMemoryAppDataRepository::default();
        let service = SettingsService::new(&repo);
        assert_eq!(service.toggle_theme().unwrap().theme, Theme::Dark);
        assert_eq!(service.toggle_theme().unwrap().theme, Theme::Light);
        assert_eq!(service.set_theme(Theme::Dark).unwrap().theme, Theme::Dark);
    }
}
