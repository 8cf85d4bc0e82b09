use tracing::info;

use crate::error::{Result, TrackerError};
use crate::model::curriculum::{is_curriculum_week, WeekNumber};
use crate::repository::AppDataRepository;

/// Weekly reflections, one free-form note per curriculum week.
pub struct NotesService<R: AppDataRepository> {
    repo: R,
}

impl<R: AppDataRepository> NotesService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores the note for a week. Blank text clears it instead.
    pub fn set_notes(&self, week: WeekNumber, notes: &str) -> Result<()> {
        check_week(week)?;
        let notes = notes.trim();
        if notes.is_empty() {
            self.clear_notes(week)?;
            return Ok(());
        }

        let mut data = self.repo.load()?;
        data.weekly_notes.insert(week, notes.to_string());
        self.repo.save(&data)?;
        info!(week, "saved weekly notes");
        Ok(())
    }

    pub fn get_notes(&self, week: WeekNumber) -> Result<Option<String>> {
        check_week(week)?;
        Ok(self.repo.load()?.weekly_notes.remove(&week))
    }

    /// Returns whether there was anything to clear.
    pub fn clear_notes(&self, week: WeekNumber) -> Result<bool> {
        check_week(week)?;
        let mut data = self.repo.load()?;
        if data.weekly_notes.remove(&week).is_none() {
            return Ok(false);
        }
        self.repo.save(&data)?;
        info!(week, "cleared weekly notes");
        Ok(true)
    }

    /// All weeks that have notes, in week order.
    pub fn list_notes(&self) -> Result<Vec<(WeekNumber, String)>> {
        Ok(self.repo.load()?.weekly_notes.into_iter().collect())
    }
}

fn check_week(week: WeekNumber) -> Result<()> {
    if is_curriculum_week(week) {
        Ok(())
    } else {
        Err(TrackerError::WeekOutOfRange(week))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryAppDataRepository;

    #[test]
    fn test_set_get_clear() {
        let repo = InMemoryAppDataRepository::default();
        let service = NotesService::new(&repo);

        service.set_notes(3, "  Subnets finally make sense.  ").unwrap();
        assert_eq!(
            service.get_notes(3).unwrap().as_deref(),
            Some("Subnets finally make sense.")
        );
        assert_eq!(service.get_notes(4).unwrap(), None);

        assert!(service.clear_notes(3).unwrap());
        assert!(!service.clear_notes(3).unwrap());
        assert!(service.list_notes().unwrap().is_empty());
    }

    #[test]
    fn test_blank_notes_clear_the_week() {
        let repo = InMemoryAppDataRepository::default();
        let service = NotesService::new(&repo);
        service.set_notes(1, "Started").unwrap();
        service.set_notes(1, "   ").unwrap();
        assert_eq!(service.get_notes(1).unwrap(), None);
    }

    #[test]
    fn test_weeks_outside_curriculum_are_rejected() {
        let repo = InMemoryAppDataRepository::default();
        let service = NotesService::new(&repo);
        assert!(matches!(
            service.set_notes(0, "x"),
            Err(TrackerError::WeekOutOfRange(0))
        ));
        assert!(matches!(
            service.get_notes(25),
            Err(TrackerError::WeekOutOfRange(25))
        ));
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn test_list_in_week_order() {
        let repo = InMemoryAppDataRepository::default();
        let service = NotesService::new(&repo);
        service.set_notes(9, "Jenkins").unwrap();
        service.set_notes(2, "Bash").unwrap();
        let weeks: Vec<WeekNumber> = service.list_notes().unwrap().into_iter().map(|(w, _)| w).collect();
        assert_eq!(weeks, vec![2, 9]);
    }
}
