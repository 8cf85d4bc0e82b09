use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, TrackerError};
use crate::model::app_data::AppData;
use crate::repository::traits::AppDataRepository;

const DEFAULT_DIR_NAME: &str = ".devops-tracker";
const DEFAULT_FILE_NAME: &str = "data.json";

/// Stores the whole aggregate as one pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct FileAppDataRepository {
    file_path: PathBuf,
}

impl FileAppDataRepository {
    /// Uses `base_dir` when given, otherwise `~/.devops-tracker`. The
    /// directory is created if missing; the file is created on first save.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or(TrackerError::NoHomeDir)?
                .join(DEFAULT_DIR_NAME),
        };
        fs::create_dir_all(&dir)?;

        Ok(FileAppDataRepository {
            file_path: dir.join(DEFAULT_FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_data(&self) -> Result<AppData> {
        let content = fs::read_to_string(&self.file_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_data(&self, data: &AppData) -> Result<()> {
        let tmp_path = self.file_path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, data)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }

    fn backup_unreadable(&self) {
        let backup = self.file_path.with_extension("json.bak");
        match fs::copy(&self.file_path, &backup) {
            Ok(_) => warn!(path = %backup.display(), "kept a copy of the unreadable data file"),
            Err(e) => warn!(error = %e, "could not back up unreadable data file"),
        }
    }
}

impl AppDataRepository for FileAppDataRepository {
    fn load(&self) -> Result<AppData> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no saved data, starting fresh");
            return Ok(AppData::default());
        }

        match self.read_data() {
            Ok(mut data) => {
                data.normalize();
                Ok(data)
            }
            Err(e) => {
                warn!(
                    path = %self.file_path.display(),
                    error = %e,
                    "saved data is unreadable, falling back to defaults"
                );
                self.backup_unreadable();
                Ok(AppData::default())
            }
        }
    }

    fn save(&self, data: &AppData) -> Result<()> {
        self.write_data(data)?;
        debug!(
            path = %self.file_path.display(),
            sessions = data.study_logs.len(),
            "saved tracker data"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::settings::Theme;
    use uuid::Uuid;

    fn temp_repo() -> (FileAppDataRepository, PathBuf) {
        let dir = std::env::temp_dir().join(format!("curriculum-test-{}", Uuid::new_v4()));
        let repo = FileAppDataRepository::new(Some(dir.clone())).unwrap();
        (repo, dir)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let (repo, dir) = temp_repo();
        assert_eq!(repo.load().unwrap(), AppData::default());
        assert!(!repo.path().exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_save_then_load() {
        let (repo, dir) = temp_repo();
        let mut data = AppData::default();
        data.weekly_hours.add(1, 15.0);
        data.weekly_notes.insert(1, "Finished the shell chapter".to_string());
        data.settings.theme = Theme::Dark;

        repo.save(&data).unwrap();
        assert_eq!(repo.load().unwrap(), data);
        assert!(!repo.path().with_extension("json.tmp").exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_settings_without_target_keep_the_rest() {
        let (repo, dir) = temp_repo();
        fs::write(
            repo.path(),
            r#"{"weeklyHours":{"1":15,"2":15},"weeklyNotes":{"1":"hi"},"settings":{"theme":"dark"}}"#,
        )
        .unwrap();

        let data = repo.load().unwrap();
        assert_eq!(data.weekly_hours.total_hours(), 30.0);
        assert_eq!(data.weekly_notes.get(&1).map(String::as_str), Some("hi"));
        assert_eq!(data.target_hours(), 15.0);
        assert_eq!(data.settings.theme, Theme::Dark);
        assert!(!repo.path().with_extension("json.bak").exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let (repo, dir) = temp_repo();
        fs::write(repo.path(), "{ not json").unwrap();

        assert_eq!(repo.load().unwrap(), AppData::default());
        assert!(repo.path().with_extension("json.bak").exists());
        fs::remove_dir_all(dir).unwrap();
    }
}
