pub mod error;
pub mod input;
pub mod model;
pub mod progress;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::{Result, TrackerError};
pub use input::{expand_key, find_id, normalize_metadata, parse_args, resolve_id, ParsedInput, SESSION_KEYS};
pub use model::app_data::AppData;
pub use model::certification::{Certification, CertificationDraft, CertificationStatus, Difficulty};
pub use model::curriculum::{CurriculumPhase, WeekNumber, CERTIFICATION_CATALOG, CURRICULUM, TOTAL_WEEKS};
pub use model::job_application::{ApplicationDraft, ApplicationStatus, JobApplication};
pub use model::ledger::WeeklyHoursLedger;
pub use model::settings::{Theme, UserSettings, DEFAULT_WEEKLY_HOURS};
pub use model::status::WeekStatus;
pub use model::study_log::{SessionDraft, SessionType, StudySession};
pub use progress::{classify, percent, resolve_current_week};
pub use repository::{AppDataRepository, FileAppDataRepository, InMemoryAppDataRepository};
pub use service::certification_service::CertificationService;
pub use service::job_application_service::JobApplicationService;
pub use service::notes_service::NotesService;
pub use service::settings_service::SettingsService;
pub use service::study_log_service::{LoggedSession, StudyLogService, MAX_SESSION_HOURS};
pub use time::{parse_human_date, week_from_date, Clock};
pub use usecase::dashboard::DashboardUseCase;
pub use usecase::history::HistoryUseCase;
