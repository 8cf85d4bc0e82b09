pub mod certification_service;
pub mod dto;
pub mod job_application_service;
pub mod notes_service;
pub mod settings_service;
pub mod study_log_service;
