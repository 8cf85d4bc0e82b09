pub mod app_data;
pub mod certification;
pub mod curriculum;
pub mod job_application;
pub mod ledger;
pub mod settings;
pub mod status;
pub mod study_log;
