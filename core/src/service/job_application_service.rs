use std::collections::BTreeMap;

use tracing::info;
use uuid::Uuid;

use crate::error::{Result, TrackerError};
use crate::input::find_id;
use crate::model::job_application::{ApplicationDraft, ApplicationStatus, JobApplication};
use crate::repository::AppDataRepository;
use crate::time::Clock;

pub struct JobApplicationService<R: AppDataRepository> {
    repo: R,
    clock: Clock,
}

impl<R: AppDataRepository> JobApplicationService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            clock: Clock::default(),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn add_application(&self, draft: ApplicationDraft) -> Result<JobApplication> {
        let draft = validate_draft(draft)?;
        let mut data = self.repo.load()?;
        let application = JobApplication::new(draft, self.clock.now());
        data.job_applications.push(application.clone());
        self.repo.save(&data)?;
        info!(
            id = %application.id,
            company = %application.company,
            "added job application"
        );
        Ok(application)
    }

    pub fn update_application(&self, id: &Uuid, draft: ApplicationDraft) -> Result<JobApplication> {
        let draft = validate_draft(draft)?;
        let mut data = self.repo.load()?;
        let now = self.clock.now();
        let application = data.application_mut(id).ok_or(TrackerError::NotFound {
            kind: "Job application",
            id: id.to_string(),
        })?;
        application.apply(draft, now);
        let updated = application.clone();
        self.repo.save(&data)?;
        info!(id = %updated.id, status = %updated.status, "updated job application");
        Ok(updated)
    }

    pub fn delete_application(&self, id: &Uuid) -> Result<JobApplication> {
        let mut data = self.repo.load()?;
        let removed = data.remove_application(id).ok_or(TrackerError::NotFound {
            kind: "Job application",
            id: id.to_string(),
        })?;
        self.repo.save(&data)?;
        info!(id = %removed.id, "deleted job application");
        Ok(removed)
    }

    pub fn get_application(&self, id: &Uuid) -> Result<JobApplication> {
        self.repo
            .load()?
            .job_applications
            .into_iter()
            .find(|a| a.id == *id)
            .ok_or(TrackerError::NotFound {
                kind: "Job application",
                id: id.to_string(),
            })
    }

    /// Applications, most recently sent first.
    pub fn list_applications(&self) -> Result<Vec<JobApplication>> {
        let mut applications = self.repo.load()?.job_applications;
        applications.sort_by(|a, b| b.application_date.cmp(&a.application_date));
        Ok(applications)
    }

    /// Number of applications per status; statuses with none are omitted.
    pub fn status_counts(&self) -> Result<BTreeMap<ApplicationStatus, usize>> {
        let mut counts = BTreeMap::new();
        for application in self.repo.load()?.job_applications {
            *counts.entry(application.status).or_insert(0) += 1;
        }
        Ok(counts)
    }

    pub fn resolve_application_id(&self, input: &str) -> Result<Uuid> {
        let data = self.repo.load()?;
        find_id("Job application", input, data.job_applications.iter().map(|a| a.id))
    }
}

fn validate_draft(mut draft: ApplicationDraft) -> Result<ApplicationDraft> {
    draft.company = draft.company.trim().to_string();
    draft.position = draft.position.trim().to_string();
    if draft.company.is_empty() {
        return Err(TrackerError::MissingField("company"));
    }
    if draft.position.is_empty() {
        return Err(TrackerError::MissingField("position"));
    }
    for field in [&mut draft.location, &mut draft.salary, &mut draft.notes] {
        *field = field
            .take()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
    }
    Ok(draft)
}
