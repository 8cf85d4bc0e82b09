use tracing::info;
use uuid::Uuid;

use crate::error::{Result, TrackerError};
use crate::input::find_id;
use crate::model::certification::{Certification, CertificationDraft};
use crate::repository::AppDataRepository;
use crate::time::Clock;

pub struct CertificationService<R: AppDataRepository> {
    repo: R,
    clock: Clock,
}

impl<R: AppDataRepository> CertificationService<R> {
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

    pub fn add_certification(&self, draft: CertificationDraft) -> Result<Certification> {
        let draft = validate_draft(draft)?;
        let mut data = self.repo.load()?;
        let cert = Certification::new(draft, self.clock.now());
        data.certifications.push(cert.clone());
        self.repo.save(&data)?;
        info!(id = %cert.id, name = %cert.name, "added certification");
        Ok(cert)
    }

    pub fn update_certification(&self, id: &Uuid, draft: CertificationDraft) -> Result<Certification> {
        let draft = validate_draft(draft)?;
        let mut data = self.repo.load()?;
        let now = self.clock.now();
        let cert = data.certification_mut(id).ok_or(TrackerError::NotFound {
            kind: "Certification",
            id: id.to_string(),
        })?;
        cert.apply(draft, now);
        let updated = cert.clone();
        self.repo.save(&data)?;
        info!(id = %updated.id, status = %updated.status, "updated certification");
        Ok(updated)
    }

    pub fn delete_certification(&self, id: &Uuid) -> Result<Certification> {
        let mut data = self.repo.load()?;
        let removed = data.remove_certification(id).ok_or(TrackerError::NotFound {
            kind: "Certification",
            id: id.to_string(),
        })?;
        self.repo.save(&data)?;
        info!(id = %removed.id, "deleted certification");
        Ok(removed)
    }

    pub fn get_certification(&self, id: &Uuid) -> Result<Certification> {
        self.repo
            .load()?
            .certifications
            .into_iter()
            .find(|c| c.id == *id)
            .ok_or(TrackerError::NotFound {
                kind: "Certification",
                id: id.to_string(),
            })
    }

    /// Certifications, latest target date first.
    pub fn list_certifications(&self) -> Result<Vec<Certification>> {
        let mut certs = self.repo.load()?.certifications;
        certs.sort_by(|a, b| b.target_date.cmp(&a.target_date));
        Ok(certs)
    }

    pub fn resolve_certification_id(&self, input: &str) -> Result<Uuid> {
        let data = self.repo.load()?;
        find_id("Certification", input, data.certifications.iter().map(|c| c.id))
    }
}

fn validate_draft(mut draft: CertificationDraft) -> Result<CertificationDraft> {
    draft.name = draft.name.trim().to_string();
    if draft.name.is_empty() {
        return Err(TrackerError::MissingField("name"));
    }
    draft.materials = draft
        .materials
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::certification::{CertificationStatus, Difficulty};
    use crate::repository::InMemoryAppDataRepository;
    use chrono::NaiveDate;

    fn draft(name: &str, target: NaiveDate) -> CertificationDraft {
        CertificationDraft {
            name: name.to_string(),
            target_date: target,
            status: CertificationStatus::Planning,
            materials: Some("Official study guide".to_string()),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_and_list_sorted_by_target_date() {
        let repo = InMemoryAppDataRepository::default();
        let service = CertificationService::new(&repo);

        service.add_certification(draft("Terraform Associate", day(2025, 4, 1))).unwrap();
        let cka = service
            .add_certification(draft("Certified Kubernetes Administrator (CKA)", day(2025, 6, 1)))
            .unwrap();
        assert_eq!(cka.difficulty, Some(Difficulty::Intermediate));

        let names: Vec<String> = service
            .list_certifications()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec!["Certified Kubernetes Administrator (CKA)", "Terraform Associate"]
        );
    }

    #[test]
    fn test_update_status() {
        let repo = InMemoryAppDataRepository::default();
        let service = CertificationService::new(&repo);
        let cert = service.add_certification(draft("Terraform Associate", day(2025, 4, 1))).unwrap();

        let mut changed = draft("Terraform Associate", day(2025, 5, 1));
        changed.status = CertificationStatus::Scheduled;
        let updated = service.update_certification(&cert.id, changed).unwrap();
        assert_eq!(updated.status, CertificationStatus::Scheduled);
        assert_eq!(updated.target_date, day(2025, 5, 1));
        assert_eq!(updated.provider.as_deref(), Some("HashiCorp"));
        assert_eq!(service.get_certification(&cert.id).unwrap(), updated);
    }

    #[test]
    fn test_delete_and_missing() {
        let repo = InMemoryAppDataRepository::default();
        let service = CertificationService::new(&repo);
        let cert = service.add_certification(draft("Custom", day(2025, 4, 1))).unwrap();

        service.delete_certification(&cert.id).unwrap();
        assert!(service.list_certifications().unwrap().is_empty());
        assert!(matches!(
            service.delete_certification(&cert.id),
            Err(TrackerError::NotFound { .. })
        ));
        let short = cert.id.to_string()[..8].to_string();
        assert!(matches!(
            service.resolve_certification_id(&short),
            Err(TrackerError::NotFound { kind: "Certification", .. })
        ));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let repo = InMemoryAppDataRepository::default();
        let service = CertificationService::new(&repo);
        assert!(matches!(
            service.add_certification(draft("  ", day(2025, 4, 1))),
            Err(TrackerError::MissingField("name"))
        ));
    }
}
