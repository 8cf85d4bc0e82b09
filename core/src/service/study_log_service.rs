use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{Result, TrackerError};
use crate::input::find_id;
use crate::model::curriculum::WeekNumber;
use crate::model::study_log::{SessionDraft, StudySession};
use crate::repository::AppDataRepository;
use crate::time::Clock;

/// Upper bound for a single logged session, in hours.
pub const MAX_SESSION_HOURS: f64 = 12.0;

/// Result of logging a session.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedSession {
    pub session: StudySession,
    /// Ledger week the hours went to; `None` when the date falls outside the curriculum.
    pub credited_week: Option<WeekNumber>,
}

pub struct StudyLogService<R: AppDataRepository> {
    repo: R,
    clock: Clock,
}

impl<R: AppDataRepository> StudyLogService<R> {
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

    pub fn log_session(&self, draft: SessionDraft) -> Result<LoggedSession> {
        let draft = validate_draft(draft)?;
        let mut data = self.repo.load()?;

        let session = StudySession::new(draft, self.clock.now());
        let credited_week = data.record_session(session.clone());
        self.repo.save(&data)?;

        match credited_week {
            Some(week) => info!(id = %session.id, week, hours = session.hours, "logged study session"),
            None => warn!(
                id = %session.id,
                date = %session.date,
                "session date is outside the curriculum, hours not added to any week"
            ),
        }
        Ok(LoggedSession {
            session,
            credited_week,
        })
    }

    /// Rewrites a session's details. The ledger only ever grows, so hours
    /// already credited for the session stay where they are.
    pub fn edit_session(&self, id: &Uuid, draft: SessionDraft) -> Result<StudySession> {
        let draft = validate_draft(draft)?;
        let mut data = self.repo.load()?;
        let now = self.clock.now();

        let session = data.session_mut(id).ok_or(TrackerError::NotFound {
            kind: "Study session",
            id: id.to_string(),
        })?;
        session.apply(draft, now);
        let updated = session.clone();

        self.repo.save(&data)?;
        info!(id = %updated.id, "updated study session");
        Ok(updated)
    }

    /// Removes a session from the log. Ledger hours are left untouched.
    pub fn delete_session(&self, id: &Uuid) -> Result<StudySession> {
        let mut data = self.repo.load()?;
        let removed = data.remove_session(id).ok_or(TrackerError::NotFound {
            kind: "Study session",
            id: id.to_string(),
        })?;
        self.repo.save(&data)?;
        info!(id = %removed.id, "deleted study session");
        Ok(removed)
    }

    pub fn get_session(&self, id: &Uuid) -> Result<StudySession> {
        self.repo
            .load()?
            .study_logs
            .into_iter()
            .find(|s| s.id == *id)
            .ok_or(TrackerError::NotFound {
                kind: "Study session",
                id: id.to_string(),
            })
    }

    /// Sessions, most recent date first.
    pub fn list_sessions(&self) -> Result<Vec<StudySession>> {
        let mut sessions = self.repo.load()?.study_logs;
        sort_sessions(&mut sessions);
        Ok(sessions)
    }

    pub fn resolve_session_id(&self, input: &str) -> Result<Uuid> {
        let data = self.repo.load()?;
        find_id("Study session", input, data.study_logs.iter().map(|s| s.id))
    }
}

pub fn sort_sessions(sessions: &mut [StudySession]) {
    sessions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

fn validate_draft(mut draft: SessionDraft) -> Result<SessionDraft> {
    if !(draft.hours > 0.0 && draft.hours <= MAX_SESSION_HOURS) {
        return Err(TrackerError::InvalidHours {
            hours: draft.hours,
            max: MAX_SESSION_HOURS,
        });
    }
    draft.topic = draft.topic.trim().to_string();
    if draft.topic.is_empty() {
        return Err(TrackerError::MissingField("topic"));
    }
    draft.notes = draft
        .notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    Ok(draft)
}
