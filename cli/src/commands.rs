use anyhow::{bail, Result};
use chrono::NaiveDate;
use curriculum_core::model::curriculum::{phase, topic_for_week};
use curriculum_core::{
    normalize_metadata, parse_args, parse_human_date, AppDataRepository, ApplicationDraft,
    CertificationDraft, CertificationService, Clock, DashboardUseCase, FileAppDataRepository,
    HistoryUseCase, JobApplicationService, NotesService, SessionDraft, SettingsService,
    StudyLogService, StudySession, SESSION_KEYS,
};

use crate::report;
use crate::{CertCommand, Commands, JobCommand, NoteCommand, SettingsCommand};

pub fn execute(command: Commands, repo: &FileAppDataRepository) -> Result<()> {
    let today = Clock::System.today();

    match command {
        Commands::Dashboard => return crate::tui::run(repo),
        Commands::Status => {
            let data = repo.load()?;
            let dashboard = DashboardUseCase::new(&data, today);
            report::print_status(&dashboard.summary(), &dashboard.week_card(dashboard.current_week()));

            let active = data
                .job_applications
                .iter()
                .filter(|a| a.status.is_active())
                .count();
            if active > 0 {
                println!("Active job applications: {}", active);
            }
        }
        Commands::Weeks { phase: only } => {
            let data = repo.load()?;
            let dashboard = DashboardUseCase::new(&data, today);
            let phases = match only {
                Some(number) => match phase(number) {
                    Some(p) => vec![dashboard.phase_view(p)],
                    None => bail!("There is no phase {} (phases are 1-4)", number),
                },
                None => dashboard.phase_views(),
            };
            report::print_weeks(&phases);
        }
        Commands::Log { hours, args } => {
            let data = repo.load()?;
            let current_week = DashboardUseCase::new(&data, today).current_week();
            let mut draft = session_draft(&args, None, today)?;
            draft.hours = hours;
            if draft.topic.trim().is_empty() {
                draft.topic = topic_for_week(current_week);
            }

            let logged = StudyLogService::new(repo).log_session(draft)?;
            let session = &logged.session;
            println!(
                "Logged {:.1}h on {} ({}): {} (ID: {})",
                session.hours,
                session.date,
                session.session_type,
                session.topic,
                report::short_id(&session.id)
            );
            match logged.credited_week {
                Some(week) => println!("  Counted toward week {}: {}", week, topic_for_week(week)),
                None => println!("  Date is outside the 24 curriculum weeks; weekly totals unchanged"),
            }
        }
        Commands::Logs => {
            let sessions = StudyLogService::new(repo).list_sessions()?;
            report::print_sessions(&sessions);
        }
        Commands::History => {
            let data = repo.load()?;
            report::print_history(&HistoryUseCase::new(&data).get_weekly_history());
        }
        Commands::EditLog { id, hours, args } => {
            let service = StudyLogService::new(repo);
            let id = service.resolve_session_id(&id)?;
            let existing = service.get_session(&id)?;
            let mut draft = session_draft(&args, Some(&existing), today)?;
            if let Some(hours) = hours {
                draft.hours = hours;
            }
            let updated = service.edit_session(&id, draft)?;
            println!("Updated session {}", report::short_id(&updated.id));
            report::print_sessions(&[updated]);
        }
        Commands::DeleteLog { id } => {
            let service = StudyLogService::new(repo);
            let id = service.resolve_session_id(&id)?;
            let removed = service.delete_session(&id)?;
            println!(
                "Deleted session {} ({:.1}h on {})",
                report::short_id(&removed.id),
                removed.hours,
                removed.date
            );
        }
        Commands::Cert { command } => certification_command(command, repo, today)?,
        Commands::Catalog => report::print_catalog(),
        Commands::Job { command } => job_command(command, repo, today)?,
        Commands::Note { command } => note_command(command, repo)?,
        Commands::Settings { command } => {
            settings_command(command.unwrap_or(SettingsCommand::Show), repo)?
        }
    }
    Ok(())
}

/// Builds a session from free-form words and `key:value` metadata, starting
/// from `base` when editing.
fn session_draft(
    args: &[String],
    base: Option<&StudySession>,
    today: NaiveDate,
) -> Result<SessionDraft> {
    let parsed = parse_args(args);
    let metadata = normalize_metadata(parsed.metadata, &SESSION_KEYS)?;

    let mut draft = match base {
        Some(session) => SessionDraft {
            date: session.date,
            session_type: session.session_type,
            hours: session.hours,
            topic: session.topic.clone(),
            notes: session.notes.clone(),
        },
        None => SessionDraft {
            date: today,
            session_type: Default::default(),
            hours: 0.0,
            topic: String::new(),
            notes: None,
        },
    };

    if !parsed.name.is_empty() {
        draft.topic = parsed.name;
    }
    for (key, value) in metadata {
        match key.as_str() {
            "date" => draft.date = parse_human_date(&value, today)?,
            "type" => draft.session_type = value.parse()?,
            "topic" => draft.topic = value,
            "notes" => draft.notes = Some(value),
            _ => {}
        }
    }
    Ok(draft)
}

/// An explicit empty value clears an optional field; no value keeps the old one.
fn replace_optional(new: Option<String>, old: Option<String>) -> Option<String> {
    match new {
        Some(value) if value.trim().is_empty() => None,
        Some(value) => Some(value),
        None => old,
    }
}

fn certification_command(
    command: CertCommand,
    repo: &FileAppDataRepository,
    today: NaiveDate,
) -> Result<()> {
    let service = CertificationService::new(repo);
    match command {
        CertCommand::Add {
            name,
            target,
            status,
            materials,
        } => {
            let cert = service.add_certification(CertificationDraft {
                name,
                target_date: parse_human_date(&target, today)?,
                status: status.parse()?,
                materials,
            })?;
            println!("Certification added: {} (ID: {})", cert.name, report::short_id(&cert.id));
            if let Some(provider) = &cert.provider {
                println!("  Provider: {}", provider);
            }
            println!("  Target: {}", cert.target_date);
        }
        CertCommand::List => report::print_certifications(&service.list_certifications()?),
        CertCommand::Update {
            id,
            name,
            target,
            status,
            materials,
        } => {
            let id = service.resolve_certification_id(&id)?;
            let existing = service.get_certification(&id)?;
            let draft = CertificationDraft {
                name: name.unwrap_or(existing.name),
                target_date: match target {
                    Some(t) => parse_human_date(&t, today)?,
                    None => existing.target_date,
                },
                status: match status {
                    Some(s) => s.parse()?,
                    None => existing.status,
                },
                materials: replace_optional(materials, existing.materials),
            };
            let cert = service.update_certification(&id, draft)?;
            println!("Certification updated: {} [{}]", cert.name, cert.status);
        }
        CertCommand::Delete { id } => {
            let id = service.resolve_certification_id(&id)?;
            let removed = service.delete_certification(&id)?;
            println!("Certification deleted: {}", removed.name);
        }
    }
    Ok(())
}

fn job_command(command: JobCommand, repo: &FileAppDataRepository, today: NaiveDate) -> Result<()> {
    let service = JobApplicationService::new(repo);
    match command {
        JobCommand::Add {
            company,
            position,
            date,
            status,
            location,
            salary,
            notes,
        } => {
            let app = service.add_application(ApplicationDraft {
                company,
                position,
                location,
                application_date: parse_human_date(&date, today)?,
                status: status.parse()?,
                salary,
                notes,
            })?;
            println!(
                "Application added: {} at {} (ID: {})",
                app.position,
                app.company,
                report::short_id(&app.id)
            );
        }
        JobCommand::List => {
            report::print_applications(&service.list_applications()?, &service.status_counts()?)
        }
        JobCommand::Update {
            id,
            company,
            position,
            date,
            status,
            location,
            salary,
            notes,
        } => {
            let id = service.resolve_application_id(&id)?;
            let existing = service.get_application(&id)?;
            let draft = ApplicationDraft {
                company: company.unwrap_or(existing.company),
                position: position.unwrap_or(existing.position),
                location: replace_optional(location, existing.location),
                application_date: match date {
                    Some(d) => parse_human_date(&d, today)?,
                    None => existing.application_date,
                },
                status: match status {
                    Some(s) => s.parse()?,
                    None => existing.status,
                },
                salary: replace_optional(salary, existing.salary),
                notes: replace_optional(notes, existing.notes),
            };
            let app = service.update_application(&id, draft)?;
            println!("Application updated: {} at {} [{}]", app.position, app.company, app.status);
        }
        JobCommand::Delete { id } => {
            let id = service.resolve_application_id(&id)?;
            let removed = service.delete_application(&id)?;
            println!("Application deleted: {} at {}", removed.position, removed.company);
        }
    }
    Ok(())
}

fn note_command(command: NoteCommand, repo: &FileAppDataRepository) -> Result<()> {
    let service = NotesService::new(repo);
    match command {
        NoteCommand::Set { week, text } => {
            service.set_notes(week, &text.join(" "))?;
            println!("Saved reflection for week {}", week);
        }
        NoteCommand::Show { week: Some(week) } => match service.get_notes(week)? {
            Some(notes) => report::print_note(week, &notes),
            None => println!("No reflection for week {} yet.", week),
        },
        NoteCommand::Show { week: None } => {
            let notes = service.list_notes()?;
            if notes.is_empty() {
                println!("No weekly reflections yet.");
            }
            for (week, text) in notes {
                report::print_note(week, &text);
            }
        }
        NoteCommand::Clear { week } => {
            if service.clear_notes(week)? {
                println!("Cleared reflection for week {}", week);
            } else {
                println!("Week {} had no reflection.", week);
            }
        }
    }
    Ok(())
}

fn settings_command(command: SettingsCommand, repo: &FileAppDataRepository) -> Result<()> {
    let service = SettingsService::new(repo);
    let settings = match command {
        SettingsCommand::Show => service.get_settings()?,
        SettingsCommand::Target { hours } => service.set_target_hours(hours)?,
        SettingsCommand::Theme { theme: Some(theme) } => service.set_theme(theme.parse()?)?,
        SettingsCommand::Theme { theme: None } => service.toggle_theme()?,
    };
    println!("Weekly target: {:.1}h", settings.default_weekly_hours);
    println!("Theme:         {}", settings.theme);
    println!("Data file:     {}", repo.path().display());
    Ok(())
}
