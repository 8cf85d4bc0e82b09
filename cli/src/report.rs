use std::collections::BTreeMap;

use curriculum_core::model::curriculum::topic_for_week;
use curriculum_core::service::dto::{DashboardSummary, PhaseView, WeekCard, WeekHistory};
use curriculum_core::{
    ApplicationStatus, Certification, JobApplication, StudySession, WeekNumber, WeekStatus,
    CERTIFICATION_CATALOG, TOTAL_WEEKS,
};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use uuid::Uuid;

pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

fn table<T: Tabled>(rows: Vec<T>) -> Table {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

fn status_marker(status: WeekStatus) -> String {
    let color = match status {
        WeekStatus::Completed => "32",
        WeekStatus::InProgress => "34",
        WeekStatus::Behind => "31",
        WeekStatus::NotStarted => "90",
    };
    format!("\x1b[{}m{}\x1b[0m", color, status)
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

pub fn print_status(summary: &DashboardSummary, current: &WeekCard) {
    println!(
        "\x1b[1;36mWeek {} of {}\x1b[0m: {}",
        summary.current_week, TOTAL_WEEKS, current.topic
    );
    println!(
        "  This week: {:.1}h / {:.1}h ({:.0}%), {}, {} days left",
        current.studied_hours,
        current.target_hours,
        current.progress_percent,
        status_marker(current.status),
        current.days_left
    );
    println!(
        "Overall: {:.1}h / {:.1}h ({:.1}%)",
        summary.total_hours, summary.total_target_hours, summary.overall_progress
    );
}

#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Week")]
    week: WeekNumber,
    #[tabled(rename = "Topic")]
    topic: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Days Left")]
    days_left: String,
}

pub fn print_weeks(phases: &[PhaseView]) {
    for phase in phases {
        println!("\n\x1b[1;36mPhase {}: {}\x1b[0m", phase.phase, phase.name);
        println!("{}", phase.description);

        let rows = phase
            .weeks
            .iter()
            .map(|card| WeekRow {
                week: card.week,
                topic: card.topic.clone(),
                hours: format!("{:.1} / {:.1}", card.studied_hours, card.target_hours),
                progress: format!("{:.0}%", card.progress_percent),
                status: status_marker(card.status),
                days_left: match card.status {
                    WeekStatus::InProgress => card.days_left.to_string(),
                    _ => "-".to_string(),
                },
            })
            .collect();
        println!("{}", table::<WeekRow>(rows));
    }
}

#[derive(Tabled)]
struct SessionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    session_type: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Topic")]
    topic: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

fn session_rows(sessions: &[StudySession]) -> Vec<SessionRow> {
    sessions
        .iter()
        .map(|s| SessionRow {
            date: format!("{} ({})", s.date.format("%Y-%m-%d"), s.date.format("%a")),
            id: short_id(&s.id),
            session_type: s.session_type.to_string(),
            hours: format!("{:.1}", s.hours),
            topic: s.topic.clone(),
            notes: or_dash(&s.notes),
        })
        .collect()
}

pub fn print_sessions(sessions: &[StudySession]) {
    if sessions.is_empty() {
        println!("No study sessions logged yet.");
        return;
    }
    let total = sessions.iter().fold(0.0, |acc, s| acc + s.hours);
    println!("{}", table(session_rows(sessions)));
    println!("{} sessions, {:.1}h total", sessions.len(), total);
}

pub fn print_history(history: &[WeekHistory]) {
    if history.is_empty() {
        println!("No study sessions logged yet.");
        return;
    }
    for week in history {
        let label = if week.in_curriculum {
            format!("Week {}: {}", week.week, week.topic)
        } else {
            format!("Week {} (after the curriculum)", week.week)
        };
        println!("\n\x1b[1;36m{}\x1b[0m ({:.1}h)", label, week.total_hours);
        println!("{}", table(session_rows(&week.sessions)));
    }
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Certification")]
    name: &'static str,
    #[tabled(rename = "Provider")]
    provider: &'static str,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Study Weeks")]
    weeks: u32,
}

pub fn print_catalog() {
    let rows: Vec<CatalogRow> = CERTIFICATION_CATALOG
        .iter()
        .map(|c| CatalogRow {
            name: c.name,
            provider: c.provider,
            difficulty: c.difficulty.to_string(),
            weeks: c.estimated_study_weeks,
        })
        .collect();
    println!("{}", table(rows));
}

#[derive(Tabled)]
struct CertificationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Certification")]
    name: String,
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Materials")]
    materials: String,
}

pub fn print_certifications(certs: &[Certification]) {
    if certs.is_empty() {
        println!("No certification goals yet. See `curriculum catalog` for ideas.");
        return;
    }
    let rows: Vec<CertificationRow> = certs
        .iter()
        .map(|c| CertificationRow {
            id: short_id(&c.id),
            name: c.name.clone(),
            provider: or_dash(&c.provider),
            target: c.target_date.format("%Y-%m-%d").to_string(),
            status: c.status.to_string(),
            materials: or_dash(&c.materials),
        })
        .collect();
    println!("{}", table(rows));
}

#[derive(Tabled)]
struct ApplicationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Applied")]
    date: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn print_applications(apps: &[JobApplication], counts: &BTreeMap<ApplicationStatus, usize>) {
    if apps.is_empty() {
        println!("No job applications yet.");
        return;
    }
    let rows: Vec<ApplicationRow> = apps
        .iter()
        .map(|a| ApplicationRow {
            id: short_id(&a.id),
            date: a.application_date.format("%Y-%m-%d").to_string(),
            company: a.company.clone(),
            position: a.position.clone(),
            location: or_dash(&a.location),
            status: a.status.to_string(),
        })
        .collect();
    println!("{}", table(rows));

    let summary: Vec<String> = counts
        .iter()
        .filter(|(_, n)| **n > 0)
        .map(|(status, n)| format!("{}: {}", status, n))
        .collect();
    println!("{}", summary.join(", "));
}

pub fn print_note(week: WeekNumber, text: &str) {
    println!("\x1b[1;36mWeek {}: {}\x1b[0m", week, topic_for_week(week));
    println!("{}\n", text);
}
