mod commands;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use curriculum_core::FileAppDataRepository;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "curriculum")]
#[command(about = "Track your way through the 24-week DevOps curriculum", long_about = None)]
struct Cli {
    /// Directory holding data.json (defaults to ~/.devops-tracker)
    #[arg(long, global = true, env = "CURRICULUM_HOME")]
    data_dir: Option<PathBuf>,

    /// Log what the tracker does to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard
    Dashboard,
    /// Print overall progress and the current week
    Status,
    /// Show every curriculum week with its status
    Weeks {
        /// Only show one phase (1-4)
        #[arg(long)]
        phase: Option<u32>,
    },
    /// Log a study session (usage: log 2.5 Docker volumes date:yesterday type:evening notes:"...")
    Log {
        /// Hours studied
        hours: f64,
        /// Topic words and key:value metadata (date, type, notes, topic)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List logged study sessions
    Logs,
    /// Show sessions grouped by curriculum week
    History,
    /// Change a logged session (same metadata keys as `log`)
    EditLog {
        /// Session ID or unique prefix
        id: String,
        /// New number of hours
        #[arg(long)]
        hours: Option<f64>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Delete a logged session
    DeleteLog {
        /// Session ID or unique prefix
        id: String,
    },
    /// Manage certification goals
    Cert {
        #[command(subcommand)]
        command: CertCommand,
    },
    /// List well-known certifications
    Catalog,
    /// Manage job applications
    Job {
        #[command(subcommand)]
        command: JobCommand,
    },
    /// Weekly reflections
    Note {
        #[command(subcommand)]
        command: NoteCommand,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommand>,
    },
}

#[derive(Subcommand)]
pub enum CertCommand {
    /// Add a certification goal
    Add {
        /// Certification name (catalog names fill in provider and difficulty)
        name: String,
        /// Target date (YYYY-MM-DD, +3m, ...)
        #[arg(long)]
        target: String,
        #[arg(long, default_value = "planning")]
        status: String,
        #[arg(long)]
        materials: Option<String>,
    },
    /// List certification goals
    List,
    /// Update a certification goal
    ///
    /// Pass an empty value, e.g. `--notes ""`, to clear an optional field.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        materials: Option<String>,
    },
    /// Delete a certification goal
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Record a job application
    Add {
        company: String,
        position: String,
        /// Application date
        #[arg(long, default_value = "today")]
        date: String,
        #[arg(long, default_value = "applied")]
        status: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List job applications
    List,
    /// Update a job application
    ///
    /// Pass an empty value, e.g. `--notes ""`, to clear an optional field.
    Update {
        id: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a job application
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum NoteCommand {
    /// Write the reflection for a week
    Set {
        week: u32,
        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,
    },
    /// Show one week's reflection, or all of them
    Show { week: Option<u32> },
    /// Remove a week's reflection
    Clear { week: u32 },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print current settings
    Show,
    /// Set the weekly study target in hours
    Target { hours: f64 },
    /// Set the theme, or toggle it when no value is given
    Theme { theme: Option<String> },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "curriculum_core=info,curriculum_cli=info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let repo = FileAppDataRepository::new(cli.data_dir)?;
    tracing::debug!(path = %repo.path().display(), "using data file");

    match cli.command {
        None => tui::run(&repo),
        Some(command) => commands::execute(command, &repo),
    }
}
