use serde::{Deserialize, Serialize};

use crate::model::curriculum::WeekNumber;
use crate::model::status::WeekStatus;
use crate::model::study_log::StudySession;

/// One curriculum week as shown on the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekCard {
    pub week: WeekNumber,
    pub topic: String,
    pub studied_hours: f64,
    pub target_hours: f64,
    pub status: WeekStatus,
    pub progress_percent: f64,
    pub days_left: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhaseView {
    pub phase: u32,
    pub name: String,
    pub description: String,
    pub weeks: Vec<WeekCard>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_hours: f64,
    pub total_target_hours: f64,
    pub overall_progress: f64,
    pub current_week: WeekNumber,
    /// Hours in the ledger bucket of the current week.
    pub hours_this_week: f64,
    pub target_hours_per_week: f64,
}

/// Sessions that fall in one calendar curriculum week.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekHistory {
    pub week: u32,
    /// False for weeks past the end of the curriculum.
    pub in_curriculum: bool,
    pub topic: String,
    pub total_hours: f64,
    pub sessions: Vec<StudySession>,
}
