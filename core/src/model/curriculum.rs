use serde::Serialize;

use super::certification::Difficulty;

/// One week of the curriculum, `1..=TOTAL_WEEKS`.
pub type WeekNumber = u32;

pub const TOTAL_WEEKS: WeekNumber = 24;

pub fn is_curriculum_week(week: WeekNumber) -> bool {
    (1..=TOTAL_WEEKS).contains(&week)
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CurriculumPhase {
    pub phase: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Topics in week order, starting at `first_week`.
    pub topics: &'static [&'static str],
    pub first_week: WeekNumber,
}

impl CurriculumPhase {
    pub fn last_week(&self) -> WeekNumber {
        self.first_week + self.topics.len() as WeekNumber - 1
    }

    pub fn weeks(&self) -> impl Iterator<Item = WeekNumber> {
        self.first_week..=self.last_week()
    }

    pub fn contains(&self, week: WeekNumber) -> bool {
        (self.first_week..=self.last_week()).contains(&week)
    }

    pub fn topic(&self, week: WeekNumber) -> Option<&'static str> {
        if !self.contains(week) {
            return None;
        }
        self.topics.get((week - self.first_week) as usize).copied()
    }
}

pub static CURRICULUM: [CurriculumPhase; 4] = [
    CurriculumPhase {
        phase: 1,
        name: "Foundation",
        description: "Build fundamental skills in Linux, scripting, and basic DevOps concepts",
        first_week: 1,
        topics: &[
            "Linux Basics & Command Line",
            "Shell Scripting & Automation",
            "Networking & Security Fundamentals",
            "Version Control with Git",
            "Programming Basics (Python/Go)",
            "System Administration",
        ],
    },
    CurriculumPhase {
        phase: 2,
        name: "Core Skills",
        description: "Master containerization, CI/CD, and core DevOps tools",
        first_week: 7,
        topics: &[
            "Docker & Containerization",
            "CI/CD Fundamentals",
            "Jenkins & Automation",
            "Testing & Quality Assurance",
            "Build & Deployment Tools",
            "Configuration Management",
        ],
    },
    CurriculumPhase {
        phase: 3,
        name: "Advanced Tools",
        description: "Learn container orchestration, cloud platforms, and infrastructure as code",
        first_week: 13,
        topics: &[
            "Kubernetes Basics",
            "Kubernetes Advanced Features",
            "Cloud Platforms (AWS/Azure/GCP)",
            "Infrastructure as Code (Terraform)",
            "Cloud Services & Architecture",
            "Microservices & API Management",
        ],
    },
    CurriculumPhase {
        phase: 4,
        name: "Specialization & Job Prep",
        description: "Focus on monitoring, security, and job preparation",
        first_week: 19,
        topics: &[
            "Monitoring & Observability",
            "Security & Compliance",
            "Performance Optimization",
            "DevSecOps Practices",
            "Portfolio & Resume Building",
            "Interview Preparation & Job Search",
        ],
    },
];

pub fn phase(number: u32) -> Option<&'static CurriculumPhase> {
    CURRICULUM.iter().find(|p| p.phase == number)
}

pub fn phase_for_week(week: WeekNumber) -> Option<&'static CurriculumPhase> {
    CURRICULUM.iter().find(|p| p.contains(week))
}

pub fn topic_for_week(week: WeekNumber) -> String {
    phase_for_week(week)
        .and_then(|p| p.topic(week))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Week {}", week))
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AvailableCertification {
    pub name: &'static str,
    pub provider: &'static str,
    pub difficulty: Difficulty,
    pub estimated_study_weeks: u32,
}

pub static CERTIFICATION_CATALOG: [AvailableCertification; 5] = [
    AvailableCertification {
        name: "AWS Certified DevOps Engineer - Professional",
        provider: "Amazon Web Services",
        difficulty: Difficulty::Professional,
        estimated_study_weeks: 8,
    },
    AvailableCertification {
        name: "Certified Kubernetes Administrator (CKA)",
        provider: "Cloud Native Computing Foundation",
        difficulty: Difficulty::Intermediate,
        estimated_study_weeks: 6,
    },
    AvailableCertification {
        name: "Docker Certified Associate (DCA)",
        provider: "Docker Inc",
        difficulty: Difficulty::Associate,
        estimated_study_weeks: 4,
    },
    AvailableCertification {
        name: "Microsoft Azure DevOps Engineer Expert",
        provider: "Microsoft",
        difficulty: Difficulty::Expert,
        estimated_study_weeks: 10,
    },
    AvailableCertification {
        name: "Terraform Associate",
        provider: "HashiCorp",
        difficulty: Difficulty::Associate,
        estimated_study_weeks: 4,
    },
];

pub fn find_catalog_entry(name: &str) -> Option<&'static AvailableCertification> {
    CERTIFICATION_CATALOG
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_cover_every_week_once() {
        let mut weeks: Vec<WeekNumber> = CURRICULUM.iter().flat_map(|p| p.weeks()).collect();
        weeks.sort_unstable();
        assert_eq!(weeks, (1..=TOTAL_WEEKS).collect::<Vec<_>>());
        for p in &CURRICULUM {
            assert_eq!(p.topics.len(), 6);
        }
    }

    #[test]
    fn test_topic_lookup() {
        assert_eq!(topic_for_week(1), "Linux Basics & Command Line");
        assert_eq!(topic_for_week(13), "Kubernetes Basics");
        assert_eq!(topic_for_week(24), "Interview Preparation & Job Search");
        assert_eq!(topic_for_week(25), "Week 25");
        assert_eq!(phase_for_week(12).map(|p| p.phase), Some(2));
        assert!(phase(5).is_none());
    }

    #[test]
    fn test_catalog_lookup_ignores_case() {
        let entry = find_catalog_entry("terraform associate").unwrap();
        assert_eq!(entry.provider, "HashiCorp");
        assert!(find_catalog_entry("Unknown Cert").is_none());
    }
}
