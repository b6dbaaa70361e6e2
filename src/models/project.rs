use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    InProgress,
    InReview,
    Approved,
    Rejected,
}

impl ProjectStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::InReview => "In Review",
            ProjectStatus::Approved => "Approved",
            ProjectStatus::Rejected => "Rejected",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "In Progress" => Some(ProjectStatus::InProgress),
            "In Review" => Some(ProjectStatus::InReview),
            "Approved" => Some(ProjectStatus::Approved),
            "Rejected" => Some(ProjectStatus::Rejected),
            _ => None,
        }
    }

    /// Helper: convert input from CLI ("in-progress", "in review", "APPROVED", ...)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().replace(['-', '_'], " ").as_str() {
            "in progress" => Some(ProjectStatus::InProgress),
            "in review" => Some(ProjectStatus::InReview),
            "approved" => Some(ProjectStatus::Approved),
            "rejected" => Some(ProjectStatus::Rejected),
            _ => None,
        }
    }
}

/// A batch of data-entry tasks assigned to one employee.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub project_name: String, // e.g. HL_B_001
    pub employee_id: i64,     // FK → users.id
    pub status: ProjectStatus,
    pub assigned_date: String, // ISO timestamp from SQLite
    pub cost: f64,
    pub security_deposit: f64,
    pub expiry_date: Option<String>,
    pub notes: Option<String>,
}
