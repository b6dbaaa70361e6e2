use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    Pending,
    Saved,
    Submitted,
}

impl TaskStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Saved => "Saved",
            TaskStatus::Submitted => "Submitted",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(TaskStatus::Pending),
            "Saved" => Some(TaskStatus::Saved),
            "Submitted" => Some(TaskStatus::Submitted),
            _ => None,
        }
    }
}

/// The fields an operator transcribes from an image.
/// Stored on the task as a JSON string; the camelCase keys match the
/// historical data format, so old databases stay readable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntry {
    pub name: Option<String>,
    pub age: Option<String>,
    pub mobile_number: Option<String>,
    pub sex: Option<String>,
    pub address: Option<String>,
    pub receipt_number: Option<String>,
}

/// One data-entry unit: a single image inside a project.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub image_id: i64,
    pub status: TaskStatus,
    pub data_json: Option<String>,
    pub last_updated: Option<String>,
}

impl Task {
    /// Human-facing label, e.g. TASK-0000042
    pub fn label(&self) -> String {
        format!("TASK-{:07}", self.id)
    }

    pub fn entry(&self) -> TaskEntry {
        self.data_json
            .as_deref()
            .and_then(|j| serde_json::from_str(j).ok())
            .unwrap_or_default()
    }
}
