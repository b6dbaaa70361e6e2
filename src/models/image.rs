use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageStatus {
    Unassigned,
    Assigned,
}

impl ImageStatus {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "unassigned" => Some(ImageStatus::Unassigned),
            "assigned" => Some(ImageStatus::Assigned),
            _ => None,
        }
    }
}

/// One tracked file from `uploads/pending/`.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRecord {
    pub id: i64,
    pub filename: String,
    pub status: ImageStatus,
}
