use serde::Serialize;

/// A contact-form style inquiry recorded by an operator.
#[derive(Debug, Clone, Serialize)]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile_number: Option<String>,
    pub message: String,
    pub submitted_at: String,
}
