use serde::Serialize;

/// Flat row for project exports.
#[derive(Serialize, Clone, Debug)]
pub struct ProjectExport {
    pub id: i64,
    pub project_name: String,
    pub employee_id: String,
    pub employee_name: String,
    pub status: String,
    pub assigned_date: String,
    pub cost: f64,
    pub security_deposit: f64,
    pub expiry_date: String,
}

/// Flat row for task exports; the saved entry JSON is spread into columns.
#[derive(Serialize, Clone, Debug)]
pub struct TaskExport {
    pub id: i64,
    pub project_name: String,
    pub filename: String,
    pub status: String,
    pub name: String,
    pub age: String,
    pub mobile_number: String,
    pub sex: String,
    pub address: String,
    pub receipt_number: String,
    pub last_updated: String,
}

pub(crate) fn project_headers() -> Vec<&'static str> {
    vec![
        "id",
        "project_name",
        "employee_id",
        "employee_name",
        "status",
        "assigned_date",
        "cost",
        "security_deposit",
        "expiry_date",
    ]
}

pub(crate) fn task_headers() -> Vec<&'static str> {
    vec![
        "id",
        "project_name",
        "filename",
        "status",
        "name",
        "age",
        "mobile_number",
        "sex",
        "address",
        "receipt_number",
        "last_updated",
    ]
}

pub(crate) fn project_to_row(p: &ProjectExport) -> Vec<String> {
    vec![
        p.id.to_string(),
        p.project_name.clone(),
        p.employee_id.clone(),
        p.employee_name.clone(),
        p.status.clone(),
        p.assigned_date.clone(),
        format!("{:.2}", p.cost),
        format!("{:.2}", p.security_deposit),
        p.expiry_date.clone(),
    ]
}

pub(crate) fn task_to_row(t: &TaskExport) -> Vec<String> {
    vec![
        t.id.to_string(),
        t.project_name.clone(),
        t.filename.clone(),
        t.status.clone(),
        t.name.clone(),
        t.age.clone(),
        t.mobile_number.clone(),
        t.sex.clone(),
        t.address.clone(),
        t.receipt_number.clone(),
        t.last_updated.clone(),
    ]
}
