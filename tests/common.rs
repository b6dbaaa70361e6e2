#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dhub() -> Command {
    cargo_bin_cmd!("demshub")
}

/// Create a fresh workspace directory inside the system temp dir.
pub fn setup_workspace(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_demshub_ws", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create workspace dir");
    path
}

/// Database path inside a workspace, as a string for --db.
pub fn db_path(ws: &PathBuf) -> String {
    ws.join("dems.db").to_string_lossy().to_string()
}

/// Create a temporary output file path and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the workspace layout and database schema in test mode
/// (no config file is written).
pub fn init_workspace(ws: &PathBuf) -> String {
    let db = db_path(ws);
    dhub()
        .current_dir(ws)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    db
}

/// Drop image files into uploads/pending.
pub fn drop_images(ws: &PathBuf, names: &[&str]) {
    let pending = ws.join("uploads").join("pending");
    fs::create_dir_all(&pending).expect("create pending dir");
    for name in names {
        fs::write(pending.join(name), b"not-a-real-image").expect("write image file");
    }
}

/// Register an active employee account; the first account gets id 1.
pub fn add_employee(ws: &PathBuf, db: &str, name: &str, email: &str) {
    dhub()
        .current_dir(ws)
        .args([
            "--db", db, "user", "--add", "--name", name, "--email", email, "--password",
            "secret12", "--role", "employee",
        ])
        .assert()
        .success();
}

/// Full fixture: init, two pending images synced, one active employee.
pub fn init_workspace_with_data(ws: &PathBuf) -> String {
    let db = init_workspace(ws);

    drop_images(ws, &["scan_001.png", "scan_002.png"]);
    dhub()
        .current_dir(ws)
        .args(["--db", &db, "sync"])
        .assert()
        .success();

    add_employee(ws, &db, "Asha Kumar", "asha@example.com");
    db
}

/// Save entries for every task of a freshly assigned project (task ids
/// start at 1 for the first project in a fresh database).
pub fn save_all_entries(ws: &PathBuf, db: &str, task_ids: &[i64]) {
    for id in task_ids {
        dhub()
            .current_dir(ws)
            .args([
                "--db",
                db,
                "entry",
                &id.to_string(),
                "--name",
                "Sample Person",
                "--age",
                "34",
                "--mobile",
                "9000000000",
                "--sex",
                "F",
                "--address",
                "12 Main Road",
                "--receipt",
                "RCPT-9",
            ])
            .assert()
            .success();
    }
}
