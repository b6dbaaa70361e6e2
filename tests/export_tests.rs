use predicates::str::contains;
use std::fs;

mod common;
use common::{dhub, init_workspace_with_data, save_all_entries, setup_workspace, temp_out};

fn assign_project(ws: &std::path::PathBuf, db: &str) {
    dhub()
        .current_dir(ws)
        .args([
            "--db", db, "assign", "--employee", "1", "--tasks", "2", "--cost", "150",
        ])
        .assert()
        .success();
}

#[test]
fn test_export_projects_csv() {
    let ws = setup_workspace("export_projects_csv");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db);

    let out = temp_out("export_projects_csv", "csv");

    dhub()
        .current_dir(&ws)
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--projects",
        ])
        .assert()
        .success()
        .stdout(contains("export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("project_name"));
    assert!(content.contains("HL_B_001"));
    assert!(content.contains("DT-UAO-000001"));
    assert!(content.contains("150.00"));
}

#[test]
fn test_export_tasks_json_includes_entry_fields() {
    let ws = setup_workspace("export_tasks_json");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db);
    save_all_entries(&ws, &db, &[1, 2]);

    let out = temp_out("export_tasks_json", "json");

    dhub()
        .current_dir(&ws)
        .args([
            "--db", &db, "export", "--format", "json", "--file", &out, "--tasks",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("scan_001.png"));
    assert!(content.contains("Sample Person"));
    assert!(content.contains("RCPT-9"));
    assert!(content.contains("HL_B_001"));
}

#[test]
fn test_export_range_filters_by_assignment_date() {
    let ws = setup_workspace("export_range");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db);

    let out = temp_out("export_range", "csv");

    // a range far in the past excludes today's project
    dhub()
        .current_dir(&ws)
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--projects", "--range",
            "2001",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("project_name"));
    assert!(!content.contains("HL_B_001"));
}

#[test]
fn test_export_range_current_year_includes_project() {
    let ws = setup_workspace("export_range_now");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db);

    let out = temp_out("export_range_now", "csv");
    let year = chrono::Local::now().format("%Y").to_string();

    dhub()
        .current_dir(&ws)
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--projects", "--range",
            &year,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("HL_B_001"));
}

#[test]
fn test_export_rejects_bad_range() {
    let ws = setup_workspace("export_bad_range");
    let db = init_workspace_with_data(&ws);

    let out = temp_out("export_bad_range", "csv");

    dhub()
        .current_dir(&ws)
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--projects", "--range",
            "20-1",
        ])
        .assert()
        .failure()
        .stderr(contains("Export error"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let ws = setup_workspace("export_force");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("write stale file");

    dhub()
        .current_dir(&ws)
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--projects", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("HL_B_001"));
    assert!(!content.contains("stale"));
}
