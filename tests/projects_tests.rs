use predicates::str::contains;

mod common;
use common::{add_employee, dhub, init_workspace_with_data, setup_workspace};

fn assign_project(ws: &std::path::PathBuf, db: &str, employee: &str, tasks: &str) {
    dhub()
        .current_dir(ws)
        .args(["--db", db, "assign", "--employee", employee, "--tasks", tasks])
        .assert()
        .success();
}

#[test]
fn test_projects_list_shows_progress() {
    let ws = setup_workspace("proj_list");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db, "1", "2");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects"])
        .assert()
        .success()
        .stdout(contains("HL_B_001"))
        .stdout(contains("Asha Kumar"))
        .stdout(contains("In Progress"))
        .stdout(contains("0%"));
}

#[test]
fn test_projects_period_filter() {
    let ws = setup_workspace("proj_period");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db, "1", "1");

    // nothing assigned in 2001
    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--period", "2001"])
        .assert()
        .success()
        .stdout(contains("No projects found"));

    let year = chrono::Local::now().format("%Y").to_string();
    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--period", &year])
        .assert()
        .success()
        .stdout(contains("HL_B_001"));
}

#[test]
fn test_projects_period_all_and_ranges() {
    let ws = setup_workspace("proj_ranges");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db, "1", "1");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("HL_B_001"));

    let year = chrono::Local::now().format("%Y").to_string();
    let range = format!("2001:{}", year);
    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--period", &range])
        .assert()
        .success()
        .stdout(contains("HL_B_001"));
}

#[test]
fn test_projects_invalid_period_fails() {
    let ws = setup_workspace("proj_bad_period");
    let db = init_workspace_with_data(&ws);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--period", "20-111"])
        .assert()
        .failure();
}

#[test]
fn test_projects_status_filter() {
    let ws = setup_workspace("proj_status");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db, "1", "1");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--status", "in-progress"])
        .assert()
        .success()
        .stdout(contains("HL_B_001"));

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--status", "approved"])
        .assert()
        .success()
        .stdout(contains("No projects found"));

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--status", "nonsense"])
        .assert()
        .failure()
        .stderr(contains("Invalid status"));
}

#[test]
fn test_projects_employee_filter() {
    let ws = setup_workspace("proj_employee");
    let db = init_workspace_with_data(&ws);
    add_employee(&ws, &db, "Binod Rao", "binod@example.com");
    assign_project(&ws, &db, "1", "1");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--employee", "2"])
        .assert()
        .success()
        .stdout(contains("No projects found"));

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects", "--employee", "1"])
        .assert()
        .success()
        .stdout(contains("HL_B_001"));
}

#[test]
fn test_project_names_are_sequential() {
    let ws = setup_workspace("proj_seq");
    let db = init_workspace_with_data(&ws);
    assign_project(&ws, &db, "1", "1");
    assign_project(&ws, &db, "1", "1");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "projects"])
        .assert()
        .success()
        .stdout(contains("HL_B_001"))
        .stdout(contains("HL_B_002"));
}
