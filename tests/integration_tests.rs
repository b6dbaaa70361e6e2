use predicates::str::contains;

mod common;
use common::{db_path, dhub, init_workspace, setup_workspace};

#[test]
fn test_init_creates_layout_and_database() {
    let ws = setup_workspace("init_layout");
    let db = init_workspace(&ws);

    for rel in [
        "templates",
        "static/css",
        "static/images",
        "uploads/pending",
        "uploads/avatars",
    ] {
        assert!(ws.join(rel).is_dir(), "missing workspace dir {}", rel);
    }
    assert!(std::path::Path::new(&db).exists(), "database file missing");

    // schema is in place
    let conn = rusqlite::Connection::open(&db).expect("open db");
    for table in ["users", "images", "projects", "tasks", "inquiries", "log"] {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .expect("query sqlite_master");
        assert_eq!(count, 1, "table {} not created", table);
    }
}

#[test]
fn test_init_is_idempotent() {
    let ws = setup_workspace("init_twice");
    let db = init_workspace(&ws);

    // a second init must not fail or wipe data
    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_db_check_and_migrate() {
    let ws = setup_workspace("db_check");
    let db = init_workspace(&ws);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_db_info_reports_tables() {
    let ws = setup_workspace("db_info");
    let db = init_workspace(&ws);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("users"))
        .stdout(contains("images"));
}

#[test]
fn test_log_records_init() {
    let ws = setup_workspace("log_init");
    let db = init_workspace(&ws);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"));
}

#[test]
fn test_unknown_db_command_fails() {
    let ws = setup_workspace("bad_subcommand");
    let _db = db_path(&ws);

    dhub()
        .current_dir(&ws)
        .args(["definitely-not-a-command"])
        .assert()
        .failure();
}

#[test]
fn test_config_print_shows_yaml() {
    let ws = setup_workspace("config_print");
    let db = init_workspace(&ws);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("database:"))
        .stdout(contains("currency_symbol:"));
}
