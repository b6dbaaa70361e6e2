use predicates::str::contains;
use std::fs;

mod common;
use common::{dhub, init_workspace, setup_workspace, temp_out};

#[test]
fn test_inquiry_add_and_list() {
    let ws = setup_workspace("inquiry_add");
    let db = init_workspace(&ws);

    dhub()
        .current_dir(&ws)
        .args([
            "--db",
            &db,
            "inquiry",
            "--add",
            "--name",
            "Ravi Prasad",
            "--email",
            "ravi@example.com",
            "--mobile",
            "9111111111",
            "--message",
            "How do I join as an operator?",
        ])
        .assert()
        .success()
        .stdout(contains("Inquiry 1 recorded"));

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "inquiry", "--list"])
        .assert()
        .success()
        .stdout(contains("Ravi Prasad"))
        .stdout(contains("ravi@example.com"))
        .stdout(contains("How do I join as an operator?"));
}

#[test]
fn test_inquiry_add_requires_message() {
    let ws = setup_workspace("inquiry_missing");
    let db = init_workspace(&ws);

    dhub()
        .current_dir(&ws)
        .args([
            "--db",
            &db,
            "inquiry",
            "--add",
            "--name",
            "Ravi Prasad",
            "--email",
            "ravi@example.com",
        ])
        .assert()
        .failure()
        .stderr(contains("--message is required"));
}

#[test]
fn test_inquiry_list_when_empty() {
    let ws = setup_workspace("inquiry_empty");
    let db = init_workspace(&ws);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "inquiry", "--list"])
        .assert()
        .success()
        .stdout(contains("No inquiries recorded"));
}

#[test]
fn test_backup_copies_database() {
    let ws = setup_workspace("backup_copy");
    let db = init_workspace(&ws);

    let out = temp_out("backup_copy", "db");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    // the copy is a usable database with the full schema
    let conn = rusqlite::Connection::open(&out).expect("open backup");
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN \
             ('users','images','projects','tasks','inquiries','log')",
            [],
            |row| row.get(0),
        )
        .expect("query backup schema");
    assert_eq!(tables, 6);
}

#[test]
fn test_backup_fails_without_database() {
    let ws = setup_workspace("backup_missing");
    let db = ws.join("nope.db").to_string_lossy().to_string();

    let out = temp_out("backup_missing", "db");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Database not found"));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_backup_compress_produces_archive() {
    let ws = setup_workspace("backup_compress");
    let db = init_workspace(&ws);

    let out = temp_out("backup_compress", "db");
    let archive = std::path::Path::new(&out)
        .with_extension("tar.gz")
        .to_string_lossy()
        .to_string();
    fs::remove_file(&archive).ok();

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(
        std::path::Path::new(&archive).exists(),
        "expected compressed archive at {}",
        archive
    );
    assert!(
        !std::path::Path::new(&out).exists(),
        "uncompressed copy should be removed"
    );
}
