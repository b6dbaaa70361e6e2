use predicates::str::contains;

mod common;
use common::{add_employee, dhub, init_workspace, setup_workspace};

#[test]
fn test_user_add_and_list() {
    let ws = setup_workspace("user_add_list");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--list"])
        .assert()
        .success()
        .stdout(contains("Asha Kumar"))
        .stdout(contains("DT-UAO-000001"))
        .stdout(contains("asha@example.com"));
}

#[test]
fn test_user_emails_are_stored_lowercase() {
    let ws = setup_workspace("user_email_case");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "Asha@Example.COM");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--list"])
        .assert()
        .success()
        .stdout(contains("asha@example.com"));
}

#[test]
fn test_duplicate_email_is_rejected() {
    let ws = setup_workspace("user_dup_email");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");

    dhub()
        .current_dir(&ws)
        .args([
            "--db",
            &db,
            "user",
            "--add",
            "--name",
            "Someone Else",
            "--email",
            "ASHA@example.com",
            "--password",
            "secret12",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_employee_ids_are_sequential() {
    let ws = setup_workspace("user_seq_ids");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");
    add_employee(&ws, &db, "Binod Rao", "binod@example.com");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--list"])
        .assert()
        .success()
        .stdout(contains("DT-UAO-000001"))
        .stdout(contains("DT-UAO-000002"));
}

#[test]
fn test_user_show_details() {
    let ws = setup_workspace("user_show");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--show", "1"])
        .assert()
        .success()
        .stdout(contains("Asha Kumar"))
        .stdout(contains("employee"))
        .stdout(contains("0 assigned"));
}

#[test]
fn test_user_toggle_status() {
    let ws = setup_workspace("user_toggle");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--toggle", "1"])
        .assert()
        .success()
        .stdout(contains("inactive"));

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--toggle", "1"])
        .assert()
        .success()
        .stdout(contains("active"));
}

#[test]
fn test_user_show_unknown_id_fails() {
    let ws = setup_workspace("user_unknown");
    let db = init_workspace(&ws);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--show", "42"])
        .assert()
        .failure()
        .stderr(contains("No user found with id 42"));
}

#[test]
fn test_password_is_not_stored_in_clear() {
    let ws = setup_workspace("user_password_hash");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");

    let conn = rusqlite::Connection::open(&db).expect("open db");
    let hash: String = conn
        .query_row("SELECT password_hash FROM users WHERE id = 1", [], |row| {
            row.get(0)
        })
        .expect("read hash");

    assert_ne!(hash, "secret12");
    assert!(hash.starts_with("$argon2"), "expected a PHC argon2 hash");
    assert!(demshub::core::auth::verify_password("secret12", &hash).expect("verify"));
    assert!(!demshub::core::auth::verify_password("wrong", &hash).expect("verify"));
}

#[test]
fn test_user_update_profile_fields() {
    let ws = setup_workspace("user_update");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");

    dhub()
        .current_dir(&ws)
        .args([
            "--db",
            &db,
            "user",
            "--update",
            "1",
            "--phone",
            "9876543210",
            "--gender",
            "F",
            "--dob",
            "1990-04-12",
            "--designation",
            "Senior Operator",
        ])
        .assert()
        .success()
        .stdout(contains("Profile updated for Asha Kumar"));

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--show", "1"])
        .assert()
        .success()
        .stdout(contains("9876543210"))
        .stdout(contains("1990-04-12"))
        .stdout(contains("Senior Operator"));
}

#[test]
fn test_user_update_keeps_unset_fields() {
    let ws = setup_workspace("user_update_partial");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--update", "1", "--designation", "Operator"])
        .assert()
        .success();

    // a later phone-only update must not clear the designation
    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--update", "1", "--phone", "9000000001"])
        .assert()
        .success();

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--show", "1"])
        .assert()
        .success()
        .stdout(contains("9000000001"))
        .stdout(contains("Operator"));
}

#[test]
fn test_user_update_requires_a_field() {
    let ws = setup_workspace("user_update_empty");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--update", "1"])
        .assert()
        .failure()
        .stderr(contains("nothing to update"));
}

#[test]
fn test_user_update_rejects_malformed_dob() {
    let ws = setup_workspace("user_update_bad_dob");
    let db = init_workspace(&ws);

    add_employee(&ws, &db, "Asha Kumar", "asha@example.com");

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "user", "--update", "1", "--dob", "12-04-1990"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}
