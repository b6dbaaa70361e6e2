use predicates::str::contains;

mod common;
use common::{dhub, drop_images, init_workspace, setup_workspace};

#[test]
fn test_sync_registers_new_images() {
    let ws = setup_workspace("sync_register");
    let db = init_workspace(&ws);

    drop_images(&ws, &["scan_001.png", "scan_002.jpg"]);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync"])
        .assert()
        .success()
        .stdout(contains("scan_001.png"))
        .stdout(contains("scan_002.jpg"))
        .stdout(contains("Registered 2 new image(s)"));
}

#[test]
fn test_sync_is_idempotent() {
    let ws = setup_workspace("sync_idempotent");
    let db = init_workspace(&ws);

    drop_images(&ws, &["scan_001.png"]);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync"])
        .assert()
        .success()
        .stdout(contains("Registered 1 new image(s)"));

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync"])
        .assert()
        .success()
        .stdout(contains("No new images found"));
}

#[test]
fn test_sync_dry_run_touches_nothing() {
    let ws = setup_workspace("sync_dry_run");
    let db = init_workspace(&ws);

    drop_images(&ws, &["scan_001.png"]);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("would be registered"));

    // nothing was written, a real run still finds the file
    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync"])
        .assert()
        .success()
        .stdout(contains("Registered 1 new image(s)"));
}

#[test]
fn test_sync_warns_on_discouraged_filenames() {
    let ws = setup_workspace("sync_advisory");
    let db = init_workspace(&ws);

    drop_images(&ws, &["holiday scan (1).png"]);

    // warning only, the file is still registered
    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync"])
        .assert()
        .success()
        .stdout(contains("holiday scan (1).png"))
        .stdout(contains("spaces"))
        .stdout(contains("parentheses"))
        .stdout(contains("Registered 1 new image(s)"));
}

#[test]
fn test_sync_skips_disallowed_extensions() {
    let ws = setup_workspace("sync_extension");
    let db = init_workspace(&ws);

    drop_images(&ws, &["notes.txt", "scan_001.png"]);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync"])
        .assert()
        .success()
        .stdout(contains("Skipped notes.txt"))
        .stdout(contains("Registered 1 new image(s)"));
}

#[test]
fn test_sync_with_empty_pending_folder() {
    let ws = setup_workspace("sync_empty");
    let db = init_workspace(&ws);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync"])
        .assert()
        .success()
        .stdout(contains("No new images found"));
}

#[test]
fn test_sync_strict_refuses_advisory_filenames() {
    let ws = setup_workspace("sync_strict");
    let db = init_workspace(&ws);

    drop_images(&ws, &["clean_scan.png", "holiday scan (1).png"]);

    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync", "--strict"])
        .assert()
        .failure()
        .stderr(contains("rejected"));

    // the aborted scan must not have registered anything, the clean file
    // included
    dhub()
        .current_dir(&ws)
        .args(["--db", &db, "sync"])
        .assert()
        .success()
        .stdout(contains("Registered 2 new image(s)"));
}
