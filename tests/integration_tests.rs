use predicates::str::contains;
use std::fs;

mod common;
use common::{qt, seed_store, setup_test_store};

#[test]
fn test_init_creates_empty_store() {
    let store_path = setup_test_store("init_creates_empty_store");

    qt().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&store_path).expect("read store");
    assert_eq!(content, "[]");
}

#[test]
fn test_arrive_and_list() {
    let store_path = setup_test_store("arrive_and_list");

    qt().args(["--store", &store_path, "arrive"])
        .assert()
        .success()
        .stdout(contains("Arrival logged"));

    qt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("waiting"));
}

#[test]
fn test_full_service_flow() {
    let store_path = setup_test_store("full_service_flow");

    qt().args(["--store", &store_path, "arrive"])
        .assert()
        .success();

    // no id: the oldest waiting entry is taken
    qt().args(["--store", &store_path, "start"])
        .assert()
        .success()
        .stdout(contains("Service started"));

    qt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("in service"));

    qt().args(["--store", &store_path, "finish"])
        .assert()
        .success()
        .stdout(contains("Service finished"));

    qt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("done"));
}

#[test]
fn test_list_empty_store() {
    let store_path = setup_test_store("list_empty_store");

    qt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries recorded"));
}

#[test]
fn test_start_unknown_id_fails() {
    let store_path = setup_test_store("start_unknown_id");
    seed_store(&store_path);

    qt().args(["--store", &store_path, "start", "424242"])
        .assert()
        .failure()
        .stderr(contains("No entry found with id 424242"));
}

#[test]
fn test_double_start_refused() {
    let store_path = setup_test_store("double_start");
    seed_store(&store_path);

    // 1001 already carries both stamps
    qt().args(["--store", &store_path, "start", "1001"])
        .assert()
        .failure()
        .stderr(contains("already has a start stamp"));
}

#[test]
fn test_finish_before_start_refused() {
    let store_path = setup_test_store("finish_before_start");
    seed_store(&store_path);

    // 1003 is still waiting
    qt().args(["--store", &store_path, "finish", "1003"])
        .assert()
        .failure()
        .stderr(contains("no start stamp"));
}

#[test]
fn test_start_no_waiting_entry_fails() {
    let store_path = setup_test_store("start_no_waiting");
    seed_store(&store_path);

    // consume the only waiting entry, then ask again
    qt().args(["--store", &store_path, "start"])
        .assert()
        .success();

    qt().args(["--store", &store_path, "start"])
        .assert()
        .failure()
        .stderr(contains("No waiting entry"));
}

#[test]
fn test_del_with_confirmation() {
    let store_path = setup_test_store("del_confirm");
    seed_store(&store_path);

    qt().args(["--store", &store_path, "del", "1001"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let raw = fs::read_to_string(&store_path).expect("read store");
    let entries: serde_json::Value = serde_json::from_str(&raw).expect("parse store");
    let ids: Vec<i64> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1002, 1003]);
}

#[test]
fn test_del_cancelled_keeps_store() {
    let store_path = setup_test_store("del_cancelled");
    seed_store(&store_path);

    qt().args(["--store", &store_path, "del", "1001"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    let content = fs::read_to_string(&store_path).expect("read store");
    assert!(content.contains("1001"));
}

#[test]
fn test_del_unknown_id_fails() {
    let store_path = setup_test_store("del_unknown");
    seed_store(&store_path);

    qt().args(["--store", &store_path, "del", "999"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("No entry found with id 999"));
}

#[test]
fn test_reset_removes_store_file() {
    let store_path = setup_test_store("reset_removes_file");
    seed_store(&store_path);

    qt().args(["--store", &store_path, "reset"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("All entries have been deleted"));

    assert!(!std::path::Path::new(&store_path).exists());

    // a rehydration after reset yields an empty collection
    qt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries recorded"));
}

#[test]
fn test_config_print() {
    let store_path = setup_test_store("config_print");

    qt().args(["--store", &store_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("store:"));
}

#[test]
fn test_backup_copies_store() {
    let store_path = setup_test_store("backup_copies_store");
    seed_store(&store_path);

    let dest = common::temp_out("backup_copies_store", "json");

    qt().args(["--store", &store_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let src = fs::read_to_string(&store_path).expect("read store");
    let copy = fs::read_to_string(&dest).expect("read backup");
    assert_eq!(src, copy);
}

#[test]
fn test_backup_compress_creates_zip() {
    let store_path = setup_test_store("backup_compress");
    seed_store(&store_path);

    let dest = common::temp_out("backup_compress", "json");
    let zip_path = std::path::Path::new(&dest).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    qt().args([
        "--store", &store_path, "backup", "--file", &dest, "--compress",
    ])
    .assert()
    .success()
    .stdout(contains("Compressed"));

    // the uncompressed copy is replaced by the archive
    assert!(!std::path::Path::new(&dest).exists());
    let bytes = fs::read(&zip_path).expect("read zip");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_backup_missing_store_fails() {
    let store_path = setup_test_store("backup_missing_store");
    let dest = common::temp_out("backup_missing_store", "json");

    qt().args(["--store", &store_path, "backup", "--file", &dest])
        .assert()
        .failure()
        .stderr(contains("Store file not found"));
}
