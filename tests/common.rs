#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn qt() -> Command {
    cargo_bin_cmd!("qtracker")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_qtracker.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Epoch milliseconds for today's local date at the given wall-clock time.
/// Seeding from today keeps date strings and clock strings consistent
/// with the local timezone the importer will parse them back in.
pub fn ts_today(h: u32, m: u32, s: u32) -> i64 {
    let day = chrono::Local::now().date_naive();
    day.and_hms_opt(h, m, s)
        .unwrap()
        .and_local_timezone(chrono::Local)
        .unwrap()
        .timestamp_millis()
}

pub fn today_display() -> String {
    chrono::Local::now().format("%m/%d/%Y").to_string()
}

/// Seed a store with three entries in known states:
/// 1001 done (wait 4s, order 5s, total 9s), 1002 in service, 1003 waiting.
pub fn seed_store(store_path: &str) {
    let date = today_display();
    let a1 = ts_today(9, 0, 0);
    let a2 = ts_today(9, 5, 0);
    let a3 = ts_today(9, 10, 0);

    let entries = serde_json::json!([
        { "id": 1001, "arrival": a1, "start": a1 + 4_000, "end": a1 + 9_000, "date": date },
        { "id": 1002, "arrival": a2, "start": a2 + 60_000, "end": null, "date": date },
        { "id": 1003, "arrival": a3, "start": null, "end": null, "date": date },
    ]);

    fs::write(store_path, serde_json::to_string_pretty(&entries).unwrap())
        .expect("write seed store");
}
