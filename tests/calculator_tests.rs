mod common;
use common::today_display;

use qtracker::core::calculator::calculate;
use qtracker::models::entry::TimeEntry;
use qtracker::utils::time::format_duration;

fn entry(arrival: i64, start: Option<i64>, end: Option<i64>) -> TimeEntry {
    TimeEntry {
        id: 1,
        arrival,
        start,
        end,
        date: today_display(),
    }
}

#[test]
fn test_waiting_entry_tracks_now() {
    let e = entry(1_000, None, None);

    let d = calculate(&e, 5_000);
    assert_eq!(d.wait_ms, 4_000);
    assert_eq!(d.order_ms, 0);
    assert_eq!(d.total_ms, 4_000);

    // wait is non-decreasing as now advances
    let later = calculate(&e, 9_000);
    assert!(later.wait_ms >= d.wait_ms);
    assert_eq!(later.wait_ms, 8_000);
}

#[test]
fn test_in_service_entry() {
    let e = entry(1_000, Some(5_000), None);

    let d = calculate(&e, 9_000);
    assert_eq!(d.wait_ms, 4_000);
    assert_eq!(d.order_ms, 4_000);
    assert_eq!(d.total_ms, 8_000);
}

#[test]
fn test_completed_entry_ignores_now() {
    let e = entry(1_000, Some(5_000), Some(9_000));

    let d = calculate(&e, 1_000_000);
    assert_eq!(d.wait_ms, 4_000);
    assert_eq!(d.order_ms, 4_000);
    assert_eq!(d.total_ms, 8_000);
}

#[test]
fn test_out_of_order_stamps_go_negative() {
    // start before arrival is not rejected, it just produces a
    // negative wait
    let e = entry(5_000, Some(1_000), Some(9_000));

    let d = calculate(&e, 9_000);
    assert_eq!(d.wait_ms, -4_000);
    assert_eq!(d.order_ms, 8_000);
    assert_eq!(d.total_ms, 4_000);
}

#[test]
fn test_format_duration_placeholder() {
    assert_eq!(format_duration(None), "--:--");
    assert_eq!(format_duration(Some(0)), "--:--");
}

#[test]
fn test_format_duration_hh_mm_ss() {
    assert_eq!(format_duration(Some(3_661_000)), "01:01:01");
    assert_eq!(format_duration(Some(59_000)), "00:00:59");
    // sub-second durations round down to zero seconds but are not the
    // placeholder
    assert_eq!(format_duration(Some(999)), "00:00:00");
}

#[test]
fn test_format_duration_hours_grow_unpadded() {
    // 100 hours
    assert_eq!(format_duration(Some(360_000_000)), "100:00:00");
}

#[test]
fn test_format_duration_negative_keeps_sign() {
    assert_eq!(format_duration(Some(-5_000)), "-00:00:05");
}

#[test]
fn test_matlab_script_relative_seconds() {
    let entries = vec![entry(1_000, Some(5_000), Some(9_000))];
    let script = qtracker::export::matlab::build_script(&entries);

    assert!(script.contains("n = 1;"));
    assert!(script.contains("arrival = [0.00];"));
    assert!(script.contains("start = [4.00];"));
    assert!(script.contains("finish = [8.00];"));
    assert!(script.contains("wait_time = start - arrival;"));
}
