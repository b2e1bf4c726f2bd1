use std::time::{Duration, Instant};

use qtracker::core::clock::Clock;

#[test]
fn test_clock_broadcasts_to_all_subscribers() {
    let clock = Clock::spawn(Duration::from_millis(100));

    let rx1 = clock.subscribe();
    let rx2 = clock.subscribe();

    let t1 = rx1.recv_timeout(Duration::from_secs(2)).expect("tick on rx1");
    let t2 = rx2.recv_timeout(Duration::from_secs(2)).expect("tick on rx2");

    assert!(t1.timestamp > 0);
    assert!(t2.timestamp > 0);
    assert!(!t1.display.is_empty());
}

#[test]
fn test_clock_ticks_advance() {
    let clock = Clock::spawn(Duration::from_millis(100));
    let rx = clock.subscribe();

    let first = rx.recv_timeout(Duration::from_secs(2)).expect("first tick");
    let second = rx.recv_timeout(Duration::from_secs(2)).expect("second tick");

    assert!(second.timestamp >= first.timestamp);
}

#[test]
fn test_drop_stops_the_ticker() {
    let clock = Clock::spawn(Duration::from_millis(100));
    let rx = clock.subscribe();

    let started = Instant::now();
    drop(clock);

    // the ticker thread is joined on drop; the channel closes shortly
    // after, not a full period later
    while rx.recv_timeout(Duration::from_millis(500)).is_ok() {}
    assert!(started.elapsed() < Duration::from_secs(2));
}
