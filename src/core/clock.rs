//! Periodic clock service for live views.
//!
//! A single background ticker broadcasts the current wall-clock time to
//! every subscriber once per period (1 Hz for the live list). The thread
//! is stopped and joined when the owning [`Clock`] is dropped; there is
//! no other cancellation API.

use chrono::Local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// One firing of the periodic broadcast.
#[derive(Debug, Clone)]
pub struct Tick {
    /// Local wall-clock time, pre-rendered for display.
    pub display: String,
    /// Milliseconds since the epoch.
    pub timestamp: i64,
}

impl Tick {
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            display: now.format("%H:%M:%S").to_string(),
            timestamp: now.timestamp_millis(),
        }
    }
}

pub struct Clock {
    subscribers: Arc<Mutex<Vec<Sender<Tick>>>>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Spawn the ticker thread.
    pub fn spawn(period: Duration) -> Self {
        let subscribers: Arc<Mutex<Vec<Sender<Tick>>>> = Arc::new(Mutex::new(Vec::new()));
        let stop = Arc::new(AtomicBool::new(false));

        let subs = Arc::clone(&subscribers);
        let stop_flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            // Sleep in short slices so drop() never waits a full period.
            let slice = Duration::from_millis(50);

            'ticker: loop {
                let started = Instant::now();
                while started.elapsed() < period {
                    if stop_flag.load(Ordering::Relaxed) {
                        break 'ticker;
                    }
                    thread::sleep(slice);
                }

                let tick = Tick::now();
                let mut subs = subs.lock().unwrap();
                subs.retain(|tx| tx.send(tick.clone()).is_ok());
            }
        });

        Self {
            subscribers,
            stop,
            handle: Some(handle),
        }
    }

    /// Hand out a new tick receiver. Dropped receivers are pruned on the
    /// next broadcast.
    pub fn subscribe(&self) -> Receiver<Tick> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
