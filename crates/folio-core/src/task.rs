//! Cancellable repeating background task.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to spawn task thread `{name}`")]
    Spawn {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// A callback invoked on a fixed period in a dedicated thread.
///
/// The task holds its thread for as long as it lives. [`RepeatingTask::cancel`]
/// (also run on drop) wakes the thread, waits for it to exit and returns only
/// once the callback can no longer run.
#[derive(Debug)]
pub struct RepeatingTask {
    name: &'static str,
    period: Duration,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RepeatingTask {
    /// Spawn a task that calls `on_tick` every `period` with the time
    /// elapsed since the previous call.
    pub fn spawn<F>(name: &'static str, period: Duration, mut on_tick: F) -> Result<Self, TaskError>
    where
        F: FnMut(Duration) + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                let mut last = Instant::now();
                let mut deadline = last + period;
                loop {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            let now = Instant::now();
                            on_tick(now.duration_since(last));
                            last = now;
                            deadline = next_deadline(deadline, period, Instant::now());
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })
            .map_err(|source| TaskError::Spawn { name, source })?;

        debug!(task = name, period_ms = period.as_millis() as u64, "task started");

        Ok(Self {
            name,
            period,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the task thread is still owned by this handle.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the task and wait for its thread to finish.
    pub fn cancel(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            // The receiver is gone if the thread already exited.
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!(task = self.name, "task thread panicked");
            } else {
                debug!(task = self.name, "task stopped");
            }
        }
    }
}

/// The deadline after `deadline`, one `period` later on the same schedule.
///
/// Deadlines already missed by `now` are skipped instead of fired in a burst.
fn next_deadline(deadline: Instant, period: Duration, now: Instant) -> Instant {
    let next = deadline + period;
    if next > now {
        return next;
    }
    let behind = now.duration_since(next).as_nanos() / period.as_nanos();
    let skip = u32::try_from(behind + 1).unwrap_or(u32::MAX);
    next.checked_add(period.saturating_mul(skip)).unwrap_or(now + period)
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_task_ticks_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let mut task = RepeatingTask::spawn("test-tick", Duration::from_millis(2), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        thread::sleep(Duration::from_millis(50));
        task.cancel();
        assert!(!task.is_running());

        let after_cancel = count.load(Ordering::SeqCst);
        assert!(after_cancel > 0);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn test_drop_stops_task() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let task = RepeatingTask::spawn("test-drop", Duration::from_millis(2), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        thread::sleep(Duration::from_millis(20));
        drop(task);

        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn test_deadlines_stay_on_schedule() {
        let start = Instant::now();
        let period = Duration::from_millis(10);
        // A callback that finished early does not shift the schedule.
        let now = start + Duration::from_millis(13);
        assert_eq!(next_deadline(start + period, period, now), start + period * 2);
    }

    #[test]
    fn test_missed_deadlines_are_skipped() {
        let start = Instant::now();
        let period = Duration::from_millis(10);
        let now = start + Duration::from_millis(47);
        assert_eq!(next_deadline(start + period, period, now), start + period * 5);

        let on_boundary = start + Duration::from_millis(20);
        assert_eq!(
            next_deadline(start + period, period, on_boundary),
            start + period * 3
        );
    }

    #[test]
    fn test_slow_callback_keeps_rate() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let mut task = RepeatingTask::spawn("test-slow", Duration::from_millis(10), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(6));
        })
        .unwrap();
        thread::sleep(Duration::from_millis(205));
        task.cancel();
        // Waiting a full period after each callback would give at most 12.
        assert!(count.load(Ordering::SeqCst) >= 14);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut task = RepeatingTask::spawn("test-idle", Duration::from_secs(60), |_| {}).unwrap();
        assert_eq!(task.period(), Duration::from_secs(60));
        task.cancel();
        task.cancel();
        assert!(!task.is_running());
    }
}
