//! Debounced scheduling for search input.
//!
//! Each keystroke (or input line) schedules a re-render; scheduling cancels
//! whatever was pending, so rapid input collapses into a single render with
//! the most recent query value. At most one callback is pending at a time.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Delay applied before acting on new search input.
pub const SEARCH_DELAY: Duration = Duration::from_millis(160);

/// Replace-on-reschedule debounce timer.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run after `delay`, cancelling any previously
    /// scheduled action. Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            action();
        }));
    }

    /// Drop any pending action without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Wait for the pending action, if any, to finish.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_rapid_schedules_run_once_with_final_value() {
        let calls: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::new();

        for query in ["y", "ya", "yap", "yapa", "yapay"] {
            let calls = Arc::clone(&calls);
            let query = query.to_string();
            debouncer.schedule(Duration::from_millis(50), move || {
                calls.lock().unwrap().push(query);
            });
        }

        sleep(Duration::from_millis(250)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["yapay".to_string()]);
    }

    #[tokio::test]
    async fn test_cancel_drops_pending_action() {
        let calls: Arc<Mutex<Vec<&str>>> = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::new();

        let inner = Arc::clone(&calls);
        debouncer.schedule(Duration::from_millis(30), move || {
            inner.lock().unwrap().push("yandı");
        });
        debouncer.cancel();

        sleep(Duration::from_millis(120)).await;
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sequential_schedules_each_fire() {
        let calls: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::new();

        for round in 0..2 {
            let inner = Arc::clone(&calls);
            debouncer.schedule(Duration::from_millis(20), move || {
                inner.lock().unwrap().push(round);
            });
            debouncer.flush().await;
        }

        assert_eq!(*calls.lock().unwrap(), vec![0, 1]);
    }
}
