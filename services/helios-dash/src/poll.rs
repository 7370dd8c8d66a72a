// services/helios-dash/src/poll.rs
//
// Interval-driven fetch loops, one per data source

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use helioskit::errors::FetchError;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tracing::warn;

/// Latest result of one polling loop.
///
/// `loading` is true until the first fetch completes; `error` reflects the
/// most recent attempt. Earlier data is retained through failures so the
/// view can keep showing stale numbers while disconnected.
#[derive(Debug, Clone)]
pub struct PollCell<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: bool,
    pub last_updated: Option<DateTime<Local>>,
}

impl<T> PollCell<T> {
    fn initial() -> Self {
        Self {
            data: None,
            loading: true,
            error: false,
            last_updated: None,
        }
    }
}

impl<T> Default for PollCell<T> {
    fn default() -> Self {
        Self::initial()
    }
}

/// Handle owned by the consuming view. Dropping it aborts the loop; the
/// fetch currently in flight (if any) is not individually cancelled.
pub struct PollHandle<T> {
    rx: watch::Receiver<PollCell<T>>,
    refresh: Arc<Notify>,
    task: JoinHandle<()>,
}

impl<T: Clone> PollHandle<T> {
    pub fn latest(&self) -> PollCell<T> {
        self.rx.borrow().clone()
    }

    /// Manual retry: fire the fetch now instead of waiting for the next tick.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }
}

impl<T> Drop for PollHandle<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a polling loop: one fetch immediately, then one per interval.
///
/// Every firing spawns its own task, so a fetch slower than the interval
/// does not delay the next one; whichever response resolves last overwrites
/// the cell. There is no sequence guard.
pub fn spawn_poller<T, F, Fut>(name: &'static str, interval: Duration, fetch: F) -> PollHandle<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
{
    let (tx, rx) = watch::channel(PollCell::initial());
    let tx = Arc::new(tx);
    let refresh = Arc::new(Notify::new());
    let refresh_rx = refresh.clone();
    let fetch = Arc::new(fetch);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = refresh_rx.notified() => {
                    // Push the next periodic tick a full interval out.
                    ticker.reset();
                }
            }

            let tx = tx.clone();
            let fetch = fetch.clone();
            tokio::spawn(async move {
                match fetch().await {
                    Ok(data) => tx.send_modify(|cell| {
                        cell.data = Some(data);
                        cell.loading = false;
                        cell.error = false;
                        cell.last_updated = Some(Local::now());
                    }),
                    Err(err) => {
                        warn!("{name} fetch failed: {err}");
                        tx.send_modify(|cell| {
                            cell.loading = false;
                            cell.error = true;
                        });
                    }
                }
            });
        }
    });

    PollHandle { rx, refresh, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_fetch(
        counter: Arc<AtomicUsize>,
        fail_from: usize,
    ) -> impl Fn() -> std::pin::Pin<Box<dyn Future<Output = Result<Vec<u8>, FetchError>> + Send>>
           + Send
           + Sync
           + 'static {
        move || {
            let counter = counter.clone();
            Box::pin(async move {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                if n >= fail_from {
                    Err(FetchError::Transport("boom".to_string()))
                } else {
                    Ok(vec![n as u8])
                }
            })
        }
    }

    #[tokio::test]
    async fn test_first_fetch_fires_immediately() {
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = spawn_poller(
            "test",
            Duration::from_secs(3600),
            counting_fetch(counter.clone(), usize::MAX),
        );

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        let cell = handle.latest();
        assert!(!cell.loading);
        assert!(!cell.error);
        assert_eq!(cell.data, Some(vec![0]));
        assert!(cell.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_error_sets_flag_and_retains_data() {
        let counter = Arc::new(AtomicUsize::new(0));
        // First fetch succeeds, everything after fails.
        let handle = spawn_poller(
            "test",
            Duration::from_millis(50),
            counting_fetch(counter.clone(), 1),
        );

        tokio::time::sleep(Duration::from_millis(400)).await;
        let cell = handle.latest();
        assert!(cell.error);
        assert!(!cell.loading);
        assert_eq!(cell.data, Some(vec![0]), "stale data must be retained");
    }

    #[tokio::test]
    async fn test_refresh_reinvokes_fetch() {
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = spawn_poller(
            "test",
            Duration::from_secs(3600),
            counting_fetch(counter.clone(), usize::MAX),
        );

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        handle.refresh();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(handle.latest().data, Some(vec![1]));
    }

    #[tokio::test]
    async fn test_drop_stops_the_loop() {
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = spawn_poller(
            "test",
            Duration::from_millis(50),
            counting_fetch(counter.clone(), usize::MAX),
        );

        tokio::time::sleep(Duration::from_millis(120)).await;
        drop(handle);
        let seen = counter.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter.load(Ordering::SeqCst), seen);
    }
}
