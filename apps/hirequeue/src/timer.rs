//! # Scheduled Tasks
//!
//! One-shot delayed callbacks backed by spawned tokio tasks.
//!
//! A `ScheduledTask` owns its task: `cancel()` or dropping the handle aborts
//! the callback if it has not run yet. A callback that replaces its own
//! handle while running calls `detach()` first so it is not aborted
//! mid-flight.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct ScheduledTask {
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Run `callback` once `delay` has elapsed. Must be called from within a
    /// tokio runtime.
    pub fn after<F>(delay: Duration, callback: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback.await;
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Abort the task. No-op once it has finished.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Release the handle without aborting the task.
    pub fn detach(mut self) {
        self.handle = None;
    }

    /// True when the task ran, was cancelled, or was detached.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let task = ScheduledTask::after(Duration::from_millis(500), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut task = ScheduledTask::after(Duration::from_millis(100), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        task.cancel();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_prevents_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        drop(ScheduledTask::after(Duration::from_millis(100), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn detached_task_still_fires() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        ScheduledTask::after(Duration::from_millis(100), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .detach();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
