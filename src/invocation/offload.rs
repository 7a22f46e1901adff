//! Worker pool for blocking tools
//!
//! A fixed set of named worker threads pulls jobs off a shared FIFO queue and
//! sends each result back over a oneshot channel. The queue is unbounded:
//! with N workers busy, the (N+1)th submission waits its turn instead of
//! being rejected.
//!
//! Known limitation: a blocking call that never returns cannot be
//! interrupted. When the caller stops waiting (timeout or drop), the job is
//! detached; its result, if one ever arrives, is logged and discarded.

use std::thread;

use crossbeam_channel::{unbounded, Sender};
use tokio::sync::oneshot;

use crate::error::ToolError;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Bounded pool of worker threads servicing blocking tool calls
pub struct WorkerPool {
    queue: Sender<Job>,
    size: usize,
}

impl WorkerPool {
    /// Spawn a pool with `size` worker threads
    pub fn new(size: usize) -> std::io::Result<Self> {
        let size = size.max(1);
        let (tx, rx) = unbounded::<Job>();

        for i in 0..size {
            let rx = rx.clone();
            thread::Builder::new()
                .name(format!("tool-worker-{}", i))
                .spawn(move || {
                    while let Ok(job) = rx.recv() {
                        // Contain panics so one bad tool call cannot shrink
                        // the pool; the dropped oneshot sender reports it.
                        if std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)).is_err() {
                            tracing::error!("Worker job panicked");
                        }
                    }
                    tracing::debug!("Worker exiting, queue closed");
                })?;
        }

        Ok(Self { queue: tx, size })
    }

    /// Number of worker threads in the pool
    pub fn size(&self) -> usize {
        self.size
    }

    /// Submit a blocking job and receive its result asynchronously
    ///
    /// Dropping the returned receiver detaches the job: the worker still runs
    /// it to completion, but the stale result is logged and discarded.
    pub fn submit<T, F>(&self, label: &str, job: F) -> oneshot::Receiver<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let job_label = label.to_string();

        let wrapped: Job = Box::new(move || {
            let output = job();
            if tx.send(output).is_err() {
                tracing::warn!(
                    "Discarding stale result from '{}': caller timed out or cancelled",
                    job_label
                );
            }
        });

        if self.queue.send(wrapped).is_err() {
            // Pool shut down; the dropped sender surfaces as a RecvError on
            // the caller's side.
            tracing::error!("Worker pool queue closed; dropping job '{}'", label);
        }

        rx
    }

    /// Await a submitted job, mapping channel loss to a dependency failure
    ///
    /// The channel only drops without a value when the job panicked or the
    /// pool is gone; either way the tool did not produce a result.
    pub async fn await_result<T>(
        rx: oneshot::Receiver<Result<T, ToolError>>,
        label: &str,
    ) -> Result<T, ToolError> {
        match rx.await {
            Ok(result) => result,
            Err(_) => Err(ToolError::dependency(format!(
                "worker for '{}' terminated without a result",
                label
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_submit_returns_result() {
        let pool = WorkerPool::new(2).unwrap();
        let rx = pool.submit("double", || 21 * 2);
        assert_eq!(rx.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_jobs_beyond_pool_size_are_queued() {
        let pool = WorkerPool::new(2).unwrap();
        let completed = Arc::new(AtomicUsize::new(0));

        let receivers: Vec<_> = (0..3)
            .map(|_| {
                let completed = completed.clone();
                pool.submit("sleep", move || {
                    thread::sleep(Duration::from_millis(50));
                    completed.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();

        for rx in receivers {
            rx.await.unwrap();
        }
        assert_eq!(completed.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_detached_job_still_runs() {
        let pool = WorkerPool::new(1).unwrap();
        let ran = Arc::new(AtomicUsize::new(0));

        let ran_clone = ran.clone();
        let rx = pool.submit("detached", move || {
            thread::sleep(Duration::from_millis(20));
            ran_clone.fetch_add(1, Ordering::SeqCst);
        });
        drop(rx);

        // A follow-up job proves the worker survived the stale send.
        let after = pool.submit("after", || ());
        after.await.unwrap();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_panicked_job_surfaces_as_dependency_error() {
        let pool = WorkerPool::new(1).unwrap();
        let rx = pool.submit("panicky", || -> Result<String, ToolError> {
            panic!("blocking library exploded")
        });
        let err = WorkerPool::await_result(rx, "panicky").await.unwrap_err();
        assert!(matches!(err, ToolError::Dependency(_)));
    }
}
