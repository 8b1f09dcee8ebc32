// Tokio-backed task queue for fire-and-forget work submission
//
// Design Decision: Unbounded mpsc channel drained by a spawned loop
//
// Rationale: A channel gives exactly the contract DataService needs:
// submit() hands work over and returns immediately, the drain loop runs
// it later on the runtime's threads, and closing the sender side is a
// natural shutdown signal. No locks are held while work runs.
//
// Shutdown semantics: work accepted before shutdown still runs; any
// submission after shutdown fails with SchedulingError. There is no
// cancellation of already-accepted work.

use super::traits::{Task, TaskQueue};
use crate::error::{DiError, Result};
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Task queue backed by the tokio runtime
///
/// Must be created from within a tokio runtime: construction spawns the
/// drain loop with tokio::spawn.
///
/// Usage:
///     let queue = TokioTaskQueue::new();
///     queue.submit(Box::new(|| do_work()))?;
///     queue.shutdown();
pub struct TokioTaskQueue {
    // None once shut down; dropping the sender closes the channel and
    // lets the drain loop exit after finishing queued work.
    tx: Mutex<Option<mpsc::UnboundedSender<Task>>>,
}

impl TokioTaskQueue {
    /// Create a queue and spawn its drain loop on the current runtime
    pub fn new() -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Task>();

        tokio::spawn(async move {
            while let Some(task) = rx.recv().await {
                task();
            }
            tracing::debug!("task queue drain loop exited");
        });

        Self {
            tx: Mutex::new(Some(tx)),
        }
    }

    /// Shut the queue down
    ///
    /// Previously accepted work still runs; subsequent submit() calls
    /// fail with SchedulingError. Idempotent.
    pub fn shutdown(&self) {
        if let Ok(mut guard) = self.tx.lock() {
            if guard.take().is_some() {
                tracing::debug!("task queue shut down");
            }
        }
    }
}

impl TaskQueue for TokioTaskQueue {
    fn submit(&self, task: Task) -> Result<()> {
        let guard = self
            .tx
            .lock()
            .map_err(|_| DiError::SchedulingError("task queue lock poisoned".to_string()))?;

        let tx = guard
            .as_ref()
            .ok_or_else(|| DiError::SchedulingError("task queue is shut down".to_string()))?;

        tx.send(task)
            .map_err(|_| DiError::SchedulingError("task queue drain loop is gone".to_string()))
    }
}

impl Default for TokioTaskQueue {
    fn default() -> Self {
        Self::new()
    }
}
