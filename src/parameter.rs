// Parameter injection: transient collaborators arrive per call
//
// Design Decision: The operation takes its queue as an argument and
// retains nothing
//
// Rationale: When a dependency is needed exactly once there is no reason
// to widen the constructor or expose a mutable property. Passing it as a
// parameter keeps DataService stateless:
// 1. No field, so nothing can leak between calls
// 2. Two calls may be given different queues with no shared state or
//    ordering guarantee between them
// 3. Submission is fire-and-forget: the call returns once the queue has
//    accepted the work, never waiting for it to run

use crate::collaborators::TaskQueue;
use crate::error::Result;

/// Stateless service demonstrating parameter-injected dependencies
///
/// Usage:
///     let service = DataService;
///     let queue = TokioTaskQueue::new();
///     service.perform_task(payload, &queue)?;
pub struct DataService;

impl DataService {
    /// Schedule payload-processing work on the supplied queue
    ///
    /// Returns as soon as the queue accepts the work. There is no
    /// completion signal and no result from the work itself; any failure
    /// inside the queue after acceptance is the queue's concern.
    ///
    /// # Errors
    /// - SchedulingError if the queue refuses the submission (already
    ///   shut down)
    pub fn perform_task(&self, data: Vec<u8>, queue: &dyn TaskQueue) -> Result<()> {
        queue.submit(Box::new(move || {
            // Perform some task with data
            tracing::debug!(bytes = data.len(), "processed payload");
        }))
    }
}
