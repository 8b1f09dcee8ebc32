//! **Parameter Injection**
//!
//! A dependency needed only once does not deserve a constructor argument
//! or a mutable property. It is passed straight into the operation that
//! uses it and forgotten when the call returns.
//!
//! **Benefits:**
//! - No constructor changes, no stored state
//! - Different calls can use different queues with nothing shared
//! - Submission is fire-and-forget; the caller never waits
//!
//! **Run this demo:**
//! ```bash
//! cargo run --example parameter_injection
//! ```

use di_flavours::{DataService, DiError, TokioTaskQueue};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Parameter Injection ===\n");

    let service = DataService;
    let queue = TokioTaskQueue::new();

    // The queue is a call argument; DataService retains nothing.
    let payload = b"some bytes to process".to_vec();
    service
        .perform_task(payload, &queue)
        .expect("live queue accepts work");
    println!("Submitted work; perform_task returned immediately.");

    // Give the drain loop a moment so the debug log of the processed
    // payload shows up before we move on (run with RUST_LOG=debug).
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    // A second call may use an entirely different queue.
    let other_queue = TokioTaskQueue::new();
    service
        .perform_task(b"independent payload".to_vec(), &other_queue)
        .expect("live queue accepts work");
    println!("Second submission went to a different queue.");

    // A shut-down queue refuses new work with a SchedulingError.
    queue.shutdown();
    match service.perform_task(b"too late".to_vec(), &queue) {
        Err(DiError::SchedulingError(msg)) => {
            println!("Shut-down queue refused the work: {}", msg);
        }
        other => println!("Unexpected outcome: {:?}", other),
    }

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
}
