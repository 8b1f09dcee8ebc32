//! **Property Injection**
//!
//! Sometimes a dependency is not ready at construction time, or it needs
//! to change during the object's lifetime (a delegate, typically). The
//! object is constructed with nothing and the dependency is assigned to
//! a mutable slot afterwards.
//!
//! **Benefits:**
//! - Construct the object without any dependencies
//! - The dependency can be replaced or cleared later
//! - The slot is non-owning: it never keeps the delegate alive
//!
//! **Run this demo:**
//! ```bash
//! cargo run --example property_injection
//! ```

use di_flavours::{NetworkService, NetworkServiceDelegate, Worker};
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Property Injection ===\n");

    // No dependencies needed to construct the service.
    let mut service = NetworkService::new();
    println!("Fresh service, delegate slot: {}", describe(&service));

    // Assign a delegate after the fact.
    let worker: Arc<dyn NetworkServiceDelegate> = Arc::new(Worker);
    service.set_delegate(Some(&worker));
    println!("After assignment, delegate slot: {}", describe(&service));

    // The slot is weak: dropping the caller's Arc drops the Worker,
    // and the service simply observes absence from then on.
    drop(worker);
    println!("After the worker is dropped: {}", describe(&service));

    // Clearing an empty slot is a no-op, not an error.
    service.set_delegate(None);
    println!("After an explicit clear:     {}", describe(&service));
}

fn describe(service: &NetworkService) -> &'static str {
    if service.delegate().is_some() {
        "present"
    } else {
        "absent"
    }
}
