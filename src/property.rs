// Property injection: an optional collaborator assigned after construction
//
// Design Decision: Weak<dyn Trait> slot behind an Option
//
// Rationale: The delegate relation is observer-style and must not keep the
// delegate alive. Weak gives that contract directly:
// 1. Assignment stores a downgraded reference; the caller keeps ownership
// 2. Reads upgrade; once the delegate has been dropped elsewhere, the
//    read yields None instead of a dangling access
// 3. Absence is a normal state at every point in the object's lifetime
//
// The slot takes &mut self to mutate. The demonstration has a single-
// threaded caller, so there is no interior mutability and no lock.

use crate::collaborators::NetworkServiceDelegate;
use std::sync::{Arc, Weak};

/// Network service with a property-injected, non-owning delegate
///
/// Constructed without dependencies; a delegate may be assigned, replaced,
/// or cleared at any later point.
///
/// Usage:
///     let worker: Arc<dyn NetworkServiceDelegate> = Arc::new(Worker);
///     let mut service = NetworkService::new();
///     service.set_delegate(Some(&worker));
///     assert!(service.delegate().is_some());
pub struct NetworkService {
    delegate: Option<Weak<dyn NetworkServiceDelegate>>,
}

impl NetworkService {
    /// Create a service with an empty delegate slot
    pub fn new() -> Self {
        Self { delegate: None }
    }

    /// Assign, replace, or clear the delegate
    ///
    /// Passing None clears the slot; clearing an already-empty slot is
    /// fine. The service only holds a weak reference, so the caller's
    /// Arc remains the sole owner.
    pub fn set_delegate(&mut self, delegate: Option<&Arc<dyn NetworkServiceDelegate>>) {
        self.delegate = delegate.map(Arc::downgrade);
    }

    /// Current delegate, if one is assigned and still alive
    ///
    /// Returns None when the slot is empty or the assigned delegate has
    /// been dropped elsewhere. Callers handle the optional case at each
    /// use site; absence is never an error.
    pub fn delegate(&self) -> Option<Arc<dyn NetworkServiceDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }
}

impl Default for NetworkService {
    fn default() -> Self {
        Self::new()
    }
}

/// Example type that can act as a NetworkServiceDelegate
pub struct Worker;

impl NetworkServiceDelegate for Worker {}
