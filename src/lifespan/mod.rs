//! Diagnostic registry counting live instances of registered types.
//!
//! Trackable types embed a [`LifespanTracker`]; a [`LifespanRegistry`]
//! accumulates per-type live counts and can report types that still have
//! instances alive, for leak detection. Compiled in only with the
//! `lifespan-tracking` feature (on by default); without it the whole
//! subsystem is a no-op that reports zero live objects.

mod identity;

#[cfg(feature = "lifespan-tracking")]
mod registry;
#[cfg(feature = "lifespan-tracking")]
mod tracker;

#[cfg(not(feature = "lifespan-tracking"))]
mod disabled;

pub use identity::TypeIdentity;

#[cfg(feature = "lifespan-tracking")]
pub use registry::{LifespanRegistry, LiveObjectCount, TrapHook};
#[cfg(feature = "lifespan-tracking")]
pub use tracker::LifespanTracker;

#[cfg(not(feature = "lifespan-tracking"))]
pub use disabled::{LifespanRegistry, LifespanTracker, LiveObjectCount, TrapHook};
