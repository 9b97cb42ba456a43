//! No-op lifespan implementation for builds without the
//! `lifespan-tracking` feature.
//!
//! The API surface matches the tracking build; every operation is a
//! cheap no-op that reports zero live objects.

use std::sync::{Arc, OnceLock};

use serde::Serialize;
use smallvec::SmallVec;

use super::identity::TypeIdentity;

/// Callback fired when a trapped type is allocated or freed.
pub type TrapHook = Box<dyn Fn(&TypeIdentity, isize) + Send + Sync>;

/// One line of a leak report: a type with live instances remaining.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LiveObjectCount {
    /// Type name.
    pub name: &'static str,
    /// Number of live instances.
    pub count: isize,
}

/// Disabled registry: accepts every call and reports nothing.
#[derive(Debug, Default)]
pub struct LifespanRegistry;

impl LifespanRegistry {
    /// Create a registry.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The process-wide default registry.
    pub fn global() -> &'static Arc<LifespanRegistry> {
        static GLOBAL: OnceLock<Arc<LifespanRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(LifespanRegistry::new()))
    }

    /// No-op.
    pub fn add_object(&self, _identity: TypeIdentity) {}

    /// No-op.
    pub fn remove_object(&self, _identity: TypeIdentity) {}

    /// No-op.
    pub fn set_trap<T: 'static>(&self, _enabled: bool) {}

    /// No-op.
    pub fn set_trap_hook(&self, _hook: Option<TrapHook>) {}

    /// Always empty.
    #[must_use]
    pub fn live_objects(&self) -> SmallVec<[LiveObjectCount; 8]> {
        SmallVec::new()
    }

    /// Always zero.
    pub fn report_live_objects(&self) -> usize {
        0
    }

    /// Always zero.
    ///
    /// # Safety
    ///
    /// Trivially safe in this build; the signature matches the tracking
    /// build so call sites compile unchanged.
    pub unsafe fn report_live_objects_no_lock(&self) -> usize {
        0
    }

    /// No-op.
    pub fn reset(&self) {}
}

/// Disabled tracker: a zero-sized guard with no effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct LifespanTracker;

impl LifespanTracker {
    /// No-op guard.
    #[must_use]
    pub fn track<T: 'static>() -> Self {
        Self
    }

    /// No-op guard.
    #[must_use]
    pub fn track_in<T: 'static>(_registry: &Arc<LifespanRegistry>) -> Self {
        Self
    }
}
