//! RAII guard that reports a trackable object's lifespan.

use std::sync::Arc;

use super::identity::TypeIdentity;
use super::registry::LifespanRegistry;

/// Embed one of these in a type to make it trackable: construction
/// increments the type's live count, drop decrements it. Every increment
/// is matched by exactly one decrement for the same type.
pub struct LifespanTracker {
    identity: TypeIdentity,
    registry: Arc<LifespanRegistry>,
}

impl LifespanTracker {
    /// Track an instance of `T` in the process-wide default registry.
    #[must_use]
    pub fn track<T: 'static>() -> Self {
        Self::track_in::<T>(LifespanRegistry::global())
    }

    /// Track an instance of `T` in an explicit registry.
    #[must_use]
    pub fn track_in<T: 'static>(registry: &Arc<LifespanRegistry>) -> Self {
        let identity = TypeIdentity::of::<T>();
        registry.add_object(identity);
        Self {
            identity,
            registry: Arc::clone(registry),
        }
    }

    /// Identity of the tracked type.
    #[must_use]
    pub fn identity(&self) -> TypeIdentity {
        self.identity
    }
}

impl Drop for LifespanTracker {
    fn drop(&mut self) {
        self.registry.remove_object(self.identity);
    }
}

impl std::fmt::Debug for LifespanTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifespanTracker")
            .field("identity", &self.identity.name())
            .finish()
    }
}
