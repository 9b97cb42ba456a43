//! Process-wide live-object counting for leak detection.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use smallvec::SmallVec;

use super::identity::TypeIdentity;

/// Callback fired when a trapped type is allocated or freed.
///
/// Receives the type identity and the live count after the operation.
pub type TrapHook = Box<dyn Fn(&TypeIdentity, isize) + Send + Sync>;

/// One line of a leak report: a type with live instances remaining.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LiveObjectCount {
    /// Type name.
    pub name: &'static str,
    /// Number of live instances.
    pub count: isize,
}

#[derive(Default)]
struct RegistryState {
    counts: FxHashMap<TypeIdentity, isize>,
    traps: FxHashSet<std::any::TypeId>,
    trap_hook: Option<TrapHook>,
}

/// Counts live instances of registered types.
///
/// Construction and destruction of trackable types report here through
/// [`LifespanTracker`](super::LifespanTracker). The registry is an
/// explicit object shared by `Arc`; [`LifespanRegistry::global`] provides
/// the process-wide default that trackables use when no registry is
/// passed. Tests that assert on counts should use private instances so
/// parallel test runs cannot contaminate each other, and may call
/// [`reset`](LifespanRegistry::reset) between independent runs.
///
/// All operations take the registry's lock; add/remove are O(1) and the
/// report is O(n log n) over distinct tracked types, which is acceptable
/// for a diagnostic-only path.
#[derive(Default)]
pub struct LifespanRegistry {
    state: Mutex<RegistryState>,
}

impl LifespanRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default registry.
    ///
    /// Lives from first use until process teardown.
    pub fn global() -> &'static Arc<LifespanRegistry> {
        static GLOBAL: OnceLock<Arc<LifespanRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(LifespanRegistry::new()))
    }

    /// Record that an instance of `identity` is being constructed.
    pub fn add_object(&self, identity: TypeIdentity) {
        let mut state = self.state.lock();
        let count = {
            let count = state.counts.entry(identity).or_insert(0);
            *count += 1;
            *count
        };
        Self::fire_trap(&state, &identity, count);
    }

    /// Record that an instance of `identity` is being destroyed.
    pub fn remove_object(&self, identity: TypeIdentity) {
        let mut state = self.state.lock();
        let count = {
            let count = state.counts.entry(identity).or_insert(0);
            *count -= 1;
            *count
        };
        if count < 0 {
            log::error!(
                "unmatched remove_object for {}: live count went negative",
                identity.name()
            );
        }
        Self::fire_trap(&state, &identity, count);
    }

    /// Arm or disarm the allocation trap for `T`.
    ///
    /// While armed, every add/remove of `T` fires the configured trap
    /// hook (or a warning when no hook is set).
    pub fn set_trap<T: 'static>(&self, enabled: bool) {
        let mut state = self.state.lock();
        let id = TypeIdentity::of::<T>().id();
        if enabled {
            state.traps.insert(id);
        } else {
            state.traps.remove(&id);
        }
    }

    /// Install or remove the trap hook.
    pub fn set_trap_hook(&self, hook: Option<TrapHook>) {
        self.state.lock().trap_hook = hook;
    }

    fn fire_trap(state: &RegistryState, identity: &TypeIdentity, count: isize) {
        if !state.traps.contains(&identity.id()) {
            return;
        }
        match &state.trap_hook {
            Some(hook) => hook(identity, count),
            None => log::warn!("allocation trap: {} (live: {})", identity.name(), count),
        }
    }

    /// Types with live instances, sorted by count descending, ties
    /// broken by name.
    #[must_use]
    pub fn live_objects(&self) -> SmallVec<[LiveObjectCount; 8]> {
        Self::collect_live(&self.state.lock())
    }

    /// Emit the counts of all live objects to the diagnostic sink and
    /// return the total live count.
    pub fn report_live_objects(&self) -> usize {
        Self::report(&self.state.lock())
    }

    /// [`report_live_objects`](LifespanRegistry::report_live_objects)
    /// without taking the lock.
    ///
    /// For use during late shutdown, when synchronization primitives may
    /// no longer be usable.
    ///
    /// # Safety
    ///
    /// No thread may be mutating this registry concurrently. The caller
    /// must guarantee the process is past the point where tracked
    /// objects are constructed or destroyed on other threads.
    pub unsafe fn report_live_objects_no_lock(&self) -> usize {
        let state = unsafe { &*self.state.data_ptr() };
        Self::report(state)
    }

    /// Wipe all counters.
    ///
    /// Used between independent test runs so leaks in one run do not
    /// contaminate reports from the next.
    pub fn reset(&self) {
        self.state.lock().counts.clear();
    }

    fn collect_live(state: &RegistryState) -> SmallVec<[LiveObjectCount; 8]> {
        let mut live: SmallVec<[LiveObjectCount; 8]> = state
            .counts
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(identity, &count)| LiveObjectCount {
                name: identity.name(),
                count,
            })
            .collect();

        live.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(b.name)));
        live
    }

    fn report(state: &RegistryState) -> usize {
        let live = Self::collect_live(state);
        if live.is_empty() {
            return 0;
        }

        log::warn!("live objects (may indicate leaks):");
        let mut total = 0usize;
        for entry in &live {
            log::warn!("  {} x{}", entry.name, entry.count);
            total += entry.count as usize;
        }
        total
    }
}

impl std::fmt::Debug for LifespanRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifespanRegistry")
            .field("live", &self.live_objects())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;
    struct Gadget;

    #[test]
    fn test_counts_and_reset() {
        let registry = LifespanRegistry::new();
        registry.add_object(TypeIdentity::of::<Widget>());
        registry.add_object(TypeIdentity::of::<Widget>());
        registry.add_object(TypeIdentity::of::<Gadget>());
        registry.remove_object(TypeIdentity::of::<Gadget>());

        let live = registry.live_objects();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].count, 2);
        assert_eq!(registry.report_live_objects(), 2);

        registry.reset();
        assert_eq!(registry.report_live_objects(), 0);
    }

    #[test]
    fn test_report_sorts_by_count_then_name() {
        let registry = LifespanRegistry::new();
        for _ in 0..3 {
            registry.add_object(TypeIdentity::of::<Widget>());
        }
        registry.add_object(TypeIdentity::of::<Gadget>());

        let live = registry.live_objects();
        assert_eq!(live.len(), 2);
        assert_eq!(live[0].count, 3);
        assert!(live[0].name.contains("Widget"));
        assert_eq!(live[1].count, 1);
    }

    #[test]
    fn test_no_lock_report_matches_locked() {
        let registry = LifespanRegistry::new();
        registry.add_object(TypeIdentity::of::<Widget>());

        let locked = registry.report_live_objects();
        let unlocked = unsafe { registry.report_live_objects_no_lock() };
        assert_eq!(locked, unlocked);
    }

    #[test]
    fn test_trap_hook_fires_for_armed_type_only() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let registry = LifespanRegistry::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&fired);
        registry.set_trap::<Widget>(true);
        registry.set_trap_hook(Some(Box::new(move |_, _| {
            observed.fetch_add(1, Ordering::SeqCst);
        })));

        registry.add_object(TypeIdentity::of::<Gadget>());
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        registry.add_object(TypeIdentity::of::<Widget>());
        registry.remove_object(TypeIdentity::of::<Widget>());
        assert_eq!(fired.load(Ordering::SeqCst), 2);

        registry.set_trap::<Widget>(false);
        registry.add_object(TypeIdentity::of::<Widget>());
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
