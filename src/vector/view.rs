//! Read-only projection over a vector.

use crate::boundary::StatusCode;
use crate::lifespan::LifespanTracker;

use super::generic::{SharedVector, Vector};
use super::iter::VectorIterator;
use super::storage::VectorTraits;

/// A read-only projection of a [`Vector`](crate::vector::Vector).
///
/// Forwards every query verbatim to the vector it shares ownership of.
/// Mutation is absent at the type level, not merely policy-enforced:
/// there is no way to reach write access through a view.
pub struct VectorView<T: VectorTraits> {
    vector: SharedVector<T>,
    _lifespan: LifespanTracker,
}

impl<T: VectorTraits> VectorView<T> {
    /// Wrap an existing vector.
    #[must_use]
    pub fn new(vector: SharedVector<T>) -> Self {
        Self {
            vector,
            _lifespan: LifespanTracker::track::<Self>(),
        }
    }

    /// Get the element count.
    pub fn size(&self, size: &mut u32) -> StatusCode {
        self.vector.size(size)
    }

    /// Marshal the element at `index` into `item`.
    pub fn get_at(&self, index: u32, item: &mut T::Value) -> StatusCode {
        self.vector.get_at(index, item)
    }

    /// Find the first element equal to `value`.
    pub fn index_of(&self, value: &T::Value, index: &mut u32, found: &mut bool) -> StatusCode {
        self.vector.index_of(value, index, found)
    }

    /// Construct a cursor over the underlying vector.
    pub fn first(&self, iterator: &mut Option<VectorIterator<T>>) -> StatusCode {
        Vector::first(&self.vector, iterator)
    }
}

impl<T: VectorTraits> std::fmt::Debug for VectorView<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorView").field("vector", &*self.vector).finish()
    }
}
