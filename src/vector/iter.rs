//! Single-direction cursor over a vector.

use crate::boundary::{self, StatusCode, VectorError};
use crate::lifespan::LifespanTracker;

use super::generic::SharedVector;
use super::storage::VectorTraits;

/// A cursor over a [`Vector`](crate::vector::Vector)'s current contents.
///
/// The iterator shares ownership of the vector and observes live
/// mutations; it is not a snapshot. Its position starts at 0 and only
/// ever advances. The cursor has a current element while
/// `position < size`; advancing when it does not is an error
/// (`OutOfBounds`), never a silent no-op.
pub struct VectorIterator<T: VectorTraits> {
    vector: SharedVector<T>,
    position: u32,
    _lifespan: LifespanTracker,
}

impl<T: VectorTraits> VectorIterator<T> {
    /// Wrap an existing vector, positioned at the first element.
    #[must_use]
    pub fn new(vector: SharedVector<T>) -> Self {
        Self {
            vector,
            position: 0,
            _lifespan: LifespanTracker::track::<Self>(),
        }
    }

    /// Current position, in `[0, size]`.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Marshal the current element into `item`.
    ///
    /// Only meaningful while the cursor has a current element; past the
    /// end this reports `OutOfBounds` like any other out-of-range read.
    pub fn current(&self, item: &mut T::Value) -> StatusCode {
        self.vector.get_at(self.position, item)
    }

    /// Check whether the cursor still points at an element.
    pub fn has_current(&self, has_current: &mut bool) -> StatusCode {
        boundary::run(|| {
            boundary::clear_slot(has_current);
            *has_current = self.position < self.vector.with_storage(T::size);
            Ok(())
        })
    }

    /// Advance by one element and report whether a current element
    /// remains.
    ///
    /// Calling this with no current element is an error: the cursor is
    /// already exhausted and reports `OutOfBounds` without moving.
    pub fn move_next(&mut self, has_current: &mut bool) -> StatusCode {
        let position = &mut self.position;
        let vector = &self.vector;
        boundary::run(|| {
            boundary::clear_slot(has_current);

            let size = vector.with_storage(T::size);
            if *position >= size {
                return Err(VectorError::out_of_bounds(*position, size));
            }

            *position += 1;
            *has_current = *position < size;
            Ok(())
        })
    }
}

impl<T: VectorTraits> std::fmt::Debug for VectorIterator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorIterator")
            .field("position", &self.position)
            .field("vector", &*self.vector)
            .finish()
    }
}
