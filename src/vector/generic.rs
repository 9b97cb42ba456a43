//! The boundary-exposed generic vector.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use crate::boundary::{self, StatusCode, VectorError, VectorResult};
use crate::lifespan::LifespanTracker;

use super::iter::VectorIterator;
use super::storage::VectorTraits;
use super::view::VectorView;

/// Shared-ownership handle to a [`Vector`].
///
/// Views and iterators hold one of these, so the storage stays alive as
/// long as any holder exists.
pub type SharedVector<T> = Arc<Vector<T>>;

/// An ordered collection exposed across the call boundary.
///
/// Every public operation is individually wrapped by the error boundary:
/// it returns a [`StatusCode`], never panics across the call, and clears
/// its output slots before doing any work. Storage shape is delegated to
/// the [`VectorTraits`] parameter; this type layers two policies on top:
///
/// - **Fixed-size**: decided once at construction. A fixed-size vector
///   rejects every operation that would change its element count with
///   `NotImplemented`; overwriting a slot stays legal.
/// - **Changed flag**: set by every successful mutation, sticky until
///   explicitly cleared with [`set_changed`](Vector::set_changed).
///
/// The vector carries no internal synchronization. Calls are synchronous
/// and thread-agnostic; serializing access to one instance is the
/// caller's responsibility. Reentering the vector from inside a
/// [`with_storage`](Vector::with_storage) closure is reported as
/// `Unexpected` by the boundary rather than corrupting storage.
///
/// ## Example
///
/// ```
/// use boundary_vec::{StatusCode, ValueTraits, Vector};
///
/// let numbers = Vector::<ValueTraits<i64>>::new();
/// assert_eq!(numbers.append(&1), StatusCode::Success);
/// assert_eq!(numbers.append(&2), StatusCode::Success);
///
/// let mut size = 0;
/// assert_eq!(numbers.size(&mut size), StatusCode::Success);
/// assert_eq!(size, 2);
/// ```
pub struct Vector<T: VectorTraits> {
    storage: RefCell<Vec<T::Storage>>,
    is_fixed_size: bool,
    is_changed: Cell<bool>,
    _lifespan: LifespanTracker,
}

impl<T: VectorTraits> Vector<T> {
    /// Create an empty, resizable vector.
    #[must_use]
    pub fn new() -> SharedVector<T> {
        Self::from_storage(Vec::new(), false)
    }

    /// Create a resizable vector holding `values`.
    pub fn from_values(values: &[T::Value]) -> VectorResult<SharedVector<T>> {
        Ok(Self::from_storage(Self::wrap_all(values)?, false))
    }

    /// Create a fixed-size vector holding `values`.
    ///
    /// The element count is frozen; slots remain individually writable.
    pub fn fixed_from_values(values: &[T::Value]) -> VectorResult<SharedVector<T>> {
        Ok(Self::from_storage(Self::wrap_all(values)?, true))
    }

    /// Create a vector directly from pre-wrapped storage.
    ///
    /// This is the construction path for in-process owners that already
    /// hold elements in storage form.
    #[must_use]
    pub fn from_storage(storage: Vec<T::Storage>, is_fixed_size: bool) -> SharedVector<T> {
        Arc::new(Self {
            storage: RefCell::new(storage),
            is_fixed_size,
            is_changed: Cell::new(false),
            _lifespan: LifespanTracker::track::<Self>(),
        })
    }

    fn wrap_all(values: &[T::Value]) -> VectorResult<Vec<T::Storage>> {
        let mut storage = Vec::new();
        storage.try_reserve(values.len())?;
        for value in values {
            storage.push(T::wrap(value)?);
        }
        Ok(storage)
    }

    /// Check whether this vector is fixed or resizable.
    #[must_use]
    pub fn is_fixed_size(&self) -> bool {
        self.is_fixed_size
    }

    /// Check whether the contents have changed since the flag was last
    /// cleared.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.is_changed.get()
    }

    /// Set or clear the changed flag.
    pub fn set_changed(&self, changed: bool) {
        self.is_changed.set(changed);
    }

    /// Run `f` against the raw storage.
    ///
    /// In-process owners use this to bypass the boundary overhead of the
    /// public surface. The closure must not call back into this vector.
    pub fn with_storage<R>(&self, f: impl FnOnce(&[T::Storage]) -> R) -> R {
        f(&self.storage.borrow())
    }

    /// Run `f` against the raw storage with write access.
    ///
    /// Mutations made here bypass fixed-size enforcement and changed-flag
    /// bookkeeping; the caller owns those policies for the duration.
    pub fn with_storage_mut<R>(&self, f: impl FnOnce(&mut Vec<T::Storage>) -> R) -> R {
        f(&mut self.storage.borrow_mut())
    }

    fn ensure_resizable(&self) -> VectorResult<()> {
        if self.is_fixed_size {
            Err(VectorError::NotImplemented)
        } else {
            Ok(())
        }
    }

    /// Get the element count. Never fails on a valid instance.
    pub fn size(&self, size: &mut u32) -> StatusCode {
        boundary::run(|| {
            boundary::clear_slot(size);
            *size = T::size(&self.storage.borrow());
            Ok(())
        })
    }

    /// Marshal the element at `index` into `item`.
    ///
    /// Fails with `OutOfBounds` when `index >= size`; `item` is left
    /// cleared in that case.
    pub fn get_at(&self, index: u32, item: &mut T::Value) -> StatusCode {
        boundary::run(|| {
            boundary::clear_slot(item);
            let stored = T::get_at(&self.storage.borrow(), index)?;
            T::unwrap(&stored, item)
        })
    }

    /// Find the first element equal to `value` under traits equality.
    ///
    /// Never fails: when no element matches, `found` is `false` and
    /// `index` is 0.
    pub fn index_of(&self, value: &T::Value, index: &mut u32, found: &mut bool) -> StatusCode {
        boundary::run(|| {
            boundary::clear_slot(index);
            boundary::clear_slot(found);

            let storage = self.storage.borrow();
            for (i, stored) in storage.iter().enumerate() {
                if T::equals(stored, value) {
                    *index = i as u32;
                    *found = true;
                    break;
                }
            }
            Ok(())
        })
    }

    /// Overwrite the element at `index`.
    ///
    /// Legal even when fixed-size: the element count does not change.
    pub fn set_at(&self, index: u32, item: &T::Value) -> StatusCode {
        boundary::run(|| {
            T::set_at(&mut self.storage.borrow_mut(), index, item)?;
            self.is_changed.set(true);
            Ok(())
        })
    }

    /// Insert an element at `index`, where `index == size` appends.
    pub fn insert_at(&self, index: u32, item: &T::Value) -> StatusCode {
        boundary::run(|| {
            self.ensure_resizable()?;
            T::insert_at(&mut self.storage.borrow_mut(), index, item)?;
            self.is_changed.set(true);
            Ok(())
        })
    }

    /// Remove the element at `index`.
    pub fn remove_at(&self, index: u32) -> StatusCode {
        boundary::run(|| {
            self.ensure_resizable()?;
            T::remove_at(&mut self.storage.borrow_mut(), index)?;
            self.is_changed.set(true);
            Ok(())
        })
    }

    /// Append an element at the end.
    pub fn append(&self, item: &T::Value) -> StatusCode {
        boundary::run(|| {
            self.ensure_resizable()?;
            T::append(&mut self.storage.borrow_mut(), item)?;
            self.is_changed.set(true);
            Ok(())
        })
    }

    /// Remove the last element.
    ///
    /// An empty vector reports `OutOfBounds`.
    pub fn remove_at_end(&self) -> StatusCode {
        boundary::run(|| {
            self.ensure_resizable()?;
            let mut storage = self.storage.borrow_mut();
            let size = T::size(&storage);
            if size == 0 {
                return Err(VectorError::out_of_bounds(0, 0));
            }
            T::remove_at(&mut storage, size - 1)?;
            self.is_changed.set(true);
            Ok(())
        })
    }

    /// Remove every element.
    pub fn clear(&self) -> StatusCode {
        boundary::run(|| {
            self.ensure_resizable()?;
            T::clear(&mut self.storage.borrow_mut());
            self.is_changed.set(true);
            Ok(())
        })
    }

    /// Replace the whole contents with `values`.
    ///
    /// When `values.len()` equals the current size, each slot is
    /// overwritten in place, which is legal even for a fixed-size vector.
    /// The in-place path is best-effort: if wrapping fails partway, the
    /// slots already visited keep their new values. Any other length
    /// requires a resizable vector and replaces via clear-then-append;
    /// a failure during the append loop likewise leaves the collection
    /// partially replaced.
    pub fn replace_all(&self, values: &[T::Value]) -> StatusCode {
        boundary::run(|| {
            let mut storage = self.storage.borrow_mut();

            if values.len() == storage.len() {
                for (i, value) in values.iter().enumerate() {
                    T::set_at(&mut storage, i as u32, value)?;
                }
            } else {
                self.ensure_resizable()?;
                T::clear(&mut storage);
                for value in values {
                    T::append(&mut storage, value)?;
                }
            }

            self.is_changed.set(true);
            Ok(())
        })
    }

    /// Construct a read-only projection sharing ownership of `vector`.
    pub fn view(vector: &SharedVector<T>, view: &mut Option<VectorView<T>>) -> StatusCode {
        boundary::run(|| {
            boundary::clear_slot(view);
            *view = Some(VectorView::new(Arc::clone(vector)));
            Ok(())
        })
    }

    /// Construct a cursor over `vector`'s current and future contents.
    ///
    /// The iterator observes live mutations; it is not a snapshot.
    pub fn first(vector: &SharedVector<T>, iterator: &mut Option<VectorIterator<T>>) -> StatusCode {
        boundary::run(|| {
            boundary::clear_slot(iterator);
            *iterator = Some(VectorIterator::new(Arc::clone(vector)));
            Ok(())
        })
    }
}

impl<T: VectorTraits> std::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vector")
            .field("size", &self.storage.borrow().len())
            .field("is_fixed_size", &self.is_fixed_size)
            .field("is_changed", &self.is_changed.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ValueTraits;

    type Numbers = ValueTraits<i64>;

    #[test]
    fn test_new_is_empty_and_resizable() {
        let vector = Vector::<Numbers>::new();
        assert!(!vector.is_fixed_size());
        assert!(!vector.is_changed());

        let mut size = 99;
        assert_eq!(vector.size(&mut size), StatusCode::Success);
        assert_eq!(size, 0);
    }

    #[test]
    fn test_get_at_clears_slot_on_failure() {
        let vector = Vector::<Numbers>::from_values(&[1, 2]).unwrap();
        let mut item = 42i64;
        assert_eq!(vector.get_at(5, &mut item), StatusCode::OutOfBounds);
        assert_eq!(item, 0);
    }

    #[test]
    fn test_set_at_allowed_on_fixed_size() {
        let vector = Vector::<Numbers>::fixed_from_values(&[1, 2]).unwrap();
        assert_eq!(vector.set_at(1, &9), StatusCode::Success);
        assert!(vector.is_changed());

        let mut item = 0;
        assert_eq!(vector.get_at(1, &mut item), StatusCode::Success);
        assert_eq!(item, 9);
    }

    #[test]
    fn test_changed_flag_is_sticky_until_cleared() {
        let vector = Vector::<Numbers>::new();
        assert_eq!(vector.append(&1), StatusCode::Success);
        assert!(vector.is_changed());

        vector.set_changed(false);
        assert!(!vector.is_changed());

        // A failed mutation does not set the flag.
        assert_eq!(vector.remove_at(7), StatusCode::OutOfBounds);
        assert!(!vector.is_changed());
    }

    #[test]
    fn test_with_storage_bypasses_bookkeeping() {
        let vector = Vector::<Numbers>::new();
        vector.with_storage_mut(|storage| storage.push(5));
        assert!(!vector.is_changed());
        assert_eq!(vector.with_storage(<Numbers as VectorTraits>::size), 1);
    }

    #[test]
    fn test_debug_output() {
        let vector = Vector::<Numbers>::from_values(&[1]).unwrap();
        let rendered = format!("{vector:?}");
        assert!(rendered.contains("size: 1"));
        assert!(rendered.contains("is_fixed_size: false"));
    }
}
