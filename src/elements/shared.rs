//! Element traits for reference-counted handles.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::boundary::VectorResult;
use crate::vector::VectorTraits;

use super::traits::ElementTraits;

/// Storage rules for shared-ownership handles.
///
/// The handle is nullable (`Option<Arc<T>>`), matching a foreign runtime
/// where a collection slot may legitimately hold a null object
/// reference. Wrapping clones the handle (bumping the shared count),
/// unwrapping clones it again into the caller's slot, and equality is
/// identity of the underlying object, never structural comparison.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use boundary_vec::{SharedTraits, StatusCode, Vector};
///
/// let widgets = Vector::<SharedTraits<String>>::new();
/// let widget = Arc::new(String::from("header"));
/// assert_eq!(widgets.append(&Some(Arc::clone(&widget))), StatusCode::Success);
///
/// let mut slot = None;
/// assert_eq!(widgets.get_at(0, &mut slot), StatusCode::Success);
/// assert!(Arc::ptr_eq(&widget, &slot.unwrap()));
/// ```
pub struct SharedTraits<T>(PhantomData<T>);

impl<T: 'static> ElementTraits for SharedTraits<T> {
    type Value = Option<Arc<T>>;
    type Storage = Option<Arc<T>>;

    fn wrap(value: &Self::Value) -> VectorResult<Self::Storage> {
        Ok(value.clone())
    }

    fn unwrap(stored: &Self::Storage, slot: &mut Self::Value) -> VectorResult<()> {
        *slot = stored.clone();
        Ok(())
    }

    fn equals(stored: &Self::Storage, value: &Self::Value) -> bool {
        match (stored, value) {
            (Some(stored), Some(value)) => Arc::ptr_eq(stored, value),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: 'static> VectorTraits for SharedTraits<T> {}
