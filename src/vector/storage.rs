//! Storage-shape operations layered on element traits.

use crate::boundary::{VectorError, VectorResult};
use crate::elements::ElementTraits;

/// How the underlying ordered storage is sized, indexed, and mutated.
///
/// The provided methods implement the default shape over a plain
/// `Vec<Storage>`; an implementation may override any of them to change
/// how storage behaves without touching the collection engine.
///
/// These are pure storage operations: every index is validated against
/// the current size before storage is touched, and violations signal
/// `OutOfBounds`. Fixed-size policy and changed-flag bookkeeping are
/// layered on top by [`Vector`](crate::vector::Vector), not here.
pub trait VectorTraits: ElementTraits {
    /// Current element count.
    fn size(storage: &[Self::Storage]) -> u32 {
        storage.len() as u32
    }

    /// Copy out the stored element at `index`.
    fn get_at(storage: &[Self::Storage], index: u32) -> VectorResult<Self::Storage> {
        match storage.get(index as usize) {
            Some(stored) => Ok(stored.clone()),
            None => Err(VectorError::out_of_bounds(index, storage.len() as u32)),
        }
    }

    /// Overwrite the element at `index` with the wrapped `value`.
    fn set_at(storage: &mut Vec<Self::Storage>, index: u32, value: &Self::Value) -> VectorResult<()> {
        if index as usize >= storage.len() {
            return Err(VectorError::out_of_bounds(index, storage.len() as u32));
        }
        storage[index as usize] = Self::wrap(value)?;
        Ok(())
    }

    /// Insert the wrapped `value` at `index`.
    ///
    /// `index == size` is legal and appends.
    fn insert_at(storage: &mut Vec<Self::Storage>, index: u32, value: &Self::Value) -> VectorResult<()> {
        if index as usize > storage.len() {
            return Err(VectorError::out_of_bounds(index, storage.len() as u32));
        }
        storage.try_reserve(1)?;
        storage.insert(index as usize, Self::wrap(value)?);
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements down.
    fn remove_at(storage: &mut Vec<Self::Storage>, index: u32) -> VectorResult<()> {
        if index as usize >= storage.len() {
            return Err(VectorError::out_of_bounds(index, storage.len() as u32));
        }
        storage.remove(index as usize);
        Ok(())
    }

    /// Append the wrapped `value` at the end.
    fn append(storage: &mut Vec<Self::Storage>, value: &Self::Value) -> VectorResult<()> {
        storage.try_reserve(1)?;
        storage.push(Self::wrap(value)?);
        Ok(())
    }

    /// Remove every element.
    fn clear(storage: &mut Vec<Self::Storage>) {
        storage.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ValueTraits;

    type Traits = ValueTraits<i64>;

    #[test]
    fn test_get_at_bounds() {
        let storage = vec![1i64, 2];
        assert_eq!(Traits::get_at(&storage, 1).unwrap(), 2);
        assert_eq!(
            Traits::get_at(&storage, 2).unwrap_err(),
            VectorError::out_of_bounds(2, 2)
        );
    }

    #[test]
    fn test_insert_at_end_is_append() {
        let mut storage = vec![1i64];
        Traits::insert_at(&mut storage, 1, &2).unwrap();
        assert_eq!(storage, vec![1, 2]);
    }

    #[test]
    fn test_insert_past_end_fails() {
        let mut storage = vec![1i64];
        assert_eq!(
            Traits::insert_at(&mut storage, 2, &9).unwrap_err(),
            VectorError::out_of_bounds(2, 1)
        );
        assert_eq!(storage, vec![1]);
    }

    #[test]
    fn test_set_remove_clear() {
        let mut storage = vec![1i64, 2, 3];
        Traits::set_at(&mut storage, 0, &9).unwrap();
        assert_eq!(storage, vec![9, 2, 3]);

        Traits::remove_at(&mut storage, 1).unwrap();
        assert_eq!(storage, vec![9, 3]);

        Traits::clear(&mut storage);
        assert!(storage.is_empty());
    }
}
