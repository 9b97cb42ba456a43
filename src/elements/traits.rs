//! Per-type storage and marshaling rules.

use crate::boundary::VectorResult;

/// How a domain value is stored inside a collection and marshaled across
/// the boundary.
///
/// Implementations are zero-sized marker types selected at compile time;
/// the collection never constructs them. The two associated types split
/// the element's life in half:
///
/// - `Value` is the domain-facing form a caller hands in and receives
///   back. It must be `Default` so output slots can be defensively
///   cleared before any work happens.
/// - `Storage` is the in-memory form the collection owns. It may be the
///   same type (value elements), a shared-ownership handle, or an owned
///   duplicate (text elements).
///
/// `wrap` converts inward on every insertion, `unwrap` converts outward
/// into a caller's slot on every read, and `equals` defines the match
/// rule used by index-of scans.
pub trait ElementTraits: 'static {
    /// Domain-facing element type.
    type Value: Clone + Default;

    /// In-memory storage form.
    type Storage: Clone;

    /// Convert a caller-supplied value into its storage form.
    fn wrap(value: &Self::Value) -> VectorResult<Self::Storage>;

    /// Convert a stored element outward into a caller's output slot.
    fn unwrap(stored: &Self::Storage, slot: &mut Self::Value) -> VectorResult<()>;

    /// Compare a stored element against a caller-supplied value.
    fn equals(stored: &Self::Storage, value: &Self::Value) -> bool;
}
