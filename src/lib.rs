//! # boundary-vec
//!
//! A generic, foreign-boundary-safe collection engine: an ordered
//! sequence type exposed across a stable, language-agnostic call
//! boundary, plus the error boundary and leak diagnostics that make that
//! exposure safe.
//!
//! ## Design Principles
//!
//! 1. **One engine, many element kinds**: a single vector implementation
//!    serves value types, reference-counted handles, and text handles.
//!    Per-type storage and marshaling rules live in `ElementTraits`
//!    implementations, selected at compile time.
//!
//! 2. **Nothing rich crosses the boundary**: internals signal failures
//!    as `VectorError` and propagate with `?`; the boundary runner is
//!    the single place that flattens to a numeric `StatusCode`. Output
//!    slots are defensively cleared before any work, so a failed call
//!    never leaves a caller-visible output indeterminate.
//!
//! 3. **Policy layered over storage**: bounds checking belongs to the
//!    storage traits; fixed-size enforcement and changed-flag
//!    bookkeeping belong to the vector. Neither duplicates the other.
//!
//! 4. **Caller-serialized**: calls are synchronous and thread-agnostic;
//!    the vector carries no internal locks. The one built-in lock guards
//!    the diagnostic lifespan registry.
//!
//! ## Modules
//!
//! - `boundary`: status codes, rich internal errors, the error boundary
//! - `elements`: per-type storage/marshaling rules (value, shared, text)
//! - `vector`: the generic vector, its read-only view, and its cursor
//! - `lifespan`: live-object counting for leak detection

pub mod boundary;
pub mod elements;
pub mod lifespan;
pub mod vector;

// Re-export commonly used types
pub use crate::boundary::{StatusCode, VectorError, VectorResult};

pub use crate::elements::{ElementTraits, SharedTraits, TextTraits, ValueTraits};

pub use crate::lifespan::{LifespanRegistry, LifespanTracker, LiveObjectCount, TypeIdentity};

pub use crate::vector::{SharedVector, Vector, VectorIterator, VectorTraits, VectorView};
