//! Error boundary between rich in-process errors and flat status codes.
//!
//! The crate's internals use [`VectorError`] and `?` freely. The boundary
//! runner ([`run`] / [`run_logged`]) is the only place that translates to
//! a [`StatusCode`], and the only thing a foreign caller ever sees.

mod error;
mod guard;
mod status;

pub use error::{VectorError, VectorResult};
pub use guard::{check_and_clear_out_ptr, check_in_ptr, clear_slot, run, run_logged};
pub use status::StatusCode;
