//! The error boundary: the single point where rich errors become flat
//! status codes.
//!
//! Every externally visible operation wraps its body in [`run`] (or
//! [`run_logged`] when failures should also reach the diagnostic
//! channel). The body performs the real work, validates and defensively
//! clears its output slots up front, and signals failure through
//! [`VectorResult`]. No rich error and no unwinding ever crosses the
//! boundary: a panic that escapes the body is contained here and reported
//! as [`StatusCode::Unexpected`].

use std::panic::{catch_unwind, AssertUnwindSafe};

use super::error::{VectorError, VectorResult};
use super::status::StatusCode;

/// Execute a boundary operation and translate its outcome.
///
/// On normal completion returns `Success`; a signaled [`VectorError`]
/// yields its mapped code; an escaped panic yields `Unexpected`.
pub fn run<F>(operation: F) -> StatusCode
where
    F: FnOnce() -> VectorResult<()>,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(())) => StatusCode::Success,
        Ok(Err(error)) => error.status(),
        Err(_) => {
            log::error!("panic contained at the call boundary");
            StatusCode::Unexpected
        }
    }
}

/// Like [`run`], but attaches a descriptive context to any failure and
/// routes it to the diagnostic channel before flattening.
///
/// Use this for operator-facing operations where a bare numeric code
/// would lose too much.
pub fn run_logged<F>(context: &str, operation: F) -> StatusCode
where
    F: FnOnce() -> VectorResult<()>,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(())) => StatusCode::Success,
        Ok(Err(error)) => {
            log::error!("{context}: {error}");
            error.status()
        }
        Err(_) => {
            log::error!("{context}: panic contained at the call boundary");
            StatusCode::Unexpected
        }
    }
}

/// Defensively reset an output slot to its zero/empty value.
///
/// Boundary operations call this on every output slot before doing any
/// work, so a failed call never leaves a caller-visible output in an
/// indeterminate state.
pub fn clear_slot<T: Default>(slot: &mut T) {
    *slot = T::default();
}

/// Validate a required input pointer from a bridging shim.
///
/// Null maps to `InvalidArgument`. Safe Rust callers never need this;
/// it exists for the raw side of a cross-runtime bridge.
pub fn check_in_ptr<T>(ptr: *const T) -> VectorResult<()> {
    if ptr.is_null() {
        Err(VectorError::InvalidArgument)
    } else {
        Ok(())
    }
}

/// Validate an output pointer from a bridging shim and clear it.
///
/// Returns the slot as a mutable reference, already reset to its default,
/// or `InvalidArgument` when the pointer is null.
///
/// # Safety
///
/// `ptr` must either be null or be valid for reads and writes of a
/// properly initialized `T` for the duration of `'a`, with no other
/// reference to the same memory alive.
pub unsafe fn check_and_clear_out_ptr<'a, T: Default>(ptr: *mut T) -> VectorResult<&'a mut T> {
    if ptr.is_null() {
        return Err(VectorError::InvalidArgument);
    }
    let slot = unsafe { &mut *ptr };
    *slot = T::default();
    Ok(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        assert_eq!(run(|| Ok(())), StatusCode::Success);
    }

    #[test]
    fn test_error_is_flattened() {
        let status = run(|| Err(VectorError::out_of_bounds(9, 3)));
        assert_eq!(status, StatusCode::OutOfBounds);
    }

    #[test]
    fn test_panic_is_contained() {
        let status = run(|| panic!("must not escape"));
        assert_eq!(status, StatusCode::Unexpected);
    }

    #[test]
    fn test_logged_variant_flattens_identically() {
        let status = run_logged("widget teardown", || Err(VectorError::NotImplemented));
        assert_eq!(status, StatusCode::NotImplemented);
    }

    #[test]
    fn test_clear_slot() {
        let mut slot = 42u32;
        clear_slot(&mut slot);
        assert_eq!(slot, 0);
    }

    #[test]
    fn test_check_in_ptr() {
        let value = 7i64;
        assert_eq!(check_in_ptr(&value), Ok(()));
        assert_eq!(
            check_in_ptr(std::ptr::null::<i64>()),
            Err(VectorError::InvalidArgument)
        );
    }

    #[test]
    fn test_check_and_clear_out_ptr() {
        let mut slot = 42u32;
        let cleared = unsafe { check_and_clear_out_ptr(&mut slot as *mut u32) }.unwrap();
        assert_eq!(*cleared, 0);
        *cleared = 7;
        assert_eq!(slot, 7);

        let missing = unsafe { check_and_clear_out_ptr(std::ptr::null_mut::<u32>()) };
        assert_eq!(missing.unwrap_err(), VectorError::InvalidArgument);
    }
}
