//! Crossing boundaries whose signature cannot return a failure.
//!
//! A callback typed `Fn(X) -> R` has nowhere to put a declared failure. The
//! failure can still get across by unwinding: [`escape`] unwinds with the
//! [wrapped](crate::wrap) failure as payload, and [`recover`] on the far
//! side turns that payload back into an `Err`.
//!
//! Unwinding is done with `resume_unwind`, so no panic hook runs and nothing
//! is printed. Under `panic = "abort"` an escaping failure aborts.

use crate::bridge::wrap;
use crate::failure::{BoxFailure, Unchecked};
use failbound_kernel::Function;
use std::panic::{self, AssertUnwindSafe};

/// Unwind with `failure`, wrapped if it needs to be.
pub fn escape<F: Into<BoxFailure>>(failure: F) -> ! {
    let unchecked = wrap(failure);
    escape_debug!("failure escaping across panic boundary: {unchecked}");
    panic::resume_unwind(Box::new(unchecked))
}

/// Run `body`, catching a failure that [`escape`]s from it.
///
/// Any other panic keeps unwinding untouched.
pub fn recover<T, B>(body: B) -> Result<T, Unchecked>
where
    B: FnOnce() -> T,
{
    // Only escaped failures are caught; state they leave behind is the same
    // as after an early `?` return from the same point.
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Unchecked>() {
            Ok(unchecked) => {
                escape_debug!("recovered escaped failure: {unchecked}");
                Err(*unchecked)
            }
            Err(foreign) => panic::resume_unwind(foreign),
        },
    }
}

/// Adapt a bounded function for a registration point that wants a plain
/// closure. Its failures [`escape`].
pub fn escaping<O, X, R, E>(function: O) -> impl Fn(X) -> R
where
    O: Function<X, R, E>,
    E: Into<BoxFailure>,
{
    move |x| match function.apply(x) {
        Ok(value) => value,
        Err(failure) => escape(failure),
    }
}
