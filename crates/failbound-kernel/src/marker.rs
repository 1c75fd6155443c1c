//! The no-failure marker.

use std::convert::Infallible;
use std::fmt;

/// Failure bound declaring that an operation fails with nothing.
///
/// `NoFailure` has no values, so it can never be constructed and a
/// `Result<T, NoFailure>` is always `Ok`. The declaration covers declared
/// failures only: an operation bounded by `NoFailure` may still panic.
///
/// An operation bounded by `NoFailure` can be cast to any bound `E` with
/// `E: From<NoFailure>`. `Box<dyn Error + Send + Sync>` qualifies through
/// the standard library's blanket conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoFailure {}

impl NoFailure {
    /// Eliminate an impossible failure into any type.
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}

impl fmt::Display for NoFailure {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for NoFailure {}

impl From<Infallible> for NoFailure {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Extract the value of a result that cannot fail.
pub fn into_ok<T>(result: Result<T, NoFailure>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => never.absurd(),
    }
}
