//! Failures that cross boundaries.
//!
//! Rust has no checked failures, so "declared" and "unchecked" are told
//! apart by type: a failure is unchecked exactly when it is an
//! [`Unchecked`] or a bare [`WrappedFailure`]. Everything else is a declared
//! failure and must be wrapped before it may cross a boundary that does not
//! declare it.

use failbound_kernel::NoFailure;
use std::error::Error;
use std::fmt;

/// Root of every failure the bridge handles.
pub type BoxFailure = Box<dyn Error + Send + Sync + 'static>;

/// A failure that may cross any boundary without being declared.
#[derive(Debug, thiserror::Error)]
pub enum Unchecked {
    /// A failure raised as unchecked at its origin.
    #[error(transparent)]
    Fault(BoxFailure),

    /// A declared failure carried across a boundary.
    #[error(transparent)]
    Wrapped(#[from] WrappedFailure),
}

impl Unchecked {
    /// Raise `failure` as unchecked at its origin.
    ///
    /// A failure that already is unchecked is returned as it is rather than
    /// nested.
    pub fn fault(failure: impl Into<BoxFailure>) -> Self {
        match into_unchecked(failure.into()) {
            Ok(unchecked) => unchecked,
            Err(declared) => Self::Fault(declared),
        }
    }

    /// Whether this is a carrier around a declared failure.
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }

    /// The declared failure this carries, if it is a carrier.
    pub fn wrapped_cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Wrapped(carrier) => Some(carrier.cause()),
            Self::Fault(_) => None,
        }
    }
}

impl From<NoFailure> for Unchecked {
    fn from(never: NoFailure) -> Self {
        never.absurd()
    }
}

/// The uniform carrier of a declared failure across a boundary.
///
/// Holds exactly one original failure, verbatim. Only [`crate::wrap`]
/// builds carriers, and never around a failure that already is unchecked.
#[derive(Debug, thiserror::Error)]
#[error("wrapped failure: {cause}")]
pub struct WrappedFailure {
    #[source]
    cause: BoxFailure,
}

impl WrappedFailure {
    /// Panics if `cause` already is unchecked: wrapping it twice is a bug.
    pub(crate) fn new(cause: BoxFailure) -> Self {
        assert!(
            !is_unchecked(&*cause),
            "refusing to wrap an unchecked failure: {cause}"
        );
        Self { cause }
    }

    /// The original failure.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Give the original failure back, in the allocation it arrived in.
    pub fn into_cause(self) -> BoxFailure {
        self.cause
    }
}

/// A failure raised against a declared limit `L`.
///
/// Either the failure satisfies the limit and is raised as it is, or it
/// crosses as unchecked. Converting into a [`BoxFailure`] yields the inner
/// failure, never the `Bounded` around it.
#[derive(Debug)]
pub enum Bounded<L> {
    /// The failure is an `L`.
    Declared(L),

    /// The failure is outside the limit.
    Unchecked(Unchecked),
}

impl<L> Bounded<L> {
    /// The declared failure, or the unchecked one that fell outside `L`.
    pub fn into_declared(self) -> Result<L, Unchecked> {
        match self {
            Self::Declared(within) => Ok(within),
            Self::Unchecked(outside) => Err(outside),
        }
    }
}

impl<L> From<Unchecked> for Bounded<L> {
    fn from(unchecked: Unchecked) -> Self {
        Self::Unchecked(unchecked)
    }
}

impl<L: fmt::Display> fmt::Display for Bounded<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared(within) => fmt::Display::fmt(within, f),
            Self::Unchecked(outside) => fmt::Display::fmt(outside, f),
        }
    }
}

// Not an `Error` itself: boxing splits it, so a bridge never sees a
// `Bounded` as a declared failure and carries it a second time.
impl<L: Error + Send + Sync + 'static> From<Bounded<L>> for BoxFailure {
    fn from(bounded: Bounded<L>) -> Self {
        match bounded {
            Bounded::Declared(within) => Box::new(within),
            Bounded::Unchecked(outside) => Box::new(outside),
        }
    }
}

/// Whether `failure` may already cross a boundary without being wrapped.
pub fn is_unchecked(failure: &(dyn Error + 'static)) -> bool {
    failure.is::<Unchecked>() || failure.is::<WrappedFailure>()
}

/// Take an unchecked failure out of its box, or hand a declared one back
/// untouched.
pub(crate) fn into_unchecked(failure: BoxFailure) -> Result<Unchecked, BoxFailure> {
    let failure = match failure.downcast::<Unchecked>() {
        Ok(unchecked) => return Ok(*unchecked),
        Err(other) => other,
    };
    match failure.downcast::<WrappedFailure>() {
        Ok(carrier) => Ok(Unchecked::Wrapped(*carrier)),
        Err(declared) => Err(declared),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn declared_failures_are_not_unchecked() {
        let failure = io::Error::other("disk full");
        assert!(!is_unchecked(&failure));
    }

    #[test]
    fn faults_and_carriers_are_unchecked() {
        let fault = Unchecked::fault(io::Error::other("broken invariant"));
        assert!(is_unchecked(&fault));
        assert!(!fault.is_wrapped());
        assert!(fault.wrapped_cause().is_none());

        let carrier = WrappedFailure::new(Box::new(io::Error::other("disk full")));
        assert!(is_unchecked(&carrier));
        assert_eq!(carrier.cause().to_string(), "disk full");
    }

    #[test]
    fn fault_does_not_nest_unchecked_failures() {
        let inner = Unchecked::fault(io::Error::other("boom"));
        let outer = Unchecked::fault(inner);
        match outer {
            Unchecked::Fault(failure) => assert!(failure.is::<io::Error>()),
            Unchecked::Wrapped(_) => panic!("fault must not become a carrier"),
        }
    }

    #[test]
    #[should_panic(expected = "refusing to wrap an unchecked failure")]
    fn carrier_refuses_unchecked_cause() {
        let fault = Unchecked::fault(io::Error::other("boom"));
        let _ = WrappedFailure::new(Box::new(fault));
    }

    #[test]
    fn carrier_exposes_cause_as_source() {
        let carrier = WrappedFailure::new(Box::new(io::Error::other("disk full")));
        let source = carrier.source().expect("carrier must have a source");
        assert_eq!(source.to_string(), "disk full");
        assert_eq!(carrier.to_string(), "wrapped failure: disk full");
    }

    #[test]
    fn bounded_splits_declared_from_unchecked() {
        let within: Bounded<io::Error> = Bounded::Declared(io::Error::other("x"));
        assert_eq!(within.into_declared().unwrap().to_string(), "x");

        let outside: Bounded<io::Error> = Unchecked::fault(io::Error::other("y")).into();
        assert_eq!(outside.to_string(), "y");
        assert!(outside.into_declared().is_err());
    }

    #[test]
    fn boxing_bounded_yields_the_inner_failure() {
        let within: BoxFailure = Bounded::Declared(io::Error::other("x")).into();
        assert!(within.is::<io::Error>());

        let fault = Unchecked::fault(io::Error::other("y"));
        let outside: BoxFailure = Bounded::<io::Error>::Unchecked(fault).into();
        assert!(is_unchecked(&*outside));
    }

    #[test]
    fn no_failure_operation_widens_to_unchecked_bound() {
        use failbound_kernel::Supplier;

        let constant = || -> Result<u8, NoFailure> { Ok(3) };
        let widened: Result<u16, Unchecked> = Supplier::cast_down(constant).get();
        assert_eq!(widened.unwrap(), 3);
    }
}
