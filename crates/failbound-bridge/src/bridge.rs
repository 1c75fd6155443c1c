//! Wrap, unwrap and limit-aware rethrow.
//!
//! Nothing here converts implicitly: a declared failure becomes unchecked
//! only at an explicit call to one of these functions.

use crate::failure::{BoxFailure, Bounded, Unchecked, WrappedFailure, into_unchecked};
use failbound_kernel::{Runnable, Supplier};
use std::error::Error;

/// Make `failure` fit to cross a boundary.
///
/// An unchecked failure is returned unchanged. Any other failure is put in
/// a new [`WrappedFailure`], so a carrier never ends up inside a carrier.
pub fn wrap<F: Into<BoxFailure>>(failure: F) -> Unchecked {
    match into_unchecked(failure.into()) {
        Ok(unchecked) => unchecked,
        Err(declared) => {
            bridge_trace!("wrapping declared failure: {declared}");
            Unchecked::Wrapped(WrappedFailure::new(declared))
        }
    }
}

/// [`wrap`] for a failure that may be absent. Absent stays absent.
pub fn wrap_option<F: Into<BoxFailure>>(failure: Option<F>) -> Option<Unchecked> {
    failure.map(wrap)
}

/// Recover the original failure from a carrier.
///
/// Anything that is not a carrier is returned unchanged.
pub fn unwrap<F: Into<BoxFailure>>(failure: F) -> BoxFailure {
    let failure: BoxFailure = failure.into();
    match failure.downcast::<Unchecked>() {
        Ok(unchecked) => match *unchecked {
            Unchecked::Wrapped(carrier) => carrier.into_cause(),
            fault @ Unchecked::Fault(_) => Box::new(fault),
        },
        Err(other) => match other.downcast::<WrappedFailure>() {
            Ok(carrier) => carrier.into_cause(),
            Err(other) => other,
        },
    }
}

/// Run `task`; a declared failure leaves as a carrier.
///
/// On success nothing is built. A failure that already is unchecked is
/// returned as it is.
pub fn run_boundaried<O, E>(task: &O) -> Result<(), Unchecked>
where
    O: Runnable<E> + ?Sized,
    E: Into<BoxFailure>,
{
    task.run().map_err(wrap)
}

/// Get a value from `task`; a declared failure leaves as a carrier.
pub fn supply_boundaried<O, R, E>(task: &O) -> Result<R, Unchecked>
where
    O: Supplier<R, E> + ?Sized,
    E: Into<BoxFailure>,
{
    task.get().map_err(wrap)
}

/// Raise a failure held as data, wrapped if it needs to be.
pub fn raise_unchecked<T, F: Into<BoxFailure>>(failure: F) -> Result<T, Unchecked> {
    Err(wrap(failure))
}

/// Re-raise `failure` against a declared limit `L`.
///
/// A failure that is an `L` is raised as it is, keeping its declared type.
/// Anything else is raised as [`wrap`] would produce it.
pub fn raise_within_limit<L, T, F>(failure: F) -> Result<T, Bounded<L>>
where
    L: Error + Send + Sync + 'static,
    F: Into<BoxFailure>,
{
    let failure: BoxFailure = failure.into();
    match failure.downcast::<L>() {
        Ok(within) => {
            bridge_trace!("failure within declared limit {}", std::any::type_name::<L>());
            Err(Bounded::Declared(*within))
        }
        Err(outside) => {
            bridge_trace!("failure outside declared limit {}", std::any::type_name::<L>());
            Err(Bounded::Unchecked(wrap(outside)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, thiserror::Error)]
    #[error("config missing key {0}")]
    struct MissingKey(&'static str);

    #[test]
    fn wrap_builds_carrier_for_declared_failure() {
        let unchecked = wrap(MissingKey("port"));
        assert!(unchecked.is_wrapped());
        assert_eq!(unchecked.to_string(), "wrapped failure: config missing key port");
    }

    #[test]
    fn wrap_keeps_absent_failure_absent() {
        assert!(wrap_option(None::<io::Error>).is_none());
        assert!(wrap_option(Some(MissingKey("host"))).is_some_and(|u| u.is_wrapped()));
    }

    #[test]
    fn wrap_is_idempotent() {
        let once = wrap(MissingKey("port"));
        let twice = wrap(once);
        let cause = twice.wrapped_cause().expect("still a carrier");
        assert!(cause.is::<MissingKey>());
    }

    #[test]
    fn bare_carrier_is_treated_as_unchecked() {
        let Unchecked::Wrapped(carrier) = wrap(MissingKey("port")) else {
            panic!("declared failure must be wrapped");
        };
        let rewrapped = wrap(carrier);
        assert!(rewrapped.wrapped_cause().is_some_and(|c| c.is::<MissingKey>()));
    }

    #[test]
    fn unwrap_passes_non_carriers_through() {
        let plain = unwrap(MissingKey("port"));
        assert!(plain.is::<MissingKey>());

        let fault = unwrap(Unchecked::fault(io::Error::other("boom")));
        assert!(matches!(fault.downcast_ref::<Unchecked>(), Some(Unchecked::Fault(_))));
    }

    #[test]
    fn run_boundaried_passes_success_through() {
        let task = || Ok::<(), MissingKey>(());
        assert!(run_boundaried(&task).is_ok());
    }

    #[test]
    fn supply_boundaried_keeps_unchecked_failure() {
        let task = || -> Result<u8, Unchecked> { Err(Unchecked::fault(io::Error::other("boom"))) };
        let failure = supply_boundaried(&task).unwrap_err();
        assert!(!failure.is_wrapped());
        assert_eq!(failure.to_string(), "boom");
    }

    #[test]
    fn raise_unchecked_always_fails() {
        let raised: Result<u8, Unchecked> = raise_unchecked(MissingKey("port"));
        assert!(raised.unwrap_err().is_wrapped());
    }

    #[test]
    fn raise_within_limit_keeps_matching_type() {
        let raised: Result<(), Bounded<MissingKey>> = raise_within_limit(MissingKey("port"));
        match raised {
            Err(Bounded::Declared(MissingKey(key))) => assert_eq!(key, "port"),
            other => panic!("expected declared failure, got {other:?}"),
        }
    }

    #[test]
    fn raise_within_limit_wraps_other_types() {
        let raised: Result<(), Bounded<io::Error>> = raise_within_limit(MissingKey("port"));
        match raised {
            Err(Bounded::Unchecked(unchecked)) => {
                assert!(unchecked.wrapped_cause().is_some_and(|c| c.is::<MissingKey>()));
            }
            other => panic!("expected unchecked failure, got {other:?}"),
        }
    }
}
