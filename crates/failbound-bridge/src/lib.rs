//! # Failbound Bridge
//!
//! Moves failures across boundaries that do not declare them.
//!
//! A bounded operation from `failbound-kernel` states which failure it may
//! produce. When it runs behind an interface that states a different bound,
//! or none, its failure has to be converted on the way out. This crate does
//! that conversion explicitly:
//!
//! - [`wrap`] puts a declared failure in a [`WrappedFailure`] carrier and
//!   leaves an already unchecked one alone
//! - [`unwrap`] takes the original failure back out of a carrier
//! - [`run_boundaried`] / [`supply_boundaried`] run an operation and wrap
//!   what it fails with
//! - [`raise_unchecked`] raises a failure held as data
//! - [`raise_within_limit`] keeps a failure's declared type when it fits a
//!   limit and wraps it otherwise
//!
//! Where a signature leaves no room for a failure at all, [`escape`] and
//! [`recover`] carry it across by unwinding.
//!
//! ```
//! use failbound_bridge::{supply_boundaried, unwrap};
//! use std::io;
//!
//! let read = || -> Result<u32, io::Error> { Err(io::Error::other("e1")) };
//! let failure = supply_boundaried(&read).unwrap_err();
//! assert!(failure.is_wrapped());
//!
//! let original = unwrap(failure);
//! assert_eq!(original.to_string(), "e1");
//! assert!(original.is::<io::Error>());
//! ```

#[macro_use]
pub mod logging;

pub mod bridge;
pub mod escape;
pub mod failure;
pub mod report;

pub use bridge::{
    raise_unchecked, raise_within_limit, run_boundaried, supply_boundaried, unwrap, wrap,
    wrap_option,
};
pub use escape::{escape, escaping, recover};
pub use failure::{BoxFailure, Bounded, Unchecked, WrappedFailure, is_unchecked};
pub use report::{FailureKind, FailureReport};
