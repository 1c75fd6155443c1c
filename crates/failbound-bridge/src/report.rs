//! Serializable description of a failure.
//!
//! A [`FailureReport`] records how a failure crossed (or did not cross) a
//! boundary together with its message chain, so a host can log or ship it
//! without holding on to the failure itself.

use crate::failure::{Unchecked, WrappedFailure};
use serde::{Deserialize, Serialize};
use std::error::Error;

/// How a failure stands relative to a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Must be wrapped before crossing.
    Declared,
    /// Raised as unchecked at its origin.
    Unchecked,
    /// A declared failure inside a carrier.
    Wrapped,
}

impl FailureKind {
    /// Classify `failure` by its type.
    pub fn of(failure: &(dyn Error + 'static)) -> Self {
        if let Some(unchecked) = failure.downcast_ref::<Unchecked>() {
            return match unchecked {
                Unchecked::Wrapped(_) => Self::Wrapped,
                Unchecked::Fault(_) => Self::Unchecked,
            };
        }
        if failure.is::<WrappedFailure>() {
            Self::Wrapped
        } else {
            Self::Declared
        }
    }
}

/// A serializable snapshot of a failure and its causes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub kind: FailureKind,
    /// Display message of the failure itself.
    pub message: String,
    /// Messages of the `source()` chain, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chain: Vec<String>,
}

impl FailureReport {
    /// Describe `failure` without taking it.
    pub fn of(failure: &(dyn Error + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut source = failure.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        Self {
            kind: FailureKind::of(failure),
            message: failure.to_string(),
            chain,
        }
    }

    /// Render as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&Unchecked> for FailureReport {
    fn from(unchecked: &Unchecked) -> Self {
        Self::of(unchecked)
    }
}
