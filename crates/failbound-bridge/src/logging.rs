//! Structured logging for the bridge.
//!
//! The bridge logs through the [`log`] facade and installs no logger;
//! applications pick their own backend. Logging is compiled in with the
//! `logging` feature (on by default) and compiles away without it.
//!
//! # Log Levels
//!
//! - **debug**: a failure escaping across, or recovered from, a panic boundary
//! - **trace**: a carrier being built, a limit check deciding
//!
//! # Log Targets
//!
//! - `failbound`: prefix of every target below
//! - `failbound::bridge`: wrap / unwrap / limit rethrow
//! - `failbound::escape`: panic-boundary crossing
//!
//! Example filter: `RUST_LOG=failbound::escape=debug`

/// Log targets used by the bridge. Both nest under `failbound`.
pub mod targets {
    /// Wrapping, unwrapping and limit-aware rethrow.
    pub const BRIDGE: &str = "failbound::bridge";

    /// Failures crossing a panic boundary.
    pub const ESCAPE: &str = "failbound::escape";
}

#[cfg(feature = "logging")]
macro_rules! bridge_trace {
    ($($arg:tt)*) => {
        ::log::trace!(target: $crate::logging::targets::BRIDGE, $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! bridge_trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "logging")]
macro_rules! escape_debug {
    ($($arg:tt)*) => {
        ::log::debug!(target: $crate::logging::targets::ESCAPE, $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! escape_debug {
    ($($arg:tt)*) => {{}};
}
