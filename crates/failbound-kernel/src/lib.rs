//! # Failbound Kernel
//!
//! Single-operation contracts that declare an upper bound on the failure
//! their operation may produce.
//!
//! The standard closure traits say nothing about failure. The contracts
//! here pin it down: a `Function<X, R, E>` maps an `X` to an `R` and fails
//! with an `E` or nothing. Every `Fn` closure of the matching signature
//! already is one.
//!
//! ## Shapes
//!
//! ```text
//!              no result       bool             value
//! no input     Runnable<E>     Condition<E>     Supplier<R, E>
//! one input    Consumer<X, E>  Predicate<X, E>  Function<X, R, E>
//! two inputs   BiConsumer      BiPredicate      BiFunction
//! ```
//!
//! All nine come from one template. Each exposes `cast_down`, which adopts
//! the same operation under a narrower input and a wider output or failure
//! bound, checked at compile time through `From`.
//!
//! [`NoFailure`] is the empty bound: it has no values, so an operation
//! declared with it cannot produce a declared failure.

#[macro_use]
mod shape;

pub mod binary;
pub mod marker;
pub mod nullary;
pub mod unary;

pub use binary::{
    BiConsumer, BiFunction, BiPredicate, CastBiConsumer, CastBiFunction, CastBiPredicate,
};
pub use marker::{NoFailure, into_ok};
pub use nullary::{
    BooleanSupplier, CastCondition, CastRunnable, CastSupplier, Condition, Runnable, Supplier,
};
pub use unary::{CastConsumer, CastFunction, CastPredicate, Consumer, Function, Predicate};
