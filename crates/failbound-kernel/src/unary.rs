//! Shapes taking one input: consumers, predicates and functions.

contract_shape! {
    /// An operation on a single input that may fail with at most `E`.
    ///
    /// Invoking a consumer usually has side effects. Subsequent invocations
    /// may or may not have further side effects.
    pub trait Consumer;
    /// Perform the operation on `x`.
    fn accept(x: X as SX) -> ();
    /// A [`Consumer`] adopted under a narrower input and wider failure bound.
    pub struct CastConsumer;
}

contract_shape! {
    /// A function mapping its argument to `bool`, failing with at most `E`.
    ///
    /// While not strictly required, subsequent tests of equal arguments are
    /// expected to agree.
    pub trait Predicate;
    /// Test whether `x` matches.
    fn test(x: X as SX) -> bool;
    /// A [`Predicate`] adopted under a narrower input and wider failure bound.
    pub struct CastPredicate;
}

contract_shape! {
    /// A function mapping its argument to a result, failing with at most `E`.
    ///
    /// While not strictly required, subsequent applications to equal
    /// arguments are expected to yield equal results.
    pub trait Function;
    /// Apply the function to `x`.
    fn apply(x: X as SX) -> R as SR;
    /// A [`Function`] adopted under a narrower input, wider result and wider
    /// failure bound.
    pub struct CastFunction;
}
