//! Shapes taking two inputs.

contract_shape! {
    /// An operation on two inputs that may fail with at most `E`.
    pub trait BiConsumer;
    /// Perform the operation on `x` and `y`.
    fn accept(x: X as SX, y: Y as SY) -> ();
    /// A [`BiConsumer`] adopted under narrower inputs and a wider failure
    /// bound.
    pub struct CastBiConsumer;
}

contract_shape! {
    /// A predicate over two inputs that may fail with at most `E`.
    pub trait BiPredicate;
    /// Test whether `x` and `y` match.
    fn test(x: X as SX, y: Y as SY) -> bool;
    /// A [`BiPredicate`] adopted under narrower inputs and a wider failure
    /// bound.
    pub struct CastBiPredicate;
}

contract_shape! {
    /// A function of two arguments that may fail with at most `E`.
    ///
    /// Subsequent applications to equal arguments are expected, though not
    /// required, to yield equal results.
    pub trait BiFunction;
    /// Apply the function to `x` and `y`.
    fn apply(x: X as SX, y: Y as SY) -> R as SR;
    /// A [`BiFunction`] adopted under narrower inputs, a wider result and a
    /// wider failure bound.
    pub struct CastBiFunction;
}
