//! Shapes taking no input: runnables, conditions and suppliers.

contract_shape! {
    /// A runnable task that may fail with at most `E`.
    ///
    /// Invoking a runnable usually has side effects. Subsequent runs may or
    /// may not have further side effects.
    pub trait Runnable;
    /// Execute the task.
    fn run() -> ();
    /// A [`Runnable`] adopted under a wider failure bound.
    pub struct CastRunnable;
}

contract_shape! {
    /// A source of `bool` values that may fail with at most `E`.
    ///
    /// Nothing requires a distinct result on each check.
    pub trait Condition;
    /// Check the condition.
    fn check() -> bool;
    /// A [`Condition`] adopted under a wider failure bound.
    pub struct CastCondition;
}

/// The boolean-specialized supplier is the same shape as [`Condition`].
pub use self::Condition as BooleanSupplier;

contract_shape! {
    /// A supplier of values that may fail with at most `E`.
    ///
    /// There is no requirement that a new or distinct value be returned
    /// each time the supplier is invoked.
    pub trait Supplier;
    /// Produce a value.
    fn get() -> R as SR;
    /// A [`Supplier`] adopted under a wider result type and failure bound.
    pub struct CastSupplier;
}
