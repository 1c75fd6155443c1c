//! The template every contract shape is generated from.
//!
//! A shape is a trait with exactly one operation, taking `&self` and its
//! inputs and returning `Result<Output, E>`. `E` is the shape's failure
//! bound: the operation may fail with an `E` and nothing else.
//!
//! For each shape the template emits:
//!
//! 1. the trait, with its operation and a provided `cast_down`,
//! 2. a blanket impl for every `Fn` closure of the matching signature,
//! 3. the cast adapter returned by `cast_down`.
//!
//! ## Re-parametrization
//!
//! An operation declared over source parameters `(SX.., SR, SE)` can stand
//! in for any target `(X.., R, E)` where
//!
//! - every target input converts into the source input (`X: Into<SX>`),
//! - the source output converts into the target output (`SR: Into<R>`),
//! - the source failure converts into the target bound (`SE: Into<E>`).
//!
//! This is parameter contravariance and return/failure covariance expressed
//! through `From`. The cast adapter implements the shape for every target
//! satisfying these bounds, so an invalid narrowing is a compile error
//! rather than a runtime surprise. When source and target agree, every
//! conversion is the reflexive `From<T> for T`.

macro_rules! contract_shape {
    // Value-producing shapes: the output is a parameter of the trait.
    (
        $(#[$trait_meta:meta])*
        pub trait $name:ident;
        $(#[$method_meta:meta])*
        fn $method:ident($($arg:ident: $x:ident as $sx:ident),*) -> $r:ident as $sr:ident;
        $(#[$cast_meta:meta])*
        pub struct $cast:ident;
    ) => {
        $(#[$trait_meta])*
        pub trait $name<$($x,)* $r, E> {
            $(#[$method_meta])*
            fn $method(&self, $($arg: $x),*) -> Result<$r, E>;

            /// Re-parametrize this operation.
            ///
            #[doc = concat!("The returned [`", stringify!($cast), "`] holds `self` unchanged")]
            /// and implements this shape for every narrower input,
            /// wider output and wider failure bound.
            #[must_use]
            fn cast_down(self) -> $cast<Self, $($x,)* $r, E>
            where
                Self: Sized,
            {
                $cast::new(self)
            }
        }

        impl<F, $($x,)* $r, E> $name<$($x,)* $r, E> for F
        where
            F: Fn($($x),*) -> Result<$r, E>,
        {
            fn $method(&self, $($arg: $x),*) -> Result<$r, E> {
                (self)($($arg),*)
            }
        }

        $(#[$cast_meta])*
        pub struct $cast<Op, $($sx,)* $sr, SE> {
            op: Op,
            source: ::core::marker::PhantomData<fn($($sx),*) -> Result<$sr, SE>>,
        }

        impl<Op, $($sx,)* $sr, SE> $cast<Op, $($sx,)* $sr, SE> {
            /// Adopt `op` under its source parametrization.
            pub fn new(op: Op) -> Self {
                Self {
                    op,
                    source: ::core::marker::PhantomData,
                }
            }

            /// The adopted operation.
            pub fn get_ref(&self) -> &Op {
                &self.op
            }

            /// Give the adopted operation back.
            pub fn into_inner(self) -> Op {
                self.op
            }
        }

        impl<Op, $($sx,)* $sr, SE, $($x,)* $r, E> $name<$($x,)* $r, E>
            for $cast<Op, $($sx,)* $sr, SE>
        where
            Op: $name<$($sx,)* $sr, SE>,
            $($x: Into<$sx>,)*
            $sr: Into<$r>,
            SE: Into<E>,
        {
            fn $method(&self, $($arg: $x),*) -> Result<$r, E> {
                <Op as $name<$($sx,)* $sr, SE>>::$method(
                    &self.op,
                    $(<$x as Into<$sx>>::into($arg)),*
                )
                .map(<$sr as Into<$r>>::into)
                .map_err(<SE as Into<E>>::into)
            }
        }

        contract_shape!(@common $cast<$($sx,)* $sr,>);
    };

    // Shapes with a fixed output (`()` or `bool`).
    (
        $(#[$trait_meta:meta])*
        pub trait $name:ident;
        $(#[$method_meta:meta])*
        fn $method:ident($($arg:ident: $x:ident as $sx:ident),*) -> $out:ty;
        $(#[$cast_meta:meta])*
        pub struct $cast:ident;
    ) => {
        $(#[$trait_meta])*
        pub trait $name<$($x,)* E> {
            $(#[$method_meta])*
            fn $method(&self, $($arg: $x),*) -> Result<$out, E>;

            /// Re-parametrize this operation.
            ///
            #[doc = concat!("The returned [`", stringify!($cast), "`] holds `self` unchanged")]
            /// and implements this shape for every narrower input and
            /// wider failure bound.
            #[must_use]
            fn cast_down(self) -> $cast<Self, $($x,)* E>
            where
                Self: Sized,
            {
                $cast::new(self)
            }
        }

        impl<F, $($x,)* E> $name<$($x,)* E> for F
        where
            F: Fn($($x),*) -> Result<$out, E>,
        {
            fn $method(&self, $($arg: $x),*) -> Result<$out, E> {
                (self)($($arg),*)
            }
        }

        $(#[$cast_meta])*
        pub struct $cast<Op, $($sx,)* SE> {
            op: Op,
            source: ::core::marker::PhantomData<fn($($sx),*) -> Result<$out, SE>>,
        }

        impl<Op, $($sx,)* SE> $cast<Op, $($sx,)* SE> {
            /// Adopt `op` under its source parametrization.
            pub fn new(op: Op) -> Self {
                Self {
                    op,
                    source: ::core::marker::PhantomData,
                }
            }

            /// The adopted operation.
            pub fn get_ref(&self) -> &Op {
                &self.op
            }

            /// Give the adopted operation back.
            pub fn into_inner(self) -> Op {
                self.op
            }
        }

        impl<Op, $($sx,)* SE, $($x,)* E> $name<$($x,)* E> for $cast<Op, $($sx,)* SE>
        where
            Op: $name<$($sx,)* SE>,
            $($x: Into<$sx>,)*
            SE: Into<E>,
        {
            fn $method(&self, $($arg: $x),*) -> Result<$out, E> {
                <Op as $name<$($sx,)* SE>>::$method(
                    &self.op,
                    $(<$x as Into<$sx>>::into($arg)),*
                )
                .map_err(<SE as Into<E>>::into)
            }
        }

        contract_shape!(@common $cast<$($sx,)*>);
    };

    // Impls shared by every cast adapter. Written by hand so that the
    // phantom source parameters carry no `Clone`/`Debug` bounds.
    (@common $cast:ident<$($source:ident,)*>) => {
        impl<Op: Clone, $($source,)* SE> Clone for $cast<Op, $($source,)* SE> {
            fn clone(&self) -> Self {
                Self::new(self.op.clone())
            }
        }

        impl<Op: ::core::fmt::Debug, $($source,)* SE> ::core::fmt::Debug
            for $cast<Op, $($source,)* SE>
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($cast))
                    .field("op", &self.op)
                    .finish()
            }
        }
    };
}
