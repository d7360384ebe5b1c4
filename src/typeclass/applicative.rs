//! Applicative type class - lifting values and combining independent optionals.
//!
//! # Laws
//!
//! ```text
//! pure(x).fmap(f)         == pure(f(x))
//! fa.map2(pure(b), |a, _| a) == fa
//! ```
//!
//! For optionals, combining short-circuits at the first absent argument in
//! left-to-right order, so the receiver's failure takes precedence.

use super::functor::Functor;
use crate::optional::Optional;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    /// use optionals::typeclass::Applicative;
    ///
    /// let lifted: Optional<i32, String> = <Optional<(), String>>::pure(42);
    /// assert_eq!(lifted, Optional::present(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    /// use optionals::typeclass::Applicative;
    ///
    /// let left: Optional<i32, &str> = Optional::absent("left");
    /// let right: Optional<i32, &str> = Optional::absent("right");
    /// assert_eq!(left.map2(right, |a, b| a + b), Optional::absent("left"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

impl<T, E: Clone> Applicative for Optional<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B, E> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B, E>, function: F) -> Optional<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        self.zip(other).map(|(a, b)| function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Optional<B, E>,
        third: Optional<C, E>,
        function: F,
    ) -> Optional<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.zip(second)
            .zip(third)
            .map(|((a, b), c)| function(a, b, c))
    }
}
