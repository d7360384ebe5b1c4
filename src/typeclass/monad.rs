//! Monad type class - sequencing dependent optional steps.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f)             == f(a)
//! m.flat_map(pure)                == m
//! m.flat_map(f).flat_map(g)       == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optionals::optional::Optional;
//! use optionals::typeclass::Monad;
//!
//! fn chain<M: Monad<Inner = i32>>(m: M, f: impl FnOnce(i32) -> M::WithType<i32>) -> M::WithType<i32> {
//!     m.flat_map(f)
//! }
//!
//! assert_eq!(chain(Optional::some(2), |n| Optional::some(n * 5)), Optional::some(10));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// A type class for applicatives that support dependent sequencing.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<T, E: Clone> Monad for Optional<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B, E>
    where
        F: FnOnce(T) -> Optional<B, E>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent(failure) => Optional::Absent(failure),
        }
    }
}
