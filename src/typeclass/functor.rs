//! Functor type class - mapping over the present value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optionals::optional::Optional;
//! use optionals::typeclass::Functor;
//!
//! let length = Optional::some("four".to_string()).fmap(|s| s.len());
//! assert_eq!(length, Optional::some(4));
//! ```

use super::higher::TypeConstructor;
use crate::optional::Optional;

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// without consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    /// use optionals::typeclass::Functor;
    ///
    /// let name = Optional::some("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Optional::some(5));
    /// assert!(name.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<T, E: Clone> Functor for Optional<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent(failure) => Optional::Absent(failure.clone()),
        }
    }
}
