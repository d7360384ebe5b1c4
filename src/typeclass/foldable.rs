//! Foldable type class - reducing a structure to a summary value.
//!
//! An optional is a structure of zero or one element, so folding it either
//! returns the initial accumulator or applies the function once.

use super::higher::TypeConstructor;
use crate::optional::Optional;

/// A type class for structures that can be folded to a summary value.
///
/// # Examples
///
/// ```rust
/// use optionals::optional::Optional;
/// use optionals::typeclass::Foldable;
///
/// assert_eq!(Optional::some(5).fold_left(10, |acc, n| acc + n), 15);
/// assert_eq!(Optional::<i32>::none().fold_left(10, |acc, n| acc + n), 10);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds from the left with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the structure holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Collects the elements into a `Vec`.
    #[inline]
    fn to_vec(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty structure satisfies any predicate.
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool;
}

impl<T, E> Foldable for Optional<T, E> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Present(value) => function(init, value),
            Self::Absent(_) => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Present(value) => function(value, init),
            Self::Absent(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_absent()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_present())
    }

    #[inline]
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent(_) => true,
        }
    }
}
