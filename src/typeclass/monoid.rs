//! Monoid type class - a semigroup with an identity element.
//!
//! The failure-less optional forms a monoid for any semigroup value: the
//! absent optional is the identity.

use super::semigroup::Semigroup;
use crate::optional::Optional;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// ```text
/// Monoid::empty().combine(a) == a
/// a.combine(Monoid::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use optionals::optional::Optional;
/// use optionals::typeclass::Monoid;
///
/// let parts = vec![
///     Optional::some("a".to_string()),
///     Optional::none(),
///     Optional::some("b".to_string()),
/// ];
/// assert_eq!(Optional::combine_all(parts), Optional::some("ab".to_string()));
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from `empty`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Optional<T> {
    #[inline]
    fn empty() -> Self {
        Self::none()
    }
}
