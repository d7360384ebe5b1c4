//! Semigroup type class - associative combination.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! For optionals, two present values combine their contents, a single
//! present value wins over absence, and when both are absent the receiver's
//! failure is kept.

use crate::optional::Optional;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use optionals::optional::Optional;
/// use optionals::typeclass::Semigroup;
///
/// let left: Optional<Vec<i32>, &str> = Optional::present(vec![1]);
/// let right: Optional<Vec<i32>, &str> = Optional::absent("skipped");
/// assert_eq!(left.combine(right), Optional::present(vec![1]));
/// ```
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines a value with a borrowed one.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Semigroup, E> Semigroup for Optional<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (Self::Present(left), Self::Absent(_)) => Self::Present(left),
            (Self::Absent(_), Self::Present(right)) => Self::Present(right),
            (Self::Absent(left), Self::Absent(_)) => Self::Absent(left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combines_by_concatenation() {
        assert_eq!("ab".to_string().combine("cd".to_string()), "abcd");
    }

    #[rstest]
    fn absent_receiver_failure_wins() {
        let left: Optional<String, &str> = Optional::absent("left");
        let right: Optional<String, &str> = Optional::absent("right");
        assert_eq!(left.combine(right), Optional::absent("left"));
    }

    #[rstest]
    fn present_argument_fills_absent_receiver() {
        let left: Optional<String, &str> = Optional::absent("left");
        let right: Optional<String, &str> = Optional::present("r".to_string());
        assert_eq!(left.combine(right), Optional::present("r".to_string()));
    }

    #[rstest]
    fn combine_ref_leaves_operands() {
        let left = Optional::some(vec![1]);
        let right = Optional::some(vec![2]);
        assert_eq!(left.combine_ref(&right), Optional::some(vec![1, 2]));
        assert_eq!(left, Optional::some(vec![1]));
    }
}
