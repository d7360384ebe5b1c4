//! The optional-value container.
//!
//! This module provides [`Optional<T, E>`], an immutable container that either
//! holds a value of type `T` (`Present`) or holds a failure value of type `E`
//! describing why the value is absent (`Absent`).
//!
//! The failure-less shape `Optional<T>` is `Optional<T, ()>`: its absent state
//! carries no information beyond the absence itself. Both shapes share one
//! implementation of every combinator.
//!
//! # Equality and Ordering
//!
//! - Two optionals are equal iff both are present with equal values, or both
//!   are absent with equal failures.
//! - Absent orders before present. Present values order by `T`, absent ones
//!   by `E`.
//!
//! ```rust
//! use optionals::optional::Optional;
//!
//! assert!(Optional::<i32>::none() < Optional::some(0));
//! assert!(Optional::some(0) < Optional::some(1));
//! assert_eq!(Optional::some(3), Optional::some(3));
//! assert_eq!(Optional::<i32>::none(), Optional::none());
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optionals::optional::Optional;
//!
//! let present: Optional<i32, String> = Optional::present(5);
//! let absent: Optional<i32, String> = Optional::absent("missing".to_string());
//!
//! assert_eq!(present.map(|value| value * 2).value_or(0), 10);
//! assert_eq!(absent.map(|value| value * 2).value_or(0), 0);
//! ```

mod combinators;
mod extract;
mod failure;

use std::fmt;

pub use extract::ValueMissing;

/// An optional value that carries a failure payload of type `E` when absent.
///
/// `Optional<T, E>` is either `Present(T)` or `Absent(E)`; exactly one of the
/// two holds at all times. No operation mutates an existing instance: every
/// combinator consumes the receiver and returns a new optional.
///
/// The default failure type `()` gives the failure-less shape `Optional<T>`.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
/// * `E` - The type of the failure carried by an absent value
///
/// # Examples
///
/// ```rust
/// use optionals::optional::Optional;
///
/// let value: Optional<i32> = Optional::some(42);
/// assert!(value.is_present());
///
/// let failed: Optional<i32, &str> = Optional::absent("not found");
/// assert_eq!(failed.failure_ref(), Some(&"not found"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[must_use]
pub enum Optional<T, E = ()> {
    // Declared first so that the derived ordering puts absence before presence.
    /// No value; carries the failure describing why.
    Absent(E),
    /// A present value.
    Present(T),
}

/// Creates a present failure-less optional.
///
/// # Examples
///
/// ```rust
/// use optionals::optional::{Optional, some};
///
/// assert_eq!(some(1), Optional::some(1));
/// ```
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Creates an absent failure-less optional.
///
/// # Examples
///
/// ```rust
/// use optionals::optional::{Optional, none};
///
/// let empty: Optional<i32> = none();
/// assert!(empty.is_absent());
/// ```
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::Absent(())
}

// =============================================================================
// Failure-less Constructors
// =============================================================================

impl<T> Optional<T> {
    /// Creates a present optional holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent optional.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent(())
    }

    /// Converts a possibly-absent value into an optional.
    ///
    /// The result is present iff `value` is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert_eq!(Optional::from_option(Some(1)), Optional::some(1));
    /// assert_eq!(Optional::<i32>::from_option(None), Optional::none());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Absent(()), Self::Present)
    }

    /// Creates a present optional if `predicate` holds for `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert_eq!(Optional::some_when(4, |n| n % 2 == 0), Optional::some(4));
    /// assert_eq!(Optional::some_when(3, |n| n % 2 == 0), Optional::none());
    /// ```
    pub fn some_when<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Present(value)
        } else {
            Self::Absent(())
        }
    }

    /// Creates a present optional unless `predicate` holds for `value`.
    pub fn none_when<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self::some_when(value, |value| !predicate(value))
    }
}

// =============================================================================
// Failure-bearing Constructors
// =============================================================================

impl<T, E> Optional<T, E> {
    /// Creates a present optional holding `value`.
    ///
    /// The failure type is inferred from context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let value: Optional<i32, String> = Optional::present(7);
    /// assert_eq!(value.present_ref(), Some(&7));
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent optional carrying `failure`.
    #[inline]
    pub const fn absent(failure: E) -> Self {
        Self::Absent(failure)
    }

    /// Creates an absent optional whose failure is produced by `factory`.
    ///
    /// `factory` is called immediately: the result is always absent, so there
    /// is nothing to defer. Use the `_else` combinators
    /// ([`Optional::from_option_or_else`], [`Optional::filter_or_else`],
    /// [`Optional::flat_map_or_else`]) when the failure should only be built
    /// on the path that needs it.
    #[inline]
    pub fn absent_with<F>(factory: F) -> Self
    where
        F: FnOnce() -> E,
    {
        Self::Absent(factory())
    }

    /// Converts a possibly-absent value, using `failure` when it is `None`.
    #[inline]
    pub fn from_option_or(value: Option<T>, failure: E) -> Self {
        value.map_or(Self::Absent(failure), Self::Present)
    }

    /// Converts a possibly-absent value, computing the failure only when it
    /// is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let value = Optional::from_option_or_else(None::<i32>, || "empty");
    /// assert_eq!(value, Optional::absent("empty"));
    /// ```
    #[inline]
    pub fn from_option_or_else<F>(value: Option<T>, factory: F) -> Self
    where
        F: FnOnce() -> E,
    {
        value.map_or_else(|| Self::Absent(factory()), Self::Present)
    }

    /// Converts a `Result` into an optional: `Ok` becomes present, `Err`
    /// becomes absent with the error as failure.
    #[inline]
    pub fn from_result(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Present(value),
            Err(failure) => Self::Absent(failure),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }

    /// Returns `true` if a value is present and equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert!(Optional::some(2).contains(&2));
    /// assert!(!Optional::<i32>::none().contains(&2));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Present(present) if present == value)
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent(_) => false,
        }
    }

    /// Borrows the contents, producing an optional of references.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T, &E> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent(failure) => Optional::Absent(failure),
        }
    }

    /// Returns a reference to the present value, if any.
    #[inline]
    pub const fn present_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    /// Returns a reference to the failure, if absent.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Present(_) => None,
            Self::Absent(failure) => Some(failure),
        }
    }

    /// Converts into a std `Option`, discarding any failure.
    #[inline]
    pub fn into_present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    /// Converts into the failure, if absent.
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Present(_) => None,
            Self::Absent(failure) => Some(failure),
        }
    }

    /// Converts into a `Result`, with the failure as the error.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent(failure) => Err(failure),
        }
    }

    /// Returns an iterator over the present value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.present_ref().into_iter()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T, E> From<Result<T, E>> for Optional<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        Self::from_result(value)
    }
}

impl<T, E> From<Optional<T, E>> for Option<T> {
    #[inline]
    fn from(value: Optional<T, E>) -> Self {
        value.into_present()
    }
}

impl<T, E> From<Optional<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: Optional<T, E>) -> Self {
        value.into_result()
    }
}

impl<T> Default for Optional<T> {
    /// The default optional is absent.
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T, E> IntoIterator for Optional<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_present().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Optional<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Some({value})"),
            Self::Absent(()) => write!(formatter, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn some_is_present() {
        let value = Optional::some(1);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn none_is_absent() {
        let value: Optional<i32> = Optional::none();
        assert!(value.is_absent());
        assert_eq!(value.failure_ref(), Some(&()));
    }

    #[rstest]
    #[case(Some(3), Optional::some(3))]
    #[case(None, Optional::none())]
    fn from_option_follows_presence(#[case] input: Option<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(Optional::from(input), expected);
    }

    #[rstest]
    fn from_option_or_else_is_lazy_for_some() {
        let value: Optional<i32, String> =
            Optional::from_option_or_else(Some(1), || panic!("factory must not run"));
        assert_eq!(value, Optional::present(1));
    }

    #[rstest]
    fn absent_with_uses_factory() {
        let value: Optional<i32, String> = Optional::absent_with(|| "late".to_string());
        assert_eq!(value.into_failure(), Some("late".to_string()));
    }

    #[rstest]
    fn absent_with_calls_factory_at_construction() {
        let calls = std::cell::Cell::new(0);
        let value: Optional<i32, &str> = Optional::absent_with(|| {
            calls.set(calls.get() + 1);
            "built"
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(value, Optional::absent("built"));
    }

    #[rstest]
    fn present_never_equals_absent() {
        let present: Optional<(), ()> = Optional::present(());
        let absent: Optional<(), ()> = Optional::absent(());
        assert_ne!(present, absent);
    }

    #[rstest]
    fn absent_orders_by_failure() {
        let first: Optional<i32, i32> = Optional::absent(1);
        let second: Optional<i32, i32> = Optional::absent(2);
        let present: Optional<i32, i32> = Optional::present(i32::MIN);
        assert!(first < second);
        assert!(second < present);
    }

    #[rstest]
    fn result_round_trip_keeps_failure() {
        let value: Optional<i32, &str> = Err("bad").into();
        assert_eq!(Result::from(value), Err("bad"));
    }

    #[rstest]
    fn display_renders_variants() {
        assert_eq!(Optional::some(5).to_string(), "Some(5)");
        assert_eq!(Optional::<i32>::none().to_string(), "None");
    }

    #[rstest]
    fn iteration_yields_zero_or_one() {
        assert_eq!(Optional::some(1).into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(Optional::<i32>::none().iter().count(), 0);
    }

    #[rstest]
    fn none_when_inverts_predicate() {
        assert_eq!(Optional::none_when(0, |n| *n == 0), Optional::none());
        assert_eq!(Optional::none_when(1, |n| *n == 0), Optional::some(1));
    }
}
