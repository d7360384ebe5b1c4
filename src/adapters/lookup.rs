//! Element and key lookup that answers with an optional.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::optional::Optional;

/// Sequence queries returning [`Optional`] instead of `Option` or a panic.
///
/// # Examples
///
/// ```rust
/// use optionals::adapters::IteratorOptionalExt;
/// use optionals::optional::Optional;
///
/// let numbers = vec![3, 8, 5];
/// assert_eq!(numbers.iter().copied().first_or_none_by(|n| *n > 4), Optional::some(8));
/// assert_eq!(numbers.iter().copied().single_or_none_by(|n| *n > 4), Optional::none());
/// assert_eq!(numbers.iter().copied().element_at_or_none(2), Optional::some(5));
/// ```
pub trait IteratorOptionalExt: Iterator + Sized {
    /// The first element, if any.
    fn first_or_none(mut self) -> Optional<Self::Item> {
        self.next().into()
    }

    /// The first element matching `predicate`.
    fn first_or_none_by<P>(mut self, predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).into()
    }

    /// The last element, if any.
    fn last_or_none(self) -> Optional<Self::Item> {
        self.last().into()
    }

    /// The last element matching `predicate`.
    fn last_or_none_by<P>(self, predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).last().into()
    }

    /// The only element; absent when the sequence is empty or has more than
    /// one element.
    fn single_or_none(mut self) -> Optional<Self::Item> {
        match (self.next(), self.next()) {
            (Some(only), None) => Optional::some(only),
            _ => Optional::none(),
        }
    }

    /// The only element matching `predicate`; absent on zero or several
    /// matches.
    fn single_or_none_by<P>(self, predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).single_or_none()
    }

    /// The element at `index`, counting from zero.
    fn element_at_or_none(mut self, index: usize) -> Optional<Self::Item> {
        self.nth(index).into()
    }

    /// Keeps the present values of a sequence of optionals, in order.
    fn present_values<T, E>(self) -> impl Iterator<Item = T>
    where
        Self: Iterator<Item = Optional<T, E>>,
    {
        self.filter_map(Optional::into_present)
    }

    /// Keeps the failures of a sequence of optionals, in order.
    fn failures<T, E>(self) -> impl Iterator<Item = E>
    where
        Self: Iterator<Item = Optional<T, E>>,
    {
        self.filter_map(Optional::into_failure)
    }
}

impl<I: Iterator> IteratorOptionalExt for I {}

/// Keyed or indexed lookup returning [`Optional`].
pub trait LookupOptional<K: ?Sized> {
    /// The looked-up value type.
    type Value;

    /// Returns the entry for `key`, or absent when there is none.
    fn get_optional(&self, key: &K) -> Optional<&Self::Value>;
}

impl<K, Q, V, S> LookupOptional<Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn get_optional(&self, key: &Q) -> Optional<&V> {
        self.get(key).into()
    }
}

impl<K, Q, V> LookupOptional<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn get_optional(&self, key: &Q) -> Optional<&V> {
        self.get(key).into()
    }
}

impl<T> LookupOptional<usize> for [T] {
    type Value = T;

    fn get_optional(&self, index: &usize) -> Optional<&T> {
        self.get(*index).into()
    }
}

impl<T> LookupOptional<usize> for Vec<T> {
    type Value = T;

    fn get_optional(&self, index: &usize) -> Optional<&T> {
        self.as_slice().get_optional(index)
    }
}
