//! Combinators shared by both optional shapes.
//!
//! Every combinator here is short-circuiting: function and factory arguments
//! run at most once, and only on the branch that needs them. Panics raised by
//! caller-supplied functions propagate unchanged.

use super::Optional;

// =============================================================================
// Value Channel
// =============================================================================

impl<T, E> Optional<T, E> {
    /// Applies `function` to the present value, leaving absence untouched.
    ///
    /// `function` is never invoked on an absent receiver, and an absent
    /// receiver's failure is carried over unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert_eq!(Optional::some(2).map(|n| n + 1), Optional::some(3));
    ///
    /// let failed: Optional<i32, &str> = Optional::absent("err");
    /// assert_eq!(failed.map(|n| n + 1), Optional::absent("err"));
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> Optional<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent(failure) => Optional::Absent(failure),
        }
    }

    /// Applies `function` to the present value and returns its result
    /// directly, without nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let halve = |n: i32| Optional::some_when(n / 2, |_| n % 2 == 0);
    /// assert_eq!(Optional::some(8).flat_map(halve).flat_map(halve), Optional::some(2));
    /// assert_eq!(Optional::some(6).flat_map(halve).flat_map(halve), Optional::none());
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Optional<R, E>
    where
        F: FnOnce(T) -> Optional<R, E>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent(failure) => Optional::Absent(failure),
        }
    }

    /// Performs exhaustive case analysis; exactly one branch runs.
    ///
    /// This is the `match` of the optional: `on_present` receives the value,
    /// `on_absent` receives the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let failed: Optional<i32, &str> = Optional::absent("err");
    /// assert_eq!(failed.fold(|n| n.to_string(), |e| e.to_uppercase()), "ERR");
    ///
    /// let empty: Optional<i32> = Optional::none();
    /// assert_eq!(empty.fold(|n| n, |()| -1), -1);
    /// ```
    #[inline]
    pub fn fold<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce(E) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent(failure) => on_absent(failure),
        }
    }

    /// Runs `action` on the present value, then returns the receiver.
    #[inline]
    pub fn match_present<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the failure of an absent receiver, then returns it.
    #[inline]
    pub fn match_absent<A>(self, action: A) -> Self
    where
        A: FnOnce(&E),
    {
        if let Self::Absent(failure) = &self {
            action(failure);
        }
        self
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the present value, or `default` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert_eq!(Optional::some(5).value_or(9), 5);
    /// assert_eq!(Optional::none().value_or(9), 9);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent(_) => default,
        }
    }

    /// Returns the present value, or the result of `factory` when absent.
    ///
    /// `factory` is only invoked on an absent receiver.
    #[inline]
    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent(_) => factory(),
        }
    }

    /// Returns the present value, or derives one from the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let failed: Optional<usize, &str> = Optional::absent("four");
    /// assert_eq!(failed.value_or_recover(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn value_or_recover<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent(failure) => recover(failure),
        }
    }

    /// Returns the receiver if present, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent(_) => alternative,
        }
    }

    /// Returns the receiver if present, otherwise the optional produced by
    /// `factory`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let fallback = Optional::none().or_else(|| Optional::some(2));
    /// assert_eq!(fallback, Optional::some(2));
    /// ```
    #[inline]
    pub fn or_else<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent(_) => factory(),
        }
    }

    /// Returns the receiver if present, otherwise a present `alternative`.
    #[inline]
    pub fn or_value(self, alternative: T) -> Self {
        Self::Present(self.value_or(alternative))
    }

    /// Returns the receiver if present, otherwise a present value produced
    /// by `factory`.
    #[inline]
    pub fn or_value_with<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::Present(self.value_or_else(factory))
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Pairs two present values.
    ///
    /// When both are absent, the receiver's failure is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let left: Optional<i32, &str> = Optional::absent("left");
    /// let right: Optional<i32, &str> = Optional::absent("right");
    /// assert_eq!(left.zip(right), Optional::absent("left"));
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Optional<U, E>) -> Optional<(T, U), E> {
        self.flat_map(|value| other.map(|other| (value, other)))
    }

    /// Returns `other` if the receiver is present, otherwise the receiver's
    /// failure.
    #[inline]
    pub fn and<U>(self, other: Optional<U, E>) -> Optional<U, E> {
        self.flat_map(|_| other)
    }
}

impl<T, E> Optional<Optional<T, E>, E> {
    /// Flattens one level of nesting.
    ///
    /// An absent outer optional keeps its own failure.
    #[inline]
    pub fn flatten(self) -> Optional<T, E> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Failure-less Filtering
// =============================================================================

impl<T> Optional<T> {
    /// Keeps the present value only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert_eq!(Optional::some(4).filter(|n| *n > 3), Optional::some(4));
    /// assert_eq!(Optional::some(2).filter(|n| *n > 3), Optional::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent(())
                }
            }
            Self::Absent(()) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn map_skips_function_when_absent() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::none().map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(result, Optional::none());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn flat_map_propagates_failure() {
        let failed: Optional<i32, String> = Optional::absent("first".to_string());
        let result = failed.flat_map(|n| Optional::<i32, String>::present(n * 2));
        assert_eq!(result, Optional::absent("first".to_string()));
    }

    #[rstest]
    fn flatten_removes_nesting() {
        let nested: Optional<Optional<i32>> = Optional::some(Optional::some(1));
        assert_eq!(nested.flatten(), Optional::some(1));
    }

    #[rstest]
    fn value_or_else_is_lazy() {
        assert_eq!(Optional::some(1).value_or_else(|| panic!("not called")), 1);
    }

    #[rstest]
    fn or_else_is_lazy_when_present() {
        let value = Optional::some(1).or_else(|| panic!("not called"));
        assert_eq!(value, Optional::some(1));
    }

    #[rstest]
    #[case(Optional::some(1), Optional::some(1))]
    #[case(Optional::none(), Optional::some(7))]
    fn or_value_fills_absence(#[case] input: Optional<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(input.or_value(7), expected);
    }

    #[rstest]
    fn zip_takes_argument_failure_when_receiver_present() {
        let left: Optional<i32, &str> = Optional::present(1);
        let right: Optional<i32, &str> = Optional::absent("right");
        assert_eq!(left.zip(right), Optional::absent("right"));
    }

    #[rstest]
    fn and_short_circuits_on_absent_receiver() {
        let left: Optional<i32, &str> = Optional::absent("left");
        assert_eq!(left.and(Optional::<&str, &str>::present("x")), Optional::absent("left"));
    }

    #[rstest]
    fn match_helpers_run_only_matching_branch() {
        let seen = Cell::new(0);
        let _ = Optional::some(3)
            .match_present(|n| seen.set(*n))
            .match_absent(|()| seen.set(-1));
        assert_eq!(seen.get(), 3);
    }

    #[rstest]
    fn filter_never_calls_predicate_when_absent() {
        let result = Optional::<i32>::none().filter(|_| panic!("not called"));
        assert_eq!(result, Optional::none());
    }
}
