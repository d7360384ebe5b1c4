//! Operations on the failure channel and conversions between the two shapes.

use super::Optional;

impl<T, E> Optional<T, E> {
    /// Transforms the failure of an absent optional, leaving a present value
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let failed: Optional<i32, &str> = Optional::absent("oops");
    /// assert_eq!(failed.map_failure(str::len), Optional::absent(4));
    ///
    /// let present: Optional<i32, &str> = Optional::present(1);
    /// assert_eq!(present.map_failure(str::len), Optional::present(1));
    /// ```
    #[inline]
    pub fn map_failure<F2, G>(self, function: G) -> Optional<T, F2>
    where
        G: FnOnce(E) -> F2,
    {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent(failure) => Optional::Absent(function(failure)),
        }
    }

    /// Chains into a failure-less optional, supplying `failure` for the case
    /// where the chained step comes back empty.
    ///
    /// An absent receiver keeps its own failure; `failure` is only used when
    /// the receiver is present and `function` returns an empty optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let lookup = |key: i32| Optional::some_when(key * 10, |_| key > 0);
    ///
    /// let found: Optional<i32, &str> = Optional::present(2);
    /// assert_eq!(found.flat_map_or(lookup, "no entry"), Optional::present(20));
    ///
    /// let missing: Optional<i32, &str> = Optional::present(-1);
    /// assert_eq!(missing.flat_map_or(lookup, "no entry"), Optional::absent("no entry"));
    ///
    /// let failed: Optional<i32, &str> = Optional::absent("bad key");
    /// assert_eq!(failed.flat_map_or(lookup, "no entry"), Optional::absent("bad key"));
    /// ```
    #[inline]
    pub fn flat_map_or<R, F>(self, function: F, failure: E) -> Optional<R, E>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        self.flat_map(|value| function(value).with_failure(failure))
    }

    /// Like [`Optional::flat_map_or`], but the failure is only computed when
    /// the chained step comes back empty.
    #[inline]
    pub fn flat_map_or_else<R, F, G>(self, function: F, factory: G) -> Optional<R, E>
    where
        F: FnOnce(T) -> Optional<R>,
        G: FnOnce() -> E,
    {
        self.flat_map(|value| function(value).with_failure_else(factory))
    }

    /// Keeps the present value only if `predicate` holds, otherwise becomes
    /// absent with `failure`.
    ///
    /// An absent receiver is returned unchanged.
    #[inline]
    pub fn filter_or<P>(self, predicate: P, failure: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter_or_else(predicate, || failure)
    }

    /// Like [`Optional::filter_or`], but the failure is only computed when
    /// the predicate rejects the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let even: Optional<i32, String> = Optional::present(3)
    ///     .filter_or_else(|n| n % 2 == 0, || "odd".to_string());
    /// assert_eq!(even, Optional::absent("odd".to_string()));
    /// ```
    pub fn filter_or_else<P, G>(self, predicate: P, factory: G) -> Self
    where
        P: FnOnce(&T) -> bool,
        G: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent(factory())
                }
            }
            Self::Absent(_) => self,
        }
    }

    /// Discards the failure, producing the failure-less shape.
    #[inline]
    pub fn without_failure(self) -> Optional<T> {
        self.map_failure(|_| ())
    }
}

impl<T> Optional<T> {
    /// Attaches `failure` to an absent optional, producing the
    /// failure-bearing shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let empty: Optional<i32> = Optional::none();
    /// assert_eq!(empty.with_failure("missing"), Optional::absent("missing"));
    /// ```
    #[inline]
    pub fn with_failure<E>(self, failure: E) -> Optional<T, E> {
        self.map_failure(|()| failure)
    }

    /// Attaches a failure computed by `factory` to an absent optional.
    ///
    /// `factory` is not invoked when a value is present.
    #[inline]
    pub fn with_failure_else<E, G>(self, factory: G) -> Optional<T, E>
    where
        G: FnOnce() -> E,
    {
        self.map_failure(|()| factory())
    }
}
