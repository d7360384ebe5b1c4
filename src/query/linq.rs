//! `select` / `select_many` / `where_` for `Optional` and `AsyncOptional`.

use crate::optional::Optional;

impl<T, E> Optional<T, E> {
    /// Query name for [`Optional::map`].
    #[inline]
    pub fn select<R, F>(self, selector: F) -> Optional<R, E>
    where
        F: FnOnce(T) -> R,
    {
        self.map(selector)
    }

    /// Query name for [`Optional::flat_map`].
    #[inline]
    pub fn select_many<R, F>(self, selector: F) -> Optional<R, E>
    where
        F: FnOnce(T) -> Optional<R, E>,
    {
        self.flat_map(selector)
    }

    /// Binds an intermediate optional and projects both values into the
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let start: Optional<i32, &str> = Optional::present(1);
    /// let result = start.select_many_with(|_| Optional::<i32, &str>::absent("inner"), |a, b| a + b);
    /// assert_eq!(result, Optional::absent("inner"));
    /// ```
    #[inline]
    pub fn select_many_with<U, R, F, P>(self, selector: F, projector: P) -> Optional<R, E>
    where
        T: Clone,
        F: FnOnce(T) -> Optional<U, E>,
        P: FnOnce(T, U) -> R,
    {
        self.flat_map(|value| {
            selector(value.clone()).map(|intermediate| projector(value, intermediate))
        })
    }

    /// Query name for [`Optional::filter_or`].
    #[inline]
    pub fn where_or<P>(self, predicate: P, failure: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter_or(predicate, failure)
    }

    /// Query name for [`Optional::filter_or_else`].
    #[inline]
    pub fn where_or_else<P, G>(self, predicate: P, factory: G) -> Self
    where
        P: FnOnce(&T) -> bool,
        G: FnOnce() -> E,
    {
        self.filter_or_else(predicate, factory)
    }
}

impl<T> Optional<T> {
    /// Query name for [`Optional::filter`].
    #[inline]
    pub fn where_<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(predicate)
    }
}

#[cfg(feature = "async")]
mod asynchronous {
    use std::future::Future;

    use crate::async_optional::{AsyncOptional, SharedValue};
    use crate::optional::Optional;

    impl<T: SharedValue, E: SharedValue> AsyncOptional<T, E> {
        /// Query name for [`AsyncOptional::map`].
        pub fn select<R, F>(self, selector: F) -> AsyncOptional<R, E>
        where
            R: SharedValue,
            F: FnOnce(T) -> R + Send + 'static,
        {
            self.map(selector)
        }

        /// Query name for [`AsyncOptional::flat_map_async`].
        ///
        /// The selector may return another `AsyncOptional` or any future of
        /// an optional.
        pub fn select_many<R, F, Fut>(self, selector: F) -> AsyncOptional<R, E>
        where
            R: SharedValue,
            F: FnOnce(T) -> Fut + Send + 'static,
            Fut: Future<Output = Optional<R, E>> + Send + 'static,
        {
            self.flat_map_async(selector)
        }

        /// Query name for [`AsyncOptional::filter_or`].
        pub fn where_or<P>(self, predicate: P, failure: E) -> Self
        where
            P: FnOnce(&T) -> bool + Send + 'static,
        {
            self.filter_or(predicate, failure)
        }

        /// Query name for [`AsyncOptional::filter_or_else`].
        pub fn where_or_else<P, G>(self, predicate: P, factory: G) -> Self
        where
            P: FnOnce(&T) -> bool + Send + 'static,
            G: FnOnce() -> E + Send + 'static,
        {
            self.filter_or_else(predicate, factory)
        }
    }

    impl<T: SharedValue> AsyncOptional<T> {
        /// Query name for [`AsyncOptional::filter`].
        pub fn where_<P>(self, predicate: P) -> Self
        where
            P: FnOnce(&T) -> bool + Send + 'static,
        {
            self.filter(predicate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn select_matches_map() {
        assert_eq!(Optional::some(2).select(|n| n + 1), Optional::some(2).map(|n| n + 1));
    }

    #[rstest]
    fn select_many_matches_flat_map() {
        let step = |n: i32| Optional::some_when(n, |n| *n > 1);
        assert_eq!(Optional::some(2).select_many(step), Optional::some(2).flat_map(step));
        assert_eq!(Optional::some(1).select_many(step), Optional::none());
    }

    #[rstest]
    fn where_or_supplies_failure() {
        let value: Optional<i32, &str> = Optional::present(1);
        assert_eq!(value.where_or(|n| *n > 1, "too small"), Optional::absent("too small"));
    }

    #[rstest]
    fn where_or_else_only_builds_failure_on_rejection() {
        let kept: Optional<i32, String> =
            Optional::present(5).where_or_else(|n| *n > 1, || -> String { panic!("not called") });
        assert_eq!(kept, Optional::present(5));

        let rejected: Optional<i32, String> =
            Optional::present(0).where_or_else(|n| *n > 1, || "zero".to_string());
        assert_eq!(rejected, Optional::absent("zero".to_string()));
    }

    #[rstest]
    fn select_many_with_skips_projector_on_absent_receiver() {
        let result = Optional::<i32>::none()
            .select_many_with(|_| Optional::some(1), |_, _: i32| -> i32 { panic!("not called") });
        assert_eq!(result, Optional::none());
    }
}
