//! Lifting synchronous optionals and plain futures into `AsyncOptional`.

use std::future::Future;

use super::{AsyncOptional, SharedValue};
use crate::optional::Optional;

impl<T: SharedValue, E: SharedValue> Optional<T, E> {
    /// Wraps this optional as an already resolved [`AsyncOptional`].
    pub fn into_async(self) -> AsyncOptional<T, E> {
        AsyncOptional::from_optional(self)
    }

    /// Starts an asynchronous chain by mapping the present value through an
    /// async `function`.
    ///
    /// `function` is not invoked on an absent receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// # futures::executor::block_on(async {
    /// let doubled = Optional::some(21).map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(doubled, Optional::some(42));
    /// # });
    /// ```
    pub fn map_async<R, F, Fut>(self, function: F) -> AsyncOptional<R, E>
    where
        R: SharedValue,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        self.into_async().map_async(function)
    }

    /// Starts an asynchronous chain by binding the present value to an
    /// async step.
    pub fn flat_map_async<R, F, Fut>(self, function: F) -> AsyncOptional<R, E>
    where
        R: SharedValue,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Optional<R, E>> + Send + 'static,
    {
        self.into_async().flat_map_async(function)
    }
}

/// Extension for futures that produce an [`Optional`].
///
/// # Examples
///
/// ```rust
/// use optionals::async_optional::OptionalFutureExt;
/// use optionals::optional::Optional;
///
/// # futures::executor::block_on(async {
/// let lookup = async { Optional::some(7) };
/// let value = lookup.into_async_optional().map(|n| n + 1).await;
/// assert_eq!(value, Optional::some(8));
/// # });
/// ```
pub trait OptionalFutureExt<T, E>: Future<Output = Optional<T, E>> + Sized {
    /// Wraps the future so that optional combinators can be chained on it.
    fn into_async_optional(self) -> AsyncOptional<T, E>;
}

impl<F, T, E> OptionalFutureExt<T, E> for F
where
    F: Future<Output = Optional<T, E>> + Send + 'static,
    T: SharedValue,
    E: SharedValue,
{
    fn into_async_optional(self) -> AsyncOptional<T, E> {
        AsyncOptional::from_future(self)
    }
}
