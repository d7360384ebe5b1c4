//! `AsyncOptional` - combinators over a deferred optional computation.
//!
//! An [`AsyncOptional<T, E>`] wraps a future that will produce an
//! [`Optional<T, E>`]. It re-exposes the combinator algebra so that chains
//! can mix synchronous and asynchronous steps without awaiting intermediate
//! results by hand.
//!
//! # Exactly-once Execution
//!
//! The wrapped future is held in a [`Shared`] completion cell. Every
//! combinator registers a new continuation on that cell instead of
//! re-creating the work, so the original computation runs at most once no
//! matter how many combinators are chained or how many clones of the final
//! result are awaited.
//!
//! # Ordering
//!
//! In `a.map(f).flat_map(g)`, `f` completes before `g` starts, and `g` runs
//! at most once and only if the intermediate result is present.
//!
//! # Execution Model
//!
//! `AsyncOptional` never spawns. It is driven by whichever executor awaits
//! it, and it introduces no cancellation or timeout of its own; dropping
//! every handle simply stops polling the wrapped future.
//!
//! # Examples
//!
//! ```rust
//! use optionals::async_optional::AsyncOptional;
//! use optionals::optional::Optional;
//!
//! # futures::executor::block_on(async {
//! let result = AsyncOptional::from_future(async { Optional::some(20) })
//!     .map(|n| n + 1)
//!     .flat_map_async(|n| async move { Optional::some(n * 2) })
//!     .await;
//! assert_eq!(result, Optional::some(42));
//! # });
//! ```

mod lift;

use std::fmt;
use std::future::Future;
use std::panic::{AssertUnwindSafe, resume_unwind};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::adapters::PanicFailure;
use crate::optional::Optional;

pub use lift::OptionalFutureExt;

/// Values that can flow through an [`AsyncOptional`].
///
/// The shared completion cell hands a clone of the result to every observer
/// and may be observed from any thread.
pub trait SharedValue: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> SharedValue for T {}

/// Outcome stored in the completion cell. A panic in the wrapped future is
/// recorded instead of poisoning the cell, and re-raised on every await.
type Resolution<T, E> = Result<Optional<T, E>, PanicFailure>;

enum State<T, E> {
    Ready(Optional<T, E>),
    Pending(Shared<BoxFuture<'static, Resolution<T, E>>>),
}

// =============================================================================
// AsyncOptional Struct Definition
// =============================================================================

/// A deferred computation producing an [`Optional<T, E>`].
///
/// `AsyncOptional` implements `Future`, so it can be awaited directly and can
/// be returned from an async continuation. Cloning it shares the underlying
/// computation; awaiting any number of clones yields the same result.
///
/// If the wrapped future panics, every await of it (or of anything chained
/// on it) panics with the same message.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
/// * `E` - The type of the failure carried by an absent value
#[must_use = "async optionals do nothing unless awaited"]
pub struct AsyncOptional<T, E = ()> {
    state: State<T, E>,
}

// The resolved value is never pinned structurally: polling clones it out.
impl<T, E> Unpin for AsyncOptional<T, E> {}

impl<T: Clone, E: Clone> Clone for AsyncOptional<T, E> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            State::Ready(value) => State::Ready(value.clone()),
            State::Pending(shared) => State::Pending(shared.clone()),
        };
        Self { state }
    }
}

impl<T, E> Future for AsyncOptional<T, E>
where
    T: Clone,
    E: Clone,
{
    type Output = Optional<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            State::Ready(value) => Poll::Ready(value.clone()),
            State::Pending(shared) => match shared.poll_unpin(context) {
                Poll::Ready(Ok(value)) => Poll::Ready(value),
                Poll::Ready(Err(failure)) => resume_unwind(Box::new(failure.message().to_string())),
                Poll::Pending => Poll::Pending,
            },
        }
    }
}

impl<T, E> fmt::Debug for AsyncOptional<T, E>
where
    T: fmt::Debug + Clone,
    E: fmt::Debug + Clone,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = match &self.state {
            State::Ready(value) => Some(Ok(value)),
            State::Pending(shared) => shared.peek().map(Result::as_ref),
        };
        match resolved {
            Some(Ok(value)) => formatter.debug_tuple("AsyncOptional").field(value).finish(),
            Some(Err(_)) => formatter.write_str("AsyncOptional(<poisoned>)"),
            None => formatter.write_str("AsyncOptional(<pending>)"),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T: SharedValue, E: SharedValue> AsyncOptional<T, E> {
    /// Wraps a future that produces an optional.
    ///
    /// The future is not polled until the `AsyncOptional` (or something
    /// derived from it) is awaited.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Optional<T, E>> + Send + 'static,
    {
        let resolving = async move {
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(resolved) => {
                    tracing::trace!(present = resolved.is_present(), "async optional resolved");
                    Ok(resolved)
                }
                Err(payload) => {
                    let failure = PanicFailure::from_payload(&*payload);
                    tracing::debug!(message = failure.message(), "async optional source panicked");
                    Err(failure)
                }
            }
        };
        Self {
            state: State::Pending(resolving.boxed().shared()),
        }
    }

    /// Wraps an already available optional.
    ///
    /// The result is resolved immediately: [`AsyncOptional::peek`] sees it
    /// before any await.
    pub const fn from_optional(value: Optional<T, E>) -> Self {
        Self {
            state: State::Ready(value),
        }
    }

    /// Creates an already resolved present value.
    pub const fn present(value: T) -> Self {
        Self::from_optional(Optional::Present(value))
    }

    /// Creates an already resolved absent value carrying `failure`.
    pub const fn absent(failure: E) -> Self {
        Self::from_optional(Optional::Absent(failure))
    }

    /// Returns the result if the computation has already completed.
    ///
    /// Does not poll or block, and does not panic. Returns `None` while the
    /// computation is pending and after it has panicked.
    pub fn peek(&self) -> Option<&Optional<T, E>> {
        match &self.state {
            State::Ready(value) => Some(value),
            State::Pending(shared) => shared.peek().and_then(|resolution| resolution.as_ref().ok()),
        }
    }

    // =========================================================================
    // Functor / Monad Operations
    // =========================================================================

    /// Applies `function` to the eventual present value.
    pub fn map<R, F>(self, function: F) -> AsyncOptional<R, E>
    where
        R: SharedValue,
        F: FnOnce(T) -> R + Send + 'static,
    {
        AsyncOptional::from_future(async move { self.await.map(function) })
    }

    /// Applies an asynchronous `function` to the eventual present value and
    /// awaits its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::async_optional::AsyncOptional;
    /// use optionals::optional::Optional;
    ///
    /// # futures::executor::block_on(async {
    /// let length = AsyncOptional::some("four".to_string())
    ///     .map_async(|s| async move { s.len() })
    ///     .await;
    /// assert_eq!(length, Optional::some(4));
    /// # });
    /// ```
    pub fn map_async<R, F, Fut>(self, function: F) -> AsyncOptional<R, E>
    where
        R: SharedValue,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        AsyncOptional::from_future(async move {
            match self.await {
                Optional::Present(value) => Optional::Present(function(value).await),
                Optional::Absent(failure) => Optional::Absent(failure),
            }
        })
    }

    /// Transforms the failure of an eventual absent value.
    pub fn map_failure<F2, G>(self, function: G) -> AsyncOptional<T, F2>
    where
        F2: SharedValue,
        G: FnOnce(E) -> F2 + Send + 'static,
    {
        AsyncOptional::from_future(async move { self.await.map_failure(function) })
    }

    /// Chains a synchronous step on the eventual present value.
    pub fn flat_map<R, F>(self, function: F) -> AsyncOptional<R, E>
    where
        R: SharedValue,
        F: FnOnce(T) -> Optional<R, E> + Send + 'static,
    {
        AsyncOptional::from_future(async move { self.await.flat_map(function) })
    }

    /// Chains an asynchronous step on the eventual present value.
    ///
    /// `function` may return any future of an optional, including another
    /// `AsyncOptional`. It is not invoked when the receiver resolves absent.
    pub fn flat_map_async<R, F, Fut>(self, function: F) -> AsyncOptional<R, E>
    where
        R: SharedValue,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Optional<R, E>> + Send + 'static,
    {
        AsyncOptional::from_future(async move {
            match self.await {
                Optional::Present(value) => function(value).await,
                Optional::Absent(failure) => Optional::Absent(failure),
            }
        })
    }

    /// Chains a failure-less step, supplying `failure` for an empty result.
    pub fn flat_map_or<R, F>(self, function: F, failure: E) -> AsyncOptional<R, E>
    where
        R: SharedValue,
        F: FnOnce(T) -> Optional<R> + Send + 'static,
    {
        AsyncOptional::from_future(async move { self.await.flat_map_or(function, failure) })
    }

    /// Like [`AsyncOptional::flat_map_or`], but `factory` only runs when the
    /// chained step comes back empty.
    pub fn flat_map_or_else<R, F, G>(self, function: F, factory: G) -> AsyncOptional<R, E>
    where
        R: SharedValue,
        F: FnOnce(T) -> Optional<R> + Send + 'static,
        G: FnOnce() -> E + Send + 'static,
    {
        AsyncOptional::from_future(async move { self.await.flat_map_or_else(function, factory) })
    }

    /// Keeps the eventual value only if `predicate` holds, otherwise becomes
    /// absent with `failure`.
    pub fn filter_or<P>(self, predicate: P, failure: E) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::from_future(async move { self.await.filter_or(predicate, failure) })
    }

    /// Like [`AsyncOptional::filter_or`], but `factory` only runs when the
    /// predicate rejects the value.
    pub fn filter_or_else<P, G>(self, predicate: P, factory: G) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
        G: FnOnce() -> E + Send + 'static,
    {
        Self::from_future(async move { self.await.filter_or_else(predicate, factory) })
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Falls back to `alternative` if the receiver resolves absent.
    pub fn or(self, alternative: Optional<T, E>) -> Self {
        Self::from_future(async move { self.await.or(alternative) })
    }

    /// Falls back to the optional produced by `factory` if the receiver
    /// resolves absent.
    pub fn or_else<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> Optional<T, E> + Send + 'static,
    {
        Self::from_future(async move { self.await.or_else(factory) })
    }

    /// Falls back to an asynchronously produced optional if the receiver
    /// resolves absent. `factory` is not invoked otherwise.
    pub fn or_else_async<F, Fut>(self, factory: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Optional<T, E>> + Send + 'static,
    {
        Self::from_future(async move {
            match self.await {
                present @ Optional::Present(_) => present,
                Optional::Absent(_) => factory().await,
            }
        })
    }

    /// Discards the failure, producing the failure-less shape.
    pub fn without_failure(self) -> AsyncOptional<T> {
        AsyncOptional::from_future(async move { self.await.without_failure() })
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Awaits the result.
    pub async fn resolve(self) -> Optional<T, E> {
        self.await
    }

    /// Awaits the result and performs case analysis on it.
    pub async fn fold<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce(E) -> R,
    {
        self.await.fold(on_present, on_absent)
    }

    /// Awaits the result, returning `default` if absent.
    pub async fn value_or(self, default: T) -> T {
        self.await.value_or(default)
    }

    /// Awaits the result, computing a fallback only if absent.
    pub async fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.value_or_else(factory)
    }

    /// Awaits a clone of the result and reports whether a value is present.
    pub async fn is_present(&self) -> bool {
        self.clone().await.is_present()
    }
}

impl<T: SharedValue> AsyncOptional<T> {
    /// Creates an already resolved present value.
    pub const fn some(value: T) -> Self {
        Self::present(value)
    }

    /// Creates an already resolved absent value.
    pub fn none() -> Self {
        Self::absent(())
    }

    /// Keeps the eventual value only if `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::from_future(async move { self.await.filter(predicate) })
    }

    /// Attaches `failure` to an eventual absent value.
    pub fn with_failure<E: SharedValue>(self, failure: E) -> AsyncOptional<T, E> {
        AsyncOptional::from_future(async move { self.await.with_failure(failure) })
    }

    /// Attaches the failure produced by `factory` to an eventual absent
    /// value. `factory` is not invoked when the value is present.
    pub fn with_failure_else<E, G>(self, factory: G) -> AsyncOptional<T, E>
    where
        E: SharedValue,
        G: FnOnce() -> E + Send + 'static,
    {
        AsyncOptional::from_future(async move { self.await.with_failure_else(factory) })
    }
}

impl<T: SharedValue, E: SharedValue> From<Optional<T, E>> for AsyncOptional<T, E> {
    fn from(value: Optional<T, E>) -> Self {
        Self::from_optional(value)
    }
}
