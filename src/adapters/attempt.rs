//! Try-boundaries: the places where errors and panics enter the failure
//! channel.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use thiserror::Error;

use crate::optional::Optional;

/// Failure recorded when a computation run through [`catch_panic`] panics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("computation panicked: {message}")]
pub struct PanicFailure {
    message: String,
}

impl PanicFailure {
    /// The panic payload rendered as text.
    ///
    /// Payloads that are neither `&str` nor `String` are reported as
    /// `"unknown panic payload"`.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        Self { message }
    }
}

/// Runs a fallible computation, moving its error into the failure channel.
///
/// # Examples
///
/// ```rust
/// use optionals::adapters::attempt;
/// use optionals::optional::Optional;
///
/// let parsed = attempt(|| "12".parse::<i32>());
/// assert_eq!(parsed, Optional::present(12));
///
/// let failed = attempt(|| "x".parse::<i32>());
/// assert!(failed.is_absent());
/// ```
pub fn attempt<T, E, F>(computation: F) -> Optional<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    Optional::from_result(computation())
}

/// Runs `computation`, turning a panic into an absent optional.
///
/// The panic still reaches the installed panic hook. The payload message is
/// logged at debug level and kept in the [`PanicFailure`].
///
/// # Examples
///
/// ```rust
/// use optionals::adapters::catch_panic;
///
/// let result = catch_panic(|| -> i32 { panic!("boom") });
/// assert_eq!(result.into_failure().map(|failure| failure.message().to_string()),
///     Some("boom".to_string()));
///
/// assert_eq!(catch_panic(|| 1 + 1).value_or(0), 2);
/// ```
pub fn catch_panic<T, F>(computation: F) -> Optional<T, PanicFailure>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(value) => Optional::present(value),
        Err(payload) => {
            let failure = PanicFailure::from_payload(&*payload);
            tracing::debug!(message = failure.message(), "caught panic at try-boundary");
            Optional::absent(failure)
        }
    }
}
