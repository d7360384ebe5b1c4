//! Checked and panicking extraction of the present value.
//!
//! Absence is normally handled through the combinators. The functions here
//! cross back into plain values when the caller insists a value must exist:
//! the `value_or_failure` family reports a [`ValueMissing`] error, while
//! [`Optional::unwrap_value`] and [`Optional::expect_value`] panic.

use std::fmt::Debug;

use thiserror::Error;

use super::Optional;

/// Error returned when a value is extracted from an absent optional.
///
/// # Examples
///
/// ```rust
/// use optionals::optional::{Optional, ValueMissing};
///
/// let empty: Optional<i32> = Optional::none();
/// let error = empty.value_or_failure_with("config port").unwrap_err();
/// assert_eq!(error, ValueMissing::WithMessage("config port".to_string()));
/// assert_eq!(error.to_string(), "optional value is missing: config port");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueMissing {
    /// No message was supplied.
    #[error("optional value is missing")]
    Unspecified,
    /// A caller-supplied or computed message.
    #[error("optional value is missing: {0}")]
    WithMessage(String),
}

impl ValueMissing {
    /// Returns the message, if one was supplied.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Unspecified => None,
            Self::WithMessage(message) => Some(message.as_str()),
        }
    }
}

impl<T, E> Optional<T, E> {
    /// Returns the present value, or [`ValueMissing::Unspecified`].
    ///
    /// # Errors
    ///
    /// Returns [`ValueMissing`] if the optional is absent.
    #[inline]
    pub fn value_or_failure(self) -> Result<T, ValueMissing> {
        self.into_result().map_err(|_| ValueMissing::Unspecified)
    }

    /// Returns the present value, or a [`ValueMissing`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueMissing`] if the optional is absent.
    #[inline]
    pub fn value_or_failure_with(self, message: impl Into<String>) -> Result<T, ValueMissing> {
        self.into_result()
            .map_err(|_| ValueMissing::WithMessage(message.into()))
    }

    /// Returns the present value, or a [`ValueMissing`] whose message is
    /// derived from the failure by `formatter`.
    ///
    /// `formatter` runs only on an absent receiver.
    ///
    /// # Errors
    ///
    /// Returns [`ValueMissing`] if the optional is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let failed: Optional<i32, u16> = Optional::absent(404);
    /// let error = failed.value_or_failure_else(|code| format!("status {code}"));
    /// assert_eq!(error.unwrap_err().message(), Some("status 404"));
    /// ```
    #[inline]
    pub fn value_or_failure_else<M>(self, formatter: M) -> Result<T, ValueMissing>
    where
        M: FnOnce(E) -> String,
    {
        self.into_result()
            .map_err(|failure| ValueMissing::WithMessage(formatter(failure)))
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics with the [`ValueMissing`] message and the failure if the
    /// optional is absent.
    #[inline]
    #[track_caller]
    pub fn unwrap_value(self) -> T
    where
        E: Debug,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent(failure) => panic!("{}: {failure:?}", ValueMissing::Unspecified),
        }
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics with a [`ValueMissing`] carrying `message` if the optional is
    /// absent.
    #[inline]
    #[track_caller]
    pub fn expect_value(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent(_) => panic!("{}", ValueMissing::WithMessage(message.to_string())),
        }
    }
}
