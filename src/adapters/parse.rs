//! Parsing text into optionals.

use std::str::FromStr;

use crate::optional::Optional;

/// Parses `text` as `T`, yielding an absent optional when parsing fails.
///
/// The input is not trimmed; it must be exactly what `T::from_str` accepts.
///
/// # Examples
///
/// ```rust
/// use optionals::adapters::parse;
/// use optionals::optional::Optional;
///
/// assert_eq!(parse::<i32>("42"), Optional::some(42));
/// assert_eq!(parse::<i32>("abc"), Optional::none());
/// assert_eq!(parse::<i32>(" 42"), Optional::none());
/// ```
pub fn parse<T: FromStr>(text: &str) -> Optional<T> {
    text.parse().ok().into()
}

/// Parses `text` as `T`, keeping the parse error as the failure.
///
/// # Examples
///
/// ```rust
/// use optionals::adapters::parse_or_failure;
///
/// let failed = parse_or_failure::<u8>("300");
/// assert!(failed.is_absent());
/// assert_eq!(parse_or_failure::<u8>("30").value_or(0), 30);
/// ```
pub fn parse_or_failure<T: FromStr>(text: &str) -> Optional<T, T::Err> {
    Optional::from_result(text.parse())
}

/// Method-call form of [`parse`] and [`parse_or_failure`].
pub trait ParseOptional {
    /// See [`parse`].
    fn parse_optional<T: FromStr>(&self) -> Optional<T>;

    /// See [`parse_or_failure`].
    fn parse_optional_or_failure<T: FromStr>(&self) -> Optional<T, T::Err>;
}

impl ParseOptional for str {
    fn parse_optional<T: FromStr>(&self) -> Optional<T> {
        parse(self)
    }

    fn parse_optional_or_failure<T: FromStr>(&self) -> Optional<T, T::Err> {
        parse_or_failure(self)
    }
}
