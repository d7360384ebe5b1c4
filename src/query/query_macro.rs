//! Comprehension syntax over optionals.
//!
//! The [`query!`] macro writes a chain of dependent optional steps in a flat,
//! declarative style. It works with anything exposing `select` and
//! `select_many`: [`Optional`](crate::optional::Optional) and, without
//! guards, [`AsyncOptional`](crate::async_optional::AsyncOptional).
//!
//! # Syntax
//!
//! ```text
//! query! {
//!     pattern <= source;        // Bind: continue with the present value
//!     let pattern = expression; // Pure let binding
//!     where condition;          // Guard: absent unless condition holds
//!     yield expression          // Final value
//! }
//! ```
//!
//! # Expansion
//!
//! - `x <= source; yield e` expands to `source.select(move |x| e)`.
//! - `x <= source; rest` expands to `source.select_many(move |x| query!(rest))`.
//! - `where c; rest` expands to `if c { query!(rest) } else { Optional::none() }`,
//!   so guards are only available on failure-less synchronous optionals.
//! - A lone `yield e` expands to `Optional::present(e)`.
//!
//! # Examples
//!
//! ```rust
//! use optionals::adapters::parse;
//! use optionals::query;
//!
//! let area = query! {
//!     width <= parse::<u32>("6");
//!     height <= parse::<u32>("7");
//!     let area = width * height;
//!     where area > 10;
//!     yield area
//! };
//! assert_eq!(area, parse::<u32>("42"));
//!
//! let missing = query! {
//!     width <= parse::<u32>("6");
//!     height <= parse::<u32>("seven");
//!     yield width * height
//! };
//! assert!(missing.is_absent());
//! ```

/// Comprehension syntax for chains of optional steps.
///
/// See the [module documentation](crate::query) for the full syntax.
///
/// # Examples
///
/// ## Failure-bearing chain
///
/// ```rust
/// use optionals::optional::Optional;
/// use optionals::query;
///
/// fn lookup(key: &str) -> Optional<i32, String> {
///     match key {
///         "a" => Optional::present(1),
///         "b" => Optional::present(2),
///         other => Optional::absent(format!("unknown key {other}")),
///     }
/// }
///
/// let sum = query! {
///     a <= lookup("a");
///     b <= lookup("b");
///     yield a + b
/// };
/// assert_eq!(sum, Optional::present(3));
///
/// let failed = query! {
///     a <= lookup("a");
///     z <= lookup("z");
///     yield a + z
/// };
/// assert_eq!(failed, Optional::absent("unknown key z".to_string()));
/// ```
///
/// ## Tuple pattern
///
/// ```rust
/// use optionals::optional::Optional;
/// use optionals::query;
///
/// let swapped = query! {
///     (left, right) <= Optional::some((1, "one"));
///     yield (right, left)
/// };
/// assert_eq!(swapped, Optional::some(("one", 1)));
/// ```
#[macro_export]
macro_rules! query {
    // ==========================================================================
    // Terminal case: yield wraps the result in a present optional
    // ==========================================================================

    (yield $result:expr) => {
        $crate::optional::Optional::present($result)
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::query!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::query!($($rest)+)
    }};

    // ==========================================================================
    // Guard: where condition; rest
    // ==========================================================================

    (where $condition:expr ; $($rest:tt)+) => {
        if $condition {
            $crate::query!($($rest)+)
        } else {
            $crate::optional::Optional::none()
        }
    };

    // ==========================================================================
    // Final bind: pattern <= source; yield expression
    // ==========================================================================

    ($pattern:ident <= $source:expr ; yield $result:expr) => {
        ($source).select(move |$pattern| $result)
    };

    (($($pattern:tt)*) <= $source:expr ; yield $result:expr) => {
        ($source).select(move |($($pattern)*)| $result)
    };

    (_ <= $source:expr ; yield $result:expr) => {
        ($source).select(move |_| $result)
    };

    // ==========================================================================
    // Bind: pattern <= source; rest
    // ==========================================================================

    ($pattern:ident <= $source:expr ; $($rest:tt)+) => {
        ($source).select_many(move |$pattern| $crate::query!($($rest)+))
    };

    (($($pattern:tt)*) <= $source:expr ; $($rest:tt)+) => {
        ($source).select_many(move |($($pattern)*)| $crate::query!($($rest)+))
    };

    (_ <= $source:expr ; $($rest:tt)+) => {
        ($source).select_many(move |_| $crate::query!($($rest)+))
    };
}
