//! # optionals
//!
//! An optional-value type for Rust that can carry a failure payload on
//! absence, together with a combinator algebra, query-comprehension syntax
//! and asynchronous composition.
//!
//! ## Overview
//!
//! - **Optional**: [`Optional<T, E>`](optional::Optional) is either
//!   `Present(T)` or `Absent(E)`. The failure-less shape `Optional<T>` uses
//!   `()` as its failure type.
//! - **Combinators**: map, flat-map, filter, fold (pattern matching),
//!   fallbacks and failure-channel transformations.
//! - **Query syntax**: `select`, `select_many`, `where_` and the
//!   [`query!`] macro.
//! - **Async**: [`AsyncOptional`](async_optional::AsyncOptional) chains
//!   combinators over a deferred computation that runs exactly once.
//! - **Adapters**: parsing, collection lookup and try-boundaries that
//!   produce optionals instead of sentinels or panics.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor, Applicative, Monad, Foldable, Semigroup, Monoid
//! - `query`: `select`/`select_many`/`where_` and the `query!` macro
//! - `async`: `AsyncOptional`
//! - `serde`: serialization support for `Optional`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optionals::prelude::*;
//!
//! let total = parse::<i32>("40")
//!     .flat_map(|value| parse::<i32>("2").map(|other| value + other))
//!     .filter(|sum| *sum > 0)
//!     .value_or(0);
//! assert_eq!(total, 42);
//!
//! let missing: Optional<i32, String> = Optional::absent("no input".to_string());
//! let described = missing.map(|value| value + 1).fold(
//!     |value| format!("got {value}"),
//!     |failure| format!("failed: {failure}"),
//! );
//! assert_eq!(described, "failed: no input");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use optionals::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapters::*;
    pub use crate::optional::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::async_optional::*;
}

pub mod adapters;
pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "query")]
pub mod query;

#[cfg(feature = "async")]
pub mod async_optional;
