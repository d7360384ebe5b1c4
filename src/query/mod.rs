//! Query-expression adapter.
//!
//! This module re-exposes the combinators under the names used by query
//! comprehensions:
//!
//! | Query name          | Combinator                      |
//! |---------------------|---------------------------------|
//! | `select`            | `map`                           |
//! | `select_many`       | `flat_map`                      |
//! | `select_many_with`  | `flat_map` followed by a projection |
//! | `where_`            | `filter`                        |
//!
//! The semantics are exactly those of the underlying combinators. The
//! [`query!`](crate::query!) macro provides the comprehension syntax on top
//! of them.
//!
//! # Examples
//!
//! ```rust
//! use optionals::optional::Optional;
//!
//! let total = Optional::some(2)
//!     .select_many_with(|x| Optional::some(x * 10), |x, y| x + y)
//!     .where_(|sum| *sum > 20)
//!     .select(|sum| sum.to_string());
//! assert_eq!(total, Optional::some("22".to_string()));
//! ```

mod linq;
mod query_macro;
