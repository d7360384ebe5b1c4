//! Type class traits implemented by [`Optional`](crate::optional::Optional).
//!
//! These traits let generic code treat an optional like any other
//! container:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over the present value
//! - [`Applicative`]: Lifting values and combining independent optionals
//! - [`Monad`]: Sequencing dependent steps
//! - [`Foldable`]: Folding the zero-or-one present value
//! - [`Semigroup`] and [`Monoid`]: Combining optionals whose values combine
//!
//! # Failure Precedence
//!
//! Wherever two failure-bearing optionals are combined (`map2`, `combine`),
//! the receiver is inspected first, so the receiver's failure wins when both
//! are absent.
//!
//! # Examples
//!
//! ```rust
//! use optionals::optional::Optional;
//! use optionals::typeclass::{Applicative, Semigroup};
//!
//! let sum = Optional::some(1).map2(Optional::some(2), |a, b| a + b);
//! assert_eq!(sum, Optional::some(3));
//!
//! let greeting = Optional::some("Hello, ".to_string())
//!     .combine(Optional::some("World!".to_string()));
//! assert_eq!(greeting, Optional::some("Hello, World!".to_string()));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
