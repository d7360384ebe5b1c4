//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_, E>`
//! directly. [`TypeConstructor`] names the applied type (`Inner`) and the
//! same constructor applied to another type (`WithType<B>`), which is enough
//! to state the signatures of `Functor`, `Applicative` and `Monad`.
//!
//! # Example
//!
//! ```rust
//! use optionals::optional::Optional;
//! use optionals::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let cleared: Optional<String> = reset(Optional::some(42));
//! assert!(cleared.is_absent());
//! ```

use crate::optional::Optional;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// For `Optional<T, E>`, the failure type is part of the constructor:
/// `WithType<B>` is `Optional<B, E>`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T, E> TypeConstructor for Optional<T, E> {
    type Inner = T;
    type WithType<B> = Optional<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Optional<i32>>();
        assert_inner::<Optional<i32, String>>();
    }

    #[rstest]
    fn with_type_keeps_failure_type() {
        fn assert_same<T>(_: T, _: T) {}
        let converted: <Optional<i32, String> as TypeConstructor>::WithType<bool> =
            Optional::absent("kept".to_string());
        assert_same(converted, Optional::<bool, String>::present(true));
    }
}
