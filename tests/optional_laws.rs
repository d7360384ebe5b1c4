//! Property-based tests for the combinator algebra.
//!
//! - **Left Identity**: `Optional::some(v).flat_map(f) == f(v)`
//! - **Right Identity**: `opt.flat_map(Optional::some) == opt`
//! - **Associativity**: `opt.flat_map(f).flat_map(g) == opt.flat_map(|x| f(x).flat_map(g))`
//! - **Filter Idempotence**: `opt.filter(p).filter(p) == opt.filter(p)`
//! - **Fallbacks**: `value_or` returns the value when present and the default
//!   otherwise
//! - **Ordering**: absent orders before every present value

use optionals::optional::Optional;
use proptest::prelude::*;

fn optional_strategy() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from_option)
}

fn failing_strategy() -> impl Strategy<Value = Optional<i32, u8>> {
    prop_oneof![
        any::<i32>().prop_map(Optional::<i32, u8>::present),
        any::<u8>().prop_map(Optional::<i32, u8>::absent),
    ]
}

fn halve(value: i32) -> Optional<i32> {
    Optional::some_when(value / 2, |_| value % 2 == 0)
}

fn non_negative(value: i32) -> Optional<i32> {
    Optional::some_when(value, |n| *n >= 0)
}

fn checked_double(value: i32) -> Optional<i32, u8> {
    value.checked_mul(2).map_or(Optional::absent(u8::MAX), Optional::present)
}

fn checked_increment(value: i32) -> Optional<i32, u8> {
    value.checked_add(1).map_or(Optional::absent(0), Optional::present)
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Optional::some(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_right_identity(optional in optional_strategy()) {
        prop_assert_eq!(optional.flat_map(Optional::some), optional);
    }

    #[test]
    fn prop_right_identity_with_failure(optional in failing_strategy()) {
        prop_assert_eq!(optional.flat_map(Optional::present), optional);
    }

    #[test]
    fn prop_associativity(optional in optional_strategy()) {
        let left = optional.flat_map(halve).flat_map(non_negative);
        let right = optional.flat_map(|x| halve(x).flat_map(non_negative));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_associativity_with_failure(optional in failing_strategy()) {
        let left = optional.flat_map(checked_double).flat_map(checked_increment);
        let right = optional.flat_map(|x| checked_double(x).flat_map(checked_increment));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Map and Filter
// =============================================================================

proptest! {
    #[test]
    fn prop_map_then_fold_applies_function(value in any::<i32>()) {
        let mapped = Optional::some(value).map(|n| n.wrapping_mul(3));
        prop_assert_eq!(mapped.fold(|n| n, |()| unreachable!()), value.wrapping_mul(3));
    }

    #[test]
    fn prop_map_identity(optional in failing_strategy()) {
        prop_assert_eq!(optional.map(|x| x), optional);
    }

    #[test]
    fn prop_map_composition(optional in failing_strategy()) {
        let first = |n: i32| n.wrapping_add(7);
        let second = |n: i32| n.wrapping_mul(-2);
        prop_assert_eq!(optional.map(first).map(second), optional.map(|n| second(first(n))));
    }

    #[test]
    fn prop_filter_idempotent(optional in optional_strategy(), threshold in any::<i32>()) {
        let predicate = |n: &i32| *n > threshold;
        prop_assert_eq!(optional.filter(predicate).filter(predicate), optional.filter(predicate));
    }

    #[test]
    fn prop_filter_or_idempotent(optional in failing_strategy(), threshold in any::<i32>()) {
        let predicate = |n: &i32| *n > threshold;
        prop_assert_eq!(
            optional.filter_or(predicate, 1).filter_or(predicate, 2),
            optional.filter_or(predicate, 1)
        );
    }
}

// =============================================================================
// Fallbacks and Ordering
// =============================================================================

proptest! {
    #[test]
    fn prop_value_or(optional in optional_strategy(), default in any::<i32>()) {
        let expected = optional.into_present().unwrap_or(default);
        prop_assert_eq!(optional.value_or(default), expected);
    }

    #[test]
    fn prop_or_is_associative(
        first in optional_strategy(),
        second in optional_strategy(),
        third in optional_strategy()
    ) {
        prop_assert_eq!(first.or(second).or(third), first.or(second.or(third)));
    }

    #[test]
    fn prop_absent_orders_first(value in any::<i32>()) {
        prop_assert!(Optional::<i32>::none() < Optional::some(value));
    }

    #[test]
    fn prop_ordering_follows_std_option(left in any::<Option<i32>>(), right in any::<Option<i32>>()) {
        prop_assert_eq!(
            Optional::from_option(left).cmp(&Optional::from_option(right)),
            left.cmp(&right)
        );
    }
}
