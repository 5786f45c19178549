#![cfg(feature = "decorator")]
//! Property-based tests for memoization laws.
//!
//! This module verifies that `memoize` satisfies:
//!
//! - **At Most Once Per Key**: the wrapped function runs once per distinct key
//! - **Transparency**: memoized results equal direct results
//! - **Key Stability**: equal arguments always produce equal cache keys

use combinars::decorator::{CacheKey, Memoized, memoize};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::BTreeSet;

proptest! {
    /// The number of invocations equals the number of distinct arguments
    #[test]
    fn prop_memoize_once_per_key(arguments in prop::collection::vec(0_i32..20, 0..100)) {
        let calls = Cell::new(0_usize);
        let memoized = Memoized::new(|value: i32| {
            calls.set(calls.get() + 1);
            value
        });

        for argument in &arguments {
            memoized.call(*argument);
        }

        let distinct: BTreeSet<i32> = arguments.iter().copied().collect();
        prop_assert_eq!(calls.get(), distinct.len());
        prop_assert_eq!(memoized.len(), distinct.len());
    }

    /// Memoized results equal what the wrapped function returns directly
    #[test]
    fn prop_memoize_transparency(arguments in prop::collection::vec(any::<u32>(), 0..50)) {
        let function = |value: u32| value.rotate_left(7) ^ 0x5555;
        let memoized = memoize(function);

        for argument in arguments {
            prop_assert_eq!(memoized(argument), function(argument));
            prop_assert_eq!(memoized(argument), function(argument));
        }
    }

    /// Equal strings produce equal keys; distinct strings produce distinct keys
    #[test]
    fn prop_string_key_stability(left in ".{0,8}", right in ".{0,8}") {
        prop_assert_eq!(left.cache_key(), left.clone().cache_key());
        prop_assert_eq!(left.cache_key() == right.cache_key(), left == right);
    }

    /// Distinct non-NaN floats other than signed zeros produce distinct keys
    #[test]
    fn prop_float_key_stability(left in any::<f64>(), right in any::<f64>()) {
        prop_assume!(!left.is_nan() && !right.is_nan());
        prop_assert_eq!(left.cache_key() == right.cache_key(), left == right);
    }
}
