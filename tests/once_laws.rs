#![cfg(feature = "decorator")]
//! Property-based tests for call-once laws.
//!
//! This module verifies that `once` satisfies:
//!
//! - **At Most Once**: the wrapped function runs once over any number of calls
//! - **Idempotence**: every call returns the first call's result
//! - **First Argument Wins**: later arguments never influence the result

use combinars::decorator::{Once, once};
use proptest::prelude::*;
use std::cell::Cell;

proptest! {
    /// The wrapped function runs exactly once for any positive number of calls
    #[test]
    fn prop_once_runs_once(calls in 1_usize..50) {
        let counter = Cell::new(0_usize);
        let decorated = once(|()| {
            counter.set(counter.get() + 1);
        });

        for _ in 0..calls {
            decorated(());
        }

        prop_assert_eq!(counter.get(), 1);
    }

    /// Every call returns the result of the first call
    #[test]
    fn prop_once_idempotence(arguments in prop::collection::vec(any::<i64>(), 1..20)) {
        let decorated = Once::new(|value: i64| value.wrapping_mul(3));
        let expected = arguments[0].wrapping_mul(3);

        for argument in &arguments {
            prop_assert_eq!(decorated.call(*argument), expected);
        }
        prop_assert!(decorated.is_fired());
    }

    /// String results are stored and returned unchanged
    #[test]
    fn prop_once_first_argument_wins(first in ".*", later in ".*") {
        let decorated = Once::new(|text: String| text);

        prop_assert_eq!(decorated.call(first.clone()), first.clone());
        prop_assert_eq!(decorated.call(later), first);
    }
}
