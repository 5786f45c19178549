//! Memoization keyed by the call argument.
//!
//! [`Memoized`] wraps a single-argument function and caches its results by
//! the argument's [`StableKey`]. The wrapped function runs at most once per
//! distinct key for the lifetime of the `Memoized`.
//!
//! # Examples
//!
//! ```rust
//! use combinars::decorator::Memoized;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let square = Memoized::new(|value: u64| {
//!     calls.set(calls.get() + 1);
//!     value * value
//! });
//!
//! assert_eq!(square.call(3), 9);
//! assert_eq!(square.call(3), 9);
//! assert_eq!(square.call(5), 25);
//! assert_eq!(calls.get(), 2);
//! ```

use super::cache_key::{CacheKey, StableKey};
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "fxhash")]
type CacheMap<V> = rustc_hash::FxHashMap<StableKey, V>;

#[cfg(not(feature = "fxhash"))]
type CacheMap<V> = std::collections::HashMap<StableKey, V>;

/// A function whose results are cached by argument.
///
/// The argument is converted to a [`StableKey`] through [`CacheKey`]. On a
/// hit, a clone of the cached result is returned and the function is not
/// called. On a miss, the function runs, its result is stored under the key
/// and returned.
///
/// The cache is not borrowed while the wrapped function runs, so a memoized
/// function may call back into its own `Memoized`.
///
/// Arguments mapped to [`StableKey::Opaque`] all share a single cache entry.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `A` - The argument type
/// * `R` - The result type
pub struct Memoized<F, A, R> {
    function: F,
    cache: RefCell<CacheMap<R>>,
    _argument: PhantomData<fn(A)>,
}

impl<F, A, R> Memoized<F, A, R>
where
    F: Fn(A) -> R,
    A: CacheKey,
    R: Clone,
{
    /// Wraps `function` with an empty cache.
    #[must_use]
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(CacheMap::default()),
            _argument: PhantomData,
        }
    }

    /// Returns the cached result for `argument`, computing it on a miss.
    pub fn call(&self, argument: A) -> R {
        let key = argument.cache_key();
        let cached = self.cache.borrow().get(&key).cloned();
        if let Some(result) = cached {
            log::trace!("Memoized: cache hit for {key:?}");
            return result;
        }

        log::trace!("Memoized: cache miss for {key:?}");
        let result = (self.function)(argument);
        self.cache
            .borrow_mut()
            .entry(key)
            .or_insert(result)
            .clone()
    }

    /// Returns `true` if a result for `argument` is cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.borrow().contains_key(&argument.cache_key())
    }
}

impl<F, A, R> Memoized<F, A, R> {
    /// Returns the number of cached results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing is cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<F, A, R> fmt::Debug for Memoized<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

/// Decorates `function` with a per-argument result cache.
///
/// Returns a closure with the same calling convention as `function`. The
/// function runs at most once per distinct [`StableKey`].
///
/// # Examples
///
/// ```rust
/// use combinars::decorator::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let describe = memoize(|value: i32| {
///     calls.set(calls.get() + 1);
///     format!("#{value}")
/// });
///
/// describe(3);
/// describe(3);
/// describe(5);
/// describe(3);
/// assert_eq!(calls.get(), 2);
/// ```
pub fn memoize<F, A, R>(function: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
    A: CacheKey,
    R: Clone,
{
    let memoized = Memoized::new(function);
    move |argument| memoized.call(argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn caches_per_key() {
        let calls = Cell::new(0);
        let memoized = Memoized::new(|value: i32| {
            calls.set(calls.get() + 1);
            value * 2
        });

        assert!(memoized.is_empty());
        assert_eq!(memoized.call(3), 6);
        assert_eq!(memoized.call(3), 6);
        assert_eq!(memoized.call(5), 10);
        assert_eq!(memoized.call(3), 6);
        assert_eq!(calls.get(), 2);
        assert_eq!(memoized.len(), 2);
        assert!(memoized.is_cached(&5));
        assert!(!memoized.is_cached(&7));
    }

    #[rstest]
    fn cached_results_are_the_same_allocation() {
        let memoized = Memoized::new(|value: u8| Rc::new(value.to_string()));
        let first = memoized.call(3);
        let second = memoized.call(3);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[rstest]
    fn signed_zero_shares_a_key() {
        let calls = Cell::new(0);
        let memoized = Memoized::new(|value: f64| {
            calls.set(calls.get() + 1);
            value.is_sign_negative()
        });
        assert!(memoized.call(-0.0));
        assert!(memoized.call(0.0));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn opaque_keys_collide() {
        struct Point(i32, i32);

        impl CacheKey for Point {
            fn cache_key(&self) -> StableKey {
                StableKey::Opaque
            }
        }

        let memoized = Memoized::new(|point: Point| point.0 + point.1);
        assert_eq!(memoized.call(Point(1, 2)), 3);
        assert_eq!(memoized.call(Point(10, 20)), 3);
    }

    #[rstest]
    fn optional_results_are_cached_too() {
        let calls = Cell::new(0);
        let memoized = Memoized::new(|text: &str| {
            calls.set(calls.get() + 1);
            text.find('z')
        });
        assert_eq!(memoized.call("abc"), None);
        assert_eq!(memoized.call("abc"), None);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn debug_reports_cache_size() {
        let memoized = Memoized::new(|value: i32| value);
        memoized.call(1);
        assert_eq!(format!("{memoized:?}"), "Memoized { cached: 1, .. }");
    }
}
