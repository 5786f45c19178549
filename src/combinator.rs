//! Small combinators shared by the traversal core and the decorators.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that ignores its input and returns a fixed value
//! - [`negate`]: inverts a predicate
//!
//! [`negate`] is what [`reject`](crate::traversal::reject) is built from:
//! `reject(sequence, predicate)` is exactly `filter(sequence, negate(predicate))`.

/// Returns the value unchanged.
///
/// Mapping a sequence with `identity` yields an element-wise equal copy.
///
/// # Examples
///
/// ```
/// use combinars::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use combinars::combinator::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Inverts a predicate.
///
/// # Laws
///
/// - **Double negation**: `negate(negate(p))(x) == p(x)`
/// - **Complement**: `negate(p)(x) == !p(x)`
///
/// # Examples
///
/// ```
/// use combinars::combinator::negate;
///
/// let mut is_odd = negate(|value: &i32| value % 2 == 0);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn negate<T: ?Sized, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    P: FnMut(&T) -> bool,
{
    move |value| !predicate(value)
}
