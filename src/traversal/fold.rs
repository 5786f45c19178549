//! Left folds and the predicate aggregations defined on top of them.
//!
//! [`reduce`] is the primitive; [`every`], [`some`] and [`contains`] are all
//! folds over a boolean accumulator.

use super::collection::IntoCollection;
use super::error::TraversalError;
use super::truthy::Truthy;

/// Folds the collection left-to-right starting from `initial`.
///
/// Mappings are folded over their values in key order. An empty collection
/// returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::reduce;
///
/// let sum = reduce(&[1, 2, 3], |accumulator, value| accumulator + value, 10);
/// assert_eq!(sum, 16);
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(reduce(&empty, |accumulator, value| accumulator + value, 7), 7);
/// ```
pub fn reduce<'a, C, A, F>(collection: C, mut reducer: F, initial: A) -> A
where
    C: IntoCollection<'a>,
    F: FnMut(A, &'a C::Item) -> A,
{
    let mut accumulator = initial;
    for value in collection.into_collection().values() {
        accumulator = reducer(accumulator, value);
    }
    accumulator
}

/// Folds the collection with its first element as the seed.
///
/// The accumulator is seeded with a clone of the first element and the fold
/// then runs over the *whole* collection, so the first element is folded in a
/// second time: `reduce_unseeded(&[1, 2, 3], add)` is `1 + 1 + 2 + 3`.
/// Use [`reduce`] with an explicit initial value for a strict left fold.
///
/// # Errors
///
/// Returns [`TraversalError::EmptyCollection`] if the collection is empty.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::reduce_unseeded;
///
/// let total = reduce_unseeded(&[1, 2, 3], |accumulator, value| accumulator + value);
/// assert_eq!(total, Ok(7));
///
/// let largest = reduce_unseeded(&[3, 9, 4], |accumulator, value| accumulator.max(*value));
/// assert_eq!(largest, Ok(9));
/// ```
pub fn reduce_unseeded<'a, C, F>(collection: C, reducer: F) -> Result<C::Item, TraversalError>
where
    C: IntoCollection<'a>,
    C::Item: Clone,
    F: FnMut(C::Item, &'a C::Item) -> C::Item,
{
    let collection = collection.into_collection();
    let seed = collection
        .first_value()
        .cloned()
        .ok_or(TraversalError::EmptyCollection)?;
    Ok(reduce(collection, reducer, seed))
}

/// Returns `true` if `predicate` holds for every element.
///
/// Vacuously `true` for an empty collection. Once an element fails, the
/// predicate is not called again.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::every;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 3, 6], |value| value % 2 == 0));
///
/// let empty: [i32; 0] = [];
/// assert!(every(&empty, |_| false));
/// ```
pub fn every<'a, C, P>(collection: C, mut predicate: P) -> bool
where
    C: IntoCollection<'a>,
    P: FnMut(&'a C::Item) -> bool,
{
    reduce(collection, |passed, item| passed && predicate(item), true)
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Vacuously `false` for an empty collection. Once an element passes, the
/// predicate is not called again.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::some;
///
/// assert!(some(&[1, 2, 3], |value| *value > 2));
/// assert!(!some(&[1, 2, 3], |value| *value > 3));
/// ```
pub fn some<'a, C, P>(collection: C, mut predicate: P) -> bool
where
    C: IntoCollection<'a>,
    P: FnMut(&'a C::Item) -> bool,
{
    reduce(collection, |found, item| found || predicate(item), false)
}

/// [`every`] with truthiness as the predicate.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::every_truthy;
///
/// assert!(every_truthy(&[true, true]));
/// assert!(!every_truthy(&[1, 0, 2]));
/// ```
pub fn every_truthy<'a, C>(collection: C) -> bool
where
    C: IntoCollection<'a>,
    C::Item: Truthy,
{
    every(collection, <C::Item as Truthy>::is_truthy)
}

/// [`some`] with truthiness as the predicate.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::some_truthy;
///
/// assert!(some_truthy(&["", "x"]));
/// assert!(!some_truthy(&[0, 0]));
/// ```
pub fn some_truthy<'a, C>(collection: C) -> bool
where
    C: IntoCollection<'a>,
    C::Item: Truthy,
{
    some(collection, <C::Item as Truthy>::is_truthy)
}

/// Returns `true` if any element value equals `target`.
///
/// For a mapping, the values are searched; keys never match.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::{Mapping, contains};
///
/// assert!(contains(&[1, 2, 3], &2));
///
/// let mut mapping = Mapping::new();
/// mapping.insert("two".to_string(), 2);
/// assert!(contains(&mapping, &2));
/// assert!(!contains(&mapping.clone(), &0));
/// ```
pub fn contains<'a, C>(collection: C, target: &C::Item) -> bool
where
    C: IntoCollection<'a>,
    C::Item: PartialEq,
{
    reduce(collection, |was_found, item| was_found || item == target, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::Mapping;
    use rstest::rstest;
    use std::cell::Cell;

    fn keyed(entries: &[(&str, i32)]) -> Mapping<i32> {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), *value))
            .collect()
    }

    #[rstest]
    fn reduce_folds_left_to_right() {
        let joined = reduce(
            &["a", "b", "c"],
            |accumulator: String, item| accumulator + *item,
            String::new(),
        );
        assert_eq!(joined, "abc");
    }

    #[rstest]
    fn reduce_over_mapping_folds_values() {
        let mapping = keyed(&[("x", 1), ("y", 2)]);
        assert_eq!(reduce(&mapping, |sum, value| sum + value, 0), 3);
    }

    #[rstest]
    fn reduce_unseeded_folds_first_element_twice() {
        let calls = Cell::new(0);
        let result = reduce_unseeded(&[5], |accumulator, value| {
            calls.set(calls.get() + 1);
            accumulator + value
        });
        assert_eq!(result, Ok(10));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn reduce_unseeded_on_empty_is_an_error() {
        let empty = Mapping::<i32>::new();
        assert_eq!(
            reduce_unseeded(&empty, |accumulator, value| accumulator + value),
            Err(TraversalError::EmptyCollection)
        );
    }

    #[rstest]
    fn every_stops_calling_predicate_after_failure() {
        let calls = Cell::new(0);
        let result = every(&[1, 0, 1, 1], |value| {
            calls.set(calls.get() + 1);
            *value == 1
        });
        assert!(!result);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn some_stops_calling_predicate_after_success() {
        let calls = Cell::new(0);
        let result = some(&[0, 1, 0, 0], |value| {
            calls.set(calls.get() + 1);
            *value == 1
        });
        assert!(result);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn contains_ignores_mapping_keys() {
        let mapping = keyed(&[("present", 1)]);
        let names: Mapping<String> = mapping
            .keys()
            .map(|key| (key.clone(), "value".to_string()))
            .collect();
        assert!(!contains(&names, &"present".to_string()));
        assert!(contains(&names, &"value".to_string()));
    }

    #[rstest]
    #[case(&[], false)]
    #[case(&[0.0, 0.0], false)]
    #[case(&[0.0, 2.5], true)]
    fn some_truthy_floats(#[case] values: &[f64], #[case] expected: bool) {
        assert_eq!(some_truthy(values), expected);
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&["a", ""], false)]
    #[case(&["a", "b"], true)]
    fn every_truthy_strings(#[case] values: &[&str], #[case] expected: bool) {
        assert_eq!(every_truthy(values), expected);
    }
}
