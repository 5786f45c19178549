//! Element-wise traversal: `each`, `map`, and the lookups built on `each`.

use super::collection::{Collection, IntoCollection, Position};

/// Visits every element and collects the iteratee's results.
///
/// The iteratee receives the element, its [`Position`] and the whole
/// collection. Sequences are visited in index order; mappings in key order,
/// with `Position::Key`. The returned vector holds one result per element, in
/// visiting order. The collection itself is only borrowed.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::{Mapping, each};
///
/// let mut mapping = Mapping::new();
/// mapping.insert("a".to_string(), 1);
/// mapping.insert("b".to_string(), 2);
///
/// let scaled = each(&mapping, |value, _, _| value * 10);
/// assert_eq!(scaled, vec![10, 20]);
///
/// let labelled = each(&["x", "y"], |value, position, _| format!("{position}:{value}"));
/// assert_eq!(labelled, vec!["0:x", "1:y"]);
/// ```
pub fn each<'a, C, U, F>(collection: C, mut iteratee: F) -> Vec<U>
where
    C: IntoCollection<'a>,
    F: FnMut(&'a C::Item, Position<'a>, &Collection<'a, C::Item>) -> U,
{
    let collection = collection.into_collection();
    let mut results = Vec::with_capacity(collection.len());
    for (position, value) in collection.entries() {
        results.push(iteratee(value, position, &collection));
    }
    results
}

/// Applies `iteratee` to every element of a sequence.
///
/// Position `i` of the result holds `iteratee(&sequence[i])`; the result has
/// the same length as the input and is a fresh allocation.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::map;
///
/// assert_eq!(map(&[1, 2, 3], |value| value * 2), vec![2, 4, 6]);
/// ```
pub fn map<T, U, F>(sequence: &[T], iteratee: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    sequence.iter().map(iteratee).collect()
}

/// Returns the index of the first element equal to `target`.
///
/// `None` is the not-found sentinel.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::index_of;
///
/// assert_eq!(index_of(&[5, 3, 5, 1], &5), Some(0));
/// assert_eq!(index_of(&[5, 3, 5, 1], &9), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(sequence, |item, position, _| {
        if found.is_none() && item == target {
            found = position.index();
        }
    });
    found
}

/// Returns each distinct value once, in order of first occurrence.
///
/// Only `PartialEq` is required, so the scan is quadratic; no hashing or
/// ordering of the elements is assumed.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn uniq<T: PartialEq + Clone>(sequence: &[T]) -> Vec<T> {
    let mut seen: Vec<T> = Vec::new();
    each(sequence, |item, _, _| {
        if !seen.contains(item) {
            seen.push(item.clone());
        }
    });
    seen
}
