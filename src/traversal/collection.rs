//! The two collection shapes accepted by the traversal operations.
//!
//! A [`Collection`] is either an ordered sequence or a mapping from string keys
//! to values. Operations that accept both shapes take any
//! [`IntoCollection`] and decide per call which shape they were given.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::slice;

/// A key-value mapping with string keys.
///
/// Iteration order is the key order of the underlying `BTreeMap`, which is
/// stable for a given mapping.
pub type Mapping<T> = BTreeMap<String, T>;

/// A borrowed view of either an ordered sequence or a keyed mapping.
///
/// The view never owns or mutates the data it points at.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::{Collection, IntoCollection, Mapping};
///
/// let numbers = vec![1, 2, 3];
/// let sequence = numbers.into_collection();
/// assert_eq!(sequence.len(), 3);
///
/// let mut scores = Mapping::new();
/// scores.insert("alice".to_string(), 10);
/// let mapping = Collection::Mapping(&scores);
/// assert!(mapping.is_mapping());
/// ```
pub enum Collection<'a, T> {
    /// An ordered, index-addressable sequence.
    Sequence(&'a [T]),
    /// A mapping from string keys to values.
    Mapping(&'a Mapping<T>),
}

impl<'a, T> Collection<'a, T> {
    /// Returns the number of elements (values, for a mapping).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(sequence) => sequence.len(),
            Self::Mapping(mapping) => mapping.len(),
        }
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if this is the mapping shape.
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Iterates the element values in collection order.
    ///
    /// For a mapping, values are yielded in key order; keys are not visited.
    #[must_use]
    pub fn values(&self) -> Values<'a, T> {
        match *self {
            Self::Sequence(sequence) => Values::Sequence(sequence.iter()),
            Self::Mapping(mapping) => Values::Mapping(mapping.values()),
        }
    }

    /// Iterates `(position, value)` pairs in collection order.
    #[must_use]
    pub fn entries(&self) -> Entries<'a, T> {
        match *self {
            Self::Sequence(sequence) => Entries::Sequence(sequence.iter().enumerate()),
            Self::Mapping(mapping) => Entries::Mapping(mapping.iter()),
        }
    }

    /// Returns the first value in collection order, if any.
    #[must_use]
    pub fn first_value(&self) -> Option<&'a T> {
        self.values().next()
    }
}

impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Collection<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(sequence) => formatter.debug_tuple("Sequence").field(sequence).finish(),
            Self::Mapping(mapping) => formatter.debug_tuple("Mapping").field(mapping).finish(),
        }
    }
}

/// Where an element sits in its collection: an index or a key.
///
/// This is the second argument handed to an [`each`](super::each) iteratee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position<'a> {
    /// Index into a sequence.
    Index(usize),
    /// Key into a mapping.
    Key(&'a str),
}

impl<'a> Position<'a> {
    /// Returns the index, if this is a sequence position.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match *self {
            Self::Index(index) => Some(index),
            Self::Key(_) => None,
        }
    }

    /// Returns the key, if this is a mapping position.
    #[must_use]
    pub const fn key(&self) -> Option<&'a str> {
        match *self {
            Self::Index(_) => None,
            Self::Key(key) => Some(key),
        }
    }
}

impl fmt::Display for Position<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Key(key) => write!(formatter, "{key}"),
        }
    }
}

/// Iterator over the values of a [`Collection`].
#[derive(Debug)]
pub enum Values<'a, T> {
    #[doc(hidden)]
    Sequence(slice::Iter<'a, T>),
    #[doc(hidden)]
    Mapping(btree_map::Values<'a, String, T>),
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(iterator) => iterator.next(),
            Self::Mapping(iterator) => iterator.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sequence(iterator) => iterator.size_hint(),
            Self::Mapping(iterator) => iterator.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

/// Iterator over the `(position, value)` pairs of a [`Collection`].
#[derive(Debug)]
pub enum Entries<'a, T> {
    #[doc(hidden)]
    Sequence(std::iter::Enumerate<slice::Iter<'a, T>>),
    #[doc(hidden)]
    Mapping(btree_map::Iter<'a, String, T>),
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (Position<'a>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(iterator) => iterator
                .next()
                .map(|(index, value)| (Position::Index(index), value)),
            Self::Mapping(iterator) => iterator
                .next()
                .map(|(key, value)| (Position::Key(key.as_str()), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sequence(iterator) => iterator.size_hint(),
            Self::Mapping(iterator) => iterator.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

/// Conversion of a borrowed container into a [`Collection`].
///
/// Implemented for slices, arrays, `Vec`, [`Mapping`] references and for
/// `Collection` itself. The element type is an associated type so that
/// closures passed alongside the collection get their argument types inferred.
pub trait IntoCollection<'a> {
    /// The element type of the collection.
    type Item: 'a;

    /// Borrows `self` as a [`Collection`].
    fn into_collection(self) -> Collection<'a, Self::Item>;
}

impl<'a, T> IntoCollection<'a> for Collection<'a, T> {
    type Item = T;

    fn into_collection(self) -> Collection<'a, T> {
        self
    }
}

impl<'a, T> IntoCollection<'a> for &'a [T] {
    type Item = T;

    fn into_collection(self) -> Collection<'a, T> {
        Collection::Sequence(self)
    }
}

impl<'a, T, const N: usize> IntoCollection<'a> for &'a [T; N] {
    type Item = T;

    fn into_collection(self) -> Collection<'a, T> {
        Collection::Sequence(self.as_slice())
    }
}

impl<'a, T> IntoCollection<'a> for &'a Vec<T> {
    type Item = T;

    fn into_collection(self) -> Collection<'a, T> {
        Collection::Sequence(self.as_slice())
    }
}

impl<'a, T> IntoCollection<'a> for &'a Mapping<T> {
    type Item = T;

    fn into_collection(self) -> Collection<'a, T> {
        Collection::Mapping(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_mapping() -> Mapping<i32> {
        let mut mapping = Mapping::new();
        mapping.insert("b".to_string(), 2);
        mapping.insert("a".to_string(), 1);
        mapping
    }

    #[rstest]
    fn sequence_values_follow_index_order() {
        let numbers = [3, 1, 2];
        let values: Vec<&i32> = numbers.into_collection().values().collect();
        assert_eq!(values, vec![&3, &1, &2]);
    }

    #[rstest]
    fn mapping_values_follow_key_order() {
        let mapping = sample_mapping();
        let values: Vec<&i32> = mapping.into_collection().values().collect();
        assert_eq!(values, vec![&1, &2]);
    }

    #[rstest]
    fn mapping_entries_carry_keys() {
        let mapping = sample_mapping();
        let positions: Vec<Position<'_>> = mapping
            .into_collection()
            .entries()
            .map(|(position, _)| position)
            .collect();
        assert_eq!(positions, vec![Position::Key("a"), Position::Key("b")]);
    }

    #[rstest]
    fn sequence_entries_carry_indices() {
        let words = vec!["x", "y"];
        let positions: Vec<Option<usize>> = words
            .into_collection()
            .entries()
            .map(|(position, _)| position.index())
            .collect();
        assert_eq!(positions, vec![Some(0), Some(1)]);
    }

    #[rstest]
    #[case(Position::Index(4), "4")]
    #[case(Position::Key("name"), "name")]
    fn position_display(#[case] position: Position<'_>, #[case] expected: &str) {
        assert_eq!(position.to_string(), expected);
    }

    #[rstest]
    fn empty_collections_report_empty() {
        let empty: Vec<u8> = Vec::new();
        assert!(empty.into_collection().is_empty());
        assert!(Mapping::<u8>::new().into_collection().is_empty());
    }

    #[rstest]
    fn first_value_of_mapping_is_smallest_key() {
        let mapping = sample_mapping();
        assert_eq!(mapping.into_collection().first_value(), Some(&1));
    }
}
