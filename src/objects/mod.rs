//! Slicing and record helpers built around the traversal core.
//!
//! - [`first`], [`first_n`], [`last`], [`last_n`]: sequence slicing
//! - [`pluck`]: extract one field from every record
//! - [`extend`], [`defaults`]: merge records into a target record
//! - [`invoke`]: call a named method or a function on every element
//!
//! A record is a [`Mapping`] from string keys to values.

mod invoke;

pub use invoke::{Invocation, InvokeError, Method, MethodTable, invoke};

use crate::traversal::{Mapping, map};

/// Returns the first element, if any.
///
/// # Examples
///
/// ```rust
/// use combinars::objects::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[must_use]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns up to the first `count` elements.
///
/// # Examples
///
/// ```rust
/// use combinars::objects::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[must_use]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, if any.
///
/// # Examples
///
/// ```rust
/// use combinars::objects::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// ```
#[must_use]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns up to the last `count` elements.
///
/// A `count` of zero yields an empty slice.
///
/// # Examples
///
/// ```rust
/// use combinars::objects::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert!(last_n(&[1, 2, 3], 0).is_empty());
/// ```
#[must_use]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}

/// Extracts the value under `key` from every record.
///
/// Records missing the key contribute `None`.
///
/// # Examples
///
/// ```rust
/// use combinars::objects::pluck;
/// use combinars::traversal::Mapping;
///
/// let people: Vec<Mapping<String>> = vec![
///     [("name".to_string(), "Ada".to_string())].into_iter().collect(),
///     Mapping::new(),
/// ];
/// assert_eq!(pluck(&people, "name"), vec![Some("Ada".to_string()), None]);
/// ```
#[must_use]
pub fn pluck<V: Clone>(records: &[Mapping<V>], key: &str) -> Vec<Option<V>> {
    map(records, |record| record.get(key).cloned())
}

/// Copies every entry of every source into `target`.
///
/// Sources are applied in order, so later sources overwrite earlier ones and
/// all of them overwrite `target`. Returns `target` for chaining.
///
/// # Examples
///
/// ```rust
/// use combinars::objects::extend;
/// use combinars::traversal::Mapping;
///
/// let mut target: Mapping<i32> = [("a".to_string(), 1)].into_iter().collect();
/// let source: Mapping<i32> = [("a".to_string(), 9), ("b".to_string(), 2)].into_iter().collect();
///
/// extend(&mut target, &[&source]);
/// assert_eq!(target.get("a"), Some(&9));
/// assert_eq!(target.get("b"), Some(&2));
/// ```
pub fn extend<'t, V: Clone>(target: &'t mut Mapping<V>, sources: &[&Mapping<V>]) -> &'t mut Mapping<V> {
    for source in sources {
        for (key, value) in *source {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Copies entries from the sources into `target` only for keys it lacks.
///
/// Keys already in `target`, including ones filled by an earlier source, are
/// never overwritten. Returns `target` for chaining.
///
/// # Examples
///
/// ```rust
/// use combinars::objects::defaults;
/// use combinars::traversal::Mapping;
///
/// let mut options: Mapping<u32> = [("retries".to_string(), 5)].into_iter().collect();
/// let fallback: Mapping<u32> =
///     [("retries".to_string(), 1), ("timeout".to_string(), 30)].into_iter().collect();
///
/// defaults(&mut options, &[&fallback]);
/// assert_eq!(options.get("retries"), Some(&5));
/// assert_eq!(options.get("timeout"), Some(&30));
/// ```
pub fn defaults<'t, V: Clone>(target: &'t mut Mapping<V>, sources: &[&Mapping<V>]) -> &'t mut Mapping<V> {
    for source in sources {
        for (key, value) in *source {
            target
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
    target
}
