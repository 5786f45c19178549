//! Order-preserving selection over sequences.

use crate::combinator::negate;

/// Returns the elements for which `predicate` holds, in their original order.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut selected = Vec::new();
    for element in sequence {
        if predicate(element) {
            selected.push(element.clone());
        }
    }
    selected
}

/// Returns the elements for which `predicate` does not hold.
///
/// This is [`filter`] with the predicate negated, so
/// `filter(s, p)` and `reject(s, p)` partition `s`.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<T, P>(sequence: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(sequence, negate(predicate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn filter_keeps_relative_order() {
        let words = ["pear", "fig", "plum", "kiwi"];
        assert_eq!(
            filter(&words, |word| word.starts_with('p')),
            vec!["pear", "plum"]
        );
    }

    #[rstest]
    fn reject_is_complement_of_filter() {
        let words = ["pear", "fig", "plum", "kiwi"];
        assert_eq!(
            reject(&words, |word| word.starts_with('p')),
            vec!["fig", "kiwi"]
        );
    }

    #[rstest]
    fn filter_on_empty_returns_empty() {
        let empty: Vec<i32> = Vec::new();
        assert!(filter(&empty, |_| true).is_empty());
        assert!(reject(&empty, |_| false).is_empty());
    }

    #[rstest]
    fn filter_returns_a_fresh_vector() {
        let source = vec![1, 2, 3];
        let mut copy = filter(&source, |_| true);
        copy.push(4);
        assert_eq!(source, vec![1, 2, 3]);
    }
}
