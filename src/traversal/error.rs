//! Error types for the traversal operations.

/// Represents errors that can occur while traversing a collection.
///
/// # Examples
///
/// ```rust
/// use combinars::traversal::{TraversalError, reduce_unseeded};
///
/// let empty: Vec<i32> = Vec::new();
/// let result = reduce_unseeded(&empty, |sum, value| sum + value);
/// assert_eq!(result, Err(TraversalError::EmptyCollection));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    /// An unseeded reduction was asked to fold an empty collection.
    EmptyCollection,
}

impl std::fmt::Display for TraversalError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection => write!(
                formatter,
                "reduce_unseeded: empty collection has no first element to seed the accumulator"
            ),
        }
    }
}

impl std::error::Error for TraversalError {}
