//! Calling a method by name on every element.
//!
//! Method names are resolved through an explicit [`MethodTable`] that the
//! caller fills in. There is no reflection: a name that was never registered
//! is an error.

use crate::traversal::map;
use std::collections::HashMap;
use std::fmt;

/// A registered method: receives the element and the forwarded arguments.
pub type Method<T, A, R> = Box<dyn Fn(&T, &[A]) -> R>;

/// A table of methods callable by name on values of type `T`.
///
/// # Examples
///
/// ```rust
/// use combinars::objects::MethodTable;
///
/// let table = MethodTable::new()
///     .with_method("len", |text: &String, _: &[usize]| text.len())
///     .with_method("repeat_len", |text: &String, times: &[usize]| text.len() * times[0]);
///
/// assert!(table.contains("len"));
/// assert_eq!(table.names(), vec!["len", "repeat_len"]);
/// ```
pub struct MethodTable<T, A, R> {
    methods: HashMap<String, Method<T, A, R>>,
}

impl<T, A, R> MethodTable<T, A, R> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Adds a method and returns the table, for building tables inline.
    #[must_use]
    pub fn with_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&T, &[A]) -> R + 'static,
    {
        self.register(name, method);
        self
    }

    /// Adds a method, returning the one previously registered under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, method: F) -> Option<Method<T, A, R>>
    where
        F: Fn(&T, &[A]) -> R + 'static,
    {
        self.methods.insert(name.into(), Box::new(method))
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Fn(&T, &[A]) -> R> {
        let method: &dyn Fn(&T, &[A]) -> R = self.methods.get(name)?;
        Some(method)
    }

    /// Returns `true` if a method is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns `true` if no method is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<T, A, R> Default for MethodTable<T, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A, R> fmt::Debug for MethodTable<T, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MethodTable")
            .field("methods", &self.names())
            .finish()
    }
}

/// What [`invoke`] calls on each element.
pub enum Invocation<'f, T, A, R> {
    /// A method looked up by name in the [`MethodTable`].
    Method(&'f str),
    /// A function applied directly to each element.
    Function(&'f dyn Fn(&T, &[A]) -> R),
}

impl<T, A, R> fmt::Debug for Invocation<'_, T, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method(name) => formatter.debug_tuple("Method").field(name).finish(),
            Self::Function(_) => formatter.write_str("Function(<fn>)"),
        }
    }
}

/// Represents errors that can occur in [`invoke`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// The method name is not registered in the table.
    UnknownMethod {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for InvokeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod { name } => {
                write!(formatter, "invoke: no method named `{name}` in the table")
            }
        }
    }
}

impl std::error::Error for InvokeError {}

/// Calls a method or function on every element, collecting the results.
///
/// `arguments` is forwarded to every call. A method name is resolved once,
/// before any element is visited.
///
/// # Errors
///
/// Returns [`InvokeError::UnknownMethod`] if `invocation` names a method that
/// is not in `table`.
///
/// # Examples
///
/// ```rust
/// use combinars::objects::{Invocation, MethodTable, invoke};
///
/// let table = MethodTable::new()
///     .with_method("scale", |value: &i32, factors: &[i32]| value * factors[0]);
/// let values = [1, 2, 3];
///
/// let scaled = invoke(&values, &table, Invocation::Method("scale"), &[10]);
/// assert_eq!(scaled, Ok(vec![10, 20, 30]));
///
/// let shifted = invoke(
///     &values,
///     &table,
///     Invocation::Function(&|value: &i32, offsets: &[i32]| value + offsets[0]),
///     &[1],
/// );
/// assert_eq!(shifted, Ok(vec![2, 3, 4]));
/// ```
pub fn invoke<T, A, R>(
    sequence: &[T],
    table: &MethodTable<T, A, R>,
    invocation: Invocation<'_, T, A, R>,
    arguments: &[A],
) -> Result<Vec<R>, InvokeError> {
    let method: &dyn Fn(&T, &[A]) -> R = match invocation {
        Invocation::Method(name) => table.get(name).ok_or_else(|| {
            log::debug!("invoke: unknown method `{name}`");
            InvokeError::UnknownMethod {
                name: name.to_owned(),
            }
        })?,
        Invocation::Function(function) => function,
    };
    Ok(map(sequence, |element| method(element, arguments)))
}
