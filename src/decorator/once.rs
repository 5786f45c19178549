//! Call-once decoration.
//!
//! [`Once`] wraps a function so that it runs on the first call only; every
//! later call returns the stored result.
//!
//! # Examples
//!
//! ```rust
//! use combinars::decorator::Once;
//! use std::cell::Cell;
//!
//! let launches = Cell::new(0);
//! let launch = Once::new(|target: &str| {
//!     launches.set(launches.get() + 1);
//!     format!("launched at {target}")
//! });
//!
//! assert_eq!(launch.call("moon"), "launched at moon");
//! assert_eq!(launch.call("mars"), "launched at moon");
//! assert_eq!(launches.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

/// Error returned when a [`Once`] can no longer produce a result.
///
/// A `Once` is poisoned when its wrapped function panicked during the first
/// call, or when the wrapped function calls its own `Once` re-entrantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OncePoisonedError;

impl fmt::Display for OncePoisonedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Once: wrapped function panicked or was re-entered while firing"
        )
    }
}

impl std::error::Error for OncePoisonedError {}

/// The internal state of a [`Once`].
///
/// The only transition out of `Unfired` happens on the first call; `Fired`
/// and `Poisoned` are terminal.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// Not called yet. Holds the function to run.
    Unfired(F),
    /// Called. Holds the stored result.
    Fired(R),
    /// The function panicked, or is currently running.
    Poisoned,
}

/// A function that runs at most once.
///
/// The first call passes its argument to the wrapped function and stores the
/// result. Every later call returns a clone of that result regardless of the
/// argument. Functions of several arguments take a tuple; results that must
/// be shared rather than copied can be wrapped in `Rc`.
///
/// Each `Once` owns its state. Two `Once` values built from the same function
/// fire independently.
///
/// # Type Parameters
///
/// * `F` - The wrapped function, consumed by the first call
/// * `A` - The argument type
/// * `R` - The result type
pub struct Once<F, A, R> {
    state: RefCell<OnceState<F, R>>,
    _argument: PhantomData<fn(A)>,
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    /// Wraps `function`. It is not called until the first [`call`](Self::call).
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Unfired(function)),
            _argument: PhantomData,
        }
    }

    /// Calls the wrapped function the first time, then returns the stored result.
    ///
    /// # Panics
    ///
    /// Panics if the `Once` is poisoned. See [`try_call`](Self::try_call).
    pub fn call(&self, argument: A) -> R {
        match self.try_call(argument) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`call`](Self::call), but reports a poisoned `Once` as an error.
    ///
    /// # Errors
    ///
    /// Returns [`OncePoisonedError`] if the wrapped function panicked on the
    /// first call or is being re-entered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::decorator::Once;
    ///
    /// let double = Once::new(|value: i32| value * 2);
    /// assert_eq!(double.try_call(21), Ok(42));
    /// assert_eq!(double.try_call(0), Ok(42));
    /// ```
    pub fn try_call(&self, argument: A) -> Result<R, OncePoisonedError> {
        // Poisoned stays in place while the function runs, so a panic or a
        // re-entrant call observes it.
        match self.state.replace(OnceState::Poisoned) {
            OnceState::Unfired(function) => {
                log::trace!("Once: firing wrapped function");
                let result = function(argument);
                *self.state.borrow_mut() = OnceState::Fired(result.clone());
                Ok(result)
            }
            OnceState::Fired(result) => {
                let output = result.clone();
                *self.state.borrow_mut() = OnceState::Fired(result);
                Ok(output)
            }
            OnceState::Poisoned => {
                log::warn!("Once: called while poisoned");
                Err(OncePoisonedError)
            }
        }
    }
}

impl<F, A, R: Clone> Once<F, A, R> {
    /// Returns `true` once the wrapped function has completed.
    #[must_use]
    pub fn is_fired(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Fired(_))
    }

    /// Returns `true` if the `Once` is poisoned.
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Poisoned)
    }

    /// Returns a clone of the stored result, or `None` if not fired yet.
    #[must_use]
    pub fn get(&self) -> Option<R> {
        match &*self.state.borrow() {
            OnceState::Fired(result) => Some(result.clone()),
            OnceState::Unfired(_) | OnceState::Poisoned => None,
        }
    }

    /// Consumes the `Once` and returns the stored result, if fired.
    #[must_use]
    pub fn into_result(self) -> Option<R> {
        match self.state.into_inner() {
            OnceState::Fired(result) => Some(result),
            OnceState::Unfired(_) | OnceState::Poisoned => None,
        }
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_borrow() {
            Ok(state) => match &*state {
                OnceState::Unfired(_) => formatter.write_str("Once(<unfired>)"),
                OnceState::Fired(result) => formatter.debug_tuple("Once").field(result).finish(),
                OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
            },
            Err(_) => formatter.write_str("Once(<borrowed>)"),
        }
    }
}

/// Decorates `function` so that it runs at most once.
///
/// Returns a closure with the same calling convention as `function`. The first
/// call runs `function` and stores its result; every later call returns a clone
/// of the stored result without running anything.
///
/// # Panics
///
/// The returned closure panics if `function` panicked during an earlier call.
///
/// # Examples
///
/// ```rust
/// use combinars::decorator::once;
/// use std::cell::Cell;
///
/// let counter = Cell::new(0);
/// let initialize = once(|()| {
///     counter.set(counter.get() + 1);
///     counter.get()
/// });
///
/// assert_eq!(initialize(()), 1);
/// assert_eq!(initialize(()), 1);
/// assert_eq!(initialize(()), 1);
/// assert_eq!(counter.get(), 1);
/// ```
pub fn once<F, A, R>(function: F) -> impl Fn(A) -> R
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    let decorated = Once::new(function);
    move |argument| decorated.call(argument)
}
