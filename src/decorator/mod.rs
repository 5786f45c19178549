//! Function decorators backed by private, per-callable state.
//!
//! A decorator takes a function and returns a new function with the same
//! calling convention but different calling behavior:
//!
//! - [`once`] / [`Once`]: the function runs on the first call only; later
//!   calls return the stored result
//! - [`memoize`] / [`Memoized`]: the function runs once per distinct
//!   argument key; later calls with the same key return the cached result
//!
//! The free functions return plain closures. The named types expose the same
//! behavior through `call` and additionally let the state be inspected.
//!
//! # State Ownership
//!
//! Each decorated callable owns its state exclusively. Decorating the same
//! function twice yields two independent states. The state lives in a
//! `RefCell`, so decorated callables are `!Sync` and meant for the thread
//! that created them.
//!
//! # Examples
//!
//! ```rust
//! use combinars::decorator::{memoize, once};
//! use std::cell::Cell;
//!
//! let connects = Cell::new(0);
//! let connect = once(|address: &str| {
//!     connects.set(connects.get() + 1);
//!     format!("connected to {address}")
//! });
//! connect("db-1");
//! connect("db-2");
//! assert_eq!(connects.get(), 1);
//!
//! let lookups = Cell::new(0);
//! let lookup = memoize(|id: u32| {
//!     lookups.set(lookups.get() + 1);
//!     id * 100
//! });
//! assert_eq!(lookup(4), 400);
//! assert_eq!(lookup(4), 400);
//! assert_eq!(lookups.get(), 1);
//! ```

mod cache_key;
mod memoize;
mod once;

pub use cache_key::{CacheKey, StableKey};
pub use memoize::{Memoized, memoize};
pub use once::{Once, OncePoisonedError, OnceState, once};

static_assertions::assert_not_impl_any!(Once<fn(i32) -> i32, i32, i32>: Sync);
static_assertions::assert_not_impl_any!(Memoized<fn(i32) -> i32, i32, i32>: Sync);
static_assertions::assert_impl_all!(Once<fn(i32) -> i32, i32, i32>: Send);
static_assertions::assert_impl_all!(StableKey: Send, Sync, Clone, Ord);
