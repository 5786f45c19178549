//! # combinars
//!
//! A small functional-utilities library for Rust: collection traversal
//! primitives and stateful function decorators.
//!
//! ## Overview
//!
//! - **Traversal**: `each`, `map`, `filter`, `reject`, `reduce`, `every`,
//!   `some`, `contains`, `index_of`, `uniq` over sequences and keyed mappings
//! - **Decorators**: `once` and `memoize`, each backed by state owned by the
//!   returned callable
//! - **Combinators**: `identity`, `constant`, `negate`
//! - **Objects**: slicing helpers, record merging and name-based invocation
//! - **Schedule**: delayed invocation on the tokio timer
//!
//! ## Feature Flags
//!
//! - `traversal`: Collection traversal primitives
//! - `decorator`: `once` and `memoize`
//! - `objects`: Slicing, record and invocation helpers (implies `traversal`)
//! - `async`: Delayed invocation via tokio
//! - `fxhash`: Use `FxHashMap` for the memoize cache
//! - `serde`: Serialization of memoize cache keys
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinars::prelude::*;
//!
//! let scores = vec![72, 95, 88, 95, 40];
//! let passing = filter(&scores, |score| *score >= 50);
//! assert_eq!(uniq(&passing), vec![72, 95, 88]);
//! assert!(every(&passing, |score| *score >= 50));
//!
//! let grade = memoize(|score: i32| if score >= 90 { 'A' } else { 'B' });
//! assert_eq!(grade(95), 'A');
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the operations and types of every enabled module.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;

    #[cfg(feature = "traversal")]
    pub use crate::traversal::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;

    #[cfg(feature = "objects")]
    pub use crate::objects::*;

    #[cfg(feature = "async")]
    pub use crate::schedule::*;
}

pub mod combinator;

#[cfg(feature = "traversal")]
pub mod traversal;

#[cfg(feature = "decorator")]
pub mod decorator;

#[cfg(feature = "objects")]
pub mod objects;

#[cfg(feature = "async")]
pub mod schedule;
