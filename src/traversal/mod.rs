//! Collection traversal primitives.
//!
//! Every higher-level operation in this module is built from a handful of
//! primitives:
//!
//! - [`each`]: visit every element, collecting the iteratee's results
//! - [`reduce`]: left fold from an explicit initial value
//! - [`filter`]: order-preserving selection
//! - [`map`]: element-wise transformation of a sequence
//!
//! and the derived operations:
//!
//! - [`reject`]: `filter` with a negated predicate
//! - [`every`], [`some`], [`contains`]: folds over a boolean accumulator
//! - [`every_truthy`], [`some_truthy`]: the same with [`Truthy`] as the predicate
//! - [`reduce_unseeded`]: `reduce` seeded with the first element
//! - [`index_of`], [`uniq`]: lookups built on `each`
//!
//! # Collection Shapes
//!
//! [`each`], [`reduce`] and the aggregations accept either shape of
//! [`Collection`]: an ordered sequence (`&[T]`, `&[T; N]`, `&Vec<T>`) or a
//! [`Mapping`] from string keys to values. [`map`], [`filter`], [`reject`],
//! [`index_of`] and [`uniq`] are sequence-only and take `&[T]`.
//!
//! No operation mutates its input; results are always new containers.
//!
//! # Laws
//!
//! - **Map identity**: `map(s, |x| x.clone()) == s`
//! - **Partition**: `filter(s, p)` and `reject(s, p)` together hold every element of `s` once
//! - **Empty fold**: `reduce(&[], r, init) == init`
//! - **Vacuous truth**: `every(&[], p) == true`, `some(&[], p) == false`
//!
//! # Examples
//!
//! ```rust
//! use combinars::traversal::{each, filter, reduce, Mapping};
//!
//! let prices = vec![3, 12, 7, 20];
//! let expensive = filter(&prices, |price| *price > 10);
//! let total = reduce(&expensive, |sum, price| sum + price, 0);
//! assert_eq!(total, 32);
//!
//! let mut stock = Mapping::new();
//! stock.insert("apples".to_string(), 4);
//! stock.insert("pears".to_string(), 0);
//! let report = each(&stock, |count, position, _| format!("{position}={count}"));
//! assert_eq!(report, vec!["apples=4", "pears=0"]);
//! ```

mod collection;
mod each;
mod error;
mod fold;
mod select;
mod truthy;

pub use collection::{Collection, Entries, IntoCollection, Mapping, Position, Values};
pub use each::{each, index_of, map, uniq};
pub use error::TraversalError;
pub use fold::{contains, every, every_truthy, reduce, reduce_unseeded, some, some_truthy};
pub use select::{filter, reject};
pub use truthy::Truthy;
