//! # Lazyseq: Composable Lazy Sequences
//!
//! Build lazy, possibly infinite sequences and compose them with
//! transformation, merging, grouping, and aggregation combinators. Elements
//! are computed one at a time, only when a consumer demands them.
//!
//! ## Core Types
//!
//! - **[`Seq`]**: a push-model sequence; driving it feeds each element to a
//!   consumer until exhaustion or an early stop
//! - **[`Drive`]**: the per-element continue/stop signal
//! - **[`Cursor`]**: a demand-driven pull handle over any sequence
//!
//! ## Key Features
//!
//! - **Lazy**: nothing is computed until the sequence is driven; infinite
//!   sequences are first-class
//! - **Composable**: chain adapters with `.map()`, `.filter()`, `.take()`,
//!   `.chain()`, `.zip_shortest()`, and friends
//! - **Interoperable**: `from_iter` wraps any `IntoIterator`; `.into_iter()`
//!   turns any sequence back into a std [`Iterator`]
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! // Squares of the naturals, lazily, three at a time.
//! let mut n = 0;
//! let naturals = with_func(move || { n += 1; n });
//! let squares = naturals.map(|v| v * v).take(3);
//! assert_eq!(squares.collect(), vec![1, 4, 9]);
//! ```
//!
//! ## Common Functions
//!
//! **Building sequences:**
//! - [`from_slice(items)`](from_slice) / [`from_vec(items)`](from_vec) - yield stored elements in order
//! - [`from_iter(iter)`](from_iter) - wrap any `IntoIterator`
//! - [`with_func(f)`](with_func) - infinite sequence from a generator function
//! - [`repeat(value)`](repeat) / [`repeat_n(value, n)`](repeat_n) - repeated values
//!
//! **Consuming sequences:**
//! - [`Seq::collect`] - drain into a `Vec`
//! - [`Seq::into_iter`] - bridge to `for` loops and std iterator consumers
//! - [`reduce`], [`min`], [`max`], [`all`], [`any`] - aggregations

mod chunk;
mod cursor;
mod drive;
mod query;
mod seq;

pub mod build;
pub mod compose;
pub mod iter;
pub mod merge;
pub mod prelude;

pub use build::*;
pub use chunk::*;
pub use compose::*;
pub use cursor::Cursor;
pub use drive::Drive;
pub use iter::{from_iter, FromIter, SeqIter};
pub use merge::*;
pub use query::*;
pub use seq::Seq;
