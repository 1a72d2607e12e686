//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{Cursor, Drive, Seq};

// Constructors
pub use crate::build::{empty, from_map, from_slice, from_vec, repeat, repeat_n, reverse_slice, with_func};
pub use crate::iter::from_iter;

// Transformation and slicing
pub use crate::compose::{chain, cycle, drop_n, drop_while, filter, flatten, map, take, take_while};

// Merging
pub use crate::merge::{interleave_longest, interleave_shortest, zip_shortest};

// Grouping
pub use crate::chunk::{chunk_by, chunks};

// Aggregation
pub use crate::query::{
    all, any, is_sorted, is_sorted_by, max, max_by, min, min_by, none, reduce,
};
