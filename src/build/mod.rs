//! Building sequences from scratch
//!
//! This module provides constructors for sequences over fixed collections,
//! repeated values, and generator functions.

mod from;
mod func;

pub use from::{from_map, from_slice, from_vec, reverse_slice, FromMap, FromSlice, ReverseSlice};
pub use func::{empty, repeat, repeat_n, with_func, Empty, Repeat, WithFunc};
