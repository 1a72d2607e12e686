//! Two-input combinators that advance their inputs independently.
//!
//! Each combinator here runs both inputs behind a [`Cursor`](crate::Cursor)
//! so it can pull from either side on demand, something a single nested
//! traversal cannot do.

mod interleave;
mod zip;

pub use interleave::{interleave_longest, interleave_shortest, InterleaveLongest, InterleaveShortest};
pub use zip::{zip_shortest, ZipShortest};
