//! Bridges between [`Seq`] and the standard iterator protocol.
//!
//! Two directions:
//! - [`SeqIter`] exposes any sequence as a std [`Iterator`] (backed by a
//!   [`Cursor`]), so `for` loops and every std consumer work unchanged;
//! - [`FromIter`] wraps anything that is `IntoIterator` as a sequence, so
//!   ranges, vectors, and other iterables feed straight into combinators.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let squares: Vec<_> = from_iter(1..=4).map(|v| v * v).into_iter().collect();
//! assert_eq!(squares, vec![1, 4, 9, 16]);
//! ```

use crate::{Cursor, Drive, Seq};

/// Standard-iterator adapter over a sequence.
///
/// Created by [`Seq::into_iter`]. Dropping the adapter mid-iteration
/// releases the underlying cursor.
pub struct SeqIter<T> {
    cursor: Cursor<T>,
}

impl<T: Send + 'static> SeqIter<T> {
    /// Wrap `seq` in an iterator.
    pub fn new<S>(seq: S) -> SeqIter<T>
    where
        S: Seq<Item = T> + Send + 'static,
    {
        SeqIter {
            cursor: Cursor::new(seq),
        }
    }
}

impl<T> Iterator for SeqIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.cursor.next()
    }
}

/// Sequence over anything that can be turned into a std iterator.
pub struct FromIter<I> {
    iter: I,
}

/// Treat any `IntoIterator` value as a sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(from_iter(0..4).collect(), vec![0, 1, 2, 3]);
/// assert_eq!(from_iter(vec!["a", "b"]).collect(), vec!["a", "b"]);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I>
where
    I: IntoIterator,
{
    FromIter { iter }
}

impl<I> Seq for FromIter<I>
where
    I: IntoIterator,
{
    type Item = I::Item;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        for item in self.iter {
            if consumer(item).is_stop() {
                return Drive::Stop;
            }
        }
        Drive::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::from_slice;

    #[test]
    fn test_seq_iter_collects() {
        let out: Vec<_> = from_slice(&[5, 6, 7]).into_iter().collect();
        assert_eq!(out, vec![5, 6, 7]);
    }

    #[test]
    fn test_seq_iter_in_for_loop() {
        let mut seen = Vec::new();
        for v in from_iter(0..3).map(|v| v + 1).into_iter() {
            seen.push(v);
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_seq_iter_partial_consumption_releases() {
        let mut iter = crate::build::with_func(|| 1).into_iter();
        assert_eq!(iter.next(), Some(1));
        drop(iter);
    }

    #[test]
    fn test_from_iter_respects_stop() {
        let mut seen = Vec::new();
        let ended = from_iter(0..100).drive(|v| {
            seen.push(v);
            Drive::from_continue(v < 2)
        });
        assert!(ended.is_stop());
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
