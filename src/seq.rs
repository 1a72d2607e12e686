//! Core trait for lazy, push-driven sequences.
//!
//! This module defines the [`Seq`] trait, the single abstraction the whole
//! crate is built on. A [`Seq`] is a producer of elements that, when driven,
//! invokes a supplied consumer once per element in order until either the
//! sequence is exhausted or the consumer signals [`Drive::Stop`].
//!
//! A sequence is not a container: it stores nothing, has no length, and may
//! be infinite. Driving it consumes the sequence value, so each `Seq` value
//! represents exactly one traversal.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let doubled: Vec<_> = from_slice(&[1, 2, 3]).map(|v| v * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use crate::{
    chunk::{chunk_by, chunks, ChunkBy, Chunks},
    compose::{
        chain, cycle, drop_n, drop_while, filter, flatten, map, take, take_while, Chain, Cycle,
        DropN, DropWhile, Filter, Flatten, Map, Take, TakeWhile,
    },
    cursor::Cursor,
    iter::SeqIter,
    merge::{
        interleave_longest, interleave_shortest, zip_shortest, InterleaveLongest,
        InterleaveShortest, ZipShortest,
    },
    Drive,
};

/// A lazy sequence of elements, traversed by pushing each element into a consumer.
///
/// Implementors provide [`drive`](Seq::drive); everything else is adapters
/// built on top of it. Driving consumes the sequence, so adapters take
/// `self` by value and ownership chains down through compositions.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let evens: Vec<_> = from_iter(0..10).filter(|v| v % 2 == 0).collect();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
/// ```
pub trait Seq: Sized {
    /// Element type produced by the sequence.
    type Item;

    /// Traverse the sequence, feeding each element to `consumer` in order.
    ///
    /// Returns [`Drive::Stop`] if the consumer stopped the traversal early,
    /// [`Drive::Continue`] if the sequence was exhausted naturally. After
    /// the consumer returns `Stop`, no further element may be produced.
    fn drive<F>(self, consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive;

    /// Transform every element with `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        map(self, f)
    }

    /// Keep only elements for which `pred` holds.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        filter(self, pred)
    }

    /// Yield elements while `pred` holds, stopping at the first failure.
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        take_while(self, pred)
    }

    /// Yield at most the first `n` elements.
    fn take(self, n: usize) -> Take<Self> {
        take(self, n)
    }

    /// Discard the leading run of elements for which `pred` holds, then
    /// yield everything after it.
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        drop_while(self, pred)
    }

    /// Discard the first `n` elements, then yield the rest.
    fn drop_n(self, n: usize) -> DropN<Self> {
        drop_n(self, n)
    }

    /// Yield all of `self`, then all of `other`.
    fn chain<S>(self, other: S) -> Chain<Self, S>
    where
        S: Seq<Item = Self::Item>,
    {
        chain(self, other)
    }

    /// Repeat the sequence's elements indefinitely, buffering them on the
    /// first pass. An empty sequence cycles to nothing.
    fn cycle(self) -> Cycle<Self>
    where
        Self::Item: Clone,
    {
        cycle(self)
    }

    /// Flatten a sequence of sequences into one level.
    fn flatten(self) -> Flatten<Self>
    where
        Self::Item: Seq,
    {
        flatten(self)
    }

    /// Alternate elements with `other`, starting with `self`, stopping as
    /// soon as the side whose turn it is runs out.
    fn interleave_shortest<S>(self, other: S) -> InterleaveShortest<Self, S>
    where
        S: Seq<Item = Self::Item>,
    {
        interleave_shortest(self, other)
    }

    /// Alternate elements with `other`, starting with `self`, draining the
    /// longer side once the other runs out.
    fn interleave_longest<S>(self, other: S) -> InterleaveLongest<Self, S>
    where
        S: Seq<Item = Self::Item>,
    {
        interleave_longest(self, other)
    }

    /// Pair elements with `other`, stopping as soon as either side runs out.
    fn zip_shortest<S>(self, other: S) -> ZipShortest<Self, S>
    where
        S: Seq,
    {
        zip_shortest(self, other)
    }

    /// Group consecutive elements whose `key` values are equal.
    fn chunk_by<K, F>(self, key: F) -> ChunkBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        chunk_by(self, key)
    }

    /// Group elements into runs of `size`; the final group may be shorter.
    ///
    /// `size` must be at least 1.
    fn chunks(self, size: usize) -> Chunks<Self> {
        chunks(self, size)
    }

    /// Drain the sequence into a `Vec`.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!(from_iter(0..3).collect(), vec![0, 1, 2]);
    /// ```
    fn collect(self) -> Vec<Self::Item> {
        let mut out = Vec::new();
        self.drive(|v| {
            out.push(v);
            Drive::Continue
        });
        out
    }

    /// Convert into a standard [`Iterator`] backed by a [`Cursor`].
    ///
    /// This is the bridge to `for` loops and every std iterator consumer.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut total = 0;
    /// for v in from_slice(&[1, 2, 3]).into_iter() {
    ///     total += v;
    /// }
    /// assert_eq!(total, 6);
    /// ```
    fn into_iter(self) -> SeqIter<Self::Item>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
    {
        SeqIter::new(self)
    }

    /// Convert into a demand-driven pull [`Cursor`].
    fn cursor(self) -> Cursor<Self::Item>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
    {
        Cursor::new(self)
    }
}

impl<L, R> Seq for either::Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn drive<F>(self, consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        match self {
            either::Either::Left(l) => l.drive(consumer),
            either::Either::Right(r) => r.drive(consumer),
        }
    }
}

impl<S> Seq for Option<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive<F>(self, consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        match self {
            Some(seq) => seq.drive(consumer),
            None => Drive::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_slice, from_vec};
    use crate::iter::from_iter;
    use either::Either;

    #[test]
    fn test_method_chaining_pipeline() {
        let out: Vec<_> = from_iter(0..10)
            .filter(|v| v % 2 == 0)
            .map(|v| v * 10)
            .take(3)
            .collect();
        assert_eq!(out, vec![0, 20, 40]);
    }

    #[test]
    fn test_either_drives_selected_branch() {
        let pick = |left: bool| -> Either<_, _> {
            if left {
                Either::Left(from_slice(&[1, 2]))
            } else {
                Either::Right(from_vec(vec![3, 4]))
            }
        };
        assert_eq!(pick(true).collect(), vec![1, 2]);
        assert_eq!(pick(false).collect(), vec![3, 4]);
    }

    #[test]
    fn test_option_none_is_empty() {
        let none: Option<crate::build::FromSlice<i32>> = None;
        assert_eq!(none.collect(), Vec::<i32>::new());
        assert_eq!(Some(from_slice(&[7, 8])).collect(), vec![7, 8]);
    }

    #[test]
    fn test_drive_reports_consumer_stop() {
        let ended = from_iter(0..100).drive(|v| Drive::from_continue(v < 3));
        assert!(ended.is_stop());

        let ended = from_iter(0..3).drive(|_| Drive::Continue);
        assert!(ended.is_continue());
    }
}
