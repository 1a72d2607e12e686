//! Grouping combinators: splitting one sequence into a sequence of runs.
//!
//! Groups are yielded as [`FromSlice`] snapshots, so each group is an
//! independent sequence the consumer may drive, drop, or cursor at will.

use std::marker::PhantomData;
use std::mem;

use crate::build::{from_vec, FromSlice};
use crate::{Cursor, Drive, Seq};

/// Consecutive runs of a sequence, delimited by a key function.
pub struct ChunkBy<S, F, K> {
    seq: S,
    key: F,
    _key_type: PhantomData<K>,
}

/// Group consecutive elements of `seq` whose `key` values are equal.
///
/// A new group starts whenever an element's key differs from the previous
/// element's key; equal keys separated by a different key land in separate
/// groups. Every group is non-empty, and their concatenation reproduces the
/// input.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let groups: Vec<Vec<i32>> = chunk_by(from_slice(&[1, 1, 2, 2, 1]), |v| *v)
///     .map(|group| group.collect())
///     .collect();
/// assert_eq!(groups, vec![vec![1, 1], vec![2, 2], vec![1]]);
/// ```
pub fn chunk_by<S, F, K>(seq: S, key: F) -> ChunkBy<S, F, K>
where
    S: Seq,
    F: FnMut(&S::Item) -> K,
    K: PartialEq,
{
    ChunkBy {
        seq,
        key,
        _key_type: PhantomData,
    }
}

impl<S, F, K> Seq for ChunkBy<S, F, K>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
    F: FnMut(&S::Item) -> K,
    K: PartialEq,
{
    type Item = FromSlice<S::Item>;

    fn drive<F2>(self, mut consumer: F2) -> Drive
    where
        F2: FnMut(Self::Item) -> Drive,
    {
        let mut key = self.key;
        let mut cursor = Cursor::new(self.seq);
        let Some(first) = cursor.next() else {
            return Drive::Continue;
        };
        let mut current = key(&first);
        let mut buf = vec![first];
        while let Some(item) = cursor.next() {
            let next = key(&item);
            if next != current {
                if consumer(from_vec(mem::take(&mut buf))).is_stop() {
                    return Drive::Stop;
                }
                current = next;
            }
            buf.push(item);
        }
        consumer(from_vec(buf))
    }
}

/// Fixed-size runs of a sequence.
pub struct Chunks<S> {
    seq: S,
    size: usize,
}

/// Group the elements of `seq` into runs of `size`; the final group may be
/// shorter.
///
/// `size` must be at least 1.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let groups: Vec<Vec<i32>> = chunks(from_iter(0..5), 2)
///     .map(|group| group.collect())
///     .collect();
/// assert_eq!(groups, vec![vec![0, 1], vec![2, 3], vec![4]]);
/// ```
pub fn chunks<S: Seq>(seq: S, size: usize) -> Chunks<S> {
    Chunks { seq, size }
}

impl<S> Seq for Chunks<S>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    type Item = FromSlice<S::Item>;

    fn drive<F>(self, consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let size = self.size;
        let mut index = 0usize;
        chunk_by(self.seq, move |_| {
            let group = index / size;
            index += 1;
            group
        })
        .drive(consumer)
    }
}
