//! Aggregations: queries that consume a whole sequence into a single value.
//!
//! Predicate queries short-circuit as soon as the answer is known; the
//! fold-style queries run the sequence to exhaustion.

use std::cmp::Ordering;

use crate::{Drive, Seq};

/// Returns `true` if every element satisfies `pred`.
///
/// Vacuously true on an empty sequence; stops at the first failure.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert!(all(from_slice(&[2, 4, 6]), |v| v % 2 == 0));
/// assert!(!all(from_slice(&[2, 3]), |v| v % 2 == 0));
/// ```
pub fn all<S, P>(seq: S, mut pred: P) -> bool
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    seq.drive(|item| Drive::from_continue(pred(&item))).is_continue()
}

/// Returns `true` if at least one element satisfies `pred`.
///
/// False on an empty sequence; stops at the first match.
pub fn any<S, P>(seq: S, mut pred: P) -> bool
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    seq.drive(|item| Drive::from_continue(!pred(&item))).is_stop()
}

/// Returns `true` if no element satisfies `pred`.
///
/// True on an empty sequence; stops at the first match.
pub fn none<S, P>(seq: S, pred: P) -> bool
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    !any(seq, pred)
}

/// Fold the sequence left to right into an accumulator.
///
/// An empty sequence returns `init` unchanged.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(reduce(from_iter(1..=4), 0, |acc, v| acc + v), 10);
/// assert_eq!(reduce(from_iter(0..0), 7, |acc, v| acc + v), 7);
/// ```
pub fn reduce<S, B, F>(seq: S, init: B, mut f: F) -> B
where
    S: Seq,
    F: FnMut(B, S::Item) -> B,
{
    // The accumulator moves through the fold step, so it lives in an Option
    // that is taken and restored around each call.
    let mut acc = Some(init);
    seq.drive(|item| {
        let current = acc.take().expect("accumulator is restored after every step");
        acc = Some(f(current, item));
        Drive::Continue
    });
    acc.expect("accumulator is restored after every step")
}

/// Smallest element under `cmp`, or `None` if the sequence is empty.
///
/// Of equal extremes, the first seen wins.
pub fn min_by<S, F>(seq: S, mut cmp: F) -> Option<S::Item>
where
    S: Seq,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut best: Option<S::Item> = None;
    seq.drive(|item| {
        let replace = match &best {
            None => true,
            Some(current) => cmp(&item, current) == Ordering::Less,
        };
        if replace {
            best = Some(item);
        }
        Drive::Continue
    });
    best
}

/// Smallest element, or `None` if the sequence is empty.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(min(from_slice(&[4, 3, 2, -1, 0])), Some(-1));
/// assert_eq!(min(from_iter(0..0)), None);
/// ```
pub fn min<S>(seq: S) -> Option<S::Item>
where
    S: Seq,
    S::Item: Ord,
{
    min_by(seq, Ord::cmp)
}

/// Largest element under `cmp`, or `None` if the sequence is empty.
///
/// Of equal extremes, the first seen wins.
pub fn max_by<S, F>(seq: S, mut cmp: F) -> Option<S::Item>
where
    S: Seq,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut best: Option<S::Item> = None;
    seq.drive(|item| {
        let replace = match &best {
            None => true,
            Some(current) => cmp(&item, current) == Ordering::Greater,
        };
        if replace {
            best = Some(item);
        }
        Drive::Continue
    });
    best
}

/// Largest element, or `None` if the sequence is empty.
pub fn max<S>(seq: S) -> Option<S::Item>
where
    S: Seq,
    S::Item: Ord,
{
    max_by(seq, Ord::cmp)
}

/// Returns `true` if the sequence is non-decreasing under `cmp`.
///
/// Stops at the first out-of-order pair. Empty and single-element
/// sequences are sorted.
pub fn is_sorted_by<S, F>(seq: S, mut cmp: F) -> bool
where
    S: Seq,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut prev: Option<S::Item> = None;
    seq.drive(|item| {
        if let Some(prev) = &prev {
            if cmp(prev, &item) == Ordering::Greater {
                return Drive::Stop;
            }
        }
        prev = Some(item);
        Drive::Continue
    })
    .is_continue()
}

/// Returns `true` if the sequence is non-decreasing.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert!(is_sorted(from_slice(&[1, 2, 2, 3])));
/// assert!(!is_sorted(from_slice(&[2, 1, 3])));
/// ```
pub fn is_sorted<S>(seq: S) -> bool
where
    S: Seq,
    S::Item: Ord,
{
    is_sorted_by(seq, Ord::cmp)
}
