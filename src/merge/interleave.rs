use crate::{Cursor, Drive, Seq};

/// Two sequences alternated until the first one-sided exhaustion.
pub struct InterleaveShortest<A, B> {
    a: A,
    b: B,
}

/// Alternate elements of `a` and `b`, starting with `a`, stopping as soon
/// as the side whose turn it is has nothing left.
///
/// The output length is twice the shorter input, plus one when `a` is the
/// longer side.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let merged = interleave_shortest(from_slice(&[1, 3, 5]), from_slice(&[2, 4]));
/// assert_eq!(merged.collect(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn interleave_shortest<A, B>(a: A, b: B) -> InterleaveShortest<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    InterleaveShortest { a, b }
}

impl<A, B> Seq for InterleaveShortest<A, B>
where
    A: Seq + Send + 'static,
    A::Item: Send + 'static,
    B: Seq<Item = A::Item> + Send + 'static,
{
    type Item = A::Item;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let mut a = Cursor::new(self.a);
        let mut b = Cursor::new(self.b);
        let mut a_turn = true;
        loop {
            let pulled = if a_turn { a.next() } else { b.next() };
            let Some(item) = pulled else {
                return Drive::Continue;
            };
            if consumer(item).is_stop() {
                return Drive::Stop;
            }
            a_turn = !a_turn;
        }
    }
}

/// Two sequences alternated, with the longer side drained at the end.
pub struct InterleaveLongest<A, B> {
    a: A,
    b: B,
}

/// Alternate elements of `a` and `b`, starting with `a`; once one side is
/// exhausted, yield the remainder of the other.
///
/// Every element of both inputs appears in the output.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let merged = interleave_longest(from_slice(&[1, 3]), from_slice(&[2, 4, 5, 6]));
/// assert_eq!(merged.collect(), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn interleave_longest<A, B>(a: A, b: B) -> InterleaveLongest<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    InterleaveLongest { a, b }
}

impl<A, B> Seq for InterleaveLongest<A, B>
where
    A: Seq + Send + 'static,
    A::Item: Send + 'static,
    B: Seq<Item = A::Item> + Send + 'static,
{
    type Item = A::Item;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let mut a = Cursor::new(self.a);
        let mut b = Cursor::new(self.b);
        let mut a_turn = true;
        loop {
            let pulled = if a_turn { a.next() } else { b.next() };
            let Some(item) = pulled else {
                break;
            };
            if consumer(item).is_stop() {
                return Drive::Stop;
            }
            a_turn = !a_turn;
        }
        // The side whose turn it was is exhausted; drain the other.
        let mut survivor = if a_turn { b } else { a };
        while let Some(item) = survivor.next() {
            if consumer(item).is_stop() {
                return Drive::Stop;
            }
        }
        Drive::Continue
    }
}
