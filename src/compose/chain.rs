use crate::{Drive, Seq};

/// Two sequences traversed back to back.
pub struct Chain<A, B> {
    a: A,
    b: B,
}

/// Yield all of `a`, then all of `b`.
///
/// If the consumer stops during `a`, `b` is never started.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let joined = chain(from_slice(&[1, 2]), from_slice(&[3, 4]));
/// assert_eq!(joined.collect(), vec![1, 2, 3, 4]);
/// ```
pub fn chain<A, B>(a: A, b: B) -> Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    Chain { a, b }
}

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let b = self.b;
        self.a
            .drive(&mut consumer)
            .and_then(move || b.drive(consumer))
    }
}

/// A sequence's elements repeated indefinitely.
pub struct Cycle<S> {
    seq: S,
}

/// Repeat the elements of `seq` forever, buffering them on the first pass.
///
/// An empty input cycles to an empty sequence rather than spinning.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(cycle(from_slice(&[1, 2])).take(5).collect(), vec![1, 2, 1, 2, 1]);
/// ```
pub fn cycle<S>(seq: S) -> Cycle<S>
where
    S: Seq,
    S::Item: Clone,
{
    Cycle { seq }
}

impl<S> Seq for Cycle<S>
where
    S: Seq,
    S::Item: Clone,
{
    type Item = S::Item;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let mut buf = Vec::new();
        let first_pass = self.seq.drive(|item| {
            let copy = item.clone();
            let signal = consumer(item);
            if signal.is_continue() {
                buf.push(copy);
            }
            signal
        });
        if first_pass.is_stop() {
            return Drive::Stop;
        }
        if buf.is_empty() {
            return Drive::Continue;
        }
        loop {
            for item in &buf {
                if consumer(item.clone()).is_stop() {
                    return Drive::Stop;
                }
            }
        }
    }
}

/// A sequence of sequences with one nesting level removed.
pub struct Flatten<S> {
    seq: S,
}

/// Yield every element of every inner sequence, in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let nested = from_vec(vec![from_slice(&[1, 2]), from_slice(&[3, 4])]);
/// assert_eq!(flatten(nested).collect(), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<S>(seq: S) -> Flatten<S>
where
    S: Seq,
    S::Item: Seq,
{
    Flatten { seq }
}

impl<S> Seq for Flatten<S>
where
    S: Seq,
    S::Item: Seq,
{
    type Item = <S::Item as Seq>::Item;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        // A stop inside an inner traversal surfaces as a stop of the outer
        // one, so no later inner sequence is started.
        self.seq.drive(|inner| inner.drive(&mut consumer))
    }
}
