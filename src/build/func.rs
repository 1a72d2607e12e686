use std::marker::PhantomData;

use crate::{take, Drive, Seq, Take};

/// Infinite sequence driven by a generator function.
pub struct WithFunc<F> {
    generator: F,
}

/// Build an infinite sequence by calling `generator` once per element.
///
/// Side-effecting generators are supported; calls happen in element order,
/// one per demanded element.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = -1;
/// let counter = with_func(move || { n += 1; n });
/// assert_eq!(counter.take(5).collect(), vec![0, 1, 2, 3, 4]);
/// ```
pub fn with_func<T, F>(generator: F) -> WithFunc<F>
where
    F: FnMut() -> T,
{
    WithFunc { generator }
}

impl<T, F> Seq for WithFunc<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn drive<F2>(self, mut consumer: F2) -> Drive
    where
        F2: FnMut(Self::Item) -> Drive,
    {
        let mut generator = self.generator;
        loop {
            if consumer(generator()).is_stop() {
                return Drive::Stop;
            }
        }
    }
}

/// Infinite sequence repeating a single value.
pub struct Repeat<T> {
    value: T,
}

/// Build an infinite sequence yielding clones of `value`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(repeat("a").take(3).collect(), vec!["a", "a", "a"]);
/// ```
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// Build a sequence yielding `value` exactly `n` times.
pub fn repeat_n<T: Clone>(value: T, n: usize) -> Take<Repeat<T>> {
    take(repeat(value), n)
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        loop {
            if consumer(self.value.clone()).is_stop() {
                return Drive::Stop;
            }
        }
    }
}

/// Sequence with no elements.
pub struct Empty<T> {
    _marker: PhantomData<T>,
}

/// Build a sequence that is immediately exhausted.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn drive<F>(self, _consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        Drive::Continue
    }
}
