use std::collections::HashMap;

use crate::{Drive, Seq};

/// Sequence over a snapshot of a slice, in stored order.
pub struct FromSlice<T> {
    items: Vec<T>,
}

/// Build a sequence yielding the elements of `items` in order.
///
/// The slice is snapshotted into an owned buffer, so the sequence is
/// self-contained and can be handed to a [`Cursor`](crate::Cursor). An
/// empty slice yields a sequence that is immediately exhausted.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(from_slice(&[0, 1, 2]).collect(), vec![0, 1, 2]);
/// assert_eq!(from_slice::<i32>(&[]).collect(), vec![]);
/// ```
pub fn from_slice<T: Clone>(items: &[T]) -> FromSlice<T> {
    FromSlice {
        items: items.to_vec(),
    }
}

/// Build a sequence that takes ownership of `items` and yields them in order.
///
/// Like [`from_slice`] without requiring `Clone`.
pub fn from_vec<T>(items: Vec<T>) -> FromSlice<T> {
    FromSlice { items }
}

impl<T> Seq for FromSlice<T> {
    type Item = T;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        for item in self.items {
            if consumer(item).is_stop() {
                return Drive::Stop;
            }
        }
        Drive::Continue
    }
}

/// Sequence over a snapshot of a slice, in reversed order.
pub struct ReverseSlice<T> {
    items: Vec<T>,
}

/// Build a sequence yielding the elements of `items` from last to first.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(reverse_slice(&[1, 2, 3]).collect(), vec![3, 2, 1]);
/// ```
pub fn reverse_slice<T: Clone>(items: &[T]) -> ReverseSlice<T> {
    ReverseSlice {
        items: items.to_vec(),
    }
}

impl<T> Seq for ReverseSlice<T> {
    type Item = T;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        for item in self.items.into_iter().rev() {
            if consumer(item).is_stop() {
                return Drive::Stop;
            }
        }
        Drive::Continue
    }
}

/// Sequence over the entries of a map, yielded as `(key, value)` pairs.
pub struct FromMap<K, V> {
    map: HashMap<K, V>,
}

/// Build a sequence over the entries of `map`.
///
/// Entry order is unspecified; callers must not depend on it.
pub fn from_map<K, V>(map: HashMap<K, V>) -> FromMap<K, V> {
    FromMap { map }
}

impl<K, V> Seq for FromMap<K, V> {
    type Item = (K, V);

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        for entry in self.map {
            if consumer(entry).is_stop() {
                return Drive::Stop;
            }
        }
        Drive::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_in_order() {
        assert_eq!(from_slice(&[0, 1, 2, 3, 4]).collect(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_from_slice_empty() {
        assert_eq!(from_slice::<String>(&[]).collect(), Vec::<String>::new());
    }

    #[test]
    fn test_from_vec_moves_items() {
        let out = from_vec(vec!["a".to_string(), "b".to_string()]).collect();
        assert_eq!(out, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_reverse_slice() {
        assert_eq!(reverse_slice(&[1, 2, 3]).collect(), vec![3, 2, 1]);
        assert_eq!(reverse_slice::<i32>(&[]).collect(), Vec::<i32>::new());
    }

    #[test]
    fn test_from_map_yields_every_entry() {
        let map = HashMap::from([(0, 1), (1, 2), (2, 3), (3, 4)]);
        let mut sums: Vec<_> = from_map(map).collect().into_iter().map(|(k, v)| k + v).collect();
        sums.sort();
        assert_eq!(sums, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_from_map_empty() {
        let map: HashMap<i32, i32> = HashMap::new();
        assert_eq!(from_map(map).collect(), Vec::<(i32, i32)>::new());
    }
}
