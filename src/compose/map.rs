use crate::{Drive, Seq};

/// Sequence with every element transformed by a function.
pub struct Map<S, F> {
    seq: S,
    f: F,
}

/// Transform every element of `seq` with `f`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(map(from_slice(&[1, 2, 3]), |v| v * 2).collect(), vec![2, 4, 6]);
/// ```
pub fn map<S, U, F>(seq: S, f: F) -> Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U,
{
    Map { seq, f }
}

impl<S, U, F> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn drive<F2>(self, mut consumer: F2) -> Drive
    where
        F2: FnMut(Self::Item) -> Drive,
    {
        let mut f = self.f;
        self.seq.drive(|item| consumer(f(item)))
    }
}

/// Sequence restricted to elements passing a predicate.
pub struct Filter<S, P> {
    seq: S,
    pred: P,
}

/// Keep only the elements of `seq` for which `pred` holds.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let odds = filter(from_iter(0..6), |v| v % 2 == 1);
/// assert_eq!(odds.collect(), vec![1, 3, 5]);
/// ```
pub fn filter<S, P>(seq: S, pred: P) -> Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    Filter { seq, pred }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let mut pred = self.pred;
        self.seq.drive(|item| {
            if pred(&item) {
                consumer(item)
            } else {
                Drive::Continue
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::from_slice;
    use crate::iter::from_iter;

    #[test]
    fn test_map_transforms_in_order() {
        let out = map(from_slice(&[1, 2, 3]), |v| v * v).collect();
        assert_eq!(out, vec![1, 4, 9]);
    }

    #[test]
    fn test_map_changes_type() {
        let out = map(from_slice(&[1, 2]), |v| v.to_string()).collect();
        assert_eq!(out, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_map_empty() {
        assert_eq!(map(from_iter(0..0), |v| v + 1).collect(), Vec::<i32>::new());
    }

    #[test]
    fn test_filter_keeps_matching() {
        let out = filter(from_iter(0..10), |v| v % 3 == 0).collect();
        assert_eq!(out, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_filter_none_match() {
        assert_eq!(
            filter(from_iter(0..10), |_| false).collect(),
            Vec::<i32>::new()
        );
    }

    #[test]
    fn test_filter_all_match() {
        assert_eq!(filter(from_iter(0..4), |_| true).collect(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_filter_propagates_stop() {
        let mut seen = Vec::new();
        let ended = filter(from_iter(0..100), |v| v % 2 == 0).drive(|v| {
            seen.push(v);
            Drive::from_continue(seen.len() < 3)
        });
        assert!(ended.is_stop());
        assert_eq!(seen, vec![0, 2, 4]);
    }
}
