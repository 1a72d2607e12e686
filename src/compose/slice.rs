use crate::{Cursor, Drive, Seq};

/// Prefix of a sequence delimited by a predicate.
pub struct TakeWhile<S, P> {
    seq: S,
    pred: P,
}

/// Yield elements of `seq` while `pred` holds, stopping at the first failure.
///
/// The element that fails the predicate is consumed but not yielded.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let prefix = take_while(from_iter(0..10), |v| *v < 4);
/// assert_eq!(prefix.collect(), vec![0, 1, 2, 3]);
/// ```
pub fn take_while<S, P>(seq: S, pred: P) -> TakeWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile { seq, pred }
}

impl<S, P> Seq for TakeWhile<S, P>
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
        // A predicate failure stops the inner traversal but reads as natural
        // exhaustion to the caller; only a consumer stop may surface as Stop.
        let mut stopped_by_consumer = false;
        self.seq.drive(|item| {
            if !pred(&item) {
                return Drive::Stop;
            }
            let signal = consumer(item);
            if signal.is_stop() {
                stopped_by_consumer = true;
            }
            signal
        });
        Drive::from_continue(!stopped_by_consumer)
    }
}

/// First `n` elements of a sequence.
pub struct Take<S> {
    seq: S,
    n: usize,
}

/// Yield at most the first `n` elements of `seq`.
///
/// `take(seq, 0)` yields nothing, and the cut-off never counts as an early
/// stop toward upstream combinators.
pub fn take<S: Seq>(seq: S, n: usize) -> Take<S> {
    Take { seq, n }
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn drive<F>(self, consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let mut remaining = self.n;
        take_while(self.seq, move |_| {
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            true
        })
        .drive(consumer)
    }
}

/// Suffix of a sequence past its predicate-matching prefix.
pub struct DropWhile<S, P> {
    seq: S,
    pred: P,
}

/// Discard the leading run of elements for which `pred` holds, then yield
/// the rest.
///
/// The predicate is not consulted again once it has failed: later elements
/// that happen to satisfy it are still yielded.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let rest = drop_while(from_iter(0..5), |v| *v < 3);
/// assert_eq!(rest.collect(), vec![3, 4]);
/// ```
pub fn drop_while<S, P>(seq: S, pred: P) -> DropWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    DropWhile { seq, pred }
}

impl<S, P> Seq for DropWhile<S, P>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let mut pred = self.pred;
        let mut cursor = Cursor::new(self.seq);
        let first_kept = loop {
            match cursor.next() {
                Some(item) if pred(&item) => continue,
                other => break other,
            }
        };
        let Some(first_kept) = first_kept else {
            return Drive::Continue;
        };
        if consumer(first_kept).is_stop() {
            return Drive::Stop;
        }
        while let Some(item) = cursor.next() {
            if consumer(item).is_stop() {
                return Drive::Stop;
            }
        }
        Drive::Continue
    }
}

/// Elements of a sequence after the first `n`.
pub struct DropN<S> {
    seq: S,
    n: usize,
}

/// Discard the first `n` elements of `seq`, then yield the rest.
///
/// `drop_n(seq, 0)` yields everything; dropping more elements than the
/// sequence holds yields nothing.
pub fn drop_n<S: Seq>(seq: S, n: usize) -> DropN<S> {
    DropN { seq, n }
}

impl<S> Seq for DropN<S>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    type Item = S::Item;

    fn drive<F>(self, consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let mut remaining = self.n;
        drop_while(self.seq, move |_| {
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            true
        })
        .drive(consumer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_slice, with_func};
    use crate::iter::from_iter;

    #[test]
    fn test_take_while_stops_at_first_failure() {
        let out = take_while(from_slice(&[1, 2, 5, 1, 2]), |v| *v < 3).collect();
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_take_while_pred_never_holds() {
        let out = take_while(from_iter(0..5), |_| false).collect();
        assert_eq!(out, Vec::<i32>::new());
    }

    #[test]
    fn test_take_while_pred_always_holds() {
        let out = take_while(from_iter(0..5), |_| true).collect();
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_take_while_failure_reads_as_exhaustion() {
        let ended = take_while(from_iter(0..10), |v| *v < 2).drive(|_| Drive::Continue);
        assert!(ended.is_continue());
    }

    #[test]
    fn test_take_bounds_infinite_sequence() {
        let out = take(with_func(|| 9), 4).collect();
        assert_eq!(out, vec![9, 9, 9, 9]);
    }

    #[test]
    fn test_take_zero() {
        assert_eq!(take(from_iter(0..5), 0).collect(), Vec::<i32>::new());
    }

    #[test]
    fn test_take_more_than_available() {
        assert_eq!(take(from_iter(0..3), 10).collect(), vec![0, 1, 2]);
    }

    #[test]
    fn test_drop_while_keeps_suffix() {
        let out = drop_while(from_iter(0..5), |v| *v < 3).collect();
        assert_eq!(out, vec![3, 4]);
    }

    #[test]
    fn test_drop_while_pred_not_reconsulted() {
        let out = drop_while(from_slice(&[1, 1, 5, 1, 1]), |v| *v < 3).collect();
        assert_eq!(out, vec![5, 1, 1]);
    }

    #[test]
    fn test_drop_while_drops_everything() {
        let out = drop_while(from_iter(0..5), |_| true).collect();
        assert_eq!(out, Vec::<i32>::new());
    }

    #[test]
    fn test_drop_while_early_stop_releases_cursor() {
        let ended = drop_while(with_func(|| 1), |_| false).drive(|_| Drive::Stop);
        assert!(ended.is_stop());
    }

    #[test]
    fn test_drop_n() {
        assert_eq!(drop_n(from_iter(0..5), 2).collect(), vec![2, 3, 4]);
        assert_eq!(drop_n(from_iter(0..5), 0).collect(), vec![0, 1, 2, 3, 4]);
        assert_eq!(drop_n(from_iter(0..3), 10).collect(), Vec::<i32>::new());
    }
}
