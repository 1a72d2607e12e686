//! Demand-driven pull adapter over a push-model sequence.
//!
//! A [`Seq`] only knows how to push its elements into a consumer. Several
//! combinators, however, need to advance two sequences independently, or
//! consume a prefix of a sequence and resume it later, progress that does
//! not fit a single nested traversal. [`Cursor`] inverts control: it runs
//! the sequence's traversal on a worker thread that stays parked on a
//! synchronous handoff, so each [`next`](Cursor::next) call resumes
//! production for exactly one element and then parks it again.
//!
//! The worker never runs ahead of demand: the underlying sequence does not
//! start producing until the first `next` call, and it computes element
//! N + 1 only after the N + 1-th request. Dropping (or
//! [`release`](Cursor::release)-ing) the cursor closes both handoff
//! channels and joins the worker, so abandoning a partially-consumed
//! sequence, including during a panic unwind, leaves no thread behind.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut cursor = from_slice(&[10, 20]).cursor();
//! assert_eq!(cursor.next(), Some(10));
//! assert_eq!(cursor.next(), Some(20));
//! assert_eq!(cursor.next(), None);
//! ```

use std::panic;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use crate::{Drive, Seq};

/// A pull handle over a sequence: request the next element, or release early.
pub struct Cursor<T> {
    demand: Option<SyncSender<()>>,
    items: Option<Receiver<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Cursor<T> {
    /// Start a cursor over `seq`.
    ///
    /// The sequence is moved to a worker thread but stays suspended until
    /// the first [`next`](Cursor::next) call.
    pub fn new<S>(seq: S) -> Cursor<T>
    where
        S: Seq<Item = T> + Send + 'static,
    {
        let (demand_tx, demand_rx) = mpsc::sync_channel::<()>(0);
        let (item_tx, item_rx) = mpsc::sync_channel::<T>(0);
        let worker = thread::spawn(move || {
            // Park until the first request so creation alone produces nothing.
            if demand_rx.recv().is_err() {
                return;
            }
            seq.drive(|item| {
                if item_tx.send(item).is_err() {
                    return Drive::Stop;
                }
                match demand_rx.recv() {
                    Ok(()) => Drive::Continue,
                    Err(_) => Drive::Stop,
                }
            });
        });
        Cursor {
            demand: Some(demand_tx),
            items: Some(item_rx),
            worker: Some(worker),
        }
    }
}

impl<T> Cursor<T> {
    /// Request the next element.
    ///
    /// Returns `None` once the sequence is exhausted or the cursor has been
    /// released. If caller-supplied code inside the sequence panicked, the
    /// panic resurfaces here.
    pub fn next(&mut self) -> Option<T> {
        let demand = self.demand.as_ref()?;
        if demand.send(()).is_err() {
            // Worker already gone; reap it and report exhaustion.
            self.release();
            return None;
        }
        match self.items.as_ref()?.recv() {
            Ok(item) => Some(item),
            Err(_) => {
                self.release();
                None
            }
        }
    }

    /// Stop the underlying production and reclaim the worker.
    ///
    /// Safe to call any number of times; also invoked by `Drop`, so every
    /// exit path releases the cursor.
    pub fn release(&mut self) {
        // Closing both channels first unblocks the worker wherever it is
        // parked, so the join below cannot deadlock.
        self.demand.take();
        self.items.take();
        if let Some(worker) = self.worker.take() {
            if let Err(payload) = worker.join() {
                if !thread::panicking() {
                    panic::resume_unwind(payload);
                }
            }
        }
    }
}

impl<T> Drop for Cursor<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_slice, with_func};
    use crate::iter::from_iter;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn test_next_until_exhausted() {
        let mut cursor = Cursor::new(from_slice(&[1, 2, 3]));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), Some(3));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_empty_sequence_is_immediately_exhausted() {
        let mut cursor = Cursor::new(from_iter(0..0));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_production_is_demand_driven() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let mut cursor = Cursor::new(with_func(move || {
            counted.fetch_add(1, Ordering::SeqCst) as i32
        }));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        cursor.release();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_release_of_partially_consumed_infinite_sequence() {
        let mut cursor = Cursor::new(with_func(|| 7));
        assert_eq!(cursor.next(), Some(7));
        cursor.release();
        cursor.release();
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_drop_terminates_worker() {
        let cursor = Cursor::new(with_func(|| "looping"));
        drop(cursor);
    }

    #[test]
    #[should_panic(expected = "generator exploded")]
    fn test_producer_panic_resurfaces_on_next() {
        let mut cursor = Cursor::new(with_func(|| -> i32 { panic!("generator exploded") }));
        cursor.next();
    }
}
