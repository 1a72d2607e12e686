use crate::{Cursor, Drive, Seq};

/// Two sequences paired element by element.
pub struct ZipShortest<A, B> {
    a: A,
    b: B,
}

/// Pair up elements of `a` and `b`, stopping as soon as either side runs out.
///
/// Each round pulls one element from both sides, so when one side is
/// exhausted the element already pulled from the other is discarded.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = zip_shortest(from_slice(&[1, 2, 3]), from_slice(&["a", "b"]));
/// assert_eq!(pairs.collect(), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip_shortest<A, B>(a: A, b: B) -> ZipShortest<A, B>
where
    A: Seq,
    B: Seq,
{
    ZipShortest { a, b }
}

impl<A, B> Seq for ZipShortest<A, B>
where
    A: Seq + Send + 'static,
    A::Item: Send + 'static,
    B: Seq + Send + 'static,
    B::Item: Send + 'static,
{
    type Item = (A::Item, B::Item);

    fn drive<F>(self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Drive,
    {
        let mut a = Cursor::new(self.a);
        let mut b = Cursor::new(self.b);
        loop {
            let (Some(x), Some(y)) = (a.next(), b.next()) else {
                return Drive::Continue;
            };
            if consumer((x, y)).is_stop() {
                return Drive::Stop;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_slice, with_func};
    use crate::iter::from_iter;
    use crate::Seq;

    #[test]
    fn test_zip_equal_lengths() {
        let out = zip_shortest(from_slice(&[1, 2]), from_slice(&["a", "b"])).collect();
        assert_eq!(out, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_zip_truncates_to_shorter() {
        let out = zip_shortest(from_iter(0..5), from_slice(&["a", "b"])).collect();
        assert_eq!(out, vec![(0, "a"), (1, "b")]);

        let out = zip_shortest(from_slice(&["a", "b"]), from_iter(0..5)).collect();
        assert_eq!(out, vec![("a", 0), ("b", 1)]);
    }

    #[test]
    fn test_zip_with_empty_side() {
        let out = zip_shortest(from_iter(0..0), from_slice(&[1, 2])).collect();
        assert_eq!(out, Vec::<(i32, i32)>::new());
    }

    #[test]
    fn test_zip_infinite_with_finite() {
        let mut n = 0;
        let naturals = with_func(move || {
            n += 1;
            n
        });
        let out = zip_shortest(naturals, from_slice(&["a", "b", "c"])).collect();
        assert_eq!(out, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_zip_early_stop() {
        let mut seen = Vec::new();
        let ended = zip_shortest(from_iter(0..10), from_iter(10..20)).drive(|pair| {
            seen.push(pair);
            crate::Drive::from_continue(seen.len() < 2)
        });
        assert!(ended.is_stop());
        assert_eq!(seen, vec![(0, 10), (1, 11)]);
    }
}
