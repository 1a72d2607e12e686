/// Per-element traversal signal, either continuing the traversal or stopping it early.
///
/// `Drive` is returned by consumers to steer a traversal, and by
/// [`Seq::drive`](crate::Seq::drive) to report how the traversal ended:
/// `Stop` means the consumer stopped early, `Continue` means the sequence
/// ran out of elements on its own. Combinators rely on that distinction:
/// [`chain`](crate::chain) only starts its second input when the first one
/// reports `Continue`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::{from_slice, Drive, Seq};
///
/// let mut seen = Vec::new();
/// let ended = from_slice(&[1, 2, 3, 4]).drive(|v| {
///     seen.push(v);
///     if v < 2 { Drive::Continue } else { Drive::Stop }
/// });
/// assert_eq!(seen, vec![1, 2]);
/// assert!(ended.is_stop());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drive {
    /// Keep producing elements.
    Continue,
    /// Stop the traversal; no further elements may be produced.
    Stop,
}

impl Drive {
    /// Returns `true` if the signal is `Continue`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Drive;
    ///
    /// assert!(Drive::Continue.is_continue());
    /// assert!(!Drive::Stop.is_continue());
    /// ```
    #[inline]
    pub const fn is_continue(self) -> bool {
        matches!(self, Drive::Continue)
    }

    /// Returns `true` if the signal is `Stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Drive;
    ///
    /// assert!(Drive::Stop.is_stop());
    /// assert!(!Drive::Continue.is_stop());
    /// ```
    #[inline]
    pub const fn is_stop(self) -> bool {
        matches!(self, Drive::Stop)
    }

    /// Builds a signal from a boolean, `true` meaning `Continue`.
    ///
    /// Convenient when a consumer's decision is already a boolean:
    ///
    /// ```rust
    /// use lazyseq::Drive;
    ///
    /// assert_eq!(Drive::from_continue(true), Drive::Continue);
    /// assert_eq!(Drive::from_continue(false), Drive::Stop);
    /// ```
    #[inline]
    pub const fn from_continue(keep_going: bool) -> Drive {
        if keep_going {
            Drive::Continue
        } else {
            Drive::Stop
        }
    }

    /// Runs `f` only when the signal is `Continue`, returning its signal.
    ///
    /// Threads early termination through sequential phases of a traversal:
    ///
    /// ```rust
    /// use lazyseq::Drive;
    ///
    /// let second_ran = Drive::Stop.and_then(|| unreachable!());
    /// assert_eq!(second_ran, Drive::Stop);
    /// ```
    #[inline]
    pub fn and_then<F>(self, f: F) -> Drive
    where
        F: FnOnce() -> Drive,
    {
        match self {
            Drive::Continue => f(),
            Drive::Stop => Drive::Stop,
        }
    }
}
