//! Core trait for push-based lazy sequences.
//!
//! A [`Seq`] is a producer that owns the control flow: it is handed a sink and
//! calls it once per element, in order, until it runs out or the sink answers
//! [`Flow::Stop`]. Nothing is materialized; every combinator below wraps the
//! sequence it is given and does its work while the outer sink is driven.
//!
//! Pulling elements one at a time requires suspending the producer between
//! elements. That is what [`bridge`](crate::bridge) does, and the combinators
//! that need lookahead ([`take`](Seq::take), [`pairwise`](Seq::pairwise),
//! [`group_by`](Seq::group_by), [`zip`](Seq::zip), [`broadcast`](Seq::broadcast))
//! go through it.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let evens: Vec<i32> = (1..=10)
//!     .into_seq()
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .collect();
//! assert_eq!(evens, vec![20, 40, 60, 80, 100]);
//! ```

use either::Either;

use crate::{
    bridge::{BridgeConfig, Cursor},
    broadcast::Tee,
    build::Cycle,
    lookahead::{GroupBy, Pairwise, Take},
    transform::{
        Accumulate, Batched, Chain, Compress, DropWhile, Enumerate, Filter, FilterFalse, Map,
        Slice, TakeWhile,
    },
    zip::Zip,
    Result,
};

/// Answer a sink gives after receiving an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Keep producing.
    Continue,
    /// Stop producing immediately; the sink must not be called again.
    Stop,
}

impl Flow {
    /// Returns `true` for [`Flow::Stop`].
    #[inline]
    pub const fn is_stop(self) -> bool {
        matches!(self, Flow::Stop)
    }

    /// Returns `true` for [`Flow::Continue`].
    #[inline]
    pub const fn is_continue(self) -> bool {
        matches!(self, Flow::Continue)
    }
}

/// A lazy, possibly infinite, push-based sequence of elements.
///
/// `drive` calls `sink` once per element, in order. It returns as soon as the
/// sink answers [`Flow::Stop`] and never calls the sink after that. The
/// returned [`Flow`] is `Stop` exactly when the sink requested the stop, and
/// `Continue` when the sequence ran out on its own (including when a bounding
/// combinator such as [`take`](Seq::take) decided it was done).
///
/// A sequence is consumed by driving it. Sequences that can be replayed
/// implement [`Clone`]; those built from collections do.
pub trait Seq {
    /// Type of the produced elements.
    type Item;

    /// Push every element into `sink` until it stops or the source runs out.
    fn drive<F>(self, sink: F) -> Flow
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Flow;

    /// Drive the sequence to the end, calling `f` for every element.
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.drive(|item| {
            f(item);
            Flow::Continue
        });
    }

    /// Drive the sequence to the end, gathering the elements into a collection.
    ///
    /// Never call this on an unbounded sequence.
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: Default + Extend<Self::Item>,
    {
        let mut out = C::default();
        self.drive(|item| {
            out.extend(Some(item));
            Flow::Continue
        });
        out
    }

    /// Transform every element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        crate::transform::map(self, f)
    }

    /// Keep the elements matching `pred`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::transform::filter(self, pred)
    }

    /// Keep the elements *not* matching `pred`.
    fn filter_false<P>(self, pred: P) -> FilterFalse<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::transform::filter_false(self, pred)
    }

    /// Pair every element with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        crate::transform::enumerate(self)
    }

    /// Produce this sequence, then `next`.
    fn chain<R>(self, next: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Seq<Item = Self::Item>,
    {
        crate::transform::chain(self, next)
    }

    /// Running fold; the first element seeds the accumulator.
    fn accumulate<F>(self, op: F) -> Accumulate<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        crate::transform::accumulate(self, op)
    }

    /// Group elements into vectors of `size`; the last batch may be shorter.
    fn batched(self, size: usize) -> Batched<Self>
    where
        Self: Sized,
    {
        crate::transform::batched(self, size)
    }

    /// Keep the elements whose matching selector is `true`.
    fn compress<B>(self, selectors: B) -> Compress<Self>
    where
        Self: Sized,
        B: IntoIterator<Item = bool>,
    {
        crate::transform::compress(self, selectors)
    }

    /// Skip the leading elements matching `pred`.
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::transform::drop_while(self, pred)
    }

    /// Produce the leading elements matching `pred`.
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::transform::take_while(self, pred)
    }

    /// Produce positions `start..end`; `None` means no upper bound.
    fn slice(self, start: usize, end: Option<usize>) -> Slice<Self>
    where
        Self: Sized,
    {
        crate::transform::slice(self, start, end)
    }

    /// Replay the sequence forever.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized + Clone,
    {
        crate::build::cycle(self)
    }

    /// Produce at most `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        crate::lookahead::take(self, n)
    }

    /// Produce `(previous, current)` for every element after the first.
    fn pairwise(self) -> Pairwise<Self>
    where
        Self: Sized + Send + 'static,
        Self::Item: Clone + Send + 'static,
    {
        crate::lookahead::pairwise(self)
    }

    /// Split runs of equal consecutive elements into groups.
    fn group_by(self) -> GroupBy<Self>
    where
        Self: Sized + Send + 'static,
        Self::Item: PartialEq + Clone + Send + 'static,
    {
        crate::lookahead::group_by(self)
    }

    /// Pair elements with those of `other`, stopping at the shorter one.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Seq + Send + 'static,
        B::Item: Send + 'static,
    {
        crate::zip::zip(self, other)
    }

    /// Turn the sequence into a pull cursor.
    fn cursor(self) -> Cursor<Self::Item>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        crate::bridge::bridge(self)
    }

    /// Turn the sequence into a pull cursor using an explicit worker configuration.
    fn cursor_with(self, config: &BridgeConfig) -> Result<Cursor<Self::Item>>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        Cursor::spawn(self, config)
    }

    /// Split the sequence into `n` independently paced cursors.
    fn broadcast(self, n: usize) -> Vec<Tee<Self::Item>>
    where
        Self: Sized + Send + 'static,
        Self::Item: Clone + Send + 'static,
    {
        crate::broadcast::broadcast(self, n)
    }
}

/// Invoke `seq` with a stopping callback.
///
/// This is [`Seq::drive`] as a free function.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let mut seen = Vec::new();
/// let flow = push(count(), |n| {
///     seen.push(n);
///     if n == 2 { Flow::Stop } else { Flow::Continue }
/// });
/// assert_eq!(flow, Flow::Stop);
/// assert_eq!(seen, vec![0, 1, 2]);
/// ```
pub fn push<S, F>(seq: S, sink: F) -> Flow
where
    S: Seq,
    F: FnMut(S::Item) -> Flow,
{
    seq.drive(sink)
}

impl<L, R> Seq for Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn drive<F>(self, sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        match self {
            Either::Left(l) => l.drive(sink),
            Either::Right(r) => r.drive(sink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build::count, IntoSeq};

    #[test]
    fn test_drive_reports_consumer_stop() {
        let mut seen = Vec::new();
        let flow = vec![1, 2, 3, 4].into_seq().drive(|x| {
            seen.push(x);
            if x == 2 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        });

        assert_eq!(flow, Flow::Stop);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_drive_reports_exhaustion() {
        let flow = vec![1, 2].into_seq().drive(|_| Flow::Continue);
        assert_eq!(flow, Flow::Continue);
    }

    #[test]
    fn test_either_drives_the_active_arm() {
        let pick = |left: bool| {
            if left {
                Either::Left(vec![1, 2].into_seq())
            } else {
                Either::Right(count().slice(5, Some(7)))
            }
        };

        assert_eq!(pick(true).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(pick(false).collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn test_for_each_visits_everything() {
        let mut total = 0;
        (1..=4).into_seq().for_each(|x| total += x);
        assert_eq!(total, 10);
    }
}
