use crate::{Flow, Seq};

/// Skips a leading run of elements. Created via [`drop_while`].
#[derive(Debug, Clone)]
pub struct DropWhile<S, P> {
    seq: S,
    pred: P,
}

/// Skip elements of `seq` while `pred` holds, then produce everything else.
///
/// ```
/// use seqtools::prelude::*;
///
/// let rest: Vec<i32> = drop_while(vec![1, 4, 6, 3, 8].into_seq(), |x| *x < 5).collect();
/// assert_eq!(rest, vec![6, 3, 8]);
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
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let DropWhile { seq, mut pred } = self;
        let mut dropping = true;
        seq.drive(|item| {
            if dropping && pred(&item) {
                return Flow::Continue;
            }
            dropping = false;
            sink(item)
        })
    }
}

/// Produces a leading run of elements. Created via [`take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<S, P> {
    seq: S,
    pred: P,
}

/// Produce elements of `seq` while `pred` holds; the first failure ends the sequence.
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

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let TakeWhile { seq, mut pred } = self;
        let mut failed = false;
        let flow = seq.drive(|item| {
            if pred(&item) {
                sink(item)
            } else {
                failed = true;
                Flow::Stop
            }
        });

        if failed {
            Flow::Continue
        } else {
            flow
        }
    }
}

/// Produces a positional range of elements. Created via [`slice`].
#[derive(Debug, Clone)]
pub struct Slice<S> {
    seq: S,
    start: usize,
    end: Option<usize>,
}

/// Produce the elements of `seq` at positions `start..end`.
///
/// `end = None` leaves the range open. Once `end` is reached the source is
/// stopped, so slicing an infinite sequence terminates.
///
/// ```
/// use seqtools::prelude::*;
///
/// let letters = "ABCDEFG".chars().into_seq();
/// assert_eq!(slice(letters.clone(), 2, Some(4)).collect::<String>(), "CD");
/// assert_eq!(slice(letters, 2, None).collect::<String>(), "CDEFG");
/// ```
pub fn slice<S: Seq>(seq: S, start: usize, end: Option<usize>) -> Slice<S> {
    Slice { seq, start, end }
}

impl<S: Seq> Seq for Slice<S> {
    type Item = S::Item;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let Slice { seq, start, end } = self;
        if end.is_some_and(|end| end <= start) {
            return Flow::Continue;
        }

        let mut position = 0;
        let mut reached_end = false;
        let flow = seq.drive(|item| {
            position += 1;
            if position <= start {
                return Flow::Continue;
            }
            if sink(item).is_stop() {
                return Flow::Stop;
            }
            if end.is_some_and(|end| position >= end) {
                reached_end = true;
                return Flow::Stop;
            }
            Flow::Continue
        });

        if reached_end {
            Flow::Continue
        } else {
            flow
        }
    }
}
