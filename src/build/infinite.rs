use crate::{Flow, Seq};

/// Unbounded counter. Created via [`count`] or [`count_from`].
#[derive(Debug, Clone, Copy)]
pub struct Count {
    start: usize,
}

/// Count up from zero, forever.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// assert_eq!(count().take(3).collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub fn count() -> Count {
    count_from(0)
}

/// Count up from `start`, forever.
pub fn count_from(start: usize) -> Count {
    Count { start }
}

impl Seq for Count {
    type Item = usize;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(usize) -> Flow,
    {
        let mut next = self.start;
        loop {
            if sink(next).is_stop() {
                return Flow::Stop;
            }
            next += 1;
        }
    }
}

/// Replays a restartable sequence forever. Created via [`cycle`].
#[derive(Debug, Clone)]
pub struct Cycle<S> {
    seq: S,
}

/// Replay `seq` forever.
///
/// Each round drives a fresh clone of `seq`. An empty source produces nothing
/// instead of spinning.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let out: Vec<i32> = cycle(vec![1, 2, 3].into_seq()).take(5).collect();
/// assert_eq!(out, vec![1, 2, 3, 1, 2]);
/// ```
pub fn cycle<S>(seq: S) -> Cycle<S>
where
    S: Seq + Clone,
{
    Cycle { seq }
}

impl<S> Seq for Cycle<S>
where
    S: Seq + Clone,
{
    type Item = S::Item;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        loop {
            let mut produced = false;
            let flow = self.seq.clone().drive(|item| {
                produced = true;
                sink(item)
            });
            if flow.is_stop() {
                return Flow::Stop;
            }
            if !produced {
                return Flow::Continue;
            }
        }
    }
}

/// Repeats one value. Created via [`repeat`] or [`repeat_n`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    times: Option<usize>,
}

/// Repeat `value` forever.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value, times: None }
}

/// Repeat `value` exactly `times` times.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// assert_eq!(repeat_n("a", 3).collect::<Vec<_>>(), vec!["a", "a", "a"]);
/// ```
pub fn repeat_n<T: Clone>(value: T, times: usize) -> Repeat<T> {
    Repeat {
        value,
        times: Some(times),
    }
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(T) -> Flow,
    {
        let mut remaining = self.times;
        loop {
            match remaining.as_mut() {
                Some(0) => return Flow::Continue,
                Some(n) => *n -= 1,
                None => {}
            }
            if sink(self.value.clone()).is_stop() {
                return Flow::Stop;
            }
        }
    }
}
