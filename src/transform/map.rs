//! Element-wise transforms: mapping, filtering, numbering and running folds.

use crate::{Flow, Seq};

/// Transforms every element of the wrapped sequence.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence that applies `f` to every element of `seq`.
///
/// # Examples
///
/// ```
/// use seqtools::prelude::*;
///
/// let shouted: Vec<String> = map(vec!["fig", "date"].into_seq(), |s| s.to_uppercase()).collect();
/// assert_eq!(shouted, vec!["FIG", "DATE"]);
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

    fn drive<G>(self, mut sink: G) -> Flow
    where
        G: FnMut(U) -> Flow,
    {
        let Map { seq, mut f } = self;
        seq.drive(|item| sink(f(item)))
    }
}

/// Keeps the elements matching a predicate.
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    seq: S,
    pred: P,
}

/// Create a sequence of the elements of `seq` for which `pred` holds.
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

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let Filter { seq, mut pred } = self;
        seq.drive(|item| {
            if pred(&item) {
                sink(item)
            } else {
                Flow::Continue
            }
        })
    }
}

/// Keeps the elements *not* matching a predicate.
#[derive(Debug, Clone)]
pub struct FilterFalse<S, P> {
    seq: S,
    pred: P,
}

/// Create a sequence of the elements of `seq` for which `pred` fails.
///
/// ```
/// use seqtools::prelude::*;
///
/// let big: Vec<i32> = filter_false(vec![1, 4, 6, 3, 8].into_seq(), |x| *x < 5).collect();
/// assert_eq!(big, vec![6, 8]);
/// ```
pub fn filter_false<S, P>(seq: S, pred: P) -> FilterFalse<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    FilterFalse { seq, pred }
}

impl<S, P> Seq for FilterFalse<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(self, sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let FilterFalse { seq, mut pred } = self;
        filter(seq, move |item: &S::Item| !pred(item)).drive(sink)
    }
}

/// Pairs every element with its position. Created via [`enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    seq: S,
}

/// Create a sequence of `(index, element)` pairs, counting from zero.
pub fn enumerate<S: Seq>(seq: S) -> Enumerate<S> {
    Enumerate { seq }
}

impl<S: Seq> Seq for Enumerate<S> {
    type Item = (usize, S::Item);

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut index = 0;
        self.seq.drive(|item| {
            let flow = sink((index, item));
            index += 1;
            flow
        })
    }
}

/// Running fold over a sequence. Created via [`accumulate`].
#[derive(Debug, Clone)]
pub struct Accumulate<S, F> {
    seq: S,
    op: F,
}

/// Create a sequence of running results of `op`.
///
/// The first element is produced as-is and seeds the accumulator; every later
/// element `x` produces `op(acc, x)`.
///
/// ```
/// use seqtools::prelude::*;
///
/// let products: Vec<i32> = accumulate(vec![1, 2, 3, 4].into_seq(), |a, b| a * b).collect();
/// assert_eq!(products, vec![1, 2, 6, 24]);
/// ```
pub fn accumulate<S, F>(seq: S, op: F) -> Accumulate<S, F>
where
    S: Seq,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Accumulate { seq, op }
}

impl<S, F> Seq for Accumulate<S, F>
where
    S: Seq,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    type Item = S::Item;

    fn drive<G>(self, mut sink: G) -> Flow
    where
        G: FnMut(Self::Item) -> Flow,
    {
        let Accumulate { seq, mut op } = self;
        let mut acc: Option<S::Item> = None;
        seq.drive(|item| {
            let next = match acc.take() {
                Some(prev) => op(prev, item),
                None => item,
            };
            acc = Some(next.clone());
            sink(next)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build::count, IntoSeq};

    #[test]
    fn test_map_preserves_order() {
        let out: Vec<i32> = vec![1, 2, 3].into_seq().map(|x| x * 2).collect();
        assert_eq!(out, vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_and_filter_false_partition() {
        let source = vec![1, 4, 6, 3, 8].into_seq();
        let small: Vec<i32> = source.clone().filter(|x| *x < 5).collect();
        let large: Vec<i32> = source.filter_false(|x| *x < 5).collect();
        assert_eq!(small, vec![1, 4, 3]);
        assert_eq!(large, vec![6, 8]);
    }

    #[test]
    fn test_enumerate_keys_match_values() {
        let pairs: Vec<(usize, usize)> = count().enumerate().take(4).collect();
        for (index, value) in pairs {
            assert_eq!(index, value);
        }
    }

    #[test]
    fn test_accumulate_running_sums() {
        let sums: Vec<i32> = vec![1, 2, 3].into_seq().accumulate(|a, b| a + b).collect();
        assert_eq!(sums, vec![1, 3, 6]);
    }

    #[test]
    fn test_map_propagates_stop() {
        let mut calls = 0;
        let flow = count()
            .map(|x| {
                calls += 1;
                x
            })
            .drive(|x| if x == 4 { Flow::Stop } else { Flow::Continue });
        assert_eq!(flow, Flow::Stop);
        assert_eq!(calls, 5);
    }
}
