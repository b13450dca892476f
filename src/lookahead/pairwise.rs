use crate::{bridge::bridge, Flow, Seq};

/// Produces overlapping pairs of neighbours. Created via [`pairwise`].
#[derive(Debug, Clone)]
pub struct Pairwise<S> {
    seq: S,
}

/// Produce `(previous, current)` for every element of `seq` after the first.
///
/// Sequences with fewer than two elements produce nothing.
///
/// ```
/// use seqtools::prelude::*;
///
/// let pairs: Vec<(char, char)> = pairwise("ABCD".chars().into_seq()).collect();
/// assert_eq!(pairs, vec![('A', 'B'), ('B', 'C'), ('C', 'D')]);
/// ```
pub fn pairwise<S>(seq: S) -> Pairwise<S>
where
    S: Seq + Send + 'static,
    S::Item: Clone + Send + 'static,
{
    Pairwise { seq }
}

impl<S> Seq for Pairwise<S>
where
    S: Seq + Send + 'static,
    S::Item: Clone + Send + 'static,
{
    type Item = (S::Item, S::Item);

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut cursor = bridge(self.seq);
        let Some(mut previous) = cursor.advance() else {
            return Flow::Continue;
        };
        while let Some(current) = cursor.advance() {
            let pair = (previous, current.clone());
            if sink(pair).is_stop() {
                return Flow::Stop;
            }
            previous = current;
        }
        Flow::Continue
    }
}
