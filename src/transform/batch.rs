use std::mem;

use crate::{Flow, Seq};

/// Groups elements into fixed-size vectors. Created via [`batched`].
#[derive(Debug, Clone)]
pub struct Batched<S> {
    seq: S,
    size: usize,
}

/// Group the elements of `seq` into vectors of `size`.
///
/// The final batch holds whatever is left and may be shorter. A `size` of zero
/// produces nothing.
///
/// ```
/// use seqtools::prelude::*;
///
/// let batches: Vec<Vec<i32>> = batched((1..=8).into_seq(), 3).collect();
/// assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
/// ```
pub fn batched<S: Seq>(seq: S, size: usize) -> Batched<S> {
    Batched { seq, size }
}

impl<S: Seq> Seq for Batched<S> {
    type Item = Vec<S::Item>;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let size = self.size;
        if size == 0 {
            return Flow::Continue;
        }

        let mut batch = Vec::with_capacity(size);
        let flow = self.seq.drive(|item| {
            batch.push(item);
            if batch.len() < size {
                return Flow::Continue;
            }
            sink(mem::replace(&mut batch, Vec::with_capacity(size)))
        });

        if flow.is_stop() || batch.is_empty() {
            return flow;
        }
        sink(batch)
    }
}

/// Filters elements by a parallel list of selectors. Created via [`compress`].
#[derive(Debug, Clone)]
pub struct Compress<S> {
    seq: S,
    selectors: Vec<bool>,
}

/// Keep the elements of `seq` whose selector at the same position is `true`.
///
/// Production ends when either `seq` or the selectors run out.
///
/// ```
/// use seqtools::prelude::*;
///
/// let kept: String = compress("ABCDEFG".chars().into_seq(), [true, false, true, false, true, true]).collect();
/// assert_eq!(kept, "ACEF");
/// ```
pub fn compress<S, B>(seq: S, selectors: B) -> Compress<S>
where
    S: Seq,
    B: IntoIterator<Item = bool>,
{
    Compress {
        seq,
        selectors: selectors.into_iter().collect(),
    }
}

impl<S: Seq> Seq for Compress<S> {
    type Item = S::Item;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        if self.selectors.is_empty() {
            return Flow::Continue;
        }

        let mut selectors = self.selectors.into_iter();
        let mut out_of_selectors = false;
        let flow = self.seq.drive(|item| match selectors.next() {
            Some(true) => sink(item),
            Some(false) => Flow::Continue,
            None => {
                out_of_selectors = true;
                Flow::Stop
            }
        });

        if out_of_selectors {
            Flow::Continue
        } else {
            flow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build::count, IntoSeq};

    #[test]
    fn test_batched_zero_size_is_empty() {
        let batches: Vec<Vec<usize>> = count().batched(0).collect();
        assert!(batches.is_empty());
    }

    #[test]
    fn test_batched_exact_multiple_has_no_trailing_batch() {
        let batches: Vec<Vec<i32>> = vec![1, 2, 3, 4].into_seq().batched(2).collect();
        assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_batched_stop_drops_partial_batch() {
        let mut seen = Vec::new();
        let flow = count().batched(2).drive(|b| {
            seen.push(b);
            Flow::Stop
        });
        assert_eq!(flow, Flow::Stop);
        assert_eq!(seen, vec![vec![0, 1]]);
    }

    #[test]
    fn test_compress_terminates_on_infinite_source() {
        let odd: Vec<usize> = count()
            .compress([false, true, false, true, false, true])
            .collect();
        assert_eq!(odd, vec![1, 3, 5]);
    }
}
