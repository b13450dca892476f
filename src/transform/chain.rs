use crate::{Flow, Seq};

/// Produce every element of `first`, then every element of `second`.
///
/// A stop requested by the consumer while `first` is running is final:
/// `second` is never started.
///
/// ```
/// use seqtools::prelude::*;
///
/// let out: Vec<i32> = chain(vec![1, 2, 3].into_seq(), vec![4, 5, 6].into_seq()).collect();
/// assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn chain<L, R>(first: L, second: R) -> Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    Chain { first, second }
}

/// Concatenates two sequences. Created via [`chain`] or [`Seq::chain`].
#[derive(Debug, Clone)]
pub struct Chain<L, R> {
    first: L,
    second: R,
}

impl<L, R> Seq for Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        if self.first.drive(&mut sink).is_stop() {
            return Flow::Stop;
        }
        self.second.drive(sink)
    }
}

/// Produce the sequences in `seqs` one after another.
pub fn chain_all<S, I>(seqs: I) -> ChainAll<S>
where
    S: Seq,
    I: IntoIterator<Item = S>,
{
    ChainAll {
        seqs: seqs.into_iter().collect(),
    }
}

/// Concatenates any number of sequences of one type. Created via [`chain_all`].
#[derive(Debug, Clone)]
pub struct ChainAll<S> {
    seqs: Vec<S>,
}

impl<S: Seq> Seq for ChainAll<S> {
    type Item = S::Item;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        for seq in self.seqs {
            if seq.drive(&mut sink).is_stop() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build::from_fn, IntoSeq};

    #[test]
    fn test_chain_does_not_start_second_after_stop() {
        let second = from_fn(|_sink: &mut dyn FnMut(i32) -> Flow| {
            panic!("second sequence must not start");
        });
        let mut seen = Vec::new();
        let flow = chain(vec![1, 2].into_seq(), second).drive(|x| {
            seen.push(x);
            Flow::Stop
        });

        assert_eq!(flow, Flow::Stop);
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_chain_all_concatenates_in_order() {
        let parts = vec![vec![1, 2].into_seq(), vec![].into_seq(), vec![3].into_seq()];
        let out: Vec<i32> = chain_all(parts).collect();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_chain_with_empty_first() {
        let out: Vec<char> = Vec::new().into_seq().chain("ab".chars().into_seq()).collect();
        assert_eq!(out, vec!['a', 'b']);
    }
}
