use crate::{bridge::bridge, Flow, Seq};

/// Produces at most `n` elements of a sequence. Created via [`take`].
#[derive(Debug, Clone)]
pub struct Take<S> {
    seq: S,
    n: usize,
}

/// Produce at most the first `n` elements of `seq`.
///
/// Works on infinite sequences. With `n == 0` nothing is produced and the
/// source is never started.
///
/// ```
/// use seqtools::prelude::*;
///
/// assert_eq!(take(count(), 4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert!(take(count(), 0).collect::<Vec<_>>().is_empty());
/// ```
pub fn take<S>(seq: S, n: usize) -> Take<S>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    Take { seq, n }
}

impl<S> Seq for Take<S>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    type Item = S::Item;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        if self.n == 0 {
            return Flow::Continue;
        }

        let mut cursor = bridge(self.seq);
        for _ in 0..self.n {
            let Some(item) = cursor.advance() else {
                break;
            };
            if sink(item).is_stop() {
                return Flow::Stop;
            }
        }
        cursor.release();
        Flow::Continue
    }
}
