use std::iter::FusedIterator;

use super::{pick, Progress};

/// `r`-length arrangements of distinct pool positions.
///
/// Created via [`permutations`]. Each position `i` of the selection keeps a
/// countdown of the candidates it has not visited yet; exhausting a countdown
/// rotates that position's tail back into place and carries to the left.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    progress: Progress,
}

/// Enumerate the `r`-length arrangements of `pool`.
///
/// `r > pool.len()` produces nothing; `r == 0` produces a single empty
/// arrangement.
///
/// The result is an [`Iterator`] of `Vec<T>` selections; call
/// [`into_seq`](crate::IntoSeq::into_seq) on it to drive it as a [`Seq`](crate::Seq).
///
/// ```
/// use seqtools::permutations;
///
/// let orders: Vec<Vec<u8>> = permutations([0, 1, 2], 3).collect();
/// assert_eq!(orders.len(), 6);
/// assert_eq!(orders[1], vec![0, 2, 1]);
/// ```
pub fn permutations<I>(pool: I, r: usize) -> Permutations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<_> = pool.into_iter().collect();
    let n = pool.len();
    if r > n {
        return Permutations {
            pool,
            indices: Vec::new(),
            cycles: Vec::new(),
            progress: Progress::Done,
        };
    }
    Permutations {
        pool,
        indices: (0..n).collect(),
        cycles: (0..r).map(|i| n - i).collect(),
        progress: Progress::Fresh,
    }
}

impl<T> Permutations<T> {
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        for i in (0..self.cycles.len()).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return true;
            }
        }
        false
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        match self.progress {
            Progress::Done => return None,
            Progress::Fresh => self.progress = Progress::Running,
            Progress::Running => {
                if !self.advance() {
                    self.progress = Progress::Done;
                    return None;
                }
            }
        }
        let r = self.cycles.len();
        Some(pick(&self.pool, &self.indices[..r]))
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flow, IntoSeq, Seq};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn falling_factorial(n: usize, r: usize) -> usize {
        if r > n {
            return 0;
        }
        (n - r + 1..=n).product()
    }

    #[test]
    fn test_permutations_generation_order() {
        let orders: Vec<String> = permutations("012".chars(), 3)
            .map(String::from_iter)
            .collect();
        assert_eq!(orders, vec!["012", "021", "102", "120", "201", "210"]);
    }

    #[test]
    fn test_partial_permutations() {
        let orders: Vec<String> = permutations("ABC".chars(), 2)
            .map(String::from_iter)
            .collect();
        assert_eq!(orders, vec!["AB", "AC", "BA", "BC", "CA", "CB"]);
    }

    #[test]
    fn test_permutations_edge_sizes() {
        assert_eq!(permutations([1, 2], 3).count(), 0);
        assert_eq!(
            permutations([1, 2], 0).collect::<Vec<_>>(),
            vec![Vec::<i32>::new()]
        );
        assert_eq!(
            permutations(Vec::<u8>::new(), 0).collect::<Vec<_>>(),
            vec![Vec::<u8>::new()]
        );
    }

    #[test]
    fn test_lifted_permutations_honor_consumer_stop() {
        let mut seen = Vec::new();
        let flow = permutations([1, 2, 3], 2).into_seq().drive(|order| {
            seen.push(order);
            if seen.len() == 2 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        assert_eq!(flow, Flow::Stop);
        assert_eq!(seen, vec![vec![1, 2], vec![1, 3]]);
    }

    proptest! {
        #[test]
        fn test_permutations_count_and_distinctness(n in 0usize..6, r in 0usize..6) {
            let orders: Vec<Vec<usize>> = permutations(0..n, r).collect();
            prop_assert_eq!(orders.len(), falling_factorial(n, r));

            let unique: HashSet<&Vec<usize>> = orders.iter().collect();
            prop_assert_eq!(unique.len(), orders.len());
            for order in &orders {
                let positions: HashSet<&usize> = order.iter().collect();
                prop_assert_eq!(positions.len(), r);
            }
        }
    }
}
