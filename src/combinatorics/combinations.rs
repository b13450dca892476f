use std::iter::FusedIterator;

use super::{pick, Progress};

/// `r`-length selections without repetition, in lexicographic index order.
///
/// Created via [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    progress: Progress,
}

/// Enumerate the `r`-length subsequences of `pool`.
///
/// Selections keep pool order and are emitted in lexicographic order of their
/// positions. `r > pool.len()` produces nothing; `r == 0` produces a single
/// empty selection.
///
/// The result is an [`Iterator`] of `Vec<T>` selections; call
/// [`into_seq`](crate::IntoSeq::into_seq) on it to drive it as a [`Seq`](crate::Seq).
///
/// ```
/// use seqtools::combinations;
///
/// let picks: Vec<Vec<u8>> = combinations([1, 2, 3], 2).collect();
/// assert_eq!(picks, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub fn combinations<I>(pool: I, r: usize) -> Combinations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<_> = pool.into_iter().collect();
    let progress = if r > pool.len() {
        Progress::Done
    } else {
        Progress::Fresh
    };
    Combinations {
        pool,
        indices: (0..r).collect(),
        progress,
    }
}

impl<T> Combinations<T> {
    /// Move to the next strictly increasing index vector.
    fn advance(&mut self) -> bool {
        let (n, r) = (self.pool.len(), self.indices.len());
        let Some(i) = (0..r).rev().find(|&i| self.indices[i] != i + n - r) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Iterator for Combinations<T> {
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
        Some(pick(&self.pool, &self.indices))
    }
}

impl<T: Clone> FusedIterator for Combinations<T> {}

/// `r`-length selections that may repeat pool elements, in lexicographic index order.
///
/// Created via [`combinations_with_replacement`].
#[derive(Debug, Clone)]
pub struct CombinationsWithReplacement<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    progress: Progress,
}

/// Enumerate the `r`-length multisets of `pool` as non-decreasing selections.
///
/// An empty pool produces nothing, whatever `r` is. A non-empty pool with
/// `r == 0` produces a single empty selection.
///
/// The result is an [`Iterator`] of `Vec<T>` selections; call
/// [`into_seq`](crate::IntoSeq::into_seq) on it to drive it as a [`Seq`](crate::Seq).
///
/// ```
/// use seqtools::combinations_with_replacement;
///
/// let picks: Vec<String> = combinations_with_replacement("ab".chars(), 2)
///     .map(String::from_iter)
///     .collect();
/// assert_eq!(picks, vec!["aa", "ab", "bb"]);
/// ```
pub fn combinations_with_replacement<I>(pool: I, r: usize) -> CombinationsWithReplacement<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<_> = pool.into_iter().collect();
    let progress = if pool.is_empty() {
        Progress::Done
    } else {
        Progress::Fresh
    };
    CombinationsWithReplacement {
        pool,
        indices: vec![0; r],
        progress,
    }
}

impl<T> CombinationsWithReplacement<T> {
    /// Move to the next non-decreasing index vector.
    fn advance(&mut self) -> bool {
        let last = self.pool.len() - 1;
        let Some(i) = self.indices.iter().rposition(|&index| index != last) else {
            return false;
        };
        let bumped = self.indices[i] + 1;
        self.indices[i..].fill(bumped);
        true
    }
}

impl<T: Clone> Iterator for CombinationsWithReplacement<T> {
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
        Some(pick(&self.pool, &self.indices))
    }
}

impl<T: Clone> FusedIterator for CombinationsWithReplacement<T> {}
