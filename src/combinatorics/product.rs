use std::iter::FusedIterator;

use super::{pick_each, Progress};

/// Cartesian product of several pools, in odometer order.
///
/// Created via [`product`] or [`product_repeat`]. The rightmost pool varies
/// fastest.
#[derive(Debug, Clone)]
pub struct Product<T> {
    pools: Vec<Vec<T>>,
    indices: Vec<usize>,
    progress: Progress,
}

/// Enumerate one element from each pool, for every combination of choices.
///
/// Any empty pool makes the product empty. No pools at all gives a single
/// empty selection.
///
/// The result is an [`Iterator`] of `Vec<T>` selections; call
/// [`into_seq`](crate::IntoSeq::into_seq) on it to drive it as a [`Seq`](crate::Seq).
///
/// ```
/// use seqtools::product;
///
/// let words: Vec<String> = product(["AB".chars(), "xy".chars()])
///     .map(String::from_iter)
///     .collect();
/// assert_eq!(words, vec!["Ax", "Ay", "Bx", "By"]);
/// ```
pub fn product<I>(pools: I) -> Product<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: Clone,
{
    let pools: Vec<Vec<_>> = pools
        .into_iter()
        .map(|pool| pool.into_iter().collect())
        .collect();
    Product::new(pools)
}

/// Cartesian power: the product of `k` copies of `pool`.
///
/// The result is an [`Iterator`] of `Vec<T>` selections; call
/// [`into_seq`](crate::IntoSeq::into_seq) on it to drive it as a [`Seq`](crate::Seq).
///
/// ```
/// use seqtools::product_repeat;
///
/// assert_eq!(product_repeat([0, 1], 3).count(), 8);
/// assert_eq!(product_repeat([0, 1], 0).collect::<Vec<_>>(), vec![Vec::<i32>::new()]);
/// ```
pub fn product_repeat<I>(pool: I, k: usize) -> Product<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<_> = pool.into_iter().collect();
    Product::new(vec![pool; k])
}

impl<T> Product<T> {
    fn new(pools: Vec<Vec<T>>) -> Self {
        let progress = if pools.iter().any(Vec::is_empty) {
            Progress::Done
        } else {
            Progress::Fresh
        };
        Self {
            indices: vec![0; pools.len()],
            pools,
            progress,
        }
    }

    /// Tick the odometer; `false` once the last index vector was produced.
    fn advance(&mut self) -> bool {
        for (index, pool) in self.indices.iter_mut().zip(&self.pools).rev() {
            *index += 1;
            if *index < pool.len() {
                return true;
            }
            *index = 0;
        }
        false
    }
}

impl<T: Clone> Iterator for Product<T> {
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
        Some(pick_each(&self.pools, &self.indices))
    }
}

impl<T: Clone> FusedIterator for Product<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_product_odometer_order() {
        let rows: Vec<Vec<i32>> = product(vec![vec![1, 2], vec![3], vec![4, 5]]).collect();
        assert_eq!(
            rows,
            vec![vec![1, 3, 4], vec![1, 3, 5], vec![2, 3, 4], vec![2, 3, 5]]
        );
    }

    #[test]
    fn test_product_edge_cases() {
        assert_eq!(product(vec![vec![1, 2], vec![]]).count(), 0);
        assert_eq!(
            product(Vec::<Vec<u8>>::new()).collect::<Vec<_>>(),
            vec![Vec::<u8>::new()]
        );
        assert_eq!(product_repeat(Vec::<u8>::new(), 2).count(), 0);
        assert_eq!(product_repeat(Vec::<u8>::new(), 0).count(), 1);
    }

    #[test]
    fn test_product_repeat_matches_explicit_copies() {
        let repeated: Vec<_> = product_repeat("ab".chars(), 2).collect();
        let explicit: Vec<_> = product(["ab".chars(), "ab".chars()]).collect();
        assert_eq!(repeated, explicit);
    }

    proptest! {
        #[test]
        fn test_product_count_and_order(lens in proptest::collection::vec(0usize..4, 0..4)) {
            let rows: Vec<Vec<usize>> = product(lens.iter().map(|&len| 0..len)).collect();
            prop_assert_eq!(rows.len(), lens.iter().product::<usize>());
            prop_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
