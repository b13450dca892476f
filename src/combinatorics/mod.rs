//! Combinatorial enumerators over a fixed pool.
//!
//! Unlike the rest of the crate these are plain [`Iterator`]s: the pool is
//! collected into a `Vec` up front and each step derives the next index vector
//! from the previous one, so no bridge or worker is involved. Every selection
//! is produced as a fresh `Vec<T>`. Lift an enumerator with
//! [`into_seq`](crate::IntoSeq::into_seq) to use it as a [`Seq`](crate::Seq).
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let pairs: Vec<String> = combinations("ABCD".chars(), 2)
//!     .map(|pick| pick.into_iter().collect())
//!     .collect();
//! assert_eq!(pairs, vec!["AB", "AC", "AD", "BC", "BD", "CD"]);
//!
//! let grid = product_repeat(0..2, 2).into_seq().batched(2).collect::<Vec<_>>();
//! assert_eq!(grid.len(), 2);
//! ```

mod combinations;
mod permutations;
mod product;

pub use combinations::{
    combinations, combinations_with_replacement, Combinations, CombinationsWithReplacement,
};
pub use permutations::{permutations, Permutations};
pub use product::{product, product_repeat, Product};

/// Materialize the selection addressed by `indices`.
fn pick<T: Clone>(pool: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| pool[i].clone()).collect()
}

/// Like [`pick`], with one pool per position.
fn pick_each<T: Clone>(pools: &[Vec<T>], indices: &[usize]) -> Vec<T> {
    pools
        .iter()
        .zip(indices)
        .map(|(pool, &i)| pool[i].clone())
        .collect()
}

/// Where an enumerator is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
    /// The initial index vector has not been produced yet.
    Fresh,
    Running,
    Done,
}
