//! Lifting ordinary iterators into push sequences.
//!
//! Rust iterators are already pull-based, so going from pull to push is just a
//! loop. [`IntoSeq`] is implemented for every [`IntoIterator`], which makes
//! collections, ranges, cursors and the combinatorial enumerators usable
//! anywhere a [`Seq`] is expected.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let words: Vec<&str> = vec!["apple", "banana", "cherry"]
//!     .into_seq()
//!     .filter(|w| w.contains('a'))
//!     .collect();
//! assert_eq!(words, vec!["apple", "banana"]);
//! ```

use crate::{Flow, Seq};

/// Push sequence over an iterator.
///
/// Restartable whenever the wrapped iterator is [`Clone`], which is the case
/// for iterators over owned collections and ranges.
#[derive(Debug, Clone)]
pub struct IterSeq<I> {
    iter: I,
}

impl<I> IterSeq<I>
where
    I: Iterator,
{
    /// Wrap an iterator.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Recover the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> Seq for IterSeq<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        for item in self.iter {
            if sink(item).is_stop() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}

/// Conversion of anything iterable into a push sequence.
pub trait IntoSeq: IntoIterator + Sized {
    /// Wrap `self` as a [`Seq`].
    fn into_seq(self) -> IterSeq<Self::IntoIter> {
        IterSeq::new(self.into_iter())
    }
}

impl<T> IntoSeq for T where T: IntoIterator {}

/// Build a push sequence from anything iterable.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let offsets: Vec<u8> = from_iter(*b"abc").map(|b| b - b'a').collect();
/// assert_eq!(offsets, vec![0, 1, 2]);
/// ```
pub fn from_iter<I>(iter: I) -> IterSeq<I::IntoIter>
where
    I: IntoIterator,
{
    iter.into_seq()
}
