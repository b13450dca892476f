//! # Seqtools: Lazy Push Sequences with Pull Bridging
//!
//! Compose lazy, possibly infinite sequences where the producer owns the
//! control flow, and pull from them one element at a time when a combinator
//! needs lookahead.
//!
//! ## Core Traits
//!
//! - **[`Seq`]**: a push sequence, driven by handing it a sink that answers [`Flow`]
//! - **[`IntoSeq`]**: lifts any [`IntoIterator`] into a [`Seq`]
//!
//! Pull sequences are plain [`Iterator`]s. [`bridge`] turns a push sequence
//! into a pull [`Cursor`], suspending the producer on a worker thread between
//! elements.
//!
//! ## Example
//!
//! ```
//! use seqtools::prelude::*;
//!
//! // Running totals of the odd numbers, cut off after four elements
//! let totals: Vec<usize> = count()
//!     .filter_false(|n| n % 2 == 0)
//!     .accumulate(|acc, n| acc + n)
//!     .take(4)
//!     .collect();
//! assert_eq!(totals, vec![1, 4, 9, 16]);
//!
//! // Pull elements on demand, then let the producer unwind
//! let mut cursor = bridge(repeat_n('z', 3));
//! assert_eq!(cursor.advance(), Some('z'));
//! cursor.release();
//! assert_eq!(cursor.state(), CursorState::Released);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`count()`], [`repeat(value)`](repeat), [`cycle(seq)`](cycle) - Infinite sequences
//! - [`from_fn(f)`](from_fn) - Sequence from a producer closure
//! - [`from_iter(iter)`](from_iter) - Sequence from anything iterable
//!
//! **Lookahead (bridged):**
//! - [`take(seq, n)`](take), [`pairwise(seq)`](pairwise), [`group_by(seq)`](group_by)
//! - [`broadcast(seq, n)`](broadcast) - `n` independently paced cursors
//! - [`zip(a, b)`](zip), [`zip3`], [`zip4`] - Lockstep iteration
//!
//! **Enumerators:**
//! - [`combinations`], [`combinations_with_replacement`], [`permutations`]
//! - [`product`], [`product_repeat`]

mod error;
mod iter;
mod seq;
mod step;

pub mod bridge;
pub mod broadcast;
pub mod build;
pub mod combinatorics;
pub mod lookahead;
pub mod prelude;
pub mod transform;
pub mod zip;

pub use error::{Error, Result};
pub use iter::{from_iter, IntoSeq, IterSeq};
pub use seq::{push, Flow, Seq};
pub use step::Step;

pub use bridge::{bridge, BridgeConfig, Cursor, CursorState};
pub use broadcast::{broadcast, Tee};
pub use build::{count, count_from, cycle, empty, from_fn, repeat, repeat_n};
pub use combinatorics::{
    combinations, combinations_with_replacement, permutations, product, product_repeat,
};
pub use lookahead::{group_by, pairwise, take, Group};
pub use transform::{
    accumulate, batched, chain, chain_all, compress, drop_while, enumerate, filter, filter_false,
    map, slice, take_while,
};
pub use zip::{zip, zip3, zip4, Zip3, Zip4};
