//! Commonly used imports
//!
//! Use `use seqtools::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Cursor, CursorState, Error, Flow, IntoSeq, Seq, Step};

// Sources
pub use crate::build::{count, count_from, cycle, empty, from_fn, repeat, repeat_n};
pub use crate::iter::from_iter;

// One-pass transforms
pub use crate::transform::{
    accumulate, batched, chain, chain_all, compress, drop_while, enumerate, filter, filter_false,
    map, slice, take_while,
};

// Bridging and lookahead
pub use crate::{bridge, broadcast, group_by, pairwise, push, take, zip, zip3, zip4};

// Enumerators
pub use crate::combinatorics::{
    combinations, combinations_with_replacement, permutations, product, product_repeat,
};
