//! Building sequences from scratch
//!
//! This module provides the sources every pipeline starts from: callback-style
//! producers, the empty sequence, and the infinite generators.

mod func;
mod infinite;

// Re-export building blocks
pub use func::{empty, from_fn, Empty, FromFn};
pub use infinite::{count, count_from, cycle, repeat, repeat_n, Count, Cycle, Repeat};
