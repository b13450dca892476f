//! Combinators that need lookahead
//!
//! Each of these pulls its source through a [`Cursor`](crate::bridge::Cursor)
//! and re-exposes the result as a push sequence. The cursor is owned by the
//! `drive` call that opened it, so it is released on every exit path.

mod group;
mod pairwise;
mod take;

pub use group::{group_by, Group, GroupBy};
pub use pairwise::{pairwise, Pairwise};
pub use take::{take, Take};
