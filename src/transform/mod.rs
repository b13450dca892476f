//! One-pass transforms over push sequences
//!
//! Every combinator here wraps the push interface directly and keeps at most
//! one element of state. None of them needs the bridge.

mod batch;
mod chain;
mod map;
mod slice;

pub use batch::{batched, compress, Batched, Compress};
pub use chain::{chain, chain_all, Chain, ChainAll};
pub use map::{
    accumulate, enumerate, filter, filter_false, map, Accumulate, Enumerate, Filter, FilterFalse,
    Map,
};
pub use slice::{drop_while, slice, take_while, DropWhile, Slice, TakeWhile};
