//! Push-to-pull bridge
//!
//! A [`Seq`](crate::Seq) owns the call stack while it produces, so pulling from
//! it one element at a time means suspending the producer between elements.
//! The bridge runs the producer on its own worker thread and hands elements
//! across a strict one-slot handshake: the worker blocks right after each
//! element until the consumer asks for the next one, and is told to stop the
//! moment the consumer releases the [`Cursor`].

mod config;
mod cursor;
#[cfg(test)]
mod tracker;

pub use config::BridgeConfig;
pub use cursor::{bridge, Cursor, CursorState};
#[cfg(test)]
pub(crate) use tracker::Tracker;
