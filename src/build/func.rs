use std::{fmt, marker::PhantomData};

use crate::{Flow, Seq};

/// Sequence backed by a callback-style producer.
///
/// Created via [`from_fn`].
pub struct FromFn<F, T> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

/// Create a sequence from a function that pushes elements into a sink.
///
/// The function receives the sink as `&mut dyn FnMut(T) -> Flow` and must stop
/// as soon as the sink answers [`Flow::Stop`]. A producer that keeps pushing
/// anyway is cut off: later elements never reach the consumer.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let squares = from_fn(|sink: &mut dyn FnMut(u32) -> Flow| {
///     for n in 1..=4 {
///         if sink(n * n).is_stop() {
///             return Flow::Stop;
///         }
///     }
///     Flow::Continue
/// });
/// assert_eq!(squares.collect::<Vec<_>>(), vec![1, 4, 9, 16]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F, T>
where
    F: FnOnce(&mut dyn FnMut(T) -> Flow) -> Flow,
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

impl<T, F> Seq for FromFn<F, T>
where
    F: FnOnce(&mut dyn FnMut(T) -> Flow) -> Flow,
{
    type Item = T;

    fn drive<G>(self, mut sink: G) -> Flow
    where
        G: FnMut(T) -> Flow,
    {
        let mut stopped = false;
        (self.f)(&mut |item: T| {
            if stopped {
                return Flow::Stop;
            }
            let flow = sink(item);
            stopped = flow.is_stop();
            flow
        });

        if stopped {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

impl<F: Clone, T> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _item: PhantomData,
        }
    }
}

impl<F, T> fmt::Debug for FromFn<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Sequence that produces nothing.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence with no elements.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn drive<F>(self, _sink: F) -> Flow
    where
        F: FnMut(T) -> Flow,
    {
        Flow::Continue
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}
