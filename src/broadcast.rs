//! Splitting one sequence into several independently paced cursors.
//!
//! All [`Tee`]s read from a single bridged source. Elements are pulled from
//! the source only when the most advanced tee asks for one it has not seen,
//! and stay buffered until the slowest live tee has read them. The buffer is
//! unbounded: a tee that never advances keeps everything after its position
//! alive, so pacing the readers is up to the caller.

use std::{
    collections::VecDeque,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use crate::{
    bridge::{bridge, Cursor},
    Error, Result, Seq,
};

/// Split `seq` into `n` cursors that each observe every element, in order.
///
/// `n == 0` yields no cursors and never starts the source.
///
/// ```
/// use seqtools::prelude::*;
///
/// let mut tees = broadcast(vec!['x', 'y'].into_seq(), 2);
/// let second = tees.pop().unwrap();
/// let first = tees.pop().unwrap();
/// assert_eq!(first.collect::<String>(), "xy");
/// assert_eq!(second.collect::<String>(), "xy");
/// ```
pub fn broadcast<S>(seq: S, n: usize) -> Vec<Tee<S::Item>>
where
    S: Seq + Send + 'static,
    S::Item: Clone + Send + 'static,
{
    if n == 0 {
        return Vec::new();
    }

    let shared = Arc::new(Mutex::new(TeeBuffer::new(bridge(seq), n)));
    (0..n)
        .map(|id| Tee {
            shared: Arc::clone(&shared),
            id,
        })
        .collect()
}

struct TeeBuffer<T> {
    source: Cursor<T>,
    /// Elements not yet read by every live tee; `buffered[0]` has index `offset`.
    buffered: VecDeque<T>,
    offset: usize,
    /// Index of the next element per tee, `None` once that tee is released.
    positions: Vec<Option<usize>>,
    exhausted: bool,
    high_water: usize,
}

impl<T> TeeBuffer<T> {
    fn new(source: Cursor<T>, n: usize) -> Self {
        Self {
            source,
            buffered: VecDeque::new(),
            offset: 0,
            positions: vec![Some(0); n],
            exhausted: false,
            high_water: 0,
        }
    }

    /// Drop the elements every live tee has already read.
    fn trim(&mut self) {
        let Some(slowest) = self.positions.iter().flatten().min().copied() else {
            self.buffered.clear();
            return;
        };
        while self.offset < slowest && self.buffered.pop_front().is_some() {
            self.offset += 1;
        }
    }

    fn release(&mut self, id: usize) {
        if self.positions[id].take().is_none() {
            return;
        }
        self.trim();
        if self.positions.iter().all(Option::is_none) {
            self.source.release();
        }
    }

    fn lag(&self, id: usize) -> usize {
        match self.positions[id] {
            Some(position) => self.offset + self.buffered.len() - position,
            None => 0,
        }
    }
}

impl<T: Clone> TeeBuffer<T> {
    fn next_for(&mut self, id: usize) -> Result<Option<T>> {
        let Some(position) = self.positions[id] else {
            return Err(Error::CursorReleased);
        };

        let index = position - self.offset;
        let item = if let Some(item) = self.buffered.get(index) {
            item.clone()
        } else if self.exhausted {
            return Ok(None);
        } else {
            let Some(item) = self.source.advance() else {
                self.exhausted = true;
                return Ok(None);
            };
            self.buffered.push_back(item.clone());
            self.note_growth();
            item
        };

        self.positions[id] = Some(position + 1);
        self.trim();
        Ok(Some(item))
    }

    fn note_growth(&mut self) {
        let len = self.buffered.len();
        if len > self.high_water {
            self.high_water = len;
            if len.is_power_of_two() {
                debug!(buffered = len, "broadcast buffer grew");
            }
        }
    }
}

fn lock<T>(shared: &Mutex<TeeBuffer<T>>) -> MutexGuard<'_, TeeBuffer<T>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One of the cursors produced by [`broadcast`].
///
/// Releasing (or dropping) a tee stops it from holding back the shared
/// buffer. Once every tee is released the source is released too.
pub struct Tee<T> {
    shared: Arc<Mutex<TeeBuffer<T>>>,
    id: usize,
}

impl<T> Tee<T> {
    /// Position of this tee among its siblings.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of buffered elements this tee has yet to read.
    pub fn buffered(&self) -> usize {
        lock(&self.shared).lag(self.id)
    }

    /// Returns `true` once this tee was released, explicitly or by drop.
    pub fn is_released(&self) -> bool {
        lock(&self.shared).positions[self.id].is_none()
    }

    /// Stop reading through this tee. Idempotent.
    pub fn release(&mut self) {
        lock(&self.shared).release(self.id);
    }
}

impl<T: Clone> Tee<T> {
    /// Next element for this tee, or `None` once the source is exhausted.
    ///
    /// Returns [`Error::CursorReleased`] if this tee was released.
    pub fn try_next(&mut self) -> Result<Option<T>> {
        lock(&self.shared).next_for(self.id)
    }
}

impl<T: Clone> Iterator for Tee<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.try_next() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Drop for Tee<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> fmt::Debug for Tee<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tee").field("id", &self.id).finish_non_exhaustive()
    }
}
