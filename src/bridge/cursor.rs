//! Pull cursors over push sequences.

use std::{
    fmt, panic,
    thread::{self, JoinHandle},
};

use crossbeam::channel::{self, Receiver, Sender};
use tracing::{trace, warn};

use crate::{bridge::BridgeConfig, Error, Flow, Result, Seq};

/// Message from the consumer to the suspended producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Demand {
    Next,
    Stop,
}

/// Lifecycle of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// The cursor may be advanced.
    Live,
    /// The source ran out; advancing keeps returning `None`.
    Exhausted,
    /// The consumer released the cursor; the producer has unwound.
    Released,
}

/// Pull handle over a push sequence.
///
/// Created via [`bridge`], [`Cursor::spawn`] or [`Seq::cursor`]. The producer
/// runs on a dedicated worker thread that does not start until the first
/// [`advance`](Cursor::advance), and that blocks after every element until
/// the next one is requested. Exactly one element is in flight at a time.
///
/// Dropping a cursor releases it, so the producer is always told to stop and
/// joined, whichever way the owning scope is left.
///
/// ```rust
/// use seqtools::prelude::*;
///
/// let mut cursor = bridge(count());
/// assert_eq!(cursor.advance(), Some(0));
/// assert_eq!(cursor.advance(), Some(1));
/// cursor.release();
/// assert_eq!(cursor.state(), CursorState::Released);
/// ```
pub struct Cursor<T> {
    state: CursorState,
    demands: Sender<Demand>,
    items: Receiver<T>,
    worker: Option<JoinHandle<()>>,
}

/// Bridge `seq` into a pull [`Cursor`] with the default worker configuration.
///
/// # Panics
///
/// Panics if the operating system refuses to start the worker thread, like
/// [`std::thread::spawn`]. Use [`Cursor::spawn`] to handle that case.
pub fn bridge<S>(seq: S) -> Cursor<S::Item>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    match Cursor::spawn(seq, &BridgeConfig::default()) {
        Ok(cursor) => cursor,
        Err(err) => panic!("{err}"),
    }
}

impl<T> Cursor<T> {
    /// Bridge `seq` on a worker configured by `config`.
    pub fn spawn<S>(seq: S, config: &BridgeConfig) -> Result<Self>
    where
        S: Seq<Item = T> + Send + 'static,
        T: Send + 'static,
    {
        let (demand_tx, demand_rx) = channel::bounded(0);
        let (item_tx, item_rx) = channel::bounded(0);
        let worker = config
            .thread_builder()
            .spawn(move || produce(seq, demand_rx, item_tx))?;
        trace!(worker = ?worker.thread().name(), "bridge worker spawned");

        Ok(Self {
            state: CursorState::Live,
            demands: demand_tx,
            items: item_rx,
            worker: Some(worker),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Returns `true` while the cursor may still produce elements.
    pub fn is_live(&self) -> bool {
        self.state == CursorState::Live
    }

    /// Pull the next element, or `None` once the source is exhausted.
    ///
    /// Returns [`Error::CursorReleased`] if the cursor was released. A panic in
    /// the producer is resumed on the calling thread.
    pub fn try_advance(&mut self) -> Result<Option<T>> {
        match self.state {
            CursorState::Released => Err(Error::CursorReleased),
            CursorState::Exhausted => Ok(None),
            CursorState::Live => {
                if self.demands.send(Demand::Next).is_ok() {
                    if let Ok(item) = self.items.recv() {
                        return Ok(Some(item));
                    }
                }
                self.state = CursorState::Exhausted;
                trace!("bridge source exhausted");
                self.join_worker();
                Ok(None)
            }
        }
    }

    /// Pull the next element, or `None` once the source is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the cursor was released.
    pub fn advance(&mut self) -> Option<T> {
        match self.try_advance() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Stop the producer and wait for it to unwind.
    ///
    /// Idempotent, and safe after exhaustion. Once this returns, no further
    /// element can be observed through the cursor.
    pub fn release(&mut self) {
        let prior = std::mem::replace(&mut self.state, CursorState::Released);
        if prior == CursorState::Released {
            return;
        }
        if prior == CursorState::Live {
            // the worker is parked on its demand channel; a send error means it is already gone
            let _ = self.demands.send(Demand::Stop);
        }
        self.join_worker();
        trace!(from = ?prior, "cursor released");
    }

    fn join_worker(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        if let Err(payload) = worker.join() {
            if thread::panicking() {
                warn!("bridge producer panicked while the consumer was already unwinding");
            } else {
                panic::resume_unwind(payload);
            }
        }
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance()
    }
}

impl<T> Drop for Cursor<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Worker body: run the producer, parking after every element.
fn produce<S: Seq>(seq: S, demands: Receiver<Demand>, items: Sender<S::Item>) {
    if !matches!(demands.recv(), Ok(Demand::Next)) {
        trace!("bridge released before the first demand");
        return;
    }

    let flow = seq.drive(|item| {
        if items.send(item).is_err() {
            return Flow::Stop;
        }
        match demands.recv() {
            Ok(Demand::Next) => Flow::Continue,
            Ok(Demand::Stop) | Err(_) => Flow::Stop,
        }
    });
    trace!(stopped = flow.is_stop(), "bridge producer unwound");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bridge::Tracker,
        build::{count, from_fn},
        IntoSeq,
    };

    #[test]
    fn test_advance_in_order_then_exhausted() {
        let mut cursor = bridge(vec!['a', 'b'].into_seq());
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert!(cursor.is_live());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.state(), CursorState::Exhausted);
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_no_speculative_production() {
        let tracker = Tracker::new();
        let mut cursor = bridge(tracker.counting());

        assert_eq!(tracker.produced(), 0);
        assert_eq!(cursor.advance(), Some(0));
        assert_eq!(tracker.produced(), 1);
        assert_eq!(cursor.advance(), Some(1));
        assert_eq!(tracker.produced(), 2);
    }

    #[test]
    fn test_release_unwinds_producer_before_returning() {
        let tracker = Tracker::new();
        let mut cursor = bridge(tracker.counting());

        cursor.advance();
        cursor.advance();
        cursor.release();

        assert!(tracker.unwound());
        assert_eq!(tracker.produced(), 2);
        assert_eq!(cursor.state(), CursorState::Released);
    }

    #[test]
    fn test_release_is_idempotent_and_safe_after_exhaustion() {
        let mut cursor = bridge(vec![1].into_seq());
        assert_eq!(cursor.advance(), Some(1));
        assert_eq!(cursor.advance(), None);
        cursor.release();
        cursor.release();
        assert_eq!(cursor.state(), CursorState::Released);
    }

    #[test]
    fn test_release_before_first_advance_never_starts_producer() {
        let tracker = Tracker::new();
        let mut cursor = bridge(tracker.counting());
        cursor.release();
        assert_eq!(tracker.produced(), 0);
    }

    #[test]
    fn test_drop_releases_infinite_producer() {
        let tracker = Tracker::new();
        {
            let mut cursor = bridge(tracker.counting());
            cursor.advance();
        }
        assert!(tracker.unwound());
    }

    #[test]
    fn test_try_advance_after_release_is_an_error() {
        let mut cursor = bridge(count());
        cursor.advance();
        cursor.release();
        assert!(matches!(cursor.try_advance(), Err(Error::CursorReleased)));
    }

    #[test]
    #[should_panic(expected = "cursor was advanced after release")]
    fn test_advance_after_release_panics() {
        let mut cursor = bridge(count());
        cursor.release();
        cursor.advance();
    }

    #[test]
    #[should_panic(expected = "producer failed")]
    fn test_producer_panic_reaches_consumer() {
        let failing = from_fn(|sink: &mut dyn FnMut(i32) -> Flow| {
            if sink(1).is_stop() {
                return Flow::Stop;
            }
            panic!("producer failed");
        });
        let mut cursor = bridge(failing);
        assert_eq!(cursor.advance(), Some(1));
        cursor.advance();
    }

    #[test]
    fn test_worker_uses_configured_name() {
        let names = from_fn(|sink: &mut dyn FnMut(Option<String>) -> Flow| {
            sink(thread::current().name().map(str::to_owned))
        });
        let config = BridgeConfig::new().with_name("bridge-under-test");
        let mut cursor = Cursor::spawn(names, &config).unwrap();
        assert_eq!(cursor.advance(), Some(Some("bridge-under-test".to_owned())));
    }

    #[test]
    fn test_cursor_iterates() {
        let collected: Vec<i32> = bridge(vec![3, 2, 1].into_seq()).collect();
        assert_eq!(collected, vec![3, 2, 1]);
    }
}
