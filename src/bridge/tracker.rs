//! Instrumented producer shared by the bridge tests.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use crate::{build::from_fn, Flow, Seq};

/// Records how many elements an infinite producer pushed and whether it saw a stop.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tracker {
    produced: Arc<AtomicUsize>,
    unwound: Arc<AtomicBool>,
}

impl Tracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Counts up from zero forever, reporting into this tracker.
    pub(crate) fn counting(&self) -> impl Seq<Item = usize> + Send + 'static {
        let Tracker { produced, unwound } = self.clone();
        from_fn(move |sink: &mut dyn FnMut(usize) -> Flow| {
            let mut n = 0;
            loop {
                produced.fetch_add(1, Ordering::SeqCst);
                if sink(n).is_stop() {
                    unwound.store(true, Ordering::SeqCst);
                    return Flow::Stop;
                }
                n += 1;
            }
        })
    }

    pub(crate) fn produced(&self) -> usize {
        self.produced.load(Ordering::SeqCst)
    }

    pub(crate) fn unwound(&self) -> bool {
        self.unwound.load(Ordering::SeqCst)
    }
}
