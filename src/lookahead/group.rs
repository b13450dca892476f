//! Grouping runs of equal consecutive elements.
//!
//! The outer sequence and every [`Group`] it hands out read from one shared
//! cursor. To know where a group ends the grouper has to pull the first
//! element that does *not* belong to it; that element is parked in a
//! [`Lookahead::Holding`] slot and becomes the head of the next group.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    bridge::{bridge, Cursor},
    Error, Flow, Result, Seq,
};

/// Splits a sequence into runs of equal elements. Created via [`group_by`].
#[derive(Debug, Clone)]
pub struct GroupBy<S> {
    seq: S,
}

/// Partition `seq` into `(key, group)` pairs, one per run of equal consecutive elements.
///
/// A group produces the key element itself followed by the equal elements
/// after it. A group must be drained before the next one is requested to see
/// all of its elements; when the outer sequence advances, whatever is left of
/// the current group is skipped and the group expires. Reading an expired
/// group fails with [`Error::GroupExpired`].
///
/// ```
/// use seqtools::prelude::*;
///
/// let mut runs = Vec::new();
/// group_by("AAABBC".chars().into_seq()).for_each(|(key, group)| {
///     runs.push((key, group.count()));
/// });
/// assert_eq!(runs, vec![('A', 3), ('B', 2), ('C', 1)]);
/// ```
pub fn group_by<S>(seq: S) -> GroupBy<S>
where
    S: Seq + Send + 'static,
    S::Item: PartialEq + Clone + Send + 'static,
{
    GroupBy { seq }
}

impl<S> Seq for GroupBy<S>
where
    S: Seq + Send + 'static,
    S::Item: PartialEq + Clone + Send + 'static,
{
    type Item = (S::Item, Group<S::Item>);

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let shared = Arc::new(Mutex::new(Grouper::new(bridge(self.seq))));
        let _retire = RetireOnExit(&shared);

        let mut head = lock(&shared).pull();
        while let Some(first) = head {
            let generation = lock(&shared).open(first.clone());
            let group = Group {
                shared: Arc::clone(&shared),
                head: Some(first.clone()),
                generation,
                done: false,
            };
            if sink((first, group)).is_stop() {
                return Flow::Stop;
            }
            head = lock(&shared).next_head();
        }
        Flow::Continue
    }
}

/// Whether the grouper has pulled one element past the current group.
enum Lookahead<T> {
    Clean,
    Holding(T),
    Exhausted,
}

struct Grouper<T> {
    cursor: Cursor<T>,
    lookahead: Lookahead<T>,
    key: Option<T>,
    generation: usize,
    live: Option<usize>,
}

impl<T: PartialEq> Grouper<T> {
    fn new(cursor: Cursor<T>) -> Self {
        Self {
            cursor,
            lookahead: Lookahead::Clean,
            key: None,
            generation: 0,
            live: None,
        }
    }

    /// Next element: the held lookahead if there is one, otherwise a fresh pull.
    fn pull(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.lookahead, Lookahead::Clean) {
            Lookahead::Holding(item) => Some(item),
            Lookahead::Exhausted => {
                self.lookahead = Lookahead::Exhausted;
                None
            }
            Lookahead::Clean => {
                let item = self.cursor.advance();
                if item.is_none() {
                    self.lookahead = Lookahead::Exhausted;
                }
                item
            }
        }
    }

    /// Next element of the current group, holding back the first one that differs.
    fn pull_member(&mut self) -> Option<T> {
        if matches!(self.lookahead, Lookahead::Holding(_)) {
            return None;
        }
        let item = self.pull()?;
        if self.key.as_ref() == Some(&item) {
            Some(item)
        } else {
            self.lookahead = Lookahead::Holding(item);
            None
        }
    }

    fn open(&mut self, key: T) -> usize {
        self.generation += 1;
        self.key = Some(key);
        self.live = Some(self.generation);
        self.generation
    }

    /// Retire the current group, skip what is left of it, and return the next head.
    fn next_head(&mut self) -> Option<T> {
        self.live = None;
        while self.pull_member().is_some() {}
        self.pull()
    }
}

fn lock<T>(shared: &Mutex<Grouper<T>>) -> MutexGuard<'_, Grouper<T>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Expires every group and releases the cursor when the outer drive returns.
struct RetireOnExit<'a, T>(&'a Arc<Mutex<Grouper<T>>>);

impl<T> Drop for RetireOnExit<'_, T> {
    fn drop(&mut self) {
        let mut grouper = lock(self.0);
        grouper.live = None;
        grouper.cursor.release();
    }
}

/// One run of equal elements produced by [`group_by`].
///
/// Valid only until the outer sequence moves on to the next group.
pub struct Group<T> {
    shared: Arc<Mutex<Grouper<T>>>,
    head: Option<T>,
    generation: usize,
    done: bool,
}

impl<T: PartialEq> Group<T> {
    /// Next element of the group, or `None` once the run ends.
    ///
    /// Returns [`Error::GroupExpired`] if the outer sequence already advanced
    /// past this group.
    pub fn try_next(&mut self) -> Result<Option<T>> {
        if self.done {
            return Ok(None);
        }

        let mut grouper = lock(&self.shared);
        if grouper.live != Some(self.generation) {
            return Err(Error::GroupExpired);
        }
        if let Some(head) = self.head.take() {
            return Ok(Some(head));
        }

        let member = grouper.pull_member();
        self.done = member.is_none();
        Ok(member)
    }
}

impl<T: PartialEq> Iterator for Group<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.try_next() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> fmt::Debug for Group<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("generation", &self.generation)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
