//! Walking several sequences in lockstep.
//!
//! Two-way [`zip`] stays a push sequence: it drives the first source and pulls
//! the second through a cursor. [`zip3`] and [`zip4`] pull every source and
//! expose a [`Step`] based `step` function instead, which makes "at least one
//! source ran out" an explicit [`Step::Complete`].

use crate::{
    bridge::{bridge, Cursor},
    Flow, Seq, Step,
};

/// Pairs the elements of two sequences. Created via [`zip`] or [`Seq::zip`].
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Pair up the elements of `a` and `b`, stopping when either runs out.
///
/// ```
/// use seqtools::prelude::*;
///
/// let pairs: Vec<(char, usize)> = zip("abc".chars().into_seq(), count()).collect();
/// assert_eq!(pairs, vec![('a', 0), ('b', 1), ('c', 2)]);
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Seq,
    B: Seq + Send + 'static,
    B::Item: Send + 'static,
{
    Zip { a, b }
}

impl<A, B> Seq for Zip<A, B>
where
    A: Seq,
    B: Seq + Send + 'static,
    B::Item: Send + 'static,
{
    type Item = (A::Item, B::Item);

    fn drive<F>(self, mut sink: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut other = bridge(self.b);
        let mut stopped = false;
        self.a.drive(|x| match other.advance() {
            Some(y) => {
                let flow = sink((x, y));
                stopped = flow.is_stop();
                flow
            }
            None => Flow::Stop,
        });
        other.release();

        if stopped {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

macro_rules! zip_cursors {
    (
        $(#[$meta:meta])*
        $name:ident, $ctor:ident, $doc_ctor:literal;
        $(($arg:ident, $seq:ident, $item:ident, $idx:tt)),+
    ) => {
        $(#[$meta])*
        pub struct $name<$($item),+> {
            cursors: ($(Cursor<$item>,)+),
            done: bool,
        }

        #[doc = $doc_ctor]
        pub fn $ctor<$($seq),+>($($arg: $seq),+) -> $name<$($seq::Item),+>
        where
            $($seq: Seq + Send + 'static, $seq::Item: Send + 'static,)+
        {
            $name {
                cursors: ($(bridge($arg),)+),
                done: false,
            }
        }

        impl<$($item),+> $name<$($item),+> {
            /// Pull one element from every source.
            ///
            /// Once any source is exhausted every cursor is released and this
            /// keeps returning [`Step::Complete`].
            pub fn step(&mut self) -> Step<($($item,)+), ()> {
                if self.done {
                    return Step::Complete(());
                }
                match self.pull() {
                    Some(tuple) => Step::Yielded(tuple),
                    None => {
                        self.release();
                        Step::Complete(())
                    }
                }
            }

            /// Stop every source early. Idempotent.
            pub fn release(&mut self) {
                self.done = true;
                $(self.cursors.$idx.release();)+
            }

            /// Returns `true` once a source ran out or the zip was released.
            pub fn is_done(&self) -> bool {
                self.done
            }

            fn pull(&mut self) -> Option<($($item,)+)> {
                Some(($(self.cursors.$idx.advance()?,)+))
            }
        }

        impl<$($item),+> Iterator for $name<$($item),+> {
            type Item = ($($item,)+);

            fn next(&mut self) -> Option<Self::Item> {
                self.step().yielded_value()
            }
        }

        impl<$($item),+> std::fmt::Debug for $name<$($item),+> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("done", &self.done)
                    .finish_non_exhaustive()
            }
        }
    };
}

zip_cursors! {
    /// Three sequences pulled in lockstep. Created via [`zip3`].
    ///
    /// ```
    /// use seqtools::prelude::*;
    ///
    /// let mut zipped = zip3(count(), "ab".chars().into_seq(), repeat(true));
    /// assert_eq!(zipped.step(), Step::Yielded((0, 'a', true)));
    /// assert_eq!(zipped.step(), Step::Yielded((1, 'b', true)));
    /// assert_eq!(zipped.step(), Step::Complete(()));
    /// ```
    Zip3, zip3, "Zip three sequences, completing when the shortest runs out.";
    (a, SA, A, 0), (b, SB, B, 1), (c, SC, C, 2)
}

zip_cursors! {
    /// Four sequences pulled in lockstep. Created via [`zip4`].
    Zip4, zip4, "Zip four sequences, completing when the shortest runs out.";
    (a, SA, A, 0), (b, SB, B, 1), (c, SC, C, 2), (d, SD, D, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bridge::Tracker,
        build::{count, from_fn},
        IntoSeq,
    };
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    const FRUITS: [&str; 4] = ["apple", "banana", "cherry", "date"];
    const ROMANS: [&str; 3] = ["I", "II", "III"];
    const STARKS: [&str; 5] = ["Eddard", "Catelyn", "Robb", "Sansa", "Arya"];

    #[test]
    fn test_zip_stops_at_shorter_source() {
        let pairs: Vec<(&str, usize)> = FRUITS.into_seq().zip(count()).collect();
        assert_eq!(
            pairs,
            vec![("apple", 0), ("banana", 1), ("cherry", 2), ("date", 3)]
        );

        let pairs: Vec<(usize, &str)> = count().zip(ROMANS.into_seq()).collect();
        assert_eq!(pairs, vec![(0, "I"), (1, "II"), (2, "III")]);
    }

    #[test]
    fn test_zip_reports_consumer_stop() {
        let mut seen = 0;
        let flow = count().zip(count()).drive(|_| {
            seen += 1;
            if seen == 3 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        assert_eq!(flow, Flow::Stop);
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_zip_releases_second_source() {
        let unwound = Arc::new(AtomicBool::new(false));
        let flag = unwound.clone();
        let endless = from_fn(move |sink: &mut dyn FnMut(u8) -> Flow| loop {
            if sink(7).is_stop() {
                flag.store(true, Ordering::SeqCst);
                return Flow::Stop;
            }
        });

        let pairs: Vec<(char, u8)> = "xy".chars().into_seq().zip(endless).collect();
        assert_eq!(pairs, vec![('x', 7), ('y', 7)]);
        assert!(unwound.load(Ordering::SeqCst));
    }

    #[test]
    fn test_zip3_unequal_lengths() {
        let rows: Vec<_> = zip3(FRUITS.into_seq(), count(), ROMANS.into_seq()).collect();
        assert_eq!(
            rows,
            vec![("apple", 0, "I"), ("banana", 1, "II"), ("cherry", 2, "III")]
        );
    }

    #[test]
    fn test_zip4_equal_lengths() {
        let rows: Vec<_> = zip4(
            ROMANS.into_seq(),
            STARKS[..3].to_vec().into_seq(),
            count(),
            "abc".chars().into_seq(),
        )
        .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], ("III", "Robb", 2, 'c'));
    }

    #[test]
    fn test_zip4_unequal_lengths() {
        let rows: Vec<_> = zip4(
            FRUITS.into_seq(),
            count(),
            ROMANS.into_seq(),
            STARKS.into_seq(),
        )
        .collect();
        assert_eq!(rows.len(), ROMANS.len());
        assert_eq!(rows[0], ("apple", 0, "I", "Eddard"));
    }

    #[test]
    fn test_completed_zip_stays_complete() {
        let mut zipped = zip3(
            Vec::<u8>::new().into_seq(),
            count(),
            STARKS.into_seq(),
        );
        assert_eq!(zipped.step(), Step::Complete(()));
        assert!(zipped.is_done());
        assert_eq!(zipped.step(), Step::Complete(()));
    }

    #[test]
    fn test_zip4_release_stops_early() {
        let mut zipped = zip4(count(), count(), count(), count());
        assert_eq!(zipped.step(), Step::Yielded((0, 0, 0, 0)));
        zipped.release();
        zipped.release();
        assert_eq!(zipped.step(), Step::Complete(()));
        assert_eq!(zipped.next(), None);
    }

    #[test]
    fn test_dropping_zip3_unwinds_every_producer() {
        let trackers = [Tracker::new(), Tracker::new(), Tracker::new()];
        {
            let mut zipped = zip3(
                trackers[0].counting(),
                trackers[1].counting(),
                trackers[2].counting(),
            );
            assert_eq!(zipped.step(), Step::Yielded((0, 0, 0)));
        }
        assert!(trackers.iter().all(Tracker::unwound));
    }

    #[test]
    fn test_exhausted_zip4_releases_remaining_producers() {
        let trackers = [Tracker::new(), Tracker::new(), Tracker::new()];
        let mut zipped = zip4(
            trackers[0].counting(),
            ROMANS.into_seq(),
            trackers[1].counting(),
            trackers[2].counting(),
        );
        assert_eq!(zipped.by_ref().count(), ROMANS.len());
        assert!(zipped.step().is_complete());
        assert!(trackers.iter().all(Tracker::unwound));
        // the sources after the exhausted one were never pulled for a fourth tuple
        assert_eq!(trackers[1].produced(), ROMANS.len());
    }
}
