/// Result of one pull step: either a produced value or completion.
///
/// `Step` is what the explicit step functions of [`Zip3`](crate::Zip3) and
/// [`Zip4`](crate::Zip4) return. A `Yielded` step carries the tuple and means
/// "call again"; a `Complete` step means the synchronized sources are done.
///
/// # Examples
///
/// ```rust
/// use seqtools::Step;
///
/// let continuing: Step<i32, ()> = Step::Yielded(42);
/// let completed: Step<i32, ()> = Step::Complete(());
///
/// assert_eq!(continuing.yielded_value(), Some(42));
/// assert!(completed.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// A value was produced; the producer may be stepped again.
    Yielded(Y),
    /// The producer finished.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// ```rust
    /// use seqtools::Step;
    ///
    /// let x: Step<i32, ()> = Step::Yielded(42);
    /// assert!(x.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts from `Step<Y, D>` to `Option<Y>`, discarding the completion value.
    ///
    /// ```rust
    /// use seqtools::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.yielded_value(), Some(42));
    ///
    /// let y: Step<i32, &str> = Step::Complete("done");
    /// assert_eq!(y.yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yielded_and_is_complete() {
        let yielded: Step<i32, ()> = Step::Yielded(1);
        let complete: Step<i32, ()> = Step::Complete(());
        assert!(yielded.is_yielded());
        assert!(!yielded.is_complete());
        assert!(complete.is_complete());
        assert!(!complete.is_yielded());
    }

    #[test]
    fn test_yielded_value() {
        assert_eq!(Step::<i32, ()>::Yielded(3).yielded_value(), Some(3));
        assert_eq!(Step::<i32, ()>::Complete(()).yielded_value(), None);
    }
}
