//! The pull contract shared by every producer in this crate.
//!
//! A sequence is an ordered, single-consumer stream of values computed on
//! demand. Producers here are pull-driven state machines: each one is an
//! `Iterator` whose `next` computes the following value only when the
//! consumer asks for it. There is no background production unit and no
//! channel, so abandoning a sequence — finite or infinite — is simply
//! dropping the handle, which releases all of its production state.

use crate::accumulate::{Accumulate, Operator};
use crate::chunk::Chunks;
use crate::compress::Compress;

/// A pull-based, ordered, single-consumer stream of values.
///
/// Implemented for every `Iterator`. The contract:
///
/// - Values are delivered in exactly the order the producer computes them;
///   nothing is reordered, and nothing is dropped unless a producer
///   explicitly filters.
/// - Once [`pull`](Sequence::pull) returns `None` the sequence is closed;
///   every later call returns `None` as well.
/// - A sequence is consumed at most once. An independent replay requires
///   invoking the producer again on the same input.
///
/// Infinite producers ([`Count`], [`Cycle`]) never close on their own; the
/// consumer bounds consumption (for example with [`Iterator::take`]) or drops
/// the handle to cancel it.
///
/// [`Count`]: crate::count::Count
/// [`Cycle`]: crate::cycle::Cycle
pub trait Sequence: Iterator {
    /// Pulls the next value, or `None` once the sequence is exhausted.
    ///
    /// Equivalent to [`Iterator::next`], provided as the domain-named
    /// consumption primitive.
    fn pull(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<I: Iterator> Sequence for I {}

/// Extension trait for more idiomatic usage of the sequence adapters.
///
/// This trait provides convenient methods to adapt any sequence through the
/// filtering, windowing, and reduction producers of this crate.
pub trait SequenceExt: Iterator + Sized {
    /// Filters this sequence through a boolean selector sequence.
    ///
    /// An element is yielded when the selector yields `true` at the same
    /// position and skipped when it yields `false`. Selector exhaustion
    /// closes the output; remaining data elements are filtered out.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::SequenceExt;
    ///
    /// let kept: Vec<i64> = vec![10, 20, 30]
    ///     .into_iter()
    ///     .compress(vec![true, false, true])
    ///     .collect();
    /// assert_eq!(kept, vec![10, 30]);
    /// ```
    fn compress<S>(self, selector: S) -> Compress<Self, S::IntoIter>
    where
        S: IntoIterator<Item = bool>,
    {
        Compress::new(self, selector.into_iter())
    }

    /// Adapts this sequence to yield non-overlapping windows of at most
    /// `size` elements, taken from the front.
    ///
    /// The final window may be shorter than `size`. A `size` of zero is
    /// invalid input and produces a sequence that closes immediately.
    fn chunks_of(self, size: usize) -> Chunks<Self> {
        Chunks::new(self, size)
    }

    /// Adapts this sequence of integers into its running reduction under
    /// `operator`, offset by `start`.
    ///
    /// See [`accumulate`](crate::accumulate::accumulate) for the exact
    /// yielding protocol, including the leading-seed behavior for a non-zero
    /// `start`.
    fn accumulate(self, operator: Operator, start: i64) -> Accumulate<Self>
    where
        Self: Iterator<Item = i64>,
    {
        Accumulate::new(self, operator, start)
    }
}

impl<I: Iterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count;

    #[test]
    fn test_pull_matches_next() {
        let mut seq = crate::from_collection(vec![1, 2]);
        assert_eq!(seq.pull(), Some(1));
        assert_eq!(seq.pull(), Some(2));
        assert_eq!(seq.pull(), None);
        assert_eq!(seq.pull(), None);
    }

    #[test]
    fn test_adapters_compose() {
        // Keep the even offsets of an arithmetic progression, then window and
        // reduce the survivors.
        let selector = [true, false, true, false, true];
        let kept: Vec<i64> = count(0i64, 1).compress(selector).collect();
        assert_eq!(kept, vec![0, 2, 4]);

        let windows: Vec<Vec<i64>> = count(0i64, 1).take(5).chunks_of(2).collect();
        assert_eq!(windows, vec![vec![0, 1], vec![2, 3], vec![4]]);

        let totals: Vec<i64> = count(1i64, 1)
            .take(4)
            .accumulate(Operator::Add, 0)
            .map(Result::unwrap)
            .collect();
        assert_eq!(totals, vec![1, 3, 6, 10]);
    }
}
