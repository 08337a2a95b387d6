//! A running reduction over a sequence of integers.

use lazyseq_common::Result;
use lazyseq_common::error::Error;

/// The closed set of reduction operators understood by [`Accumulate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
    Power,
}

impl Operator {
    /// Resolves an operator from its textual name.
    ///
    /// `"add"` and the empty string select [`Operator::Add`]; `"multiply"`
    /// and `"power"` select their respective operators. Any other name is an
    /// error.
    pub fn from_name(name: &str) -> Result<Operator> {
        match name {
            "add" | "" => Ok(Operator::Add),
            "multiply" => Ok(Operator::Multiply),
            "power" => Ok(Operator::Power),
            _ => Err(Error::unknown_operator(name)),
        }
    }

    /// Applies the operator to the running value and the next element.
    ///
    /// `Power` raises through a float64 intermediate and truncates, so very
    /// large results lose precision exactly as floating-point exponentiation
    /// does.
    fn apply(self, running: i64, element: i64) -> i64 {
        match self {
            Operator::Add => running + element,
            Operator::Multiply => running * element,
            Operator::Power => (running as f64).powf(element as f64) as i64,
        }
    }
}

/// Where the reduction currently stands between pulls.
#[derive(Debug)]
enum State {
    /// Deliver this error as the sole item, then close.
    Failed(Error),
    /// Nothing consumed yet.
    Start,
    /// The seed was surfaced; the first element is held and not yet yielded.
    Seeded { first: i64 },
    /// Mid-reduction with the current running value.
    Running { value: i64 },
    Closed,
}

/// A sequence of running reduction values over an integer sequence.
///
/// The yielding protocol, for operator `op` and seed `start`:
///
/// 1. If `start != 0` and the input is non-empty, `start` itself is yielded
///    as a leading extra element.
/// 2. The running value initializes to the first element; `first + start` is
///    yielded.
/// 3. After each subsequent element `e`, the running value becomes
///    `op(running, e)` and `running + start` is yielded.
///
/// The non-zero seed is therefore surfaced standalone *and* folded into every
/// subsequent output. An empty input produces an empty sequence.
#[derive(Debug)]
pub struct Accumulate<I> {
    items: I,
    operator: Operator,
    start: i64,
    state: State,
}

impl<I: Iterator<Item = i64>> Accumulate<I> {
    /// Creates a running reduction of `items` under `operator`, offset by
    /// `start`.
    pub fn new(items: I, operator: Operator, start: i64) -> Self {
        Accumulate {
            items,
            operator,
            start,
            state: State::Start,
        }
    }
}

/// Creates a sequence of running reductions of `items` under `operator`,
/// offset by `start`.
///
/// # Examples
///
/// ```
/// use lazyseq::{Operator, accumulate};
///
/// let totals: Vec<i64> = accumulate(vec![1, 2, 3], Operator::Add, 0)
///     .map(Result::unwrap)
///     .collect();
/// assert_eq!(totals, vec![1, 3, 6]);
/// ```
pub fn accumulate(
    items: Vec<i64>,
    operator: Operator,
    start: i64,
) -> Accumulate<std::vec::IntoIter<i64>> {
    Accumulate::new(items.into_iter(), operator, start)
}

/// Like [`accumulate`], but resolves the operator from its textual name.
///
/// An unrecognized name produces a sequence whose only item is the error;
/// no elements are yielded regardless of input length.
pub fn accumulate_named(
    items: Vec<i64>,
    operator: &str,
    start: i64,
) -> Accumulate<std::vec::IntoIter<i64>> {
    match Operator::from_name(operator) {
        Ok(operator) => accumulate(items, operator, start),
        Err(error) => Accumulate {
            items: Vec::new().into_iter(),
            operator: Operator::Add,
            start,
            state: State::Failed(error),
        },
    }
}

impl<I: Iterator<Item = i64>> Iterator for Accumulate<I> {
    type Item = Result<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.state, State::Closed) {
            State::Closed => None,
            State::Failed(error) => Some(Err(error)),
            State::Start => {
                let first = self.items.next()?;
                if self.start != 0 {
                    self.state = State::Seeded { first };
                    Some(Ok(self.start))
                } else {
                    self.state = State::Running { value: first };
                    Some(Ok(first + self.start))
                }
            }
            State::Seeded { first } => {
                self.state = State::Running { value: first };
                Some(Ok(first + self.start))
            }
            State::Running { value } => {
                let element = self.items.next()?;
                let value = self.operator.apply(value, element);
                self.state = State::Running { value };
                Some(Ok(value + self.start))
            }
        }
    }
}
