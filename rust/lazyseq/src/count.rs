//! An infinite arithmetic progression.

use num_traits::Num;

/// An infinite sequence counting from a start value by a fixed step.
///
/// Never closes on its own; the consumer bounds consumption (for example
/// with [`Iterator::take`]) or drops the handle.
#[derive(Debug, Clone)]
pub struct Count<T> {
    /// The value to yield next.
    current: T,
    /// Added to the current value after every emission.
    step: T,
}

/// Creates an infinite sequence yielding `start`, `start + step`,
/// `start + 2·step`, and so on.
///
/// Works for integer and floating-point element types. A `step` of zero is
/// legal and yields `start` forever.
///
/// # Examples
///
/// ```
/// use lazyseq::count;
///
/// let values: Vec<i64> = count(0, 1).take(5).collect();
/// assert_eq!(values, vec![0, 1, 2, 3, 4]);
/// ```
pub fn count<T: Num + Copy>(start: T, step: T) -> Count<T> {
    Count {
        current: start,
        step,
    }
}

impl<T: Num + Copy> Iterator for Count<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.current;
        self.current = value + self.step;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
