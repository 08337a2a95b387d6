//! A producer that concatenates multiple finite sources into one sequence.

/// A sequence that yields all elements of each source in turn.
///
/// Elements of the first source are yielded in order, then the second, and
/// so on; the sequence closes after the last source is drained. Empty
/// sources contribute zero elements and leave no gap.
#[derive(Debug, Clone)]
pub struct Chain<T> {
    /// Sources not yet started, consumed front to back.
    sources: std::vec::IntoIter<Vec<T>>,
    /// The source currently being drained.
    current: std::vec::IntoIter<T>,
}

/// Creates a sequence that concatenates `sources` in order.
///
/// # Examples
///
/// ```
/// use lazyseq::chain;
///
/// let values: Vec<i64> = chain(vec![vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn chain<T>(sources: Vec<Vec<T>>) -> Chain<T> {
    Chain {
        sources: sources.into_iter(),
        current: Vec::new().into_iter(),
    }
}

impl<T> Iterator for Chain<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(item);
            }
            self.current = self.sources.next()?.into_iter();
        }
    }
}
