//! A producer that filters a data sequence through a boolean selector.

/// An adapter that yields data elements whose selector element is `true`.
///
/// The data and selector sequences advance in lockstep. An element of the
/// data sequence is yielded when the selector yields `true` at the same
/// position and skipped when it yields `false`. If the selector runs out
/// before the data, the output closes and the remaining data elements are
/// filtered out; length mismatch in either direction is a deliberate
/// truncation policy, not an error.
#[derive(Debug, Clone)]
pub struct Compress<I, S> {
    /// The data sequence being filtered.
    data: I,
    /// The boolean selector, advanced once per data element.
    selector: S,
}

impl<I, S> Compress<I, S>
where
    I: Iterator,
    S: Iterator<Item = bool>,
{
    /// Creates a new `Compress` over a data sequence and a selector.
    pub fn new(data: I, selector: S) -> Self {
        Compress { data, selector }
    }
}

/// Creates a sequence of the elements of `data` selected by `selector`.
///
/// # Examples
///
/// ```
/// use lazyseq::compress;
///
/// let kept: Vec<i64> = compress(vec![10, 20, 30], vec![true, false, true]).collect();
/// assert_eq!(kept, vec![10, 30]);
/// ```
pub fn compress<T>(
    data: Vec<T>,
    selector: Vec<bool>,
) -> Compress<std::vec::IntoIter<T>, std::vec::IntoIter<bool>> {
    Compress::new(data.into_iter(), selector.into_iter())
}

impl<I, S> Iterator for Compress<I, S>
where
    I: Iterator,
    S: Iterator<Item = bool>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.data.next()?;
            match self.selector.next() {
                Some(true) => return Some(item),
                Some(false) => continue,
                // Selector exhausted: everything past it is filtered out.
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, data_upper) = self.data.size_hint();
        let (_, selector_upper) = self.selector.size_hint();
        let upper = match (data_upper, selector_upper) {
            (Some(d), Some(s)) => Some(d.min(s)),
            (Some(d), None) => Some(d),
            (None, Some(s)) => Some(s),
            (None, None) => None,
        };
        (0, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_selection() {
        let kept: Vec<i32> = compress(vec![10, 20, 30], vec![true, false, true]).collect();
        assert_eq!(kept, vec![10, 30]);
    }

    #[test]
    fn test_short_selector_truncates() {
        let kept: Vec<i32> = compress(vec![1, 2, 3], vec![true]).collect();
        assert_eq!(kept, vec![1]);
    }

    #[test]
    fn test_long_selector_is_harmless() {
        let kept: Vec<i32> = compress(vec![1, 2], vec![false, true, true, true]).collect();
        assert_eq!(kept, vec![2]);
    }

    #[test]
    fn test_all_false_selector() {
        let kept: Vec<i32> = compress(vec![1, 2, 3], vec![false, false, false]).collect();
        assert_eq!(kept, Vec::<i32>::new());
    }

    #[test]
    fn test_empty_data() {
        let kept: Vec<i32> = compress(Vec::new(), vec![true, true]).collect();
        assert_eq!(kept, Vec::<i32>::new());
    }

    #[test]
    fn test_closed_after_selector_exhaustion() {
        let mut seq = compress(vec![1, 2, 3], vec![true]);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }
}
