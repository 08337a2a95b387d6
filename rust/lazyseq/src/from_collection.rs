//! A producer over the items of a finite collection.

/// A sequence that yields the items of a finite collection in input order.
#[derive(Debug, Clone)]
pub struct FromCollection<T> {
    /// Remaining items, consumed front to back.
    items: std::vec::IntoIter<T>,
}

/// Creates a sequence that yields each item of `items` in order, then closes.
///
/// # Examples
///
/// ```
/// use lazyseq::from_collection;
///
/// let values: Vec<i64> = from_collection(vec![1, 2, 3]).collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn from_collection<T>(items: Vec<T>) -> FromCollection<T> {
    FromCollection {
        items: items.into_iter(),
    }
}

impl<T> Iterator for FromCollection<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_in_input_order() {
        let values: Vec<i32> = from_collection(vec![3, 1, 2]).collect();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_total_pulls_is_len_plus_one() {
        let input = vec![10, 20, 30];
        let mut seq = from_collection(input);
        let mut pulls = 0;
        while seq.next().is_some() {
            pulls += 1;
        }
        pulls += 1;
        assert_eq!(pulls, 4);
        // Closed for good.
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_empty_collection() {
        let mut seq = from_collection(Vec::<i32>::new());
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_replay_requires_new_producer() {
        let input = vec![1, 2];
        let first: Vec<i32> = from_collection(input.clone()).collect();
        let second: Vec<i32> = from_collection(input).collect();
        assert_eq!(first, second);
    }
}
