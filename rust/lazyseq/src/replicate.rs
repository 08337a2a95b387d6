//! A producer that yields a single value a fixed number of times.

/// A sequence that yields one value exactly `count` times.
#[derive(Debug, Clone)]
pub struct Replicate<T> {
    /// The value being replicated. Taken on the final emission.
    value: Option<T>,
    /// Number of emissions still to produce.
    remaining: usize,
}

/// Creates a sequence that yields `value` exactly `count` times, then closes.
///
/// A `count` of zero yields nothing. The stored value is cloned for all but
/// the last emission, which hands out the original.
///
/// # Examples
///
/// ```
/// use lazyseq::replicate;
///
/// let values: Vec<&str> = replicate("ha", 3).collect();
/// assert_eq!(values, vec!["ha", "ha", "ha"]);
/// ```
pub fn replicate<T: Clone>(value: T, count: usize) -> Replicate<T> {
    Replicate {
        value: Some(value),
        remaining: count,
    }
}

impl<T: Clone> Iterator for Replicate<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.value.take()
        } else {
            self.value.clone()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replicates_exactly_count_times() {
        let values: Vec<i32> = replicate(7, 4).collect();
        assert_eq!(values, vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_zero_count_yields_nothing() {
        let mut seq = replicate('x', 0);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_single_emission() {
        let values: Vec<String> = replicate(String::from("only"), 1).collect();
        assert_eq!(values, vec!["only"]);
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let mut seq = replicate(0u8, 2);
        assert_eq!(seq.size_hint(), (2, Some(2)));
        seq.next();
        assert_eq!(seq.size_hint(), (1, Some(1)));
    }
}
