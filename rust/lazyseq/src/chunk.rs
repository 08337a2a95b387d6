//! Fixed-size, non-overlapping windowing of finite sequences and text.
//!
//! Windows are sliced off the front of the input: each full window holds
//! exactly `size` elements, and whatever remains at the end (length 1 to
//! `size - 1`) is yielded as one final short window. Two explicit entry
//! points are provided, one over generic sequences ([`chunks`]) and one over
//! text split into grapheme clusters ([`text_chunks`]), plus [`pairwise`] as
//! the 2-wide specialization over text.

use unicode_segmentation::UnicodeSegmentation;

/// An adapter that yields non-overlapping windows of at most `size` elements.
///
/// Every window except possibly the last has exactly `size` elements; the
/// last holds the remainder. A `size` of zero is invalid input and produces
/// a sequence that closes immediately with zero yields.
#[derive(Debug, Clone)]
pub struct Chunks<I: Iterator> {
    /// The sequence being windowed.
    inner: I,
    /// Window width. Zero disables production entirely.
    size: usize,
}

impl<I: Iterator> Chunks<I> {
    /// Creates a new `Chunks` over the given sequence.
    pub fn new(inner: I, size: usize) -> Self {
        Chunks { inner, size }
    }
}

/// Creates a sequence of non-overlapping windows of at most `size` elements
/// taken from the front of `input`.
///
/// # Examples
///
/// ```
/// use lazyseq::chunks;
///
/// let windows: Vec<Vec<i64>> = chunks(vec![1, 2, 3, 4, 5], 2).collect();
/// assert_eq!(windows, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunks<I>(input: I, size: usize) -> Chunks<I::IntoIter>
where
    I: IntoIterator,
{
    Chunks::new(input.into_iter(), size)
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }
        let mut window = Vec::with_capacity(self.size);
        while window.len() < self.size {
            match self.inner.next() {
                Some(item) => window.push(item),
                None => break,
            }
        }
        if window.is_empty() { None } else { Some(window) }
    }
}

/// Non-overlapping windows over a text value, split at grapheme boundaries.
///
/// Follows the same policy as [`Chunks`]: full `size`-grapheme windows, then
/// one short remainder window if the grapheme count is not a multiple of
/// `size`.
#[derive(Debug, Clone)]
pub struct TextChunks {
    inner: Chunks<std::vec::IntoIter<String>>,
}

/// Creates a sequence of non-overlapping windows of at most `size` grapheme
/// clusters taken from the front of `input`.
///
/// # Examples
///
/// ```
/// use lazyseq::text_chunks;
///
/// let windows: Vec<String> = text_chunks("abcde", 2).collect();
/// assert_eq!(windows, vec!["ab", "cd", "e"]);
/// ```
pub fn text_chunks(input: &str, size: usize) -> TextChunks {
    let graphemes: Vec<String> = input.graphemes(true).map(str::to_owned).collect();
    TextChunks {
        inner: Chunks::new(graphemes.into_iter(), size),
    }
}

impl Iterator for TextChunks {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next().map(|window| window.concat())
    }
}

/// The 2-wide windowing specialization over text.
///
/// Forwards every [`TextChunks`] window unchanged, so the output alternates
/// full 2-grapheme windows with a possible final 1-grapheme remainder. This
/// is non-overlapping windowing, not classical sliding pairwise.
#[derive(Debug, Clone)]
pub struct Pairwise {
    inner: TextChunks,
}

/// Creates a sequence of 2-grapheme windows over `input`, with a final
/// 1-grapheme remainder when the grapheme count is odd.
///
/// # Examples
///
/// ```
/// use lazyseq::pairwise;
///
/// let pairs: Vec<String> = pairwise("abc").collect();
/// assert_eq!(pairs, vec!["ab", "c"]);
/// ```
pub fn pairwise(input: &str) -> Pairwise {
    Pairwise {
        inner: text_chunks(input, 2),
    }
}

impl Iterator for Pairwise {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let windows: Vec<Vec<i32>> = chunks(vec![1, 2, 3, 4], 2).collect();
        assert_eq!(windows, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_short_final_window() {
        let windows: Vec<Vec<i32>> = chunks(vec![1, 2, 3, 4, 5], 2).collect();
        assert_eq!(windows, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_window_larger_than_input() {
        let windows: Vec<Vec<i32>> = chunks(vec![1, 2], 5).collect();
        assert_eq!(windows, vec![vec![1, 2]]);
    }

    #[test]
    fn test_empty_input() {
        let mut seq = chunks(Vec::<i32>::new(), 3);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_zero_size_closes_immediately() {
        let mut seq = chunks(vec![1, 2, 3], 0);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_closed_after_remainder() {
        let mut seq = chunks(vec![1, 2, 3], 2);
        assert_eq!(seq.next(), Some(vec![1, 2]));
        assert_eq!(seq.next(), Some(vec![3]));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_text_windows() {
        let windows: Vec<String> = text_chunks("abcde", 2).collect();
        assert_eq!(windows, vec!["ab", "cd", "e"]);
    }

    #[test]
    fn test_text_windows_respect_grapheme_boundaries() {
        let windows: Vec<String> = text_chunks("héllo", 2).collect();
        assert_eq!(windows, vec!["hé", "ll", "o"]);
    }

    #[test]
    fn test_text_zero_size() {
        let mut seq = text_chunks("abc", 0);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_pairwise_even_length() {
        let pairs: Vec<String> = pairwise("abcd").collect();
        assert_eq!(pairs, vec!["ab", "cd"]);
    }

    #[test]
    fn test_pairwise_odd_length_has_remainder() {
        let pairs: Vec<String> = pairwise("abc").collect();
        assert_eq!(pairs, vec!["ab", "c"]);
    }

    #[test]
    fn test_pairwise_empty_input() {
        let mut seq = pairwise("");
        assert_eq!(seq.next(), None);
    }
}
