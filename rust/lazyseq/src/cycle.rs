//! Infinite repetition of a finite text base.

use unicode_segmentation::UnicodeSegmentation;

/// An infinite sequence cycling over the grapheme clusters of a text value.
///
/// Yields each grapheme of the base in order, then repeats from the first,
/// forever. Splitting is grapheme-level, so multi-byte characters and
/// combining marks stay intact. Never closes on its own, except for an empty
/// base, which produces an empty sequence.
#[derive(Debug, Clone)]
pub struct Cycle {
    /// Grapheme clusters of the base text, in order.
    graphemes: Vec<String>,
    /// Index of the grapheme to yield next.
    position: usize,
}

/// Creates an infinite sequence repeating the grapheme clusters of `base`.
///
/// No empty token is ever yielded, and an empty `base` closes immediately
/// rather than spinning without producing values.
///
/// # Examples
///
/// ```
/// use lazyseq::cycle;
///
/// let values: Vec<String> = cycle("ab").take(5).collect();
/// assert_eq!(values, vec!["a", "b", "a", "b", "a"]);
/// ```
pub fn cycle(base: &str) -> Cycle {
    Cycle {
        graphemes: base.graphemes(true).map(str::to_owned).collect(),
        position: 0,
    }
}

impl Iterator for Cycle {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let grapheme = self.graphemes.get(self.position)?.clone();
        self.position += 1;
        if self.position == self.graphemes.len() {
            self.position = 0;
        }
        Some(grapheme)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.graphemes.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}
