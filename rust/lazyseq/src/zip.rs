//! Synchronized iteration over multiple equal-length sequences.

use lazyseq_common::Result;
use lazyseq_common::error::Error;

/// Verifies that every input's length matches the first input's length.
///
/// This is the shared precondition check for synchronized iteration. Zero
/// inputs are vacuously valid.
pub fn ensure_same_length<T>(inputs: &[Vec<T>]) -> Result<()> {
    let Some(first) = inputs.first() else {
        return Ok(());
    };
    let expected = first.len();
    for (index, input) in inputs.iter().enumerate().skip(1) {
        if input.len() != expected {
            return Err(Error::length_mismatch(index, expected, input.len()));
        }
    }
    Ok(())
}

/// A sequence of rows drawn from multiple equal-length inputs.
///
/// Row `i` holds the `i`-th element of every input, in input order. If the
/// inputs have unequal lengths, the sequence yields exactly one `Err` as its
/// only item and closes; no data rows are produced.
#[derive(Debug)]
pub struct ZipExact<T> {
    /// One cursor per input, advanced in lockstep.
    inputs: Vec<std::vec::IntoIter<T>>,
    /// A pending length-mismatch error to deliver as the sole item.
    error: Option<Error>,
    done: bool,
}

/// Creates a sequence that yields one row per index of the equal-length
/// `inputs`.
///
/// Zero inputs produce an empty sequence.
///
/// # Examples
///
/// ```
/// use lazyseq::zip_exact;
///
/// let rows: Vec<Vec<i64>> = zip_exact(vec![vec![1, 2, 3], vec![4, 5, 6]])
///     .map(Result::unwrap)
///     .collect();
/// assert_eq!(rows, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn zip_exact<T>(inputs: Vec<Vec<T>>) -> ZipExact<T> {
    let error = ensure_same_length(&inputs).err();
    let inputs = if error.is_some() {
        Vec::new()
    } else {
        inputs.into_iter().map(Vec::into_iter).collect()
    };
    ZipExact {
        inputs,
        error,
        done: false,
    }
}

impl<T> Iterator for ZipExact<T> {
    type Item = Result<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(error) = self.error.take() {
            self.done = true;
            return Some(Err(error));
        }
        if self.inputs.is_empty() {
            self.done = true;
            return None;
        }
        let mut row = Vec::with_capacity(self.inputs.len());
        for input in &mut self.inputs {
            match input.next() {
                Some(value) => row.push(value),
                // Lengths are equal, so every cursor exhausts at once.
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
        Some(Ok(row))
    }
}
