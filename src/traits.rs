//! Core traits for running accumulators
//!
//! Every accumulator implements [`Accumulator`]; the free helpers in
//! [`crate::collector`] are written against it.

/// Error returned by accumulator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorError {
    /// The operation needs at least one sample but the accumulator is empty
    Empty {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
}

impl core::fmt::Display for CollectorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectorError::Empty { operation } => {
                write!(f, "cannot {} from an empty collector", operation)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectorError {}

/// Double-ended accumulator of `f64` samples with a running sum
///
/// Values go in at the back and come out at the front. Implementors keep the
/// sum up to date on every mutation so that [`sum`](Accumulator::sum) and
/// [`avg`](Accumulator::avg) are constant time.
pub trait Accumulator {
    /// Append a value at the back
    fn push(&mut self, value: f64);

    /// Remove and return the value at the front
    ///
    /// Returns [`CollectorError::Empty`] if there is nothing to remove.
    fn pop(&mut self) -> Result<f64, CollectorError>;

    /// Sum of the values currently held
    fn sum(&self) -> f64;

    /// Number of values currently held
    fn len(&self) -> usize;

    /// Average of the values currently held
    ///
    /// Plain `sum / len`: an empty accumulator yields NaN.
    fn avg(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Check if there are no values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
