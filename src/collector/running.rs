//! FIFO collector with an incrementally maintained sum
//!
//! Values are appended at the back and removed from the front. The sum is
//! adjusted on every push and pop instead of being recomputed, which keeps
//! `sum()` and `avg()` constant time regardless of how many samples are held.

use crate::traits::{Accumulator, CollectorError};

#[cfg(feature = "std")]
use std::collections::{vec_deque, VecDeque};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::{vec_deque, VecDeque};

/// Running-sum collector over a double-ended queue of `f64`
///
/// # Example
///
/// ```
/// use runsum::collector::RunningCollector;
///
/// let mut collector = RunningCollector::new();
///
/// for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     collector.push(value);
/// }
///
/// assert_eq!(collector.sum(), 15.0);
/// assert_eq!(collector.avg(), 3.0);
///
/// // Oldest value comes out first
/// assert_eq!(collector.pop(), Ok(1.0));
/// assert_eq!(collector.sum(), 14.0);
/// ```
///
/// # Empty collector
///
/// Popping from an empty collector is an error; averaging one is NaN.
///
/// ```
/// use runsum::collector::RunningCollector;
/// use runsum::traits::CollectorError;
///
/// let mut collector = RunningCollector::new();
///
/// assert_eq!(collector.pop(), Err(CollectorError::Empty { operation: "pop" }));
/// assert!(collector.avg().is_nan());
/// ```
#[derive(Clone, Debug)]
pub struct RunningCollector {
    /// Samples in insertion order, oldest at the front
    samples: VecDeque<f64>,
    /// Sum of `samples`, updated on every push and pop
    sum: f64,
}

impl Default for RunningCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningCollector {
    /// Create a new empty collector
    pub fn new() -> Self {
        Self {
            samples: VecDeque::new(),
            sum: 0.0,
        }
    }

    /// Create an empty collector with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            sum: 0.0,
        }
    }

    /// Append a value at the back
    ///
    /// Every value is kept, including NaN and infinities.
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.samples.push_back(value);
    }

    /// Remove and return the oldest value
    ///
    /// On an empty collector returns [`CollectorError::Empty`] and leaves the
    /// collector untouched. Popping the last sample resets the sum to exactly
    /// `0.0`, discarding any rounding left over from earlier updates.
    pub fn pop(&mut self) -> Result<f64, CollectorError> {
        match self.samples.pop_front() {
            Some(value) => {
                if self.samples.is_empty() {
                    self.sum = 0.0;
                } else {
                    self.sum -= value;
                }
                Ok(value)
            }
            None => {
                log::debug!("pop called on an empty collector");
                Err(CollectorError::Empty { operation: "pop" })
            }
        }
    }

    /// Get the running sum
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Get the average (`sum / len`)
    ///
    /// NaN when empty.
    pub fn avg(&self) -> f64 {
        self.sum / self.samples.len() as f64
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Peek at the oldest sample
    pub fn front(&self) -> Option<f64> {
        self.samples.front().copied()
    }

    /// Peek at the newest sample
    pub fn back(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Iterate over the samples from oldest to newest
    pub fn iter(&self) -> core::iter::Copied<vec_deque::Iter<'_, f64>> {
        self.samples.iter().copied()
    }

    /// Recompute the sum from the samples
    ///
    /// O(n). The result can differ from [`sum`](Self::sum) by the rounding
    /// accumulated across pushes and pops.
    pub fn exact_sum(&self) -> f64 {
        self.samples.iter().sum()
    }
}

impl Accumulator for RunningCollector {
    fn push(&mut self, value: f64) {
        RunningCollector::push(self, value);
    }

    fn pop(&mut self) -> Result<f64, CollectorError> {
        RunningCollector::pop(self)
    }

    fn sum(&self) -> f64 {
        self.sum
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

impl Extend<f64> for RunningCollector {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.samples.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a> Extend<&'a f64> for RunningCollector {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<f64> for RunningCollector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut collector = Self::new();
        collector.extend(iter);
        collector
    }
}
