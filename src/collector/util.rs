//! Bulk helpers over any [`Accumulator`]

use crate::traits::Accumulator;

/// Push every value in order
///
/// Leaves the accumulator in the same state as calling
/// [`push`](Accumulator::push) once per value. Returns how many values were
/// pushed.
///
/// # Example
///
/// ```
/// use runsum::collector::{push_all, RunningCollector};
///
/// let mut collector = RunningCollector::new();
/// let pushed = push_all(&mut collector, [1.0, 2.0, 3.0, 4.0, 5.0]);
///
/// assert_eq!(pushed, 5);
/// assert_eq!(collector.avg(), 3.0);
/// ```
pub fn push_all<A, I>(acc: &mut A, values: I) -> usize
where
    A: Accumulator + ?Sized,
    I: IntoIterator<Item = f64>,
{
    let mut pushed = 0;
    for value in values {
        acc.push(value);
        pushed += 1;
    }
    log::trace!("pushed {} values, len is now {}", pushed, acc.len());
    pushed
}

/// Pop until empty, discarding the values
///
/// A no-op on an empty accumulator. Returns how many values were drained.
pub fn clear<A>(acc: &mut A) -> usize
where
    A: Accumulator + ?Sized,
{
    let mut drained = 0;
    while !acc.is_empty() {
        if let Err(err) = acc.pop() {
            log::warn!("stopped clearing with {} values left: {}", acc.len(), err);
            break;
        }
        drained += 1;
    }
    log::trace!("drained {} values", drained);
    drained
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::RunningCollector;

    #[test]
    fn test_push_all() {
        let mut collector = RunningCollector::new();

        assert_eq!(push_all(&mut collector, [1.0, 2.0, 3.0, 4.0, 5.0]), 5);
        assert_eq!(collector.len(), 5);
        assert_eq!(collector.sum(), 15.0);
        assert_eq!(collector.avg(), 3.0);
    }

    #[test]
    fn test_push_all_sub_range() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut collector = RunningCollector::new();

        push_all(&mut collector, values[1..4].iter().copied());

        assert_eq!(collector.front(), Some(2.0));
        assert_eq!(collector.back(), Some(4.0));
        assert_eq!(collector.sum(), 9.0);
    }

    #[test]
    fn test_push_all_empty_range() {
        let mut collector = RunningCollector::new();
        collector.push(1.0);

        assert_eq!(push_all(&mut collector, core::iter::empty()), 0);
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.sum(), 1.0);
    }

    #[test]
    fn test_clear() {
        let mut collector = RunningCollector::new();
        push_all(&mut collector, [1.0, 2.0, 3.0]);

        assert_eq!(clear(&mut collector), 3);
        assert!(collector.is_empty());
        assert_eq!(collector.sum(), 0.0);
    }

    #[test]
    fn test_clear_fractional() {
        let mut collector = RunningCollector::new();
        push_all(&mut collector, [0.1, 0.2, 0.3]);

        assert_eq!(clear(&mut collector), 3);
        assert!(collector.is_empty());
        assert_eq!(collector.sum(), 0.0);
    }

    /// Reports samples it can never hand out
    struct Stuck;

    impl Accumulator for Stuck {
        fn push(&mut self, _value: f64) {}

        fn pop(&mut self) -> Result<f64, crate::traits::CollectorError> {
            Err(crate::traits::CollectorError::Empty { operation: "pop" })
        }

        fn sum(&self) -> f64 {
            1.0
        }

        fn len(&self) -> usize {
            1
        }
    }

    #[test]
    fn test_clear_stops_on_pop_error() {
        let mut stuck = Stuck;

        assert_eq!(clear(&mut stuck), 0);
        assert_eq!(stuck.len(), 1);
    }

    #[test]
    fn test_clear_empty() {
        let mut collector = RunningCollector::new();

        assert_eq!(clear(&mut collector), 0);
        assert!(collector.is_empty());
        assert_eq!(collector.sum(), 0.0);
    }

    #[test]
    fn test_dyn_accumulator() {
        let mut collector = RunningCollector::new();
        let acc: &mut dyn Accumulator = &mut collector;

        push_all(acc, [4.0, 8.0]);
        assert_eq!(acc.avg(), 6.0);
        assert_eq!(clear(acc), 2);
        assert!(acc.is_empty());
    }
}
