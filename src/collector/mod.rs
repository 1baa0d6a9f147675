//! Running-sum collectors
//!
//! This module provides a FIFO collector that keeps its sum up to date on
//! every mutation, along with bulk helpers that work on any accumulator.
//!
//! # Example
//!
//! ```
//! use runsum::collector::{clear, push_all, RunningCollector};
//!
//! let mut collector = RunningCollector::new();
//! push_all(&mut collector, [1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! println!("Sum: {}", collector.sum());
//! println!("Average: {}", collector.avg());
//!
//! clear(&mut collector);
//! assert!(collector.is_empty());
//! ```

mod running;
mod util;

pub use running::RunningCollector;
pub use util::{clear, push_all};
