//! # Runsum
//!
//! Double-ended running-sum accumulator for Rust.
//!
//! Runsum keeps an ordered window of `f64` samples together with their sum.
//! Values enter at the back and leave at the front, and the sum is updated on
//! every mutation so that sum and average queries are constant time.
//!
//! ## Quick Start
//!
//! ```rust
//! use runsum::prelude::*;
//!
//! let mut collector = RunningCollector::new();
//! push_all(&mut collector, [1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! assert_eq!(collector.avg(), 3.0);
//! ```
//!
//! ## Sliding Windows
//!
//! Popping the oldest sample after each push keeps a fixed-size window:
//!
//! ```rust
//! use runsum::collector::RunningCollector;
//!
//! let mut window = RunningCollector::new();
//! for latency in [12.0, 15.0, 11.0, 40.0, 13.0] {
//!     window.push(latency);
//!     if window.len() > 3 {
//!         window.pop()?;
//!     }
//! }
//!
//! assert_eq!(window.len(), 3);
//! assert_eq!(window.sum(), 64.0);
//! # Ok::<(), runsum::traits::CollectorError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `cli`: Build the `runsum-avg` demonstration binary

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod traits;

pub mod collector;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::collector::{clear, push_all, RunningCollector};
}

pub use collector::RunningCollector;
pub use traits::{Accumulator, CollectorError};
