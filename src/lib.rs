//! Arithmetic mean of a collection of numbers.
//!
//! ```
//! use meanrs::{Mean, MeanError, mean};
//!
//! assert_eq!(mean(&[1, 2, 3]), Ok(2.0));
//! assert_eq!([-1.0_f64, 1.0].mean(), Ok(0.0));
//! assert_eq!(mean::<f64>(&[]), Err(MeanError::DivisionByZero));
//! ```

mod error;
mod stats;

pub use crate::error::{MeanError, Result};
pub use crate::stats::{Mean, mean};
