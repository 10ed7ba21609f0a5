use crate::error::{MeanError, Result};
use num_traits::AsPrimitive;

/// Compute the arithmetic mean of `data`.
///
/// Every element is cast to `f64` and summed in slice order, then the sum is
/// divided by the number of elements. Non-finite elements are not rejected
/// and propagate through the arithmetic.
///
/// # Errors
/// Returns [`MeanError::DivisionByZero`] if `data` is empty.
pub fn mean<T: AsPrimitive<f64>>(data: &[T]) -> Result<f64> {
    if data.is_empty() {
        return Err(MeanError::DivisionByZero);
    }
    let n_vals = data.len();
    let sum = data.iter().map(|&val| val.as_()).sum::<f64>();
    let mean = sum / n_vals as f64;
    log::trace!("mean of {n_vals} values is {mean}");
    Ok(mean)
}

/// Method form of [`mean`], available on slices and anything that derefs to one.
pub trait Mean {
    fn mean(&self) -> Result<f64>;
}

impl<T: AsPrimitive<f64>> Mean for [T] {
    fn mean(&self) -> Result<f64> {
        mean(self)
    }
}
