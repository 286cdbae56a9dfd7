//! Index and time domains for the generators.
//!
//! Discrete generators take an index domain (`&[i64]`), continuous ones a
//! time domain (`&[f64]`). These helpers build the common cases.

use crate::{Result, SignalError};

/// Integer indices `start, start + 1, ..., stop - 1`.
///
/// Returns an empty domain when `stop <= start`.
///
/// # Examples
///
/// ```
/// use sigcraft::domain::arange;
///
/// assert_eq!(arange(-2, 3), vec![-2, -1, 0, 1, 2]);
/// assert!(arange(3, 3).is_empty());
/// ```
pub fn arange(start: i64, stop: i64) -> Vec<i64> {
    (start..stop).collect()
}

/// `num` evenly spaced points from `start` to `stop`, both inclusive.
///
/// A single point yields `[start]`; zero points yield an empty domain.
///
/// # Examples
///
/// ```
/// use sigcraft::domain::linspace;
///
/// let t = linspace(0.0, 1.0, 5);
/// assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| {
                    // Pin the endpoint so it does not drift by rounding
                    if i == num - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Sampling instants `n / sample_rate` for `n` in `0..count`.
///
/// # Errors
///
/// Returns [`SignalError::InvalidArgument`] if `sample_rate` is not a
/// finite positive number.
///
/// # Examples
///
/// ```
/// use sigcraft::domain::sample_times;
///
/// let t = sample_times(4, 100.0)?;
/// assert_eq!(t, vec![0.0, 0.01, 0.02, 0.03]);
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
pub fn sample_times(count: usize, sample_rate: f64) -> Result<Vec<f64>> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(SignalError::InvalidArgument(format!(
            "sample rate must be finite and positive, got {sample_rate}"
        )));
    }
    Ok((0..count).map(|n| n as f64 / sample_rate).collect())
}
