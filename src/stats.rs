//! Summary statistics of a signal.

use std::fmt;

use crate::{Result, Signal, SignalError};

/// Sample count, extrema, mean and RMS of a signal.
///
/// # Examples
///
/// ```
/// use sigcraft::Signal;
///
/// let stats = Signal::from([1.0, 2.0, 3.0, 4.0, 5.0]).stats()?;
/// assert_eq!(stats.samples, 5);
/// assert_eq!(stats.max, 5.0);
/// assert_eq!(stats.min, 1.0);
/// assert_eq!(stats.mean, 3.0);
/// assert!((stats.rms - 11.0f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub samples: usize,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    /// Root mean square, `sqrt(mean(x²))`
    pub rms: f64,
}

impl Stats {
    /// Computes statistics over a slice of samples.
    ///
    /// A NaN sample makes every statistic NaN, extrema included.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::Empty`] for an empty slice.
    pub fn of(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(SignalError::Empty);
        }

        let count = samples.len() as f64;
        let (min, max) = if samples.iter().any(|x| x.is_nan()) {
            (f64::NAN, f64::NAN)
        } else {
            samples
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                    (lo.min(x), hi.max(x))
                })
        };
        let mean = samples.iter().sum::<f64>() / count;
        let rms = (samples.iter().map(|x| x * x).sum::<f64>() / count).sqrt();

        Ok(Self {
            samples: samples.len(),
            max,
            min,
            mean,
            rms,
        })
    }
}

impl Signal {
    /// Computes summary statistics of this signal. See [`Stats`].
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::Empty`] if the signal has no samples.
    pub fn stats(&self) -> Result<Stats> {
        Stats::of(self.as_slice())
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Samples={:3}, Max={:7.3}, Min={:7.3}, Mean={:7.3}, RMS={:7.3}",
            self.samples, self.max, self.min, self.mean, self.rms
        )
    }
}
