//! Signal operations.
//!
//! Pure functions mapping one or two sample sequences to a new
//! [`Signal`]: time shift, time scale, addition and multiplication. Inputs
//! are borrowed and never modified.
//!
//! The same operations are available as chainable methods through
//! [`SignalExt`].

mod arithmetic;
mod scale;
mod shift;

pub use arithmetic::{signal_addition, signal_multiplication};
pub use scale::{InterpolationMode, time_scale, time_scale_with};
pub use shift::{time_shift, trim_shift};

use crate::{Result, Signal};

/// Extension trait exposing the signal operations as methods.
///
/// Implemented for everything that can be viewed as a slice of samples:
/// `Signal`, `Vec<f64>`, `[f64; N]` and `&[f64]`.
///
/// # Examples
///
/// ```
/// use sigcraft::{SignalExt, unit_step};
///
/// let step = unit_step(&[-1, 0, 1, 2]);
/// let processed = step
///     .shift(1)               // Delay by one sample
///     .scale(0.5)?            // Stretch to twice the length
///     .multiply([0.5; 10])?;  // Halve the amplitude
/// assert_eq!(processed.len(), 10);
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
pub trait SignalExt: AsRef<[f64]> {
    /// Shifts this signal by `k` samples. See [`time_shift`].
    fn shift(&self, k: isize) -> Signal {
        time_shift(self.as_ref(), k)
    }

    /// Scales this signal in time by factor `k`. See [`time_scale`].
    fn scale(&self, k: f64) -> Result<Signal> {
        time_scale(self.as_ref(), k)
    }

    /// Scales this signal in time with an explicit interpolation mode.
    fn scale_with(&self, k: f64, mode: InterpolationMode) -> Result<Signal> {
        time_scale_with(self.as_ref(), k, mode)
    }

    /// Adds another signal sample by sample. See [`signal_addition`].
    fn add(&self, other: impl AsRef<[f64]>) -> Result<Signal> {
        signal_addition(self.as_ref(), other)
    }

    /// Multiplies by another signal sample by sample. See [`signal_multiplication`].
    fn multiply(&self, other: impl AsRef<[f64]>) -> Result<Signal> {
        signal_multiplication(self.as_ref(), other)
    }
}

// Blanket implementation for all sample containers
impl<T: AsRef<[f64]> + ?Sized> SignalExt for T {}
