//! Time scaling (resampling by a constant factor).
//!
//! Scaling by `k` produces `floor(len / k)` samples, with output sample `m`
//! read from source position `m·k`. Factors above 1 compress the signal,
//! factors between 0 and 1 expand it. How a fractional source position is
//! turned into a value is selected with [`InterpolationMode`]:
//!
//! - `Hold`: take the sample at or before the position (default)
//!   - Integer factors above 1 are plain decimation, keeping every k-th sample
//!   - Factors `1/r` repeat every sample `r` times
//!
//! - `Linear`: interpolate between the two neighbouring samples
//!   - Smoother expansion; the final sample is held at the end of the buffer

use tracing::{debug, warn};

use crate::{Result, Signal, SignalError};

/// How samples between source positions are produced when time scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Zero-order hold: repeat the sample at or before the position
    #[default]
    Hold,
    /// Linear interpolation between adjacent samples
    Linear,
}

/// Floors `value` after snapping it to a whole number within rounding
/// distance, so `1.0 / 3.0` expands a sample to exactly three.
fn floor_snapped(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= SNAP_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        value.floor()
    }
}

const SNAP_TOLERANCE: f64 = 1e-9;

/// Largest number of samples a `Vec<f64>` can hold.
const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Scales a signal in time by factor `k` using [`InterpolationMode::Hold`].
///
/// # Errors
///
/// Returns [`SignalError::InvalidScaleFactor`] unless `k` is finite and
/// greater than zero, or if the scaled length cannot be represented.
///
/// # Examples
///
/// ```
/// use sigcraft::time_scale;
///
/// // Compress: keep every second sample
/// let compressed = time_scale([1.0, 2.0, 3.0, 4.0, 5.0], 2.0)?;
/// assert_eq!(compressed, [1.0, 3.0]);
///
/// // Expand: repeat every sample
/// let expanded = time_scale([1.0, 2.0], 0.5)?;
/// assert_eq!(expanded, [1.0, 1.0, 2.0, 2.0]);
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
pub fn time_scale(signal: impl AsRef<[f64]>, k: f64) -> Result<Signal> {
    time_scale_with(signal, k, InterpolationMode::Hold)
}

/// Scales a signal in time by factor `k` with the given interpolation mode.
///
/// # Errors
///
/// Returns [`SignalError::InvalidScaleFactor`] unless `k` is finite and
/// greater than zero, or if the scaled length cannot be represented.
///
/// # Examples
///
/// ```
/// use sigcraft::{InterpolationMode, time_scale_with};
///
/// let expanded = time_scale_with([0.0, 2.0], 0.5, InterpolationMode::Linear)?;
/// assert_eq!(expanded, [0.0, 1.0, 2.0, 2.0]);
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
pub fn time_scale_with(
    signal: impl AsRef<[f64]>,
    k: f64,
    mode: InterpolationMode,
) -> Result<Signal> {
    if !(k.is_finite() && k > 0.0) {
        return Err(SignalError::InvalidScaleFactor(k));
    }

    let samples = signal.as_ref();
    let scaled_len = floor_snapped(samples.len() as f64 / k);
    if scaled_len > MAX_SAMPLES as f64 {
        return Err(SignalError::InvalidScaleFactor(k));
    }
    let scaled_len = scaled_len as usize;

    debug!(factor = k, ?mode, len = samples.len(), scaled_len, "time scale");
    if scaled_len == 0 && !samples.is_empty() {
        warn!(
            factor = k,
            len = samples.len(),
            "time scale factor exceeds signal length, result is empty"
        );
    }

    let last = samples.len().saturating_sub(1);
    let scaled = (0..scaled_len).map(|m| {
        let position = m as f64 * k;
        // m < len / k keeps the index in bounds; min() guards against rounding
        let index = (floor_snapped(position) as usize).min(last);
        match mode {
            InterpolationMode::Hold => samples[index],
            InterpolationMode::Linear => {
                if index < last {
                    let frac = position - index as f64;
                    samples[index] + (samples[index + 1] - samples[index]) * frac
                } else {
                    samples[index]
                }
            }
        }
    });

    Ok(scaled.collect())
}
