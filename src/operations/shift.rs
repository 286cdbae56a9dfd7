//! Time shifting by zero padding.

use tracing::debug;

use crate::{Result, Signal, SignalError};

/// Shifts a signal by `k` samples, padding with zeros.
///
/// A positive `k` delays the signal (zeros are prepended); a negative `k`
/// advances it (zeros are appended). The output is `|k|` samples longer than
/// the input either way.
///
/// # Examples
///
/// ```
/// use sigcraft::time_shift;
///
/// assert_eq!(time_shift([1.0, 2.0, 3.0], 2), [0.0, 0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(time_shift([1.0, 2.0, 3.0], -1), [1.0, 2.0, 3.0, 0.0]);
/// ```
pub fn time_shift(signal: impl AsRef<[f64]>, k: isize) -> Signal {
    let samples = signal.as_ref();
    let pad = k.unsigned_abs();
    debug!(shift = k, len = samples.len(), "time shift");

    let mut shifted = Vec::with_capacity(samples.len() + pad);
    if k > 0 {
        shifted.resize(pad, 0.0);
        shifted.extend_from_slice(samples);
    } else {
        shifted.extend_from_slice(samples);
        shifted.resize(samples.len() + pad, 0.0);
    }
    Signal::from(shifted)
}

/// Removes the zero padding that [`time_shift`] added for the same `k`.
///
/// Strips `k` leading samples for a positive `k` and `|k|` trailing samples
/// for a negative one, so `trim_shift(time_shift(x, k), k) == x`.
///
/// # Errors
///
/// Returns [`SignalError::ShiftOutOfRange`] if `|k|` exceeds the signal
/// length.
///
/// # Examples
///
/// ```
/// use sigcraft::{time_shift, trim_shift};
///
/// let original = [1.0, 2.0, 3.0];
/// let restored = trim_shift(time_shift(original, 2), 2)?;
/// assert_eq!(restored, original);
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
pub fn trim_shift(signal: impl AsRef<[f64]>, k: isize) -> Result<Signal> {
    let samples = signal.as_ref();
    let pad = k.unsigned_abs();
    if pad > samples.len() {
        return Err(SignalError::ShiftOutOfRange {
            shift: k,
            len: samples.len(),
        });
    }

    let kept = if k > 0 {
        &samples[pad..]
    } else {
        &samples[..samples.len() - pad]
    };
    Ok(Signal::from(kept))
}
