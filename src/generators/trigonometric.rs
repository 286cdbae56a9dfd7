//! Sinusoids and exponentials over a time domain.

use tracing::debug;

use crate::{Frequency, Result, Signal, SignalError};

/// Sine wave `A·sin(2πft + φ)` sampled at each instant in `t`.
///
/// # Arguments
///
/// * `amplitude` - Peak amplitude `A`
/// * `frequency` - Frequency `f` in Hz
/// * `phase` - Phase offset `φ` in radians
/// * `t` - Sampling instants in seconds
///
/// # Examples
///
/// ```
/// use sigcraft::sine_wave;
///
/// let sine = sine_wave(1.0, 1.0, 0.0, &[0.0, 0.25]);
/// assert_eq!(sine[0], 0.0);
/// assert!((sine[1] - 1.0).abs() < 1e-12);
/// ```
pub fn sine_wave(
    amplitude: f64,
    frequency: impl Into<Frequency>,
    phase: f64,
    t: &[f64],
) -> Signal {
    let omega = frequency.into().angular();
    t.iter()
        .map(|&t| amplitude * (omega * t + phase).sin())
        .collect()
}

/// Cosine wave `A·cos(2πft + φ)` sampled at each instant in `t`.
///
/// Takes the same arguments as [`sine_wave`].
///
/// # Examples
///
/// ```
/// use sigcraft::cosine_wave;
///
/// let cosine = cosine_wave(1.0, 1.0, 0.0, &[0.0]);
/// assert_eq!(cosine[0], 1.0);
/// ```
pub fn cosine_wave(
    amplitude: f64,
    frequency: impl Into<Frequency>,
    phase: f64,
    t: &[f64],
) -> Signal {
    let omega = frequency.into().angular();
    t.iter()
        .map(|&t| amplitude * (omega * t + phase).cos())
        .collect()
}

/// Exponential `A·e^(at)` sampled at each instant in `t`.
///
/// Nothing bounds the growth: with `rate > 0` the caller has to keep `t`
/// short enough for the result to stay finite.
///
/// # Errors
///
/// Returns [`SignalError::InvalidArgument`] if `amplitude`, `rate` or any
/// instant in `t` is not finite, and [`SignalError::Overflow`] naming the
/// first sample that grows past the range of `f64`.
///
/// # Examples
///
/// ```
/// use sigcraft::exponential_signal;
///
/// let decay = exponential_signal(5.0, -2.0, &[0.0, 1.0])?;
/// assert_eq!(decay[0], 5.0);
/// assert!((decay[1] - 5.0 * (-2.0f64).exp()).abs() < 1e-12);
///
/// assert!(exponential_signal(1.0, 1.0, &[1000.0]).is_err());
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
pub fn exponential_signal(amplitude: f64, rate: f64, t: &[f64]) -> Result<Signal> {
    if !amplitude.is_finite() || !rate.is_finite() {
        return Err(SignalError::InvalidArgument(format!(
            "amplitude and rate must be finite, got A = {amplitude}, a = {rate}"
        )));
    }
    if let Some(index) = t.iter().position(|t| !t.is_finite()) {
        return Err(SignalError::InvalidArgument(format!(
            "time instant {index} is not finite: {}",
            t[index]
        )));
    }

    let signal: Signal = t.iter().map(|&t| amplitude * (rate * t).exp()).collect();

    if let Some(index) = signal.iter().position(|x| !x.is_finite()) {
        let time = t[index];
        debug!(index, time, rate, "exponential overflowed");
        return Err(SignalError::Overflow { index, time });
    }

    Ok(signal)
}
