//! Elementwise addition and multiplication of equal-length signals.

use tracing::debug;

use crate::{Result, Signal, SignalError};

fn zip_with(
    a: &[f64],
    b: &[f64],
    op: &'static str,
    func: impl Fn(f64, f64) -> f64,
) -> Result<Signal> {
    if a.len() != b.len() {
        debug!(op, left = a.len(), right = b.len(), "length mismatch");
        return Err(SignalError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| func(x, y)).collect())
}

/// Sample-by-sample sum of two signals (mixing).
///
/// # Errors
///
/// Returns [`SignalError::LengthMismatch`] if the signals differ in length.
/// Inputs are never truncated.
///
/// # Examples
///
/// ```
/// use sigcraft::signal_addition;
///
/// let sum = signal_addition([1.0, 2.0, 3.0, 4.0, 5.0], [5.0, 4.0, 3.0, 2.0, 1.0])?;
/// assert_eq!(sum, [6.0; 5]);
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
pub fn signal_addition(a: impl AsRef<[f64]>, b: impl AsRef<[f64]>) -> Result<Signal> {
    zip_with(a.as_ref(), b.as_ref(), "addition", |x, y| x + y)
}

/// Sample-by-sample product of two signals (amplitude / ring modulation).
///
/// # Errors
///
/// Returns [`SignalError::LengthMismatch`] if the signals differ in length.
///
/// # Examples
///
/// ```
/// use sigcraft::signal_multiplication;
///
/// let product = signal_multiplication([1.0, 2.0, 3.0, 4.0, 5.0], [5.0, 4.0, 3.0, 2.0, 1.0])?;
/// assert_eq!(product, [5.0, 8.0, 9.0, 8.0, 5.0]);
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
pub fn signal_multiplication(a: impl AsRef<[f64]>, b: impl AsRef<[f64]>) -> Result<Signal> {
    zip_with(a.as_ref(), b.as_ref(), "multiplication", |x, y| x * y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{arange, sample_times};
    use crate::{cosine_wave, ramp_signal, sine_wave, unit_step};

    #[test]
    fn test_addition() {
        let sum = signal_addition([1.0, 2.0, 3.0, 4.0, 5.0], [5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(sum, [6.0, 6.0, 6.0, 6.0, 6.0]);
    }

    #[test]
    fn test_multiplication() {
        let product =
            signal_multiplication([1.0, 2.0, 3.0, 4.0, 5.0], [5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(product, [5.0, 8.0, 9.0, 8.0, 5.0]);
    }

    #[test]
    fn test_step_plus_ramp() {
        let n = arange(-10, 10);
        let sum = signal_addition(unit_step(&n), ramp_signal(&n)).unwrap();
        assert_eq!(sum.len(), 20);
        // n + 1 for n >= 0, zero before the origin
        for (&i, &x) in n.iter().zip(sum.iter()) {
            let expected = if i >= 0 { i as f64 + 1.0 } else { 0.0 };
            assert_eq!(x, expected);
        }
    }

    #[test]
    fn test_sine_times_cosine_is_half_amplitude_double_frequency() {
        let t = sample_times(100, 100.0).unwrap();
        let product = signal_multiplication(
            sine_wave(2.0, 5.0, 0.0, &t),
            cosine_wave(2.0, 5.0, 0.0, &t),
        )
        .unwrap();
        assert_eq!(product.len(), 100);
        // 2sin(x) * 2cos(x) = 2sin(2x)
        let expected = sine_wave(2.0, 10.0, 0.0, &t);
        for (p, e) in product.iter().zip(expected.iter()) {
            assert!((p - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let result = signal_addition([1.0, 2.0, 3.0], [1.0, 2.0]);
        assert!(matches!(
            result,
            Err(SignalError::LengthMismatch { left: 3, right: 2 })
        ));

        let result = signal_multiplication([1.0], Vec::<f64>::new());
        assert!(matches!(
            result,
            Err(SignalError::LengthMismatch { left: 1, right: 0 })
        ));
    }

    #[test]
    fn test_empty_inputs() {
        let sum = signal_addition(Vec::<f64>::new(), Vec::<f64>::new()).unwrap();
        assert!(sum.is_empty());
    }
}
