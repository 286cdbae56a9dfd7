//! Unit step, unit impulse and ramp over an index domain.

use crate::Signal;

/// Unit step `u[n]`: 1 for `n >= 0`, 0 otherwise.
///
/// # Examples
///
/// ```
/// use sigcraft::unit_step;
///
/// assert_eq!(unit_step(&[-2, -1, 0, 1]), [0.0, 0.0, 1.0, 1.0]);
/// ```
pub fn unit_step(n: &[i64]) -> Signal {
    n.iter().map(|&i| if i >= 0 { 1.0 } else { 0.0 }).collect()
}

/// Unit impulse `δ[n]`: 1 at `n == 0`, 0 otherwise.
///
/// A domain that does not contain 0 produces all zeros.
///
/// # Examples
///
/// ```
/// use sigcraft::unit_impulse;
///
/// assert_eq!(unit_impulse(&[-1, 0, 1]), [0.0, 1.0, 0.0]);
/// ```
pub fn unit_impulse(n: &[i64]) -> Signal {
    n.iter().map(|&i| if i == 0 { 1.0 } else { 0.0 }).collect()
}

/// Ramp `r[n]`: `n` for `n >= 0`, 0 otherwise.
///
/// # Examples
///
/// ```
/// use sigcraft::ramp_signal;
///
/// assert_eq!(ramp_signal(&[-1, 0, 1, 2]), [0.0, 0.0, 1.0, 2.0]);
/// ```
pub fn ramp_signal(n: &[i64]) -> Signal {
    n.iter().map(|&i| i.max(0) as f64).collect()
}
