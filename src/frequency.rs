//! Frequency type for the sinusoid generators.

use std::f64::consts::TAU;
use std::fmt;

/// A frequency value in Hz.
///
/// Accepted anywhere a generator takes `impl Into<Frequency>`, so plain
/// `f64` values work as well.
///
/// # Examples
///
/// ```
/// use sigcraft::Frequency;
///
/// let freq: Frequency = 5.0.into();
/// assert_eq!(freq.as_f64(), 5.0);
/// assert_eq!(freq.period(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a new frequency from Hz.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigcraft::Frequency;
    ///
    /// let freq = Frequency::from_hz(440.0);
    /// assert_eq!(freq.as_f64(), 440.0);
    /// ```
    pub const fn from_hz(hz: f64) -> Self {
        Frequency(hz)
    }

    /// Creates a frequency from a period in seconds.
    pub fn from_period(seconds: f64) -> Self {
        Frequency(seconds.recip())
    }

    /// Returns the frequency value in Hz.
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Angular frequency `2πf` in radians per second.
    pub fn angular(&self) -> f64 {
        TAU * self.0
    }

    /// Period `1/f` in seconds. Infinite for 0 Hz.
    pub fn period(&self) -> f64 {
        self.0.recip()
    }
}

impl From<f64> for Frequency {
    fn from(hz: f64) -> Self {
        Frequency::from_hz(hz)
    }
}

impl From<Frequency> for f64 {
    fn from(freq: Frequency) -> Self {
        freq.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}
