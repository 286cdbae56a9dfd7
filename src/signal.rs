//! The immutable sample buffer produced by generators and operations.
//!
//! A `Signal` is an ordered sequence of real-valued samples. Its domain (the
//! index range of a discrete signal or the time range of a continuous one) is
//! carried alongside by the caller; the buffer itself only holds amplitudes.

use std::ops::{Deref, Index};

/// An ordered, immutable sequence of real-valued samples.
///
/// Signals are values: they have no identity beyond their contents, and
/// nothing in the public API mutates one in place. Operations borrow their
/// inputs and return a new `Signal`.
///
/// # Examples
///
/// ```
/// use sigcraft::Signal;
///
/// let signal = Signal::from(vec![1.0, 2.0, 3.0]);
/// assert_eq!(signal.len(), 3);
/// assert_eq!(signal[1], 2.0);
/// assert_eq!(signal, [1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    /// Returns the samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates over the samples in order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    /// Applies a function to each sample, producing a new signal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigcraft::Signal;
    ///
    /// let doubled = Signal::from([1.0, -2.0]).map(|x| x * 2.0);
    /// assert_eq!(doubled, [2.0, -4.0]);
    /// ```
    pub fn map<F>(&self, func: F) -> Signal
    where
        F: FnMut(f64) -> f64,
    {
        self.samples.iter().copied().map(func).collect()
    }

    /// Consumes the signal and returns the underlying samples.
    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }
}

impl Deref for Signal {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.samples
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl Index<usize> for Signal {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl IntoIterator for Signal {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

impl From<&[f64]> for Signal {
    fn from(samples: &[f64]) -> Self {
        Self {
            samples: samples.to_vec(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Signal {
    fn from(samples: [f64; N]) -> Self {
        Self {
            samples: samples.to_vec(),
        }
    }
}

impl From<Signal> for Vec<f64> {
    fn from(signal: Signal) -> Self {
        signal.samples
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl PartialEq<[f64]> for Signal {
    fn eq(&self, other: &[f64]) -> bool {
        self.samples == other
    }
}

impl PartialEq<Vec<f64>> for Signal {
    fn eq(&self, other: &Vec<f64>) -> bool {
        &self.samples == other
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Signal {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.samples == other
    }
}
