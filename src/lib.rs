//! Sigcraft - Elementary signals and operations for signals-and-systems work
//!
//! This library generates the elementary discrete and continuous signals
//! (unit step, unit impulse, ramp, sine, cosine, exponential) and applies
//! the elementary operations to them (time shift, time scale, addition,
//! multiplication).
//!
//! # Examples
//!
//! ```
//! use sigcraft::domain::{arange, sample_times};
//! use sigcraft::{SignalExt, cosine_wave, ramp_signal, sine_wave, unit_step};
//!
//! let n = arange(-10, 10);
//! let step_plus_ramp = unit_step(&n).add(ramp_signal(&n))?;
//! assert_eq!(step_plus_ramp.len(), 20);
//!
//! let t = sample_times(100, 100.0)?;
//! let sine = sine_wave(2.0, 5.0, 0.0, &t);
//! let product = sine.multiply(cosine_wave(2.0, 5.0, 0.0, &t))?;
//! assert_eq!(product.len(), 100);
//!
//! let delayed = sine.shift(5);
//! assert_eq!(delayed.len(), 105);
//! # Ok::<(), sigcraft::SignalError>(())
//! ```

pub mod domain;
pub mod error;
pub mod frequency;
pub mod generators;
pub mod operations;
pub mod signal;
pub mod stats;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use error::{Result, SignalError};
pub use frequency::Frequency;
pub use generators::{
    cosine_wave, exponential_signal, ramp_signal, sine_wave, unit_impulse, unit_step,
};
pub use operations::{
    InterpolationMode, SignalExt, signal_addition, signal_multiplication, time_scale,
    time_scale_with, time_shift, trim_shift,
};
pub use signal::Signal;
pub use stats::Stats;

#[cfg(feature = "macros")]
pub use sigcraft_macros::freq;
