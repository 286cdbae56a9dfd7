//! Signal generators.
//!
//! Pure functions mapping an index or time domain to a [`Signal`](crate::Signal):
//! - Unitary signals over an index domain: unit step, unit impulse, ramp
//! - Signals over a time domain: sine, cosine, exponential

mod trigonometric;
mod unitary;

pub use trigonometric::{cosine_wave, exponential_signal, sine_wave};
pub use unitary::{ramp_signal, unit_impulse, unit_step};
