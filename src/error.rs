//! Error types shared by every generator and operation.

use thiserror::Error;

/// Result type for signal operations
pub type Result<T> = std::result::Result<T, SignalError>;

/// Errors that can occur while generating or transforming signals
#[derive(Error, Debug)]
pub enum SignalError {
    /// Elementwise operation on signals of different lengths
    #[error("Signal length mismatch: left has {left} samples, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Time scale factor that is zero, negative or not finite
    #[error("Invalid time scale factor {0}: must be finite and greater than zero")]
    InvalidScaleFactor(f64),

    /// Shift padding larger than the signal it should be trimmed from
    #[error("Cannot trim a shift of {shift} from a signal of {len} samples")]
    ShiftOutOfRange { shift: isize, len: usize },

    /// A generated sample overflowed to a non-finite value
    #[error("Sample {index} at t = {time} is not finite; bound the time domain for growing signals")]
    Overflow { index: usize, time: f64 },

    /// Parameter outside the range an operation accepts
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation needs at least one sample
    #[error("Signal contains no samples")]
    Empty,

    /// WAV encoding or decoding failed
    #[cfg(feature = "wav")]
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}
