//! WAV import and export of signals.
//!
//! Signals are written as mono 32-bit float PCM at a caller-chosen sample
//! rate. Reading accepts float or integer PCM; integer samples are
//! normalized to [-1.0, 1.0] and multi-channel files keep only the first
//! channel. No sample rate conversion is performed.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::{Result, Signal, SignalError};

/// Writes a signal as a mono 32-bit float WAV stream.
///
/// # Examples
///
/// ```
/// use sigcraft::{sine_wave, wav};
/// use std::io::Cursor;
///
/// let t = sigcraft::domain::sample_times(8000, 8000.0)?;
/// let tone = sine_wave(0.5, 440.0, 0.0, &t);
///
/// let mut buffer = Cursor::new(Vec::new());
/// wav::write(&tone, &mut buffer, 8000)?;
/// # Ok::<(), sigcraft::SignalError>(())
/// ```
pub fn write<W: Write + Seek>(
    signal: impl AsRef<[f64]>,
    writer: W,
    sample_rate: u32,
) -> Result<()> {
    let samples = signal.as_ref();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut wav = hound::WavWriter::new(writer, spec)?;
    for &sample in samples {
        wav.write_sample(sample as f32)?;
    }
    wav.finalize()?;

    debug!(samples = samples.len(), sample_rate, "wrote wav");
    Ok(())
}

/// Reads a WAV stream into a signal, returning it with its sample rate.
///
/// # Errors
///
/// Returns [`SignalError::Wav`] if the stream is not valid WAV and
/// [`SignalError::Empty`] if it holds no samples.
pub fn read<R: Read>(reader: R) -> Result<(Signal, u32)> {
    let mut wav = hound::WavReader::new(reader)?;
    let spec = wav.spec();

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => wav
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1_i64 << (spec.bits_per_sample - 1)) as f64;
            wav.samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / max_value))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    if samples.is_empty() {
        return Err(SignalError::Empty);
    }

    let signal: Signal = if spec.channels > 1 {
        warn!(channels = spec.channels, "keeping only the first channel");
        samples
            .iter()
            .step_by(usize::from(spec.channels))
            .copied()
            .collect()
    } else {
        Signal::from(samples)
    };

    debug!(samples = signal.len(), sample_rate = spec.sample_rate, "read wav");
    Ok((signal, spec.sample_rate))
}

/// Writes a signal to a WAV file at `path`. See [`write`].
pub fn write_file<P: AsRef<Path>>(
    signal: impl AsRef<[f64]>,
    path: P,
    sample_rate: u32,
) -> Result<()> {
    let file = File::create(path).map_err(hound::Error::IoError)?;
    write(signal, BufWriter::new(file), sample_rate)
}

/// Reads a WAV file at `path`. See [`read`].
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<(Signal, u32)> {
    let file = File::open(path).map_err(hound::Error::IoError)?;
    read(BufReader::new(file))
}
