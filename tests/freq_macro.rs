#![cfg(feature = "macros")]

use sigcraft::{Frequency, freq, sine_wave};

#[test]
fn test_freq_macro_plain_number() {
    let f = freq!("440");
    assert_eq!(f.as_f64(), 440.0);
}

#[test]
fn test_freq_macro_hz_suffix() {
    assert_eq!(freq!("5 Hz"), Frequency::from_hz(5.0));
    assert_eq!(freq!("5hz"), Frequency::from_hz(5.0));
}

#[test]
fn test_freq_macro_scaled_units() {
    assert_eq!(freq!("2.5kHz").as_f64(), 2500.0);
    assert_eq!(freq!("1 MHz").as_f64(), 1_000_000.0);
}

#[test]
fn test_freq_macro_in_generator() {
    let t = [0.0, 0.05];
    let from_macro = sine_wave(1.0, freq!("5 Hz"), 0.0, &t);
    let from_f64 = sine_wave(1.0, 5.0, 0.0, &t);
    assert_eq!(from_macro, from_f64);
}
