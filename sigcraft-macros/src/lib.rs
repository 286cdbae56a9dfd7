use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Creates a `Frequency` at compile time from a string literal.
///
/// The literal is parsed when the crate is compiled and expands to a
/// `Frequency::from_hz()` call with the value already converted to Hz,
/// so there is no parsing cost at runtime.
///
/// # Format
///
/// The format is: `<number>[ ][unit]` where:
/// - `number` is a non-negative decimal value, e.g. `5`, `2.5`, `1e3`
/// - `unit` is optional and one of `Hz`, `kHz`, `MHz` (case-insensitive)
/// - Without a unit the value is taken as Hz
///
/// # Examples
///
/// ```ignore
/// use sigcraft::freq;
///
/// let five = freq!("5 Hz");
/// let tone = freq!("2.5kHz");
/// let bare = freq!("440");
/// ```
#[proc_macro]
pub fn freq(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let freq_str = input.value();

    match parse_frequency(&freq_str) {
        Ok(hz) => {
            let expanded = quote! {
                {
                    ::sigcraft::Frequency::from_hz(#hz)
                }
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid frequency string '{}': {}", freq_str, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Unit {
    Hz,
    KHz,
    MHz,
}

impl Unit {
    fn multiplier(&self) -> f64 {
        match self {
            Unit::Hz => 1.0,
            Unit::KHz => 1e3,
            Unit::MHz => 1e6,
        }
    }
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    match s.to_ascii_lowercase().as_str() {
        "" | "hz" => Ok(Unit::Hz),
        "khz" => Ok(Unit::KHz),
        "mhz" => Ok(Unit::MHz),
        _ => Err(format!("invalid unit '{}'", s)),
    }
}

fn parse_frequency(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    // The unit starts at the first alphabetic char that cannot belong to an exponent
    let unit_start = s
        .char_indices()
        .find(|&(i, c)| {
            c.is_ascii_alphabetic()
                && !((c == 'e' || c == 'E')
                    && s[i + 1..]
                        .chars()
                        .next()
                        .is_some_and(|n| n.is_ascii_digit() || n == '-' || n == '+'))
        })
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    let number_str = s[..unit_start].trim();
    let unit = parse_unit(s[unit_start..].trim())?;

    if number_str.is_empty() {
        return Err("missing numeric value".to_string());
    }

    let value = number_str
        .parse::<f64>()
        .map_err(|_| format!("invalid number '{}'", number_str))?;

    if !value.is_finite() {
        return Err(format!("value {} is not finite", value));
    }
    if value < 0.0 {
        return Err(format!("value {} is negative", value));
    }

    Ok(value * unit.multiplier())
}
