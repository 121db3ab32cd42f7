//! Float rendering for echoed values.
//!
//! Exercises echo floats without a stated precision using the shortest
//! representation that round-trips, always with a fractional part so that a
//! float never reads like an integer (`5.0`, not `5`). Very large and very
//! small magnitudes switch to scientific notation with a signed, two-digit
//! exponent (`1e+16`, `1.5e-05`).

/// Magnitudes at or above this render in scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e16;
/// Non-zero magnitudes below this render in scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-4;

/// Render `value` using the shortest round-trip form.
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude) {
        return scientific(value);
    }

    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn scientific(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Render `value` with exactly `precision` fractional digits.
pub fn fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{value:.precision$}")
}

/// Render a boolean the way every exercise prints it.
pub fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
