//! Result formatting
//!
//! Whatever is printed here becomes the next input text, so every string
//! produced must parse back to the same `f64`.

/// Largest magnitude still printed in plain decimal form.
const PLAIN_MAX: f64 = 1e15;
/// Smallest non-zero magnitude still printed in plain decimal form.
const PLAIN_MIN: f64 = 1e-4;

/// Format a computed result for the display.
///
/// Integral values keep one fractional digit (`8.0`), very large or very
/// small magnitudes switch to scientific notation (`1e20`, `1.5e-7`), and
/// everything else uses the shortest decimal that round-trips.
pub fn format_result(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = n.abs();
    if n == n.trunc() && magnitude < PLAIN_MAX {
        format!("{:.1}", n)
    } else if magnitude >= PLAIN_MAX || magnitude < PLAIN_MIN {
        format!("{:e}", n)
    } else {
        n.to_string()
    }
}
