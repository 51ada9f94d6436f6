//! Amount parsing and en-US decimal formatting for the amount column.
//!
//! Mirrors the behavior of a default en-US grouped-decimal formatter:
//! comma thousands grouping, at most three fraction digits, no currency
//! symbol. Parse failures degrade silently to `NaN`, which renders as the
//! literal text `NaN` rather than raising an error.

/// Fraction digits kept by the formatter (scale factor 10^3).
const FRACTION_SCALE: f64 = 1000.0;

/// Beyond this magnitude an `f64` no longer holds exact integers, so the
/// fraction-scaling path would produce garbage digits.
const MAX_SCALED: f64 = 9.0e15;

/// Parses a raw cell value as a floating-point number.
///
/// Returns `NaN` when the value is not numeric; callers render the result
/// as-is instead of surfacing an error.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a number as en-US grouped decimal.
///
/// - integer part grouped in threes with commas
/// - up to three fraction digits, trailing zeros trimmed
/// - `NaN` formats as `"NaN"`, infinities as `"∞"` / `"-∞"`
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_owned();
    }

    let negative = value < 0.0;
    let abs = value.abs();

    let (int_digits, fraction) = if abs >= MAX_SCALED {
        // Too large for the fraction-scaling path; fraction digits are
        // meaningless at this magnitude anyway.
        (format!("{abs:.0}"), 0u64)
    } else {
        // Round half away from zero at three fraction digits.
        let scaled = (abs * FRACTION_SCALE).round() as u64;
        ((scaled / 1000).to_string(), scaled % 1000)
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_digits));

    if fraction != 0 {
        let mut frac_digits = format!("{fraction:03}");
        while frac_digits.ends_with('0') {
            frac_digits.pop();
        }
        out.push('.');
        out.push_str(&frac_digits);
    }

    out
}

/// Inserts comma separators every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }

    out
}
