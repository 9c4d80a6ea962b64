//! Display and history number rendering
//!
//! Every value the calculator shows or records goes through the same
//! pipeline: coerce the text to a number, then render it. Unparseable text
//! becomes 0, so the display is always presentable.

/// Magnitude at which rendering switches to exponential notation
const EXPONENTIAL_THRESHOLD: f64 = 1e10;

/// Most fractional digits kept in decimal notation
const MAX_FRACTION_DIGITS: usize = 8;

/// Parses display text as a number, coercing anything unparseable to 0
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Renders a numeric value for the display and history.
///
/// NaN coerces to "0" and zero of either sign renders as "0". Infinite
/// values keep their sign word ("Infinity"/"-Infinity"). Magnitude at or
/// above 1e10 switches to exponential notation with six fractional digits
/// and a signed exponent. Integral values drop the decimal point;
/// fractional values keep at most eight fractional digits with trailing
/// zeros stripped.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= EXPONENTIAL_THRESHOLD {
        return exponential(value);
    }
    if value.fract() == 0.0 {
        return format!("{value}");
    }

    let plain = format!("{value}");
    match plain.split_once('.') {
        Some((_, fraction)) if fraction.len() > MAX_FRACTION_DIGITS => {
            let fixed = format!("{value:.precision$}", precision = MAX_FRACTION_DIGITS);
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        }
        _ => plain,
    }
}

/// Renders display text: parse-coerce, then format
#[must_use]
pub fn format_display(text: &str) -> String {
    format_value(parse_operand(text))
}

/// Exponential notation with six fractional digits and a signed exponent,
/// e.g. `1.234568e+10`
fn exponential(value: f64) -> String {
    let raw = format!("{value:.6e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}
