//! Conversion of raw environment strings into typed values.
//!
//! Coercion never fails; validation is a separate step.

/// `true` only for the exact string `"true"`.
pub fn coerce_boolean(raw: &str) -> bool {
    raw == "true"
}

/// Parse `raw` as a float.
///
/// Surrounding whitespace is ignored and whitespace-only input is `0`.
/// `0x`, `0o` and `0b` prefixes select a radix, `Infinity` is accepted with
/// an optional sign, and anything unparsable is `NaN`.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // `str::parse` would also accept "inf" and "nan".
    let is_decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// `None` when `text` carries no radix prefix, `NaN` when the digits are bad.
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    });
    Some(value.unwrap_or(f64::NAN))
}
