//! Numeric Coercion
//!
//! Form inputs are plain text. Quantity and price are coerced the way a
//! browser's `parseInt` / `parseFloat` would: leading whitespace is skipped,
//! the longest numeric prefix wins, and anything else is "not a number".
//! No validation happens here; unparsable input is sent as-is (JSON `null`).

/// `parseInt(text, 10)` with an `0x` prefix switching to hex.
///
/// Digit runs too long for `i64` still yield a (rounded) number, as in the
/// browser; NaN where nothing numeric leads the input.
pub fn parse_int(text: &str) -> f64 {
    let s = text.trim_start();
    let (negative, rest) = split_sign(s);

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return f64::NAN;
    }

    let digits = &digits[..end];
    let magnitude = match i64::from_str_radix(digits, radix) {
        Ok(n) => n as f64,
        Err(_) if radix == 10 => digits.parse().unwrap_or(f64::NAN),
        Err(_) => digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * 16.0 + d as f64),
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Serialize a coerced number the way `JSON.stringify` would: NaN and
/// infinities become `null`, whole numbers in `i64` range print without a
/// fractional part.
pub fn serialize_js_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let n = *value;
    if !n.is_finite() {
        serializer.serialize_none()
    } else if n.fract() == 0.0 && n.abs() < 9.2e18 {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

/// `parseFloat(text)`; NaN where nothing numeric leads the input.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let (negative, rest) = split_sign(s);

    if rest.starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut int_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        int_digits += 1;
    }

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut cursor = end + 1;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
            frac_digits += 1;
        }
        if int_digits > 0 || frac_digits > 0 {
            end = cursor;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
            cursor += 1;
        }
        let exp_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exp_start {
            end = cursor;
        }
    }

    let value: f64 = rest[..end].parse().unwrap_or(f64::NAN);
    if negative {
        -value
    } else {
        value
    }
}

/// Text shown in an input for a JSON number: whole numbers have no
/// fractional part (`10`, not `10.0`).
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{}", value as i128)
    } else {
        format!("{}", value)
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}
