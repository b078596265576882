//! Locale-independent numeric text.
//!
//! Doubles are written as the shortest decimal string that parses back to
//! the identical bit pattern. Rust's float formatting is already
//! shortest-round-trip (a Grisu-family algorithm), but its `Display` form
//! never switches to exponent notation, so `1e300` would expand to 300
//! digits. We therefore take the shortest digits from the exponential
//! formatter and re-position the decimal point ourselves, using the same
//! presentation rule as V8/Grisu: plain decimal notation while the decimal
//! point falls in (-6, 21], exponent notation outside that range.
//!
//! Integers are plain ASCII with no culture-specific separators.

/// Formats a double as its shortest round-trip decimal representation.
///
/// Non-finite values are written as `NaN`, `Infinity` and `-Infinity`;
/// callers that require strict JSON must avoid them, consistent with this
/// layer's non-validating contract.
pub(crate) fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    // Shortest digits plus normalized exponent, e.g. "1.2345e-7" or "-0e0".
    let shortest = format!("{:e}", value);
    let (mantissa, exponent) = match shortest.split_once('e') {
        Some(parts) => parts,
        None => return shortest,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(e) => e,
        Err(_) => return shortest,
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    // Digit string without the decimal point: "1.25" -> "125".
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    position_decimal(sign, &digits, exponent)
}

/// Renders a digit string with the decimal point at `exponent + 1`,
/// choosing decimal or exponent notation by magnitude.
fn position_decimal(sign: &str, digits: &str, exponent: i32) -> String {
    let point = exponent + 1;
    let len = digits.len() as i32;
    let mut out = String::with_capacity(digits.len() + 8);
    out.push_str(sign);

    if exponent >= -6 && point <= 21 {
        if point <= 0 {
            // 0.00ddd
            out.push_str("0.");
            for _ in 0..-point {
                out.push('0');
            }
            out.push_str(digits);
        } else if point >= len {
            // ddd00
            out.push_str(digits);
            for _ in 0..point - len {
                out.push('0');
            }
        } else {
            // dd.ddd
            out.push_str(&digits[..point as usize]);
            out.push('.');
            out.push_str(&digits[point as usize..]);
        }
    } else {
        // d.ddde±x
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push_str(&exponent.to_string());
    }

    out
}

/// Formats a signed integer as plain decimal ASCII.
pub(crate) fn format_int(value: i64) -> String {
    value.to_string()
}
