use super::*;

pub(crate) fn number_value(value: f64) -> Value {
    if value == 0.0 && value.is_sign_negative() {
        return Value::Float(-0.0);
    }
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value <= i64::MAX as f64
    {
        let integer = value as i64;
        if (integer as f64) == value {
            return Value::Number(integer);
        }
    }
    Value::Float(value)
}

/// Number-to-string in the script language's canonical form: plain decimal
/// for exponents in `[-6, 21)`, exponent notation otherwise.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let raw = format!("{:e}", value.abs());
    let Some((mantissa, exponent_src)) = raw.split_once('e') else {
        return format!("{sign}{raw}");
    };
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    let n = exponent_src.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exponent = n - 1;
        let exponent_sign = if exponent >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exponent_sign}{}", exponent.abs())
        } else {
            format!("{first}.{rest}e{exponent_sign}{}", exponent.abs())
        }
    };
    format!("{sign}{body}")
}

pub(crate) fn parse_js_number_from_string(src: &str) -> f64 {
    let trimmed = src.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if trimmed == "Infinity" || trimmed == "+Infinity" {
        return f64::INFINITY;
    }
    if trimmed == "-Infinity" {
        return f64::NEG_INFINITY;
    }

    if let Some(digits) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return parse_prefixed_radix_to_f64(digits, 16);
    }
    if let Some(digits) = trimmed
        .strip_prefix("0o")
        .or_else(|| trimmed.strip_prefix("0O"))
    {
        return parse_prefixed_radix_to_f64(digits, 8);
    }
    if let Some(digits) = trimmed
        .strip_prefix("0b")
        .or_else(|| trimmed.strip_prefix("0B"))
    {
        return parse_prefixed_radix_to_f64(digits, 2);
    }

    // Rust's float parser also accepts "inf" and "nan" spellings.
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_prefixed_radix_to_f64(src: &str, radix: u32) -> f64 {
    if src.is_empty() {
        return f64::NAN;
    }
    let mut out = 0.0f64;
    for ch in src.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            return f64::NAN;
        };
        out = out * (radix as f64) + (digit as f64);
    }
    out
}

pub(crate) fn number_to_i128(value: f64) -> i128 {
    if !value.is_finite() {
        return 0;
    }
    let value = value.trunc();
    if value >= i128::MAX as f64 {
        i128::MAX
    } else if value <= i128::MIN as f64 {
        i128::MIN
    } else {
        value as i128
    }
}

/// Modulo-256 truncating conversion used for buffer byte writes.
pub(crate) fn to_uint8(value: f64) -> u8 {
    number_to_i128(value).rem_euclid(1i128 << 8) as u8
}

pub(crate) fn round_half_even(value: f64) -> f64 {
    let floor = value.floor();
    let frac = value - floor;
    if frac < 0.5 {
        floor
    } else if frac > 0.5 {
        floor + 1.0
    } else if (floor as i64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    }
}

/// Canonical array index: `"0"` or a decimal without leading zeros, below 2^32 - 1.
pub(crate) fn canonical_array_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    let index = key.parse::<u64>().ok()?;
    if index >= u64::from(u32::MAX) {
        return None;
    }
    usize::try_from(index).ok()
}

pub(crate) fn bigint_to_f64(value: &JsBigInt) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        if value.sign() == Sign::Minus {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}
