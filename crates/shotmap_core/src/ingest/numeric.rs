//! Tolerant numeric parsing for spreadsheet cells.
//!
//! Exported cells mix JSON numbers with locale-formatted strings
//! (`"1,5"`, `"1.234.56"`). Parsing is total: anything unparsable yields `0`.
//!
//! Known ambiguity: a genuine `0` value is indistinguishable from a failed
//! parse. Callers that care must validate upstream.

use serde_json::Value;

/// Parse any cell value into a finite number.
///
/// - Absent / null / empty string -> `0`
/// - JSON numbers pass through (non-finite -> `0`)
/// - Strings are trimmed, the first decimal comma becomes a decimal point,
///   and when multiple decimal points remain only the last one is kept as
///   the separator (`"1.234.56"` -> `1234.56`)
/// - A valid leading numeric prefix is enough: trailing annotations are
///   dropped (`"45+2"` -> `45`, added-time minutes keep their base minute)
/// - Anything else unparsable -> `0`, never an error
pub fn parse_num(value: Option<&Value>) -> f64 {
    let Some(value) = value else { return 0.0 };
    match value {
        Value::Null => 0.0,
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_num_str(s),
        other => parse_num_str(&other.to_string()),
    }
}

fn parse_num_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // First comma becomes the decimal point.
    let dotted = trimmed.replacen(',', ".", 1);

    // With multiple dots, only the last one separates the decimals; the
    // earlier ones are thousands noise and their digits are concatenated.
    let parts: Vec<&str> = dotted.split('.').collect();
    let candidate = match parts.split_last() {
        Some((decimal, integer)) if integer.len() > 1 => {
            format!("{}.{}", integer.concat(), decimal)
        }
        _ => dotted,
    };

    leading_number(&candidate).filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Parse the longest numeric prefix of `s`: optional sign, digits with an
/// optional decimal point, and a complete exponent if one follows. `None`
/// when the string does not start with a number.
fn leading_number(s: &str) -> Option<f64> {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let digits_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - digits_start;
    let mut end = i;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if int_digits > 0 || i > frac_start {
            end = i;
        }
    }
    if end == digits_start {
        return None;
    }

    // An exponent counts only when at least one digit follows it.
    let mut j = end;
    if j < b.len() && (b[j] == b'e' || b[j] == b'E') {
        j += 1;
        if j < b.len() && matches!(b[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse().ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        /// Property: parsing is total and always yields a finite number
        #[test]
        fn prop_parse_num_always_finite(s in ".*") {
            let value = json!(s);
            let n = parse_num(Some(&value));
            prop_assert!(n.is_finite());
        }

        /// Property: plain decimal strings round-trip through the parser
        #[test]
        fn prop_plain_decimals_roundtrip(n in -1_000_000.0f64..1_000_000.0f64) {
            let value = json!(format!("{}", n));
            prop_assert_eq!(parse_num(Some(&value)), n);
        }
    }
}
