//! Tolerant number parsing for form-sourced fields.
//!
//! Amounts typed into the lead grid arrive as text (`"2.5"`, `"2.5M"`, `""`).
//! They read the way a browser's `parseFloat(x) || 0` would: the leading
//! numeric prefix, or zero when there is none.

use serde::{Deserialize, Deserializer};

/// Parse the leading numeric prefix of `raw`; zero when nothing parses.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let prefix_len = numeric_prefix_len(trimmed);
    // "1.2.3" and "1e" keep shrinking until something parses
    let mut end = prefix_len;
    while end > 0 {
        if let Ok(v) = trimmed[..end].parse::<f64>() {
            if v.is_finite() {
                return v;
            }
        }
        end -= 1;
    }
    0.0
}

/// Length of the run of characters that can appear in a decimal literal.
/// Signs are only allowed up front or right after an exponent marker.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut len = 0;
    while len < bytes.len() {
        let b = bytes[len];
        let ok = match b {
            b'0'..=b'9' | b'.' | b'e' | b'E' => true,
            b'+' | b'-' => len == 0 || matches!(bytes[len - 1], b'e' | b'E'),
            _ => false,
        };
        if !ok {
            break;
        }
        len += 1;
    }
    len
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// `deserialize_with` helper for `Option<f64>` fields that accept numbers or numeric text.
pub fn opt_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    Ok(raw.map(|r| match r {
        RawAmount::Number(n) => n,
        RawAmount::Text(s) => parse_amount(&s),
    }))
}

#[cfg(test)]
mod tests {
    use super::parse_amount;

    #[test]
    fn parses_like_a_form_field() {
        assert_eq!(parse_amount("2.5"), 2.5);
        assert_eq!(parse_amount(" 12 "), 12.0);
        assert_eq!(parse_amount("2.5M"), 2.5);
        assert_eq!(parse_amount("-1"), -1.0);
        assert_eq!(parse_amount("1.2.3"), 1.2);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
    }

    #[test]
    fn exponent_notation_is_kept() {
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("2.5e1"), 25.0);
        assert_eq!(parse_amount("4E-1"), 0.4);
        assert_eq!(parse_amount("1e"), 1.0);
        assert_eq!(parse_amount("1e+2x"), 100.0);
        assert_eq!(parse_amount("e5"), 0.0);
    }
}
