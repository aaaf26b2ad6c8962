//! Lenient numeric parsing for legacy text columns.

use serde_json::Value;

/// Parse a price or rating stored as text: currency symbols, thousands
/// separators and surrounding text are dropped ("₹1,299.50" → 1299.5).
/// Anything without digits is `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let digits = digits.trim_matches('.');
    if !digits.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Number or numeric string inside a legacy JSON blob.
pub fn json_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_amount(s),
        _ => None,
    }
}
