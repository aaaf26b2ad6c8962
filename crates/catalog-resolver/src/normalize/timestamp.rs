//! `created_at` normalization to RFC 3339 (UTC, second precision).

use catalog_core::errors::NormalizeError;
use catalog_core::models::RawTimestamp;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Integers above this are epoch milliseconds, below it epoch seconds.
const MILLIS_THRESHOLD: i64 = 10_000_000_000;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

pub fn normalize_timestamp(
    id: i64,
    raw: Option<&RawTimestamp>,
) -> Result<Option<String>, NormalizeError> {
    let invalid = |value: String| NormalizeError::InvalidTimestamp { id, value };
    let parsed = match raw {
        None => return Ok(None),
        Some(RawTimestamp::Integer(n)) => from_epoch(*n).ok_or_else(|| invalid(n.to_string()))?,
        Some(RawTimestamp::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            parse_text(text).ok_or_else(|| invalid(text.to_string()))?
        }
    };
    Ok(Some(parsed.to_rfc3339_opts(SecondsFormat::Secs, true)))
}

fn from_epoch(n: i64) -> Option<DateTime<Utc>> {
    if n > MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(n)
    } else {
        DateTime::from_timestamp(n, 0)
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(n) = text.parse::<i64>() {
        return from_epoch(n);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    // SQLite CURRENT_TIMESTAMP and similar naive forms are UTC.
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
