//! Lenient column readers. Legacy rows store numbers as text and flags in
//! several encodings, so columns are read by storage class, not by type.

use catalog_core::models::{FlagValue, RawTimestamp};
use rusqlite::types::{Value, ValueRef};
use rusqlite::Row;

pub(crate) fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}

pub(crate) fn integer(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Integer(i) => Some(i),
        ValueRef::Real(f) => Some(f as i64),
        ValueRef::Text(t) => std::str::from_utf8(t).ok().and_then(|s| s.trim().parse().ok()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    })
}

pub(crate) fn real(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<f64>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Integer(i) => Some(i as f64),
        ValueRef::Real(f) => Some(f),
        ValueRef::Text(t) => std::str::from_utf8(t).ok().and_then(|s| s.trim().parse().ok()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    })
}

pub(crate) fn flag(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<FlagValue>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null | ValueRef::Blob(_) => None,
        ValueRef::Integer(i) => Some(FlagValue::Integer(i)),
        ValueRef::Real(f) => Some(FlagValue::Real(f)),
        ValueRef::Text(t) => Some(FlagValue::Text(String::from_utf8_lossy(t).into_owned())),
    })
}

pub(crate) fn timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<RawTimestamp>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null | ValueRef::Blob(_) => None,
        ValueRef::Integer(i) => Some(RawTimestamp::Integer(i)),
        ValueRef::Real(f) => Some(RawTimestamp::Integer(f as i64)),
        ValueRef::Text(t) => Some(RawTimestamp::Text(String::from_utf8_lossy(t).into_owned())),
    })
}

pub(crate) fn flag_value(value: Option<&FlagValue>) -> Value {
    match value {
        None => Value::Null,
        Some(FlagValue::Bool(b)) => Value::Integer(i64::from(*b)),
        Some(FlagValue::Integer(i)) => Value::Integer(*i),
        Some(FlagValue::Real(f)) => Value::Real(*f),
        Some(FlagValue::Text(s)) => Value::Text(s.clone()),
    }
}

pub(crate) fn opt_text(value: Option<&String>) -> Value {
    value.map_or(Value::Null, |s| Value::Text(s.clone()))
}
