//! Compiles a [`Predicate`] into a parameterized SQLite `WHERE` fragment.
//!
//! Every leaf is wrapped in `COALESCE(.., 0)` so that NULL columns produce
//! false instead of unknown, which keeps `NOT` two-valued and the result
//! identical to [`Predicate::evaluate`]. User-supplied text is always bound,
//! never spliced into the SQL string.

use catalog_core::constants::TRUTHY_STRINGS;
use catalog_core::models::{normalize_page_list, Column, Flag, Predicate};
use rusqlite::types::Value;

/// Ordering shared by every content query: newest first, id as tie-break.
///
/// The sort key is epoch milliseconds and reads `created_at` the way the
/// normalizer does: numbers (integer, real, or digit-only text) above 10^10
/// are milliseconds, smaller ones seconds; other text is a date string.
/// Unreadable values sort last.
pub const ORDER_BY_NEWEST: &str = "ORDER BY CASE
        WHEN typeof(created_at) IN ('integer', 'real') THEN CAST(
            CASE WHEN created_at > 10000000000 THEN created_at ELSE created_at * 1000 END AS INTEGER)
        WHEN typeof(created_at) = 'text'
            AND trim(created_at, char(32, 9, 10, 11, 12, 13)) != ''
            AND trim(created_at, char(32, 9, 10, 11, 12, 13)) NOT GLOB '*[^0-9]*'
            THEN CASE
                WHEN CAST(trim(created_at, char(32, 9, 10, 11, 12, 13)) AS INTEGER) > 10000000000
                    THEN CAST(trim(created_at, char(32, 9, 10, 11, 12, 13)) AS INTEGER)
                ELSE CAST(trim(created_at, char(32, 9, 10, 11, 12, 13)) AS INTEGER) * 1000 END
        WHEN typeof(created_at) = 'text' THEN CAST(round(
            (julianday(trim(created_at, char(32, 9, 10, 11, 12, 13))) - 2440587.5) * 86400000) AS INTEGER)
        ELSE NULL END DESC, id DESC";

const WS: &str = "char(32, 9, 10, 11, 12, 13)";

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPredicate {
    pub sql: String,
    pub params: Vec<Value>,
}

pub fn compile(predicate: &Predicate) -> CompiledPredicate {
    let mut params = Vec::new();
    let sql = compile_into(predicate, &mut params);
    CompiledPredicate { sql, params }
}

fn compile_into(predicate: &Predicate, params: &mut Vec<Value>) -> String {
    match predicate {
        Predicate::Equals { column, value } => {
            params.push(Value::Text(value.to_ascii_lowercase()));
            format!("COALESCE(lower({}) = ?, 0)", column_sql(*column))
        }
        Predicate::InSet { values, .. } if values.is_empty() => "0".to_string(),
        Predicate::InSet { column, values } => {
            let placeholders = vec!["?"; values.len()].join(", ");
            params.extend(values.iter().map(|v| Value::Text(v.to_ascii_lowercase())));
            format!(
                "COALESCE(lower({}) IN ({placeholders}), 0)",
                column_sql(*column)
            )
        }
        Predicate::ContainsToken { column, token } => {
            params.push(Value::Text(token.to_ascii_lowercase()));
            format!("COALESCE(instr(lower({}), ?) > 0, 0)", column_sql(*column))
        }
        Predicate::HasPage { slug } => {
            params.push(Value::Text(format!(",{},", normalize_page_list(slug))));
            format!(
                "COALESCE(instr(',' || {} || ',', ?) > 0, 0)",
                normalized_pages_sql()
            )
        }
        Predicate::FlagSet(flag) => {
            let checks: Vec<String> = flag_columns(*flag).iter().map(|c| truthy_sql(c)).collect();
            format!("({})", checks.join(" OR "))
        }
        Predicate::IsBlank(column) => {
            let col = column_sql(*column);
            let value = if *column == Column::DisplayPages {
                normalized_pages_sql()
            } else {
                col.to_string()
            };
            format!("({col} IS NULL OR COALESCE(trim({value}, {WS}) = '', 0))")
        }
        Predicate::IsNull(column) => format!("({} IS NULL)", column_sql(*column)),
        Predicate::Not(inner) => format!("NOT ({})", compile_into(inner, params)),
        Predicate::And(ops) if ops.is_empty() => "1".to_string(),
        Predicate::Or(ops) if ops.is_empty() => "0".to_string(),
        Predicate::And(ops) => join(ops, " AND ", params),
        Predicate::Or(ops) => join(ops, " OR ", params),
    }
}

fn join(ops: &[Predicate], sep: &str, params: &mut Vec<Value>) -> String {
    let parts: Vec<String> = ops.iter().map(|op| compile_into(op, params)).collect();
    format!("({})", parts.join(sep))
}

/// SQL truth test for a flag column, mirroring `normalize_boolean`:
/// integer 1, real 1.0, or trimmed lowercase text in the truthy list.
pub fn truthy_sql(column: &str) -> String {
    let list = TRUTHY_STRINGS
        .iter()
        .map(|s| format!("'{}'", s.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "(CASE typeof({column}) \
         WHEN 'integer' THEN {column} = 1 \
         WHEN 'real' THEN {column} = 1.0 \
         WHEN 'text' THEN lower(trim({column}, {WS})) IN ({list}) \
         ELSE 0 END)"
    )
}

fn normalized_pages_sql() -> String {
    "lower(replace(replace(replace(replace(display_pages, '[', ''), ']', ''), '\"', ''), ' ', ''))"
        .to_string()
}

fn column_sql(column: Column) -> &'static str {
    column.name()
}

fn flag_columns(flag: Flag) -> &'static [&'static str] {
    match flag {
        Flag::Service => &["is_service"],
        Flag::AiApp => &["is_ai_app"],
        Flag::Featured => &["is_featured", "featured"],
    }
}
