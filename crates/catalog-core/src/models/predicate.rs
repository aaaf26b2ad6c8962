//! Typed predicate expressions over content rows.
//!
//! The resolver builds a [`Predicate`]; a storage adapter compiles it into its
//! own query language. [`Predicate::evaluate`] is the reference semantics every
//! adapter must agree with. All text comparisons are ASCII case-insensitive.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::content_item::ContentItem;
use crate::constants::ASCII_WS;

/// Filterable text columns of a content row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Category,
    Subcategory,
    Tags,
    DisplayPages,
    PageType,
    Gender,
    Status,
    Visibility,
    ProcessingStatus,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::Tags => "tags",
            Self::DisplayPages => "display_pages",
            Self::PageType => "page_type",
            Self::Gender => "gender",
            Self::Status => "status",
            Self::Visibility => "visibility",
            Self::ProcessingStatus => "processing_status",
        }
    }
}

/// Boolean-ish row flags. Each may live under several stored columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Service,
    AiApp,
    Featured,
}

impl Flag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Service => "is_service",
            Self::AiApp => "is_ai_app",
            Self::Featured => "is_featured",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `lower(column) = lower(value)`. NULL never matches.
    Equals { column: Column, value: String },
    /// `lower(column)` is one of the values. An empty set matches nothing.
    InSet { column: Column, values: Vec<String> },
    /// `lower(column)` contains `lower(token)` as a substring.
    ContainsToken { column: Column, token: String },
    /// The display-pages list holds `slug` as a whole member.
    HasPage { slug: String },
    /// The flag is truthy under [`super::normalize_boolean`].
    FlagSet(Flag),
    /// NULL, or nothing but whitespace (for display pages: an empty list).
    IsBlank(Column),
    IsNull(Column),
    Not(Box<Predicate>),
    /// Conjunction. Empty is always true.
    And(Vec<Predicate>),
    /// Disjunction. Empty is always false.
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn equals(column: Column, value: impl Into<String>) -> Self {
        Self::Equals {
            column,
            value: value.into(),
        }
    }

    pub fn in_set(column: Column, values: Vec<String>) -> Self {
        Self::InSet { column, values }
    }

    pub fn contains_token(column: Column, token: impl Into<String>) -> Self {
        Self::ContainsToken {
            column,
            token: token.into(),
        }
    }

    pub fn has_page(slug: impl Into<String>) -> Self {
        Self::HasPage { slug: slug.into() }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Predicate) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Disjunction that collapses a single operand and flattens nested `Or`s.
    pub fn any(operands: Vec<Predicate>) -> Self {
        let mut flat = Vec::with_capacity(operands.len());
        for p in operands {
            match p {
                Self::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            flat.pop().unwrap_or(Self::Or(Vec::new()))
        } else {
            Self::Or(flat)
        }
    }

    /// Conjunction that collapses a single operand and flattens nested `And`s.
    pub fn all(operands: Vec<Predicate>) -> Self {
        let mut flat = Vec::with_capacity(operands.len());
        for p in operands {
            match p {
                Self::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            flat.pop().unwrap_or(Self::And(Vec::new()))
        } else {
            Self::And(flat)
        }
    }

    /// Reference evaluation against an in-memory row.
    pub fn evaluate(&self, item: &ContentItem) -> bool {
        match self {
            Self::Equals { column, value } => item
                .column(*column)
                .is_some_and(|v| v.to_ascii_lowercase() == value.to_ascii_lowercase()),
            Self::InSet { column, values } => item.column(*column).is_some_and(|v| {
                let lowered = v.to_ascii_lowercase();
                values.iter().any(|candidate| candidate.to_ascii_lowercase() == lowered)
            }),
            Self::ContainsToken { column, token } => item.column(*column).is_some_and(|v| {
                v.to_ascii_lowercase()
                    .contains(token.to_ascii_lowercase().as_str())
            }),
            Self::HasPage { slug } => item.display_pages.as_deref().is_some_and(|pages| {
                let haystack = format!(",{},", normalize_page_list(pages));
                let needle = format!(",{},", normalize_page_list(slug));
                haystack.contains(&needle)
            }),
            Self::FlagSet(flag) => item.flag(*flag),
            Self::IsBlank(column) => match item.column(*column) {
                None => true,
                Some(v) if *column == Column::DisplayPages => {
                    normalize_page_list(v).trim_matches(ASCII_WS).is_empty()
                }
                Some(v) => v.trim_matches(ASCII_WS).is_empty(),
            },
            Self::IsNull(column) => item.column(*column).is_none(),
            Self::Not(inner) => !inner.evaluate(item),
            Self::And(operands) => operands.iter().all(|p| p.evaluate(item)),
            Self::Or(operands) => operands.iter().any(|p| p.evaluate(item)),
        }
    }
}

/// Canonical form of a display-pages list (or a single slug): lowercase, with
/// JSON brackets, quotes, and spaces removed, so `["Home", "deals"]` and
/// `home,deals` compare equal.
pub fn normalize_page_list(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals { column, value } => write!(f, "{}={value:?}", column.name()),
            Self::InSet { column, values } => write!(f, "{} in {values:?}", column.name()),
            Self::ContainsToken { column, token } => write!(f, "{}~{token:?}", column.name()),
            Self::HasPage { slug } => write!(f, "page:{slug:?}"),
            Self::FlagSet(flag) => write!(f, "{}", flag.name()),
            Self::IsBlank(column) => write!(f, "blank({})", column.name()),
            Self::IsNull(column) => write!(f, "null({})", column.name()),
            Self::Not(inner) => write!(f, "!({inner})"),
            Self::And(ops) => write_joined(f, ops, " & ", "true"),
            Self::Or(ops) => write_joined(f, ops, " | ", "false"),
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    ops: &[Predicate],
    sep: &str,
    empty: &str,
) -> fmt::Result {
    if ops.is_empty() {
        return f.write_str(empty);
    }
    f.write_str("(")?;
    for (i, op) in ops.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{op}")?;
    }
    f.write_str(")")
}
