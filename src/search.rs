//! Typed global keyword search over registered columns.
//!
//! A single free-text term is matched against every eligible column at once.
//! [`TableSearch`] classifies the term as integer, double or plain text,
//! derives a LIKE-ready form, and filters the registered [`ColumnSearch`]
//! set down to the columns whose declared types are compatible with the
//! detected one. Re-analysis runs synchronously on every write of the raw
//! term, so the derived state is never stale.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::criteria::SqlOperator;
use crate::params::WILDCARD;

static DOUBLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.[0-9]*$").expect("double pattern must compile"));
static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("integer pattern must compile"));

/// Detected shape of a keyword-search term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordType {
    Integer,
    Double,
    #[default]
    String,
}

impl KeywordType {
    /// Classifies a term. Total and deterministic: exactly one type comes
    /// back for any input. The double pattern is checked first; the two
    /// numeric patterns are mutually exclusive since a double requires a
    /// decimal point.
    #[must_use]
    pub fn detect(term: &str) -> Self {
        if DOUBLE_PATTERN.is_match(term) {
            Self::Double
        } else if INTEGER_PATTERN.is_match(term) {
            Self::Integer
        } else {
            Self::String
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Double => "Double",
            Self::String => "String",
        }
    }
}

impl fmt::Display for KeywordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable table column: which term types it accepts and which
/// operator the renderer should compare with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSearch {
    name: String,
    supported_types: Vec<KeywordType>,
    operator: SqlOperator,
}

impl ColumnSearch {
    /// A column accepting every term type, matched with `LIKE`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supported_types: vec![KeywordType::Integer, KeywordType::Double, KeywordType::String],
            operator: SqlOperator::Like,
        }
    }

    /// A single-type column with the conventional operator for that type:
    /// `LIKE` for text, equality for numerics.
    #[must_use]
    pub fn typed(name: impl Into<String>, kind: KeywordType) -> Self {
        let operator = match kind {
            KeywordType::String => SqlOperator::Like,
            KeywordType::Integer | KeywordType::Double => SqlOperator::Equals,
        };
        Self::with_operator(name, kind, operator)
    }

    /// A single-type column with an explicit operator.
    #[must_use]
    pub fn with_operator(name: impl Into<String>, kind: KeywordType, operator: SqlOperator) -> Self {
        Self {
            name: name.into(),
            supported_types: vec![kind],
            operator,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn operator(&self) -> SqlOperator {
        self.operator
    }

    #[must_use]
    pub fn supported_types(&self) -> &[KeywordType] {
        &self.supported_types
    }

    #[must_use]
    pub fn is_like_operator(&self) -> bool {
        self.operator.is_like()
    }

    /// Whether this column is eligible for a term of the detected type.
    ///
    /// A column declaring `String` support is eligible under every detected
    /// type, since any term can be matched against text, while a numeric-only
    /// column drops out once the term is detected as text.
    #[must_use]
    pub fn supports(&self, detected: KeywordType) -> bool {
        self.supported_types
            .iter()
            .any(|kind| *kind == detected || *kind == KeywordType::String)
    }
}

impl fmt::Display for ColumnSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Global keyword-search state: the raw term, its derived type and LIKE
/// form, and the registered column set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TableSearch {
    columns: Vec<ColumnSearch>,
    keyword_search: String,
    keyword_like_search: String,
    keyword_search_type: KeywordType,
}

impl TableSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a searchable column. Registration order is preserved in
    /// every view.
    pub fn add(&mut self, column: ColumnSearch) {
        self.columns.push(column);
    }

    pub fn add_all(&mut self, columns: impl IntoIterator<Item = ColumnSearch>) {
        for column in columns {
            self.add(column);
        }
    }

    /// Sets the raw term and synchronously re-derives type and LIKE form.
    pub fn set_keyword_search(&mut self, term: impl Into<String>) {
        self.keyword_search = term.into();
        self.analyze_and_prepare();
    }

    /// The raw term, after any numeric round-trip.
    #[must_use]
    pub fn keyword_search(&self) -> &str {
        &self.keyword_search
    }

    /// The LIKE-ready form of the current term.
    #[must_use]
    pub fn keyword_like_search(&self) -> &str {
        &self.keyword_like_search
    }

    #[must_use]
    pub fn keyword_search_type(&self) -> KeywordType {
        self.keyword_search_type
    }

    /// Every registered column, regardless of eligibility.
    #[must_use]
    pub fn all_columns(&self) -> &[ColumnSearch] {
        &self.columns
    }

    /// The columns eligible for the current term, in registration order.
    /// Derived fresh on every call, never cached independently of the term.
    #[must_use]
    pub fn to_list(&self) -> Vec<&ColumnSearch> {
        self.columns
            .iter()
            .filter(|column| column.supports(self.keyword_search_type))
            .collect()
    }

    fn analyze_and_prepare(&mut self) {
        self.keyword_search_type = KeywordType::detect(&self.keyword_search);
        self.round_trip_double();
        self.prepare_like_form();
    }

    /// Best-effort canonicalization of double-shaped terms. Parse failure
    /// silently keeps the original text.
    fn round_trip_double(&mut self) {
        if self.keyword_search_type == KeywordType::Double {
            if let Ok(parsed) = self.keyword_search.parse::<f64>() {
                self.keyword_search = parsed.to_string();
            }
        }
    }

    fn prepare_like_form(&mut self) {
        self.keyword_like_search = if self.keyword_search_type == KeywordType::String {
            // Idempotent: each end is wrapped only if it lacks a marker.
            let mut form = self.keyword_search.clone();
            if !form.starts_with(WILDCARD) {
                form.insert_str(0, WILDCARD);
            }
            if !form.ends_with(WILDCARD) {
                form.push_str(WILDCARD);
            }
            form
        } else {
            format!("{WILDCARD}{}{WILDCARD}", self.keyword_search)
        };
    }
}
