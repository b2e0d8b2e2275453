//! Sort directions and order-by entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction for one order-by entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses a direction case-insensitively. Blank or unrecognized input
    /// falls back to [`SortDirection::Asc`]; malformed direction strings are
    /// never an error.
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        if value.eq_ignore_ascii_case("DESC") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl From<&str> for SortDirection {
    fn from(value: &str) -> Self {
        Self::parse_lossy(value)
    }
}

impl From<Option<&str>> for SortDirection {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Asc, Self::parse_lossy)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// One order-by entry: column plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortParam {
    sort_by: String,
    sort_order: SortDirection,
}

impl SortParam {
    #[must_use]
    pub fn new(sort_by: impl Into<String>, sort_order: SortDirection) -> Self {
        Self {
            sort_by: sort_by.into(),
            sort_order,
        }
    }

    #[must_use]
    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    #[must_use]
    pub fn sort_order(&self) -> SortDirection {
        self.sort_order
    }
}

impl fmt::Display for SortParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sort_by, self.sort_order)
    }
}
