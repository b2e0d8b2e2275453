//! Reserved parameter keys and transport defaults.
//!
//! The filter bag of a [`MapParam`](crate::MapParam) mixes caller-supplied
//! custom parameters with a closed set of standard keys (pagination, sorting,
//! keyword search, user identity). [`StandardParam`] enumerates that set so
//! the custom-filter path can refuse to overwrite system state.

use serde::Serialize;

/// Default page size applied when a page is requested without one.
pub const DEFAULT_PER_PAGE: i64 = 20;
/// Default offset.
pub const DEFAULT_PAGE: i64 = 0;
/// Hard cap for caller-supplied page sizes.
pub const MAX_PER_PAGE: i64 = 500;

/// Response header carrying the total row count.
pub const TOTAL_ENTRIES_HEADER: &str = "X-Pagination-Total-Entries";

/// Filters key under which [`MapParam::set_table`](crate::MapParam::set_table)
/// stores the target table name.
pub const TABLE_NAME_KEY: &str = "tableName";

/// SQL LIKE wildcard marker used by value normalization and keyword search.
pub const WILDCARD: &str = "%";

/// The closed set of reserved parameter keys.
///
/// Each entry knows its key in the `filters` map and, where the parameter is
/// fed from transport headers, the header it is read from and written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StandardParam {
    /// Page size (`limit`).
    PerPage,
    /// Page offset (`page`).
    CurrentPage,
    /// Flag marking caller-managed pagination.
    CustomPagination,
    /// Requested sort column.
    SortField,
    /// Requested sort direction.
    SortOrder,
    /// Free-text keyword search term.
    KeywordSearch,
    /// Caller-supplied hint for the keyword term's type.
    KeywordSearchType,
    /// Authenticated user id.
    UserId,
    /// Authenticated user roles.
    UserRoles,
}

impl StandardParam {
    /// All reserved parameters, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::PerPage,
        Self::CurrentPage,
        Self::CustomPagination,
        Self::SortField,
        Self::SortOrder,
        Self::KeywordSearch,
        Self::KeywordSearchType,
        Self::UserId,
        Self::UserRoles,
    ];

    /// Key under which the parameter lives in `MapParam::filters`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PerPage => "limit",
            Self::CurrentPage => "page",
            Self::CustomPagination => "customPagination",
            Self::SortField => "sortField",
            Self::SortOrder => "sortOrder",
            Self::KeywordSearch => "keyword",
            Self::KeywordSearchType => "keywordType",
            Self::UserId => "userId",
            Self::UserRoles => "userRoles",
        }
    }

    /// Transport header the parameter is exchanged through, if any.
    ///
    /// User identity is populated by the service layer, never from headers.
    #[must_use]
    pub const fn header_name(self) -> Option<&'static str> {
        match self {
            Self::PerPage => Some("X-Pagination-Per-Page"),
            Self::CurrentPage => Some("X-Pagination-Current-Page"),
            Self::CustomPagination => Some("X-Pagination-Custom"),
            Self::SortField => Some("X-Sort-Field"),
            Self::SortOrder => Some("X-Sort-Order"),
            Self::KeywordSearch => Some("X-Keyword-Search"),
            Self::KeywordSearchType => Some("X-Keyword-Search-Type"),
            Self::UserId | Self::UserRoles => None,
        }
    }

    /// Whether `key` collides with any reserved parameter key.
    #[must_use]
    pub fn is_reserved(key: &str) -> bool {
        Self::ALL.iter().any(|param| param.key() == key)
    }
}
