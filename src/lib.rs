//! # paramcrate
//!
//! Fluent builders translating request-level inputs (pagination, sorting,
//! free-text keyword search, ad-hoc field filters) into a structured,
//! parenthesized predicate list plus a flat named-parameter bag for a
//! templated query engine to render.
//!
//! This crate assembles predicate *descriptors*; it does not parse SQL,
//! validate columns against a schema, or execute anything. A renderer reads
//! [`MapParam::criteria`], [`MapParam::filters`], [`MapParam::order_by`] and
//! [`MapParam::columns`] and produces the final SQL text and bound
//! parameters.
//!
//! ## Building criteria
//!
//! ```
//! use paramcrate::{Condition, MapParam, SqlOperator};
//!
//! let mut param = MapParam::new();
//! param
//!     .add_criteria("status", SqlOperator::Equals, "active")
//!     .add_criteria("name", SqlOperator::Like, "John")
//!     .prepare_value();
//!
//! let criteria = param.criteria();
//! assert_eq!(criteria[0].sql_suffix(), "AND");
//! assert_eq!(criteria[1].sql_suffix(), "");
//! assert_eq!(criteria[1].value(), "%John%");
//! ```
//!
//! ## Keyword search
//!
//! ```
//! use paramcrate::{ColumnSearch, KeywordType, MapParam};
//!
//! let mut param = MapParam::new();
//! param
//!     .set_search_columns([
//!         ColumnSearch::new("name"),
//!         ColumnSearch::typed("price", KeywordType::Double),
//!     ])
//!     .set_keyword_search("3.14");
//!
//! assert_eq!(param.keyword_search_type(), KeywordType::Double);
//! assert_eq!(param.columns().len(), 2);
//!
//! param.set_keyword_search("alice");
//! assert_eq!(param.columns().len(), 1); // the numeric column drops out
//! ```

pub mod criteria;
pub mod errors;
pub mod headers;
pub mod models;
pub mod params;
pub mod search;
pub mod sort;

pub use criteria::{Condition, Filter, MapParam, SqlOperator, SqlSuffix};
pub use errors::ParamError;
pub use models::UserContext;
pub use params::StandardParam;
pub use search::{ColumnSearch, KeywordType, TableSearch};
pub use sort::{SortDirection, SortParam};
