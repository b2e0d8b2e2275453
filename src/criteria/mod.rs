//! # Criteria Construction
//!
//! The predicate-construction engine: an ordered, bracket-consistent list of
//! predicate descriptors built through fluent calls on [`MapParam`].
//!
//! Every appended predicate is optimistically closed, since it may be the last of
//! its group. Appending the next one reopens the previous predicate through
//! [`Condition::chain`] with its configured intent, unless the caller chose
//! an explicit connector. Bracket calls are decoupled from predicate calls:
//! a group can be opened before any predicate exists and closed against
//! whichever predicate happens to be last at that point.
//!
//! ```
//! use paramcrate::{Condition, MapParam, SqlOperator, SqlSuffix};
//!
//! let mut param = MapParam::new();
//! param
//!     .open_bracket()
//!     .add_criteria_full("id", SqlOperator::Equals, 1, SqlSuffix::Or, None)
//!     .open_bracket()
//!     .add("name", "test")
//!     .add("is_active", true)
//!     .close_bracket()
//!     .close_bracket()
//!     .prepare_value();
//!
//! let criteria = param.criteria();
//! assert_eq!(criteria[0].l_bracket(), "(");
//! assert_eq!(criteria[2].r_bracket(), "))");
//! ```

pub mod condition;
pub mod filter;
pub mod map_param;

pub use condition::{Condition, SqlSuffix};
pub use filter::{Filter, SqlOperator};
pub use map_param::MapParam;
