//! Single predicate descriptors and operator value normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::condition::{Condition, SqlSuffix};
use crate::params::WILDCARD;

/// Closed set of comparison operators a predicate can carry.
///
/// Each operator owns its value-normalization policy: the LIKE family wraps
/// scalar values with wildcard markers at construction time so templates can
/// bind the value as-is, while the comparison and membership operators pass
/// values through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    ILike,
    /// LIKE matching only the start of the stored value: `term%`.
    EndsLike,
    /// Case-insensitive variant of [`SqlOperator::EndsLike`].
    EndsILike,
    In,
    NotIn,
    Between,
}

impl SqlOperator {
    /// SQL text a renderer places between field and value.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::Like | Self::EndsLike => "LIKE",
            Self::ILike | Self::EndsILike => "ILIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Between => "BETWEEN",
        }
    }

    /// Whether this operator belongs to the LIKE family.
    #[must_use]
    pub const fn is_like(self) -> bool {
        matches!(
            self,
            Self::Like | Self::ILike | Self::EndsLike | Self::EndsILike
        )
    }

    /// Applies the operator's normalization policy to a predicate value.
    ///
    /// Lists pass through unmodified regardless of operator, as required for
    /// IN-clauses. LIKE/ILIKE wrap scalars with the wildcard marker on both
    /// ends unless the value already contains one; the suffix-only variants
    /// append a single trailing marker. Non-string scalars are stringified
    /// for the LIKE family only.
    pub(crate) fn normalize_value(self, value: Value) -> Value {
        if value.is_array() {
            return value;
        }
        match self {
            Self::Like | Self::ILike => {
                let text = stringify(&value);
                if text.contains(WILDCARD) {
                    Value::String(text)
                } else {
                    Value::String(format!("{WILDCARD}{text}{WILDCARD}"))
                }
            }
            Self::EndsLike | Self::EndsILike => {
                Value::String(format!("{}{WILDCARD}", stringify(&value)))
            }
            _ => value,
        }
    }
}

impl fmt::Display for SqlOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// One predicate destined for a WHERE clause: field, operator, value(s),
/// logical connector and bracket decoration.
///
/// A `Filter` is only ever constructed with a non-null value; null values
/// short-circuit in [`MapParam`](crate::MapParam) and produce no predicate.
/// Field, operator and values are immutable after construction; the suffix
/// and brackets mutate through the [`Condition`] operations while the
/// predicate participates in chaining.
#[derive(Debug, Clone, Serialize)]
pub struct Filter {
    field: String,
    op: SqlOperator,
    value: Value,
    value_r: Option<Value>,
    suffix: SqlSuffix,
    intent: SqlSuffix,
    l_bracket: String,
    r_bracket: String,
}

impl Filter {
    /// Builds a predicate with the default `And` intent.
    #[must_use]
    pub fn new(field: impl Into<String>, op: SqlOperator, value: Value) -> Self {
        Self::with_intent(field, op, value, None, SqlSuffix::And)
    }

    /// Builds a predicate with an explicit intent and optional range upper
    /// bound. The value is normalized per the operator's policy; the suffix
    /// starts out `Close`.
    #[must_use]
    pub fn with_intent(
        field: impl Into<String>,
        op: SqlOperator,
        value: Value,
        value_r: Option<Value>,
        intent: SqlSuffix,
    ) -> Self {
        Self {
            field: field.into(),
            op,
            value: op.normalize_value(value),
            value_r,
            suffix: SqlSuffix::Close,
            intent,
            l_bracket: String::new(),
            r_bracket: String::new(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn op(&self) -> SqlOperator {
        self.op
    }

    /// The normalized predicate value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Range upper bound, present for BETWEEN-style predicates.
    #[must_use]
    pub fn value_r(&self) -> Option<&Value> {
        self.value_r.as_ref()
    }

    /// True when the value is a non-empty list. Templates branch on this
    /// instead of inspecting the value type.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(&self.value, Value::Array(items) if !items.is_empty())
    }
}

impl Condition for Filter {
    fn suffix(&self) -> SqlSuffix {
        self.suffix
    }

    fn intent(&self) -> SqlSuffix {
        self.intent
    }

    fn set_suffix(&mut self, suffix: SqlSuffix) {
        self.suffix = suffix;
    }

    fn l_bracket(&self) -> &str {
        &self.l_bracket
    }

    fn r_bracket(&self) -> &str {
        &self.r_bracket
    }

    fn set_l_bracket(&mut self, brackets: String) {
        self.l_bracket = brackets;
    }

    fn set_r_bracket(&mut self, brackets: String) {
        self.r_bracket = brackets;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn like_wraps_scalars_with_wildcards() {
        assert_eq!(
            SqlOperator::Like.normalize_value(json!("John")),
            json!("%John%")
        );
        assert_eq!(
            SqlOperator::ILike.normalize_value(json!("gmail")),
            json!("%gmail%")
        );
    }

    #[test]
    fn like_wrap_is_idempotent() {
        assert_eq!(
            SqlOperator::Like.normalize_value(json!("%John%")),
            json!("%John%")
        );
        // A marker anywhere in the term counts as caller-controlled.
        assert_eq!(
            SqlOperator::Like.normalize_value(json!("Jo%hn")),
            json!("Jo%hn")
        );
    }

    #[test]
    fn ends_like_appends_single_trailing_marker() {
        assert_eq!(
            SqlOperator::EndsLike.normalize_value(json!("999")),
            json!("999%")
        );
        assert_eq!(
            SqlOperator::EndsILike.normalize_value(json!(42)),
            json!("42%")
        );
    }

    #[test]
    fn non_string_scalars_are_stringified_for_like_only() {
        assert_eq!(SqlOperator::Like.normalize_value(json!(7)), json!("%7%"));
        assert_eq!(SqlOperator::Equals.normalize_value(json!(7)), json!(7));
        assert_eq!(
            SqlOperator::GreaterThan.normalize_value(json!(1.5)),
            json!(1.5)
        );
    }

    #[test]
    fn lists_pass_through_unmodified() {
        let list = json!(["a", "b"]);
        assert_eq!(SqlOperator::Like.normalize_value(list.clone()), list);
        assert_eq!(SqlOperator::In.normalize_value(list.clone()), list);
    }

    #[test]
    fn filter_starts_closed_and_undecorated() {
        let filter = Filter::new("name", SqlOperator::Equals, json!("x"));
        assert_eq!(filter.suffix(), SqlSuffix::Close);
        assert_eq!(filter.sql_suffix(), "");
        assert_eq!(filter.l_bracket(), "");
        assert_eq!(filter.r_bracket(), "");
    }

    #[test]
    fn is_list_requires_non_empty_array() {
        let filter = Filter::new("id", SqlOperator::In, json!([1, 2]));
        assert!(filter.is_list());
        let empty = Filter::new("id", SqlOperator::In, json!([]));
        assert!(!empty.is_list());
        let scalar = Filter::new("id", SqlOperator::Equals, json!(1));
        assert!(!scalar.is_list());
    }
}
