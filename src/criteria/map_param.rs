//! The aggregate root: named-parameter bag plus ordered criteria.

use serde_json::Value;
use std::collections::HashMap;

use super::condition::{Condition, SqlSuffix};
use super::filter::{Filter, SqlOperator};
use crate::errors::ParamError;
use crate::models::UserContext;
use crate::params::{StandardParam, TABLE_NAME_KEY};
use crate::search::{ColumnSearch, KeywordType, TableSearch};
use crate::sort::{SortDirection, SortParam};

/// Request-scoped container for everything a templated query needs: the flat
/// `filters` bag of named parameters, the ordered `criteria` predicate list,
/// the order-by list, pagination state and the keyword-search delegate.
///
/// Mutators return `&mut Self` so calls chain fluently. Pagination values are
/// views over the `filters` bag under reserved keys, not separate storage:
/// reads return `None` when nothing was set, and callers must not conflate
/// absence with a zero default.
///
/// ```
/// use paramcrate::{MapParam, SqlOperator};
///
/// let mut param = MapParam::new();
/// param
///     .add_criteria("status", SqlOperator::Equals, "active")
///     .add_criteria("age", SqlOperator::GreaterThan, 18)
///     .prepare_value();
///
/// assert_eq!(param.criteria().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapParam {
    filters: HashMap<String, Value>,
    criteria: Vec<Filter>,
    order_by: Vec<SortParam>,
    table_search: TableSearch,
    /// Index of the most recently appended predicate.
    last_added: Option<usize>,
    /// Open brackets waiting to attach to the next predicate.
    pending_open_brackets: usize,
    master_list_id: Option<Vec<Value>>,
    filial_filter_columns: Option<Vec<String>>,
}

impl MapParam {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A parameter set pre-populated with a page size.
    #[must_use]
    pub fn with_limit(limit: i64) -> Self {
        let mut param = Self::new();
        param.set_limit(limit);
        param
    }

    /// A parameter set pre-populated with one predicate.
    #[must_use]
    pub fn with_criteria(field: &str, op: SqlOperator, value: impl Into<Value>) -> Self {
        let mut param = Self::new();
        param.add_criteria(field, op, value);
        param
    }

    /// A parameter set pre-populated with one IN predicate.
    #[must_use]
    pub fn with_in<I, V>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut param = Self::new();
        param.add_criteria_in(field, values);
        param
    }

    // --- Criteria -------------------------------------------------------

    /// Appends one predicate with the full set of knobs. A null value is a
    /// no-op and produces no predicate.
    ///
    /// Appending chains the previous predicate (reopening it with its intent
    /// unless the caller fixed its connector), attaches any pending open
    /// brackets to the new predicate's left side, and leaves the new
    /// predicate closed as the current end of the chain.
    pub fn add_criteria_full(
        &mut self,
        field: &str,
        op: SqlOperator,
        value: impl Into<Value>,
        suffix: SqlSuffix,
        value_r: Option<Value>,
    ) -> &mut Self {
        let value = value.into();
        if value.is_null() {
            return self;
        }
        if let Some(last) = self.last_added_mut() {
            last.chain();
        }
        let mut filter = Filter::with_intent(field, op, value, value_r, suffix);
        filter.add_l_brackets(self.pending_open_brackets);
        self.pending_open_brackets = 0;
        filter.close();
        self.criteria.push(filter);
        self.last_added = Some(self.criteria.len() - 1);
        self
    }

    /// Appends one predicate connected with the default `And` intent.
    pub fn add_criteria(
        &mut self,
        field: &str,
        op: SqlOperator,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.add_criteria_full(field, op, value, SqlSuffix::And, None)
    }

    /// Two-argument shortcut: arrays become IN predicates, anything else an
    /// equality predicate. Null values are no-ops.
    pub fn add(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        match value.into() {
            Value::Null => self,
            Value::Array(items) => self.add_criteria_in(field, items),
            scalar => self.add_criteria(field, SqlOperator::Equals, scalar),
        }
    }

    /// Appends a BETWEEN predicate with both bounds. A null lower bound is a
    /// no-op.
    pub fn add_between(
        &mut self,
        field: &str,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
    ) -> &mut Self {
        self.add_criteria_full(
            field,
            SqlOperator::Between,
            lower,
            SqlSuffix::And,
            Some(upper.into()),
        )
    }

    /// Appends an IN predicate. An empty list is a no-op.
    pub fn add_criteria_in<I, V>(&mut self, field: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.add_criteria_in_full(field, values, SqlSuffix::And, SqlOperator::In)
    }

    /// IN predicate with an explicit suffix and membership operator
    /// (`In`/`NotIn`). An empty list is a no-op.
    pub fn add_criteria_in_full<I, V>(
        &mut self,
        field: &str,
        values: I,
        suffix: SqlSuffix,
        op: SqlOperator,
    ) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let items: Vec<Value> = values.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return self;
        }
        self.add_criteria_full(field, op, Value::Array(items), suffix, None)
    }

    /// Starts a logical group: the next appended predicate receives one more
    /// opening bracket.
    pub fn open_bracket(&mut self) -> &mut Self {
        self.pending_open_brackets += 1;
        self
    }

    /// Ends a logical group against whichever predicate is currently last.
    /// No-op while the criteria list is empty.
    pub fn close_bracket(&mut self) -> &mut Self {
        if let Some(last) = self.last_added_mut() {
            last.add_r_bracket();
        }
        self
    }

    /// Closes the last appended predicate. Idempotent finalization; must be
    /// called before a renderer treats the criteria list as final.
    pub fn prepare_value(&mut self) -> &mut Self {
        if let Some(last) = self.last_added_mut() {
            last.close();
        }
        self
    }

    /// Ordered predicate list with resolved bracket and suffix decoration.
    #[must_use]
    pub fn criteria(&self) -> &[Filter] {
        &self.criteria
    }

    pub fn clear_criteria(&mut self) {
        self.criteria.clear();
        self.last_added = None;
        self.pending_open_brackets = 0;
    }

    fn last_added_mut(&mut self) -> Option<&mut Filter> {
        self.last_added.and_then(|index| self.criteria.get_mut(index))
    }

    // --- Filters bag ----------------------------------------------------

    /// Upserts a named parameter. Null values are no-ops; keys are unique
    /// and the last write wins.
    pub fn filter(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if !value.is_null() {
            self.filters.insert(name.to_string(), value);
        }
        self
    }

    /// Upserts a caller-defined parameter, refusing keys reserved for
    /// standard parameters. Null values are no-ops.
    ///
    /// # Errors
    ///
    /// [`ParamError::ReservedKey`] when `key` is one of the reserved
    /// parameter keys; the bag is left unchanged.
    pub fn add_custom_filter(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, ParamError> {
        let value = value.into();
        if value.is_null() {
            return Ok(self);
        }
        if StandardParam::is_reserved(key) {
            let err = ParamError::reserved_key(key);
            err.log();
            return Err(err);
        }
        self.filters.insert(key.to_string(), value);
        Ok(self)
    }

    /// The flat named-parameter bag, including reserved pagination keys.
    #[must_use]
    pub fn filters(&self) -> &HashMap<String, Value> {
        &self.filters
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Stores the target table name under its well-known key.
    pub fn set_table(&mut self, name: &str) -> &mut Self {
        self.filter(TABLE_NAME_KEY, name)
    }

    // --- Sorting --------------------------------------------------------

    /// Appends an order-by entry. Strings parse case-insensitively and fall
    /// back to ascending on blank or unrecognized input.
    pub fn add_order_by(&mut self, sort_by: &str, sort_order: impl Into<SortDirection>) -> &mut Self {
        self.order_by.push(SortParam::new(sort_by, sort_order.into()));
        self
    }

    #[must_use]
    pub fn order_by(&self) -> &[SortParam] {
        &self.order_by
    }

    pub fn clear_order_by(&mut self) {
        self.order_by.clear();
    }

    // --- Pagination views ----------------------------------------------

    /// Page size, `None` unless explicitly set.
    #[must_use]
    pub fn limit(&self) -> Option<i64> {
        self.int_filter(StandardParam::PerPage)
    }

    pub fn set_limit(&mut self, limit: i64) -> &mut Self {
        self.filter(StandardParam::PerPage.key(), limit)
    }

    /// Page offset, `None` unless explicitly set.
    #[must_use]
    pub fn offset(&self) -> Option<i64> {
        self.int_filter(StandardParam::CurrentPage)
    }

    pub fn set_offset(&mut self, offset: i64) -> &mut Self {
        self.filter(StandardParam::CurrentPage.key(), offset)
    }

    fn int_filter(&self, param: StandardParam) -> Option<i64> {
        self.filters.get(param.key()).and_then(Value::as_i64)
    }

    // --- User context ---------------------------------------------------

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.int_filter(StandardParam::UserId)
    }

    pub fn set_user_id(&mut self, user_id: i64) -> &mut Self {
        self.filter(StandardParam::UserId.key(), user_id)
    }

    #[must_use]
    pub fn user_roles(&self) -> Option<Vec<String>> {
        self.filters
            .get(StandardParam::UserRoles.key())
            .and_then(Value::as_array)
            .map(|roles| {
                roles
                    .iter()
                    .filter_map(|role| role.as_str().map(str::to_string))
                    .collect()
            })
    }

    pub fn set_user_roles(&mut self, roles: Vec<String>) -> &mut Self {
        self.filter(StandardParam::UserRoles.key(), roles)
    }

    /// Snapshot of the stored user identity.
    #[must_use]
    pub fn user_context(&self) -> UserContext {
        UserContext::new(self.user_id(), self.user_roles())
    }

    // --- Keyword search -------------------------------------------------

    /// Sets the free-text keyword term; type detection and LIKE-form
    /// derivation run synchronously.
    pub fn set_keyword_search(&mut self, term: impl Into<String>) -> &mut Self {
        self.table_search.set_keyword_search(term);
        self
    }

    /// The raw keyword term, `None` while unset or empty.
    #[must_use]
    pub fn keyword_search(&self) -> Option<&str> {
        let term = self.table_search.keyword_search();
        (!term.is_empty()).then_some(term)
    }

    /// LIKE-ready form of the current keyword term.
    #[must_use]
    pub fn keyword_like_search(&self) -> &str {
        self.table_search.keyword_like_search()
    }

    #[must_use]
    pub fn keyword_search_type(&self) -> KeywordType {
        self.table_search.keyword_search_type()
    }

    /// Registers searchable columns by name, each accepting every term type.
    pub fn set_columns<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.table_search.add(ColumnSearch::new(name));
        }
        self
    }

    /// Registers pre-configured searchable columns.
    pub fn set_search_columns(&mut self, columns: impl IntoIterator<Item = ColumnSearch>) -> &mut Self {
        self.table_search.add_all(columns);
        self
    }

    /// The columns eligible for the current keyword term, in registration
    /// order.
    #[must_use]
    pub fn columns(&self) -> Vec<&ColumnSearch> {
        self.table_search.to_list()
    }

    /// Read access to the keyword-search delegate.
    #[must_use]
    pub fn table_search(&self) -> &TableSearch {
        &self.table_search
    }

    // --- Master/detail --------------------------------------------------

    pub fn set_master_list_id(&mut self, ids: Option<Vec<Value>>) -> &mut Self {
        self.master_list_id = ids;
        self
    }

    #[must_use]
    pub fn master_list_id(&self) -> Option<&[Value]> {
        self.master_list_id.as_deref()
    }

    pub fn add_filial_filter_column(&mut self, column: impl Into<String>) -> &mut Self {
        self.filial_filter_columns
            .get_or_insert_with(Vec::new)
            .push(column.into());
        self
    }

    #[must_use]
    pub fn filial_filter_columns(&self) -> Option<&[String]> {
        self.filial_filter_columns.as_deref()
    }

    // --- Validation -----------------------------------------------------

    /// Rule U007: pagination explicitly requested without any ordering is
    /// invalid. Uses key presence, not the accessor values: the error must
    /// fire only when the caller explicitly asked for pagination.
    ///
    /// # Errors
    ///
    /// [`ParamError::Validation`] with code `U007` when either pagination
    /// key is present and the order-by list is empty.
    pub fn check(&self) -> Result<(), ParamError> {
        let has_limit = self.filters.contains_key(StandardParam::PerPage.key());
        let has_offset = self.filters.contains_key(StandardParam::CurrentPage.key());
        if (has_limit || has_offset) && self.order_by.is_empty() {
            let err = ParamError::validation("U007", "pagination requires sorting parameters");
            err.log();
            return Err(err);
        }
        Ok(())
    }
}
