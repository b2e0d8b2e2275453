//! Logical connectors and the predicate chaining capability.
//!
//! Callers build predicate chains left to right without knowing in advance
//! whether a given predicate is the last of its group. Every predicate is
//! therefore constructed closed, and appending the next one retroactively
//! reopens it through [`Condition::chain`], unless the caller already set an
//! explicit connector, which always wins over the automatic default.

use serde::Serialize;

/// Logical connector rendered immediately after a predicate.
///
/// `Close` marks a predicate that nothing currently follows; it renders as an
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlSuffix {
    And,
    Or,
    Close,
}

impl SqlSuffix {
    /// Text a renderer concatenates after the predicate's value.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Close => "",
        }
    }
}

/// Capability shared by every predicate type that participates in the
/// bracket-and-suffix chaining algorithm.
///
/// Implementors supply the raw state accessors; the chaining operations are
/// provided.
pub trait Condition {
    /// Current connector state.
    fn suffix(&self) -> SqlSuffix;
    /// Connector to use when this predicate is reopened after being closed.
    fn intent(&self) -> SqlSuffix;
    fn set_suffix(&mut self, suffix: SqlSuffix);

    /// Accumulated `(` prefix.
    fn l_bracket(&self) -> &str;
    /// Accumulated `)` suffix.
    fn r_bracket(&self) -> &str;
    fn set_l_bracket(&mut self, brackets: String);
    fn set_r_bracket(&mut self, brackets: String);

    /// Marks this predicate as followed by another, connected with its intent.
    fn open(&mut self) {
        self.set_suffix(self.intent());
    }

    /// Marks this predicate as the current end of its group.
    fn close(&mut self) {
        self.set_suffix(SqlSuffix::Close);
    }

    /// Reopens a closed predicate the moment it turns out not to be last.
    ///
    /// Invoked on the previous predicate exactly once, immediately before a
    /// new one is appended. A suffix the caller set explicitly to `And`/`Or`
    /// is left untouched.
    fn chain(&mut self) {
        if self.suffix() == SqlSuffix::Close {
            self.open();
        }
    }

    /// Appends one literal `)`; a single predicate may close several nested
    /// groups.
    fn add_r_bracket(&mut self) {
        let brackets = format!("{})", self.r_bracket());
        self.set_r_bracket(brackets);
    }

    /// Prepends `count` literal `(` characters; no-op for a zero count.
    fn add_l_brackets(&mut self, count: usize) {
        if count > 0 {
            let brackets = format!("{}{}", "(".repeat(count), self.l_bracket());
            self.set_l_bracket(brackets);
        }
    }

    /// Rendered connector: empty for `Close`, else `AND`/`OR`.
    fn sql_suffix(&self) -> &'static str {
        self.suffix().as_sql()
    }
}
