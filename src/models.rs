//! Request-scoped user identity.

use serde::{Deserialize, Serialize};

/// Identity of the caller a parameter set was built for.
///
/// Both fields are optional: service-to-service requests carry neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub id: Option<i64>,
    pub roles: Option<Vec<String>>,
}

impl UserContext {
    #[must_use]
    pub fn new(id: Option<i64>, roles: Option<Vec<String>>) -> Self {
        Self { id, roles }
    }

    /// An anonymous context with no id and no roles.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the caller holds `role`. Anonymous contexts hold none.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles
            .as_ref()
            .is_some_and(|roles| roles.iter().any(|held| held == role))
    }
}
