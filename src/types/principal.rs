//! Acting principal supplied by the session collaborator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::issue::UserId;

/// Role carried by the built-in administrator account.
pub const ADMIN_ROLE: &str = "ADMIN";

/// An already-authenticated actor.
///
/// Authentication is the caller's concern; the policy only reads `id` and
/// `roles`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Principal {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub roles: BTreeSet<String>,
}

impl Principal {
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            roles: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_role<S: Into<String>>(mut self, role: S) -> Self {
        self.roles.insert(role.into());
        self
    }

    /// Exact role check. Role names are opaque tags: `admin` is not `ADMIN`.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
