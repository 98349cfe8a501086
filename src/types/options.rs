//! Tunables for the permission policy.

use serde::{Deserialize, Serialize};

use super::principal::ADMIN_ROLE;
use crate::error::{PermissionError, Result};

fn default_true() -> bool {
    true
}

fn default_admin_role() -> String {
    ADMIN_ROLE.to_string()
}

/// Policy configuration. Every field has a default, so an empty JSON object
/// is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolicyOptions {
    /// Role granting unrestricted access. Matched exactly.
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
    /// Accept `URGENT` as a priority value.
    #[serde(default = "default_true")]
    pub accept_urgent_priority: bool,
    /// Accept `CRITICAL`/`HIGH`/`MEDIUM`/`LOW` as severity values, mapped onto
    /// `S1`..`S4`. Some older forms submit severity in that vocabulary.
    #[serde(default)]
    pub accept_priority_vocabulary_for_severity: bool,
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            admin_role: default_admin_role(),
            accept_urgent_priority: true,
            accept_priority_vocabulary_for_severity: false,
        }
    }
}

impl PolicyOptions {
    /// Start a fluent builder for `PolicyOptions`.
    #[must_use]
    pub fn builder() -> PolicyOptionsBuilder {
        PolicyOptionsBuilder::default()
    }

    /// Load options from a JSON document, filling in defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(raw)
            .map_err(|err| PermissionError::invalid(format!("malformed policy options: {err}")))?;
        if options.admin_role.trim().is_empty() {
            return Err(PermissionError::invalid("admin_role must not be blank"));
        }
        Ok(options)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyOptionsBuilder {
    inner: PolicyOptions,
}

impl PolicyOptionsBuilder {
    pub fn admin_role<S: Into<String>>(mut self, role: S) -> Self {
        self.inner.admin_role = role.into();
        self
    }

    #[must_use]
    pub fn accept_urgent_priority(mut self, enabled: bool) -> Self {
        self.inner.accept_urgent_priority = enabled;
        self
    }

    #[must_use]
    pub fn accept_priority_vocabulary_for_severity(mut self, enabled: bool) -> Self {
        self.inner.accept_priority_vocabulary_for_severity = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> PolicyOptions {
        self.inner
    }
}
