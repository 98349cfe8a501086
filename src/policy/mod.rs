//! `IssuePermissionPolicy`: the client-side mirror of the issue authorization rules.
//!
//! Every decision is a pure function of the issue, the principal and the
//! immutable [`PolicyOptions`]. Results are advisory: they decide which
//! controls to show and which requests are worth sending, while the remote
//! system of record keeps final authority.

mod claim;
mod comments;
mod fields;
mod status;
mod validate;

use crate::types::{Issue, PolicyOptions, Principal, UserId};

/// Stateless permission policy. Cheap to clone, `Send + Sync`, safe to share.
#[derive(Debug, Clone, Default)]
pub struct IssuePermissionPolicy {
    options: PolicyOptions,
}

impl IssuePermissionPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: PolicyOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &PolicyOptions {
        &self.options
    }

    pub(crate) fn is_admin(&self, principal: &Principal) -> bool {
        principal.has_role(&self.options.admin_role)
    }

    pub(crate) fn relationship(&self, issue: &Issue, principal: Option<&Principal>) -> Relationship {
        let Some(principal) = principal else {
            return Relationship::default();
        };
        Relationship {
            principal_id: Some(principal.id),
            admin: self.is_admin(principal),
            reporter: principal.id == issue.reporter_id,
            assignee: issue.assignee_id == Some(principal.id),
        }
    }
}

/// How a principal relates to one issue. Anonymous principals relate in no way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Relationship {
    pub principal_id: Option<UserId>,
    pub admin: bool,
    pub reporter: bool,
    pub assignee: bool,
}

impl Relationship {
    pub fn is_participant(self) -> bool {
        self.admin || self.reporter || self.assignee
    }
}
