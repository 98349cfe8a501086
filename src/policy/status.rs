use std::collections::BTreeSet;

use super::IssuePermissionPolicy;
use crate::types::{Issue, Principal, Status};

impl IssuePermissionPolicy {
    /// Statuses `principal` may move `issue` to, always including the current one.
    ///
    /// Admins and the assignee get the complete graph. The reporter's only edge
    /// is reopening a closed issue. Everyone else may only stay put.
    #[must_use]
    pub fn allowed_status_transitions(
        &self,
        issue: &Issue,
        principal: Option<&Principal>,
    ) -> BTreeSet<Status> {
        let rel = self.relationship(issue, principal);
        if rel.admin || rel.assignee {
            Status::ALL.into_iter().collect()
        } else if rel.reporter && issue.status == Status::Closed {
            BTreeSet::from([Status::Closed, Status::Open])
        } else {
            BTreeSet::from([issue.status])
        }
    }

    #[must_use]
    pub fn can_transition(&self, issue: &Issue, principal: Option<&Principal>, to: Status) -> bool {
        self.allowed_status_transitions(issue, principal)
            .contains(&to)
    }

    /// True when the status control should be enabled.
    #[must_use]
    pub fn can_change_status(&self, issue: &Issue, principal: Option<&Principal>) -> bool {
        self.allowed_status_transitions(issue, principal)
            .iter()
            .any(|status| *status != issue.status)
    }
}
