use super::IssuePermissionPolicy;
use crate::types::{Issue, Principal};

impl IssuePermissionPolicy {
    /// Title, description and priority: reporter, assignee, or admin.
    #[must_use]
    pub fn can_edit_core_fields(&self, issue: &Issue, principal: Option<&Principal>) -> bool {
        self.relationship(issue, principal).is_participant()
    }

    /// Severity records the reporter's view of impact, so the assignee alone
    /// may not change it.
    #[must_use]
    pub fn can_edit_severity(&self, issue: &Issue, principal: Option<&Principal>) -> bool {
        let rel = self.relationship(issue, principal);
        rel.reporter || rel.admin
    }

    /// Issue type follows the severity rule.
    #[must_use]
    pub fn can_edit_type(&self, issue: &Issue, principal: Option<&Principal>) -> bool {
        self.can_edit_severity(issue, principal)
    }

    #[must_use]
    pub fn can_comment(&self, issue: &Issue, principal: Option<&Principal>) -> bool {
        self.can_edit_core_fields(issue, principal)
    }

    /// Deleting an issue is reserved for admins.
    #[must_use]
    pub fn can_delete_issue(&self, principal: Option<&Principal>) -> bool {
        principal.is_some_and(|principal| self.is_admin(principal))
    }
}

#[cfg(test)]
mod tests {
    use crate::policy::IssuePermissionPolicy;
    use crate::policy::fixtures::*;
    use crate::types::Status;

    #[test]
    fn participants_edit_core_fields() {
        let policy = IssuePermissionPolicy::new();
        let issue = issue(Status::Open);
        for principal in [user(REPORTER), user(ASSIGNEE), admin()] {
            assert!(policy.can_edit_core_fields(&issue, Some(&principal)));
            assert!(policy.can_comment(&issue, Some(&principal)));
        }
        assert!(!policy.can_edit_core_fields(&issue, Some(&user(STRANGER))));
        assert!(!policy.can_comment(&issue, Some(&user(STRANGER))));
        assert!(!policy.can_edit_core_fields(&issue, None));
    }

    #[test]
    fn assignee_alone_cannot_retriage_severity() {
        let policy = IssuePermissionPolicy::new();
        let issue = issue(Status::InProgress);
        assert!(policy.can_edit_severity(&issue, Some(&user(REPORTER))));
        assert!(policy.can_edit_severity(&issue, Some(&admin())));
        assert!(!policy.can_edit_severity(&issue, Some(&user(ASSIGNEE))));
        assert!(!policy.can_edit_type(&issue, Some(&user(ASSIGNEE))));
        assert!(!policy.can_edit_severity(&issue, None));
    }

    #[test]
    fn only_admin_deletes_issues() {
        let policy = IssuePermissionPolicy::new();
        assert!(policy.can_delete_issue(Some(&admin())));
        assert!(!policy.can_delete_issue(Some(&user(REPORTER))));
        assert!(!policy.can_delete_issue(None));
    }
}
