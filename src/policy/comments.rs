use super::IssuePermissionPolicy;
use crate::types::{Comment, Principal};

impl IssuePermissionPolicy {
    /// Comments are author-owned: the issue's reporter or assignee has no say.
    #[must_use]
    pub fn can_delete_comment(&self, comment: &Comment, principal: Option<&Principal>) -> bool {
        principal.is_some_and(|principal| {
            principal.id == comment.author_id || self.is_admin(principal)
        })
    }

    #[must_use]
    pub fn can_edit_comment(&self, comment: &Comment, principal: Option<&Principal>) -> bool {
        self.can_delete_comment(comment, principal)
    }
}
