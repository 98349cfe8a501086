use super::IssuePermissionPolicy;
use crate::types::{ClaimEligibility, Issue, Principal};

impl IssuePermissionPolicy {
    /// Whether `principal` may self-assign `issue`.
    ///
    /// Reporters may never claim their own issues, and only unassigned issues
    /// can be claimed. Admins get no exemption.
    #[must_use]
    pub fn claim_eligibility(&self, issue: &Issue, principal: Option<&Principal>) -> ClaimEligibility {
        let rel = self.relationship(issue, principal);
        if rel.principal_id.is_none() {
            ClaimEligibility::SignedOut
        } else if rel.reporter {
            ClaimEligibility::ReportedByYou
        } else if rel.assignee {
            ClaimEligibility::AssignedToYou
        } else if issue.is_assigned() {
            ClaimEligibility::AlreadyAssigned
        } else {
            ClaimEligibility::Eligible
        }
    }

    #[must_use]
    pub fn can_claim(&self, issue: &Issue, principal: Option<&Principal>) -> bool {
        self.claim_eligibility(issue, principal).is_eligible()
    }
}
