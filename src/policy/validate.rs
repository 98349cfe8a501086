use tracing::instrument;

use super::IssuePermissionPolicy;
use crate::error::{PermissionError, Result};
use crate::types::{
    Issue, IssueCapabilities, IssueUpdate, Mutation, MutationRequest, Principal, Priority,
};

impl IssuePermissionPolicy {
    /// Pre-flight check to run before sending a mutation to the remote system.
    ///
    /// The request is type-checked first (`InvalidRequest`), then authorized.
    /// `Ok` only means the request is worth sending; the remote side still
    /// enforces the same rules and may refuse.
    #[instrument(
        level = "trace",
        skip_all,
        fields(issue_id = issue.id, principal_id = principal.map(|p| p.id), field = %request.field)
    )]
    pub fn validate_mutation(
        &self,
        issue: &Issue,
        principal: Option<&Principal>,
        request: &MutationRequest,
    ) -> Result<()> {
        let mutation = Mutation::parse(request, &self.options).inspect_err(|err| {
            tracing::debug!(
                target: "jiralite::policy",
                issue_id = issue.id,
                field = %request.field,
                error = %err,
                "rejected malformed mutation request"
            );
        })?;
        self.check_mutation(issue, principal, &mutation)
    }

    /// Value rules shared by every validation path, typed or not.
    pub fn check_value(&self, mutation: &Mutation) -> Result<()> {
        match mutation {
            Mutation::Title(title) if title.trim().is_empty() => {
                Err(PermissionError::invalid("title must not be blank"))
            }
            Mutation::Priority(Priority::Urgent) if !self.options.accept_urgent_priority => {
                Err(PermissionError::invalid("priority 'URGENT' is not accepted"))
            }
            _ => Ok(()),
        }
    }

    /// Check a typed mutation's value, then authorize it.
    pub fn check_mutation(
        &self,
        issue: &Issue,
        principal: Option<&Principal>,
        mutation: &Mutation,
    ) -> Result<()> {
        let outcome = self
            .check_value(mutation)
            .and_then(|()| self.authorize(issue, principal, mutation));
        if let Err(err) = &outcome {
            tracing::debug!(
                target: "jiralite::policy",
                issue_id = issue.id,
                principal_id = principal.map(|p| p.id),
                field = %mutation.field(),
                error = %err,
                "mutation denied"
            );
        }
        outcome
    }

    fn authorize(
        &self,
        issue: &Issue,
        principal: Option<&Principal>,
        mutation: &Mutation,
    ) -> Result<()> {
        match mutation {
            Mutation::Title(_) | Mutation::Description(_) | Mutation::Priority(_) => {
                if self.can_edit_core_fields(issue, principal) {
                    Ok(())
                } else {
                    Err(PermissionError::CoreFieldDenied)
                }
            }
            Mutation::Severity(_) => {
                if self.can_edit_severity(issue, principal) {
                    Ok(())
                } else {
                    Err(PermissionError::SeverityDenied)
                }
            }
            Mutation::Type(_) => {
                if self.can_edit_type(issue, principal) {
                    Ok(())
                } else {
                    Err(PermissionError::TypeDenied)
                }
            }
            Mutation::Status(target) => {
                if self.can_transition(issue, principal, *target) {
                    Ok(())
                } else {
                    Err(PermissionError::StatusDenied {
                        from: issue.status,
                        to: *target,
                    })
                }
            }
        }
    }

    /// Validate a batch of untyped requests, stopping at the first failure.
    pub fn validate_mutations(
        &self,
        issue: &Issue,
        principal: Option<&Principal>,
        requests: &[MutationRequest],
    ) -> Result<()> {
        for request in requests {
            self.validate_mutation(issue, principal, request)?;
        }
        Ok(())
    }

    /// Validate a partial edit-form patch field by field. An empty patch passes.
    #[instrument(
        level = "trace",
        skip_all,
        fields(issue_id = issue.id, principal_id = principal.map(|p| p.id))
    )]
    pub fn validate_update(
        &self,
        issue: &Issue,
        principal: Option<&Principal>,
        update: &IssueUpdate,
    ) -> Result<()> {
        for mutation in update.mutations() {
            self.check_mutation(issue, principal, &mutation)?;
        }
        Ok(())
    }

    /// Every capability the issue detail view gates on.
    #[must_use]
    pub fn capabilities(&self, issue: &Issue, principal: Option<&Principal>) -> IssueCapabilities {
        IssueCapabilities {
            edit_core_fields: self.can_edit_core_fields(issue, principal),
            edit_severity: self.can_edit_severity(issue, principal),
            edit_type: self.can_edit_type(issue, principal),
            change_status: self.can_change_status(issue, principal),
            status_options: self.allowed_status_transitions(issue, principal),
            comment: self.can_comment(issue, principal),
            delete_issue: self.can_delete_issue(principal),
            claim: self.claim_eligibility(issue, principal),
        }
    }
}
