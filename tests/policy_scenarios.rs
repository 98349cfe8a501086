//! Integration tests for the issue permission policy.
//!
//! Tests:
//! - worked scenarios from the issue detail modal
//! - wire payloads decoded end to end
//! - refusals reported by the remote system

use jiralite_policy::{
    ADMIN_ROLE, Comment, Issue, IssuePermissionPolicy, IssueResponse, MutationRequest,
    PermissionError, Principal, Status, UserResponse,
};

fn issue(status: Status) -> Issue {
    Issue::new(101, status, 7, Some(9))
}

/// Reporter reopens a closed issue.
#[test]
fn reporter_reopens_closed_issue() {
    let policy = IssuePermissionPolicy::new();
    let request = MutationRequest::new("status", "OPEN");
    assert_eq!(
        policy.validate_mutation(&issue(Status::Closed), Some(&Principal::new(7)), &request),
        Ok(())
    );
}

/// Reporter may not push a closed issue anywhere but OPEN.
#[test]
fn reporter_cannot_restart_work() {
    let policy = IssuePermissionPolicy::new();
    let request = MutationRequest::new("status", "IN_PROGRESS");
    let err = policy
        .validate_mutation(&issue(Status::Closed), Some(&Principal::new(7)), &request)
        .unwrap_err();
    assert!(matches!(err, PermissionError::StatusDenied { .. }));
    assert!(err.is_denial());
}

/// Assignee cannot re-triage severity.
#[test]
fn assignee_denied_severity() {
    let policy = IssuePermissionPolicy::new();
    let request = MutationRequest::new("severity", "S1");
    assert_eq!(
        policy.validate_mutation(&issue(Status::Open), Some(&Principal::new(9)), &request),
        Err(PermissionError::SeverityDenied)
    );
}

/// Admin re-triages severity on someone else's issue.
#[test]
fn admin_sets_severity() {
    let policy = IssuePermissionPolicy::new();
    let admin = Principal::new(1).with_role(ADMIN_ROLE);
    let request = MutationRequest::new("severity", "S1");
    assert!(policy
        .validate_mutation(&issue(Status::Open), Some(&admin), &request)
        .is_ok());
}

/// Comment deletion follows authorship, not issue ownership.
#[test]
fn comment_deletion_by_author_or_admin() {
    let policy = IssuePermissionPolicy::new();
    let comment = Comment {
        id: 1,
        issue_id: 101,
        author_id: 3,
        text: "Seen on Firefox too".to_string(),
    };
    assert!(policy.can_delete_comment(&comment, Some(&Principal::new(3))));
    assert!(!policy.can_delete_comment(&comment, Some(&Principal::new(4))));
    assert!(policy.can_delete_comment(&comment, Some(&Principal::new(4).with_role(ADMIN_ROLE))));
}

/// Payloads fetched from the API flow straight into a decision.
#[test]
fn decision_from_wire_payloads() {
    let issue = IssueResponse::issue_from_json_str(
        r#"{"id":101,"title":"Export hangs","status":"CLOSED","priority":"LOW","severity":"S3",
            "reporter":{"id":7,"username":"rita"},"assignee":null}"#,
    )
    .unwrap();
    let user: UserResponse =
        serde_json::from_str(r#"{"id":7,"username":"rita","roles":[{"name":"USER"}]}"#).unwrap();
    let principal = Principal::from(user);
    let request = MutationRequest::from_json_str(r#"{"field":"status","newValue":"open"}"#).unwrap();

    let policy = IssuePermissionPolicy::new();
    assert!(policy.validate_mutation(&issue, Some(&principal), &request).is_ok());
    assert!(!policy.can_claim(&issue, Some(&principal)));
    assert!(policy.can_claim(&issue, Some(&Principal::new(8))));
}

/// Remote refusals read the same as local ones.
#[test]
fn remote_refusal_surfaces_like_local_denial() {
    let remote = PermissionError::from_remote(403, None).unwrap();
    assert!(remote.is_denial());
    assert_eq!(remote.to_string(), "You are not allowed to perform this action.");
}
