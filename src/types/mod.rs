//! Public types exposed by the `jiralite-policy` crate.

pub mod api;
pub mod capabilities;
pub mod issue;
pub mod mutation;
pub mod options;
pub mod principal;

pub use api::{CommentResponse, IssueResponse, RoleResponse, UserResponse, UserSummary};
pub use capabilities::{ClaimEligibility, IssueCapabilities};
pub use issue::{Comment, CommentId, Issue, IssueId, IssueType, Priority, Severity, Status, UserId};
pub use mutation::{IssueUpdate, MutableField, Mutation, MutationRequest};
pub use options::{PolicyOptions, PolicyOptionsBuilder};
pub use principal::{ADMIN_ROLE, Principal};

/// Canonical spelling of an enumeration token: trimmed, unquoted, upper snake case.
///
/// Accepts stringified values emitted by some form bindings, e.g. `"\"OPEN\""`.
pub(crate) fn canonical_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let unwrapped = match serde_json::from_str::<String>(trimmed) {
        Ok(parsed) => parsed,
        Err(_) => trimmed.to_string(),
    };
    let mut token = String::with_capacity(unwrapped.len() + 4);
    let mut prev_lower = false;
    for ch in unwrapped.trim().chars() {
        match ch {
            '-' | ' ' | '_' => {
                token.push('_');
                prev_lower = false;
            }
            // camelCase boundary: targetStatus -> TARGET_STATUS
            upper if upper.is_ascii_uppercase() && prev_lower => {
                token.push('_');
                token.push(upper);
                prev_lower = false;
            }
            other => {
                prev_lower = other.is_ascii_lowercase();
                token.push(other.to_ascii_uppercase());
            }
        }
    }
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
