#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(test, allow(clippy::uninlined_format_args))]
#![allow(clippy::module_name_repetitions)]
//
// Documentation lints: the error variants document themselves through their
// user-facing messages.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Builders take owned values and return `Self` by design of the fluent API.
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]

//! Client-side issue permission and status-transition policy for JiraLite.
//!
//! ```
//! use jiralite_policy::{Issue, IssuePermissionPolicy, MutationRequest, Principal, Status};
//!
//! let policy = IssuePermissionPolicy::new();
//! let issue = Issue::new(1, Status::Closed, 7, Some(9));
//! let reporter = Principal::new(7);
//!
//! assert!(policy
//!     .validate_mutation(&issue, Some(&reporter), &MutationRequest::new("status", "OPEN"))
//!     .is_ok());
//! ```

/// The jiralite-policy crate version (matches `Cargo.toml`).
pub const JIRALITE_POLICY_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod policy;
pub mod types;

pub use error::{PermissionError, Result};
pub use policy::IssuePermissionPolicy;
pub use types::{
    ADMIN_ROLE, ClaimEligibility, Comment, CommentId, CommentResponse, Issue, IssueCapabilities,
    IssueId, IssueResponse, IssueType, IssueUpdate, MutableField, Mutation, MutationRequest,
    PolicyOptions, PolicyOptionsBuilder, Principal, Priority, RoleResponse, Severity, Status,
    UserId, UserResponse, UserSummary,
};
