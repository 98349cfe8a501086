//! Response shapes of the remote issue API and their conversion into policy inputs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::issue::{Comment, CommentId, Issue, IssueId, IssueType, Priority, Severity, Status, UserId};
use super::principal::Principal;
use crate::error::{PermissionError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleResponse {
    pub name: String,
}

/// Current user as returned by the session endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: UserId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub roles: Vec<RoleResponse>,
}

impl From<UserResponse> for Principal {
    fn from(user: UserResponse) -> Self {
        let roles: BTreeSet<String> = user
            .roles
            .into_iter()
            .map(|role| role.name)
            .filter(|name| !name.is_empty())
            .collect();
        Principal { id: user.id, roles }
    }
}

/// Full issue as returned by `GET /issues/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueResponse {
    pub id: IssueId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub severity: Severity,
    #[serde(default, rename = "type")]
    pub issue_type: Option<IssueType>,
    #[serde(default)]
    pub reporter: Option<UserSummary>,
    #[serde(default)]
    pub assignee: Option<UserSummary>,
}

impl TryFrom<IssueResponse> for Issue {
    type Error = PermissionError;

    fn try_from(response: IssueResponse) -> Result<Self> {
        let reporter = response.reporter.ok_or_else(|| {
            PermissionError::invalid(format!("issue {} has no reporter", response.id))
        })?;
        Ok(Issue {
            id: response.id,
            status: response.status,
            priority: response.priority,
            severity: response.severity,
            title: response.title,
            description: response.description.unwrap_or_default(),
            reporter_id: reporter.id,
            assignee_id: response.assignee.map(|assignee| assignee.id),
            issue_type: response.issue_type,
        })
    }
}

impl IssueResponse {
    /// Decode a response body straight into the policy's issue model.
    pub fn issue_from_json_str(raw: &str) -> Result<Issue> {
        let response: Self = serde_json::from_str(raw)
            .map_err(|err| PermissionError::invalid(format!("malformed issue payload: {err}")))?;
        Issue::try_from(response)
    }
}

/// Comment as returned by `GET /issues/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    pub issue_id: IssueId,
    #[serde(default)]
    pub author: Option<UserSummary>,
    #[serde(default)]
    pub text: String,
}

impl TryFrom<CommentResponse> for Comment {
    type Error = PermissionError;

    fn try_from(response: CommentResponse) -> Result<Self> {
        let author = response.author.ok_or_else(|| {
            PermissionError::invalid(format!("comment {} has no author", response.id))
        })?;
        Ok(Comment {
            id: response.id,
            issue_id: response.issue_id,
            author_id: author.id,
            text: response.text,
        })
    }
}
