//! Issue, comment and enumeration types read by the policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::canonical_token;
use crate::error::PermissionError;

/// Identifier of a user account on the remote system.
pub type UserId = u64;
/// Identifier of an issue.
pub type IssueId = u64;
/// Identifier of a comment.
pub type CommentId = u64;

/// Workflow state of an issue.
///
/// Declaration order only fixes iteration order inside sets; it does not
/// imply any progression between states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Open,
    InProgress,
    Review,
    Closed,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Open,
        Status::InProgress,
        Status::Review,
        Status::Closed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Review => "REVIEW",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = PermissionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = canonical_token(raw)
            .ok_or_else(|| PermissionError::invalid("status value is empty"))?;
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == token)
            .ok_or_else(|| PermissionError::invalid(format!("unknown status '{}'", raw.trim())))
    }
}

/// Scheduling priority of an issue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
        Priority::Urgent,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
            Self::Urgent => "URGENT",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PermissionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = canonical_token(raw)
            .ok_or_else(|| PermissionError::invalid("priority value is empty"))?;
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == token)
            .ok_or_else(|| PermissionError::invalid(format!("unknown priority '{}'", raw.trim())))
    }
}

/// Reporter-assessed impact of an issue, `S1` being the most severe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    S1,
    S2,
    S3,
    S4,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::S1, Severity::S2, Severity::S3, Severity::S4];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
            Self::S4 => "S4",
        }
    }

    /// Human label used next to the code in issue forms.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::S1 => "Critical",
            Self::S2 => "Major",
            Self::S3 => "Minor",
            Self::S4 => "Trivial",
        }
    }

    /// Map a severity written in the priority vocabulary onto the `S1..S4` scale.
    ///
    /// `URGENT` has no severity counterpart.
    #[must_use]
    pub fn from_priority_vocabulary(priority: Priority) -> Option<Self> {
        match priority {
            Priority::Critical => Some(Self::S1),
            Priority::High => Some(Self::S2),
            Priority::Medium => Some(Self::S3),
            Priority::Low => Some(Self::S4),
            Priority::Urgent => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = PermissionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = canonical_token(raw)
            .ok_or_else(|| PermissionError::invalid("severity value is empty"))?;
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == token)
            .ok_or_else(|| PermissionError::invalid(format!("unknown severity '{}'", raw.trim())))
    }
}

/// Kind of work an issue tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    Bug,
    Task,
    Feature,
    Improvement,
}

impl IssueType {
    pub const ALL: [IssueType; 4] = [
        IssueType::Bug,
        IssueType::Task,
        IssueType::Feature,
        IssueType::Improvement,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "BUG",
            Self::Task => "TASK",
            Self::Feature => "FEATURE",
            Self::Improvement => "IMPROVEMENT",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = PermissionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = canonical_token(raw)
            .ok_or_else(|| PermissionError::invalid("issue type value is empty"))?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| PermissionError::invalid(format!("unknown issue type '{}'", raw.trim())))
    }
}

/// Snapshot of an issue as fetched from the remote system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: IssueId,
    pub status: Status,
    pub priority: Priority,
    pub severity: Severity,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub reporter_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<UserId>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<IssueType>,
}

impl Issue {
    /// Minimal issue for callers that only care about workflow and ownership.
    #[must_use]
    pub fn new(id: IssueId, status: Status, reporter_id: UserId, assignee_id: Option<UserId>) -> Self {
        Self {
            id,
            status,
            priority: Priority::Medium,
            severity: Severity::S3,
            title: String::new(),
            description: String::new(),
            reporter_id,
            assignee_id,
            issue_type: None,
        }
    }

    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.assignee_id.is_some()
    }
}

/// Comment attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub issue_id: IssueId,
    pub author_id: UserId,
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_loosely() {
        assert_eq!(" in progress ".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("closed".parse::<Status>().unwrap(), Status::Closed);
        assert!("DONE".parse::<Status>().is_err());
        assert!("   ".parse::<Status>().is_err());
    }

    #[test]
    fn severity_rejects_priority_words() {
        assert!("HIGH".parse::<Severity>().is_err());
        assert_eq!("s2".parse::<Severity>().unwrap(), Severity::S2);
    }

    #[test]
    fn priority_vocabulary_maps_onto_severity_scale() {
        assert_eq!(Severity::from_priority_vocabulary(Priority::Critical), Some(Severity::S1));
        assert_eq!(Severity::from_priority_vocabulary(Priority::Low), Some(Severity::S4));
        assert_eq!(Severity::from_priority_vocabulary(Priority::Urgent), None);
    }

    #[test]
    fn issue_json_uses_camel_case_and_type_key() {
        let issue: Issue = serde_json::from_str(
            r#"{"id":4,"status":"REVIEW","priority":"URGENT","severity":"S1","title":"Crash",
                "reporterId":7,"assigneeId":null,"type":"BUG"}"#,
        )
        .unwrap();
        assert_eq!(issue.status, Status::Review);
        assert_eq!(issue.priority, Priority::Urgent);
        assert_eq!(issue.assignee_id, None);
        assert_eq!(issue.issue_type, Some(IssueType::Bug));
        assert!(issue.description.is_empty());
    }

    #[test]
    fn status_display_matches_wire_form() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}
