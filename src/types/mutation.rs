//! Candidate changes submitted for validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::canonical_token;
use super::issue::{IssueType, Priority, Severity, Status};
use super::options::PolicyOptions;
use crate::error::{PermissionError, Result};

/// Issue fields a caller may ask to change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MutableField {
    Title,
    Description,
    Priority,
    Severity,
    Status,
    Type,
}

impl MutableField {
    pub const ALL: [MutableField; 6] = [
        MutableField::Title,
        MutableField::Description,
        MutableField::Priority,
        MutableField::Severity,
        MutableField::Status,
        MutableField::Type,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Priority => "priority",
            Self::Severity => "severity",
            Self::Status => "status",
            Self::Type => "type",
        }
    }

    /// Title, description and priority share the core-field rule.
    #[must_use]
    pub fn is_core(self) -> bool {
        matches!(self, Self::Title | Self::Description | Self::Priority)
    }
}

impl fmt::Display for MutableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MutableField {
    type Err = PermissionError;

    fn from_str(raw: &str) -> Result<Self> {
        let token = canonical_token(raw)
            .ok_or_else(|| PermissionError::invalid("mutation field is empty"))?;
        let field = match token.as_str() {
            "TITLE" => Self::Title,
            "DESCRIPTION" => Self::Description,
            "PRIORITY" => Self::Priority,
            "SEVERITY" => Self::Severity,
            "STATUS" | "TARGET_STATUS" => Self::Status,
            "TYPE" | "ISSUE_TYPE" => Self::Type,
            _ => {
                return Err(PermissionError::invalid(format!(
                    "'{}' is not a mutable issue field",
                    raw.trim()
                )));
            }
        };
        Ok(field)
    }
}

/// Untyped mutation as it arrives from a form or another process.
///
/// Both parts are checked by [`Mutation::parse`]; nothing here is trusted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MutationRequest {
    pub field: String,
    #[serde(default)]
    pub new_value: Value,
}

impl MutationRequest {
    pub fn new<F: Into<String>, V: Into<Value>>(field: F, new_value: V) -> Self {
        Self {
            field: field.into(),
            new_value: new_value.into(),
        }
    }

    /// Decode a `{"field": ..., "newValue": ...}` payload.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| PermissionError::invalid(format!("malformed mutation request: {err}")))
    }
}

/// A mutation whose field and value are known to be well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Title(String),
    Description(String),
    Priority(Priority),
    Severity(Severity),
    Status(Status),
    Type(IssueType),
}

impl Mutation {
    #[must_use]
    pub fn field(&self) -> MutableField {
        match self {
            Self::Title(_) => MutableField::Title,
            Self::Description(_) => MutableField::Description,
            Self::Priority(_) => MutableField::Priority,
            Self::Severity(_) => MutableField::Severity,
            Self::Status(_) => MutableField::Status,
            Self::Type(_) => MutableField::Type,
        }
    }

    /// Decode an untyped request into a typed mutation.
    ///
    /// Only spelling is checked here; `options` matters for severity, whose
    /// accepted vocabulary it chooses. Value rules that apply to typed
    /// mutations too (blank titles, `URGENT`) are enforced by the policy.
    pub fn parse(request: &MutationRequest, options: &PolicyOptions) -> Result<Self> {
        let field: MutableField = request.field.parse()?;
        let raw = string_value(field, &request.new_value)?;
        let mutation = match field {
            MutableField::Title => Self::Title(raw.to_string()),
            MutableField::Description => Self::Description(raw.to_string()),
            MutableField::Priority => Self::Priority(raw.parse()?),
            MutableField::Severity => Self::Severity(parse_severity(raw, options)?),
            MutableField::Status => Self::Status(raw.parse()?),
            MutableField::Type => Self::Type(raw.parse()?),
        };
        Ok(mutation)
    }
}

fn string_value(field: MutableField, value: &Value) -> Result<&str> {
    value.as_str().ok_or_else(|| {
        PermissionError::invalid(format!("new value for '{field}' must be a string, got {value}"))
    })
}

fn parse_severity(raw: &str, options: &PolicyOptions) -> Result<Severity> {
    match raw.parse::<Severity>() {
        Ok(severity) => Ok(severity),
        Err(err) if options.accept_priority_vocabulary_for_severity => raw
            .parse::<Priority>()
            .ok()
            .and_then(Severity::from_priority_vocabulary)
            .ok_or(err),
        Err(err) => Err(err),
    }
}

/// Partial update as sent by the issue edit form; absent fields are untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<IssueType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl IssueUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mutations().is_empty()
    }

    /// Present fields in validation order.
    #[must_use]
    pub fn mutations(&self) -> Vec<Mutation> {
        let mut mutations = Vec::new();
        if let Some(title) = &self.title {
            mutations.push(Mutation::Title(title.clone()));
        }
        if let Some(description) = &self.description {
            mutations.push(Mutation::Description(description.clone()));
        }
        if let Some(priority) = self.priority {
            mutations.push(Mutation::Priority(priority));
        }
        if let Some(severity) = self.severity {
            mutations.push(Mutation::Severity(severity));
        }
        if let Some(issue_type) = self.issue_type {
            mutations.push(Mutation::Type(issue_type));
        }
        if let Some(status) = self.status {
            mutations.push(Mutation::Status(status));
        }
        mutations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(field: &str, value: Value) -> Result<Mutation> {
        Mutation::parse(&MutationRequest::new(field, value), &PolicyOptions::default())
    }

    #[test]
    fn parses_each_field() {
        assert_eq!(
            parse("title", Value::from("Login fails")).unwrap(),
            Mutation::Title("Login fails".to_string())
        );
        assert_eq!(
            parse("Status", Value::from("in_progress")).unwrap(),
            Mutation::Status(Status::InProgress)
        );
        assert_eq!(
            parse("targetStatus", Value::from("OPEN")).unwrap(),
            Mutation::Status(Status::Open)
        );
        assert_eq!(
            parse("type", Value::from("feature")).unwrap(),
            Mutation::Type(IssueType::Feature)
        );
        assert_eq!(
            parse("description", Value::from("")).unwrap(),
            Mutation::Description(String::new())
        );
    }

    #[test]
    fn rejects_unknown_field_and_bad_values() {
        assert!(matches!(
            parse("assignee", Value::from("9")),
            Err(PermissionError::InvalidRequest { .. })
        ));
        assert!(matches!(
            parse("status", Value::from(3)),
            Err(PermissionError::InvalidRequest { .. })
        ));
        assert!(matches!(
            parse("status", Value::Null),
            Err(PermissionError::InvalidRequest { .. })
        ));
        assert!(matches!(
            parse("severity", Value::from("HIGH")),
            Err(PermissionError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn urgent_priority_decodes() {
        assert_eq!(
            parse("priority", Value::from("urgent")).unwrap(),
            Mutation::Priority(Priority::Urgent)
        );
    }

    #[test]
    fn legacy_severity_vocabulary_is_opt_in() {
        let lenient = PolicyOptions::builder()
            .accept_priority_vocabulary_for_severity(true)
            .build();
        let request = MutationRequest::new("severity", "high");
        assert_eq!(
            Mutation::parse(&request, &lenient).unwrap(),
            Mutation::Severity(Severity::S2)
        );
        let urgent = MutationRequest::new("severity", "URGENT");
        assert!(Mutation::parse(&urgent, &lenient).is_err());
    }

    #[test]
    fn request_decodes_from_json() {
        let request = MutationRequest::from_json_str(r#"{"field":"status","newValue":"OPEN"}"#)
            .unwrap();
        assert_eq!(request, MutationRequest::new("status", "OPEN"));
        assert!(MutationRequest::from_json_str("{\"newValue\":1}").is_err());
    }

    #[test]
    fn update_lists_present_fields_in_order() {
        let update: IssueUpdate =
            serde_json::from_str(r#"{"status":"CLOSED","severity":"S1","title":"x"}"#).unwrap();
        let fields: Vec<_> = update.mutations().iter().map(Mutation::field).collect();
        assert_eq!(
            fields,
            vec![MutableField::Title, MutableField::Severity, MutableField::Status]
        );
        assert!(IssueUpdate::default().is_empty());
    }
}
