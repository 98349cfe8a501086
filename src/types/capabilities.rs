//! Aggregated permission results consumed by presentation code.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::issue::Status;

/// Whether a principal may claim (self-assign) an issue, and why not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClaimEligibility {
    Eligible,
    SignedOut,
    ReportedByYou,
    AssignedToYou,
    AlreadyAssigned,
}

impl ClaimEligibility {
    #[must_use]
    pub fn is_eligible(self) -> bool {
        self == Self::Eligible
    }

    /// Short explanation shown in place of the claim button.
    #[must_use]
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Self::Eligible => None,
            Self::SignedOut => Some("Sign in to claim issues"),
            Self::ReportedByYou => Some("You reported this"),
            Self::AssignedToYou => Some("Assigned to you"),
            Self::AlreadyAssigned => Some("Already assigned"),
        }
    }
}

/// Every decision the issue detail view needs, computed in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueCapabilities {
    pub edit_core_fields: bool,
    pub edit_severity: bool,
    pub edit_type: bool,
    pub change_status: bool,
    /// Options for the status control; always contains the current status.
    pub status_options: BTreeSet<Status>,
    pub comment: bool,
    pub delete_issue: bool,
    pub claim: ClaimEligibility,
}

impl IssueCapabilities {
    /// True when the edit button should be shown at all.
    #[must_use]
    pub fn can_edit_anything(&self) -> bool {
        self.edit_core_fields || self.edit_severity || self.edit_type || self.change_status
    }
}
