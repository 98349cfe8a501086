//! Error taxonomy returned by the permission policy.

use thiserror::Error;

use crate::types::Status;

/// Message shown when the remote system rejects a request without saying why.
const DEFAULT_REMOTE_DENIAL: &str = "You are not allowed to perform this action.";

/// Reasons a mutation may not be attempted.
///
/// The `Display` output of every variant is suitable for showing directly to
/// the user. A local `Ok` is advisory only; the remote system of record has
/// the final word, and its rejections are folded into [`PermissionError::RemoteDenied`]
/// so callers can surface both the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PermissionError {
    #[error("Only the reporter, the assignee, or an admin can edit this issue's details.")]
    CoreFieldDenied,

    #[error("Only the reporter (or admin) can change severity.")]
    SeverityDenied,

    #[error("You are not allowed to change the status of this issue from {from} to {to}.")]
    StatusDenied { from: Status, to: Status },

    #[error("Only the reporter (or admin) can change the issue type.")]
    TypeDenied,

    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("{message}")]
    RemoteDenied { message: String },
}

impl PermissionError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Fold a rejection from the remote system into the local taxonomy.
    ///
    /// Returns `None` for statuses that are not authorization failures
    /// (anything other than 401 and 403).
    #[must_use]
    pub fn from_remote(status: u16, message: Option<&str>) -> Option<Self> {
        if status != 401 && status != 403 {
            return None;
        }
        let message = message
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(DEFAULT_REMOTE_DENIAL);
        Some(Self::RemoteDenied {
            message: message.to_string(),
        })
    }

    /// True for authorization failures, false for malformed requests.
    #[must_use]
    pub fn is_denial(&self) -> bool {
        !matches!(self, Self::InvalidRequest { .. })
    }
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, PermissionError>;
