//! Error Types
//!
//! Errors surfaced by the API client and the profile form. They are kept
//! `Clone + PartialEq` because they end up stored in reactive signals.

use thiserror::Error;

use crate::state::profile::ProfileField;

/// Failure of a request against the EventHub API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// True for 401/403, where a retry with the same token cannot succeed
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Failure reported by a profile saver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("Profile update rejected: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Why a profile submission did not complete
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A save for this form is already running
    #[error("A save is already in progress")]
    InFlight,

    /// Required fields are blank
    #[error("Please fill in: {}", field_labels(.fields))]
    Validation { fields: Vec<ProfileField> },

    #[error(transparent)]
    Save(#[from] SaveError),

    /// The form's state was dropped while the save was running
    #[error("The profile form is no longer available")]
    Detached,
}

fn field_labels(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
