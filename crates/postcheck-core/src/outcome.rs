use crate::domain::AddressSuggestion;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const SUCCESS_DISPLAY_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReason {
    NoDeliveryCandidates,
    SuburbNotInPostcode,
    NoPostcodeMatch,
    UpstreamFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationResult {
    Success {
        message: String,
    },
    Error {
        reason: ErrorReason,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suggestions: Option<Vec<AddressSuggestion>>,
    },
}

impl ValidationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Error { message, .. } => message,
        }
    }

    pub fn reason(&self) -> Option<ErrorReason> {
        match self {
            Self::Success { .. } => None,
            Self::Error { reason, .. } => Some(*reason),
        }
    }

    pub fn suggestions(&self) -> &[AddressSuggestion] {
        match self {
            Self::Error {
                suggestions: Some(suggestions),
                ..
            } => suggestions,
            _ => &[],
        }
    }
}
