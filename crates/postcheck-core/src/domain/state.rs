use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AustralianState {
    Nsw,
    Vic,
    Qld,
    Wa,
    Sa,
    Tas,
    Nt,
    Act,
}

impl AustralianState {
    pub const ALL: [AustralianState; 8] = [
        AustralianState::Nsw,
        AustralianState::Vic,
        AustralianState::Qld,
        AustralianState::Wa,
        AustralianState::Sa,
        AustralianState::Tas,
        AustralianState::Nt,
        AustralianState::Act,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AustralianState::Nsw => "NSW",
            AustralianState::Vic => "VIC",
            AustralianState::Qld => "QLD",
            AustralianState::Wa => "WA",
            AustralianState::Sa => "SA",
            AustralianState::Tas => "TAS",
            AustralianState::Nt => "NT",
            AustralianState::Act => "ACT",
        }
    }
}

impl FromStr for AustralianState {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        AustralianState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or(CoreError::InvalidState)
    }
}

impl fmt::Display for AustralianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
