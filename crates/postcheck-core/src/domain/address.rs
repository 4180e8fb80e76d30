use crate::domain::state::AustralianState;
use crate::domain::suggestion::AddressSuggestion;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_SUBURB_LEN: usize = 2;
pub const MAX_SUBURB_LEN: usize = 50;
const POSTCODE_LEN: usize = 4;

// Text form keeps leading zeros (`0800`); matching uses `value()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Postcode(String);

impl Postcode {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() != POSTCODE_LEN {
            return Err(CoreError::InvalidPostcodeLength);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::NonNumericPostcode);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_value(value: u32) -> Result<Self, CoreError> {
        Self::new(&format!("{value:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> u32 {
        self.0.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl TryFrom<String> for Postcode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Postcode> for String {
    fn from(value: Postcode) -> Self {
        value.0
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedAddress {
    suburb: String,
    postcode: Postcode,
    state: AustralianState,
}

impl SubmittedAddress {
    pub fn new(suburb: &str, postcode: &str, state: &str) -> Result<Self, CoreError> {
        let suburb = validate_suburb(suburb)?;
        let postcode = Postcode::new(postcode)?;
        let state = state.parse::<AustralianState>()?;
        Ok(Self {
            suburb,
            postcode,
            state,
        })
    }

    pub fn from_parts(
        suburb: &str,
        postcode: Postcode,
        state: AustralianState,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            suburb: validate_suburb(suburb)?,
            postcode,
            state,
        })
    }

    pub fn from_suggestion(suggestion: &AddressSuggestion) -> Result<Self, CoreError> {
        let postcode = Postcode::from_value(suggestion.postcode)?;
        let state = suggestion.state.parse::<AustralianState>()?;
        Self::from_parts(&suggestion.suburb, postcode, state)
    }

    pub fn suburb(&self) -> &str {
        &self.suburb
    }

    pub fn postcode(&self) -> &Postcode {
        &self.postcode
    }

    pub fn state(&self) -> AustralianState {
        self.state
    }
}

fn validate_suburb(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len < MIN_SUBURB_LEN {
        return Err(CoreError::SuburbTooShort);
    }
    if len > MAX_SUBURB_LEN {
        return Err(CoreError::SuburbTooLong);
    }
    Ok(trimmed.to_string())
}

pub fn normalize_suburb(value: &str) -> String {
    value.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::{normalize_suburb, Postcode, SubmittedAddress};
    use crate::domain::{AddressSuggestion, AustralianState};
    use crate::error::CoreError;

    #[test]
    fn postcode_keeps_leading_zero() {
        let postcode = Postcode::new("0800").unwrap();
        assert_eq!(postcode.as_str(), "0800");
        assert_eq!(postcode.value(), 800);
    }

    #[test]
    fn postcode_rejects_wrong_length_and_letters() {
        assert_eq!(Postcode::new("200"), Err(CoreError::InvalidPostcodeLength));
        assert_eq!(Postcode::new("20000"), Err(CoreError::InvalidPostcodeLength));
        assert_eq!(Postcode::new("20a0"), Err(CoreError::NonNumericPostcode));
    }

    #[test]
    fn submitted_address_applies_form_rules() {
        let address = SubmittedAddress::new(" Sydney ", "2000", "nsw").unwrap();
        assert_eq!(address.suburb(), "Sydney");
        assert_eq!(address.postcode().value(), 2000);
        assert_eq!(address.state(), AustralianState::Nsw);

        assert_eq!(
            SubmittedAddress::new("S", "2000", "NSW"),
            Err(CoreError::SuburbTooShort)
        );
        let long = "A".repeat(51);
        assert_eq!(
            SubmittedAddress::new(&long, "2000", "NSW"),
            Err(CoreError::SuburbTooLong)
        );
        assert_eq!(
            SubmittedAddress::new("Sydney", "2000", "XX"),
            Err(CoreError::InvalidState)
        );
    }

    #[test]
    fn from_suggestion_pads_postcode() {
        let suggestion = AddressSuggestion {
            suburb: "DARWIN".to_string(),
            postcode: 800,
            state: "NT".to_string(),
        };
        let address = SubmittedAddress::from_suggestion(&suggestion).unwrap();
        assert_eq!(address.postcode().as_str(), "0800");
        assert_eq!(address.state(), AustralianState::Nt);
    }

    #[test]
    fn from_suggestion_rejects_out_of_range_postcode() {
        let suggestion = AddressSuggestion {
            suburb: "NOWHERE".to_string(),
            postcode: 12345,
            state: "NSW".to_string(),
        };
        assert_eq!(
            SubmittedAddress::from_suggestion(&suggestion),
            Err(CoreError::InvalidPostcodeLength)
        );
    }

    #[test]
    fn normalize_suburb_trims_and_uppercases() {
        assert_eq!(normalize_suburb("  north Sydney "), "NORTH SYDNEY");
    }
}
