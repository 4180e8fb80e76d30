use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Suburb must be at least 2 characters")]
    SuburbTooShort,
    #[error("Suburb must be less than 50 characters")]
    SuburbTooLong,
    #[error("Postcode must be 4 digits")]
    InvalidPostcodeLength,
    #[error("Postcode must be numeric")]
    NonNumericPostcode,
    #[error("Please select a valid state")]
    InvalidState,
}
