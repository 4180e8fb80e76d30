use crate::domain::{normalize_suburb, AddressSuggestion, Locality, SubmittedAddress};
use crate::outcome::{ErrorReason, ValidationResult};

pub const NON_DELIVERY_CATEGORY: &str = "Post Office Boxes";

pub const SUCCESS_MESSAGE: &str = "Address validated successfully";
pub const NO_DELIVERY_MESSAGE: &str = "No valid delivery addresses found";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error validating address. Please try again.";

pub fn is_delivery_eligible(locality: &Locality) -> bool {
    locality.category.as_deref() != Some(NON_DELIVERY_CATEGORY)
}

pub fn delivery_candidates(candidates: &[Locality]) -> Vec<&Locality> {
    candidates
        .iter()
        .filter(|locality| is_delivery_eligible(locality))
        .collect()
}

pub fn find_exact_match<'a>(
    candidates: &[&'a Locality],
    submitted: &SubmittedAddress,
) -> Option<&'a Locality> {
    let suburb = normalize_suburb(submitted.suburb());
    let state = submitted.state().as_str();
    let postcode = submitted.postcode().value();
    candidates.iter().copied().find(|locality| {
        locality.postcode == postcode
            && locality.state == state
            && normalize_suburb(&locality.location) == suburb
    })
}

pub fn suggestions_for(candidates: &[&Locality]) -> Vec<AddressSuggestion> {
    candidates
        .iter()
        .map(|locality| AddressSuggestion::from(*locality))
        .collect()
}

pub fn validate(candidates: &[Locality], submitted: &SubmittedAddress) -> ValidationResult {
    let delivery = delivery_candidates(candidates);
    if delivery.is_empty() {
        return ValidationResult::Error {
            reason: ErrorReason::NoDeliveryCandidates,
            message: NO_DELIVERY_MESSAGE.to_string(),
            suggestions: None,
        };
    }

    if find_exact_match(&delivery, submitted).is_some() {
        return ValidationResult::Success {
            message: SUCCESS_MESSAGE.to_string(),
        };
    }

    let postcode = submitted.postcode();
    let postcode_known = delivery
        .iter()
        .any(|locality| locality.postcode == postcode.value());
    let (reason, message) = if postcode_known {
        (
            ErrorReason::SuburbNotInPostcode,
            format!(
                "Suburb {} was not found. Did you mean one of these suburbs for postcode {}?",
                submitted.suburb(),
                postcode
            ),
        )
    } else {
        (
            ErrorReason::NoPostcodeMatch,
            format!(
                "No suburbs found for postcode {}. Did you mean one of these nearby suburbs?",
                postcode
            ),
        )
    };

    ValidationResult::Error {
        reason,
        message,
        suggestions: Some(suggestions_for(&delivery)),
    }
}

pub fn upstream_failure() -> ValidationResult {
    ValidationResult::Error {
        reason: ErrorReason::UpstreamFailure,
        message: UPSTREAM_FAILURE_MESSAGE.to_string(),
        suggestions: None,
    }
}
