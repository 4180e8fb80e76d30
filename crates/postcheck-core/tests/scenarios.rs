use postcheck_core::{
    extract_localities, rules, AddressSuggestion, ErrorReason, SubmittedAddress,
    ValidationResult,
};
use serde_json::{json, Value};

fn validate_body(body: Value, suburb: &str, postcode: &str, state: &str) -> ValidationResult {
    let submitted = SubmittedAddress::new(suburb, postcode, state).expect("address");
    rules::validate(&extract_localities(&body), &submitted)
}

#[test]
fn sydney_delivery_area_validates() {
    let body = json!({ "localities": { "locality": [
        { "location": "SYDNEY", "state": "NSW", "postcode": 2000, "category": "Delivery Area" }
    ] } });
    let result = validate_body(body, "Sydney", "2000", "NSW");
    assert_eq!(
        result,
        ValidationResult::Success {
            message: "Address validated successfully".to_string()
        }
    );
}

#[test]
fn north_sydney_is_offered_when_postcode_is_unknown() {
    let body = json!({ "localities": { "locality": [
        { "location": "NORTH SYDNEY", "state": "NSW", "postcode": 2060, "category": "Delivery Area" }
    ] } });
    let result = validate_body(body, "Sydney", "2000", "NSW");
    match result {
        ValidationResult::Error {
            reason,
            message,
            suggestions,
        } => {
            assert_eq!(reason, ErrorReason::NoPostcodeMatch);
            assert!(message.contains("2000"));
            assert!(message.contains("Did you mean"));
            assert_eq!(
                suggestions,
                Some(vec![AddressSuggestion {
                    suburb: "NORTH SYDNEY".to_string(),
                    postcode: 2060,
                    state: "NSW".to_string(),
                }])
            );
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn po_box_postcode_never_validates() {
    let body = json!({ "localities": { "locality": [
        { "location": "SYDNEY", "state": "NSW", "postcode": 2000, "category": "Post Office Boxes" },
        { "location": "SYDNEY", "state": "NSW", "postcode": 2001, "category": "Delivery Area" }
    ] } });
    let result = validate_body(body, "Sydney", "2000", "NSW");
    assert!(!result.is_success());
    assert_eq!(
        result.suggestions(),
        &[AddressSuggestion {
            suburb: "SYDNEY".to_string(),
            postcode: 2001,
            state: "NSW".to_string(),
        }]
    );
}

#[test]
fn single_object_response_with_string_postcode_validates() {
    let body = json!({ "localities": { "locality": {
        "category": "Delivery Area",
        "id": 4,
        "latitude": -33.8688,
        "location": "SYDNEY",
        "longitude": 151.2093,
        "postcode": "2000",
        "state": "NSW"
    } } });
    assert!(validate_body(body, "  sydney ", "2000", "NSW").is_success());
}

#[test]
fn empty_response_has_no_delivery_candidates() {
    let result = validate_body(json!({ "localities": "" }), "Atlantis", "9999", "QLD");
    assert_eq!(result.reason(), Some(ErrorReason::NoDeliveryCandidates));
    assert!(result.suggestions().is_empty());
}

#[test]
fn picking_a_suggestion_revalidates_successfully() {
    let body = json!({ "localities": { "locality": [
        { "location": "NORTH SYDNEY", "state": "NSW", "postcode": 2060, "category": "Delivery Area" },
        { "location": "SYDNEY", "state": "NSW", "postcode": 2000, "category": "Delivery Area" }
    ] } });
    let candidates = extract_localities(&body);
    let submitted = SubmittedAddress::new("Sydney", "2060", "NSW").expect("address");
    let first = rules::validate(&candidates, &submitted);
    assert_eq!(first.reason(), Some(ErrorReason::SuburbNotInPostcode));

    let picked = SubmittedAddress::from_suggestion(&first.suggestions()[1]).expect("pick");
    assert!(rules::validate(&candidates, &picked).is_success());
}
