use crate::domain::Locality;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLocalityRecord {
    pub location: Option<Value>,
    pub state: Option<Value>,
    pub postcode: Option<Value>,
    pub category: Option<Value>,
    pub id: Option<Value>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawLocalities {
    Many(Vec<RawLocalityRecord>),
    One(RawLocalityRecord),
}

impl RawLocalities {
    // Non-object list entries are dropped rather than failing the list.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::Many(
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .filter_map(|item| RawLocalityRecord::deserialize(item).ok())
                    .collect(),
            )),
            Value::Object(_) => RawLocalityRecord::deserialize(value).ok().map(Self::One),
            _ => None,
        }
    }

    pub fn into_records(self) -> Vec<RawLocalityRecord> {
        match self {
            Self::Many(records) => records,
            Self::One(record) => vec![record],
        }
    }
}

pub fn normalize(raw: Option<RawLocalities>) -> Vec<Locality> {
    raw.map(RawLocalities::into_records)
        .unwrap_or_default()
        .into_iter()
        .map(normalize_record)
        .collect()
}

/// The API sends `"localities": ""` for no results; any envelope without
/// `localities.locality` normalizes to an empty list.
pub fn extract_localities(body: &Value) -> Vec<Locality> {
    let raw = body
        .get("localities")
        .and_then(|localities| localities.get("locality"))
        .and_then(RawLocalities::from_value);
    normalize(raw)
}

fn normalize_record(record: RawLocalityRecord) -> Locality {
    Locality {
        location: coerce_text(record.location.as_ref()).unwrap_or_default(),
        state: coerce_text(record.state.as_ref()).unwrap_or_default(),
        postcode: record
            .postcode
            .as_ref()
            .and_then(coerce_integer)
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or(0),
        category: coerce_text(record.category.as_ref()),
        id: record.id.as_ref().and_then(coerce_integer),
        latitude: record
            .latitude
            .as_ref()
            .map(|value| coerce_float(value).unwrap_or(0.0)),
        longitude: record
            .longitude
            .as_ref()
            .map(|value| coerce_float(value).unwrap_or(0.0)),
    }
}

fn coerce_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(truncate_float)),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(truncate_float))
        }
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|value| value.is_finite())
}

fn truncate_float(value: f64) -> Option<i64> {
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_localities, normalize, RawLocalities};
    use crate::domain::Locality;
    use serde_json::json;

    fn body(locality: serde_json::Value) -> serde_json::Value {
        json!({ "localities": { "locality": locality } })
    }

    #[test]
    fn wraps_single_object_into_list() {
        let localities = extract_localities(&body(json!({
            "location": "SYDNEY",
            "state": "NSW",
            "postcode": 2000,
            "category": "Delivery Area"
        })));
        assert_eq!(
            localities,
            vec![Locality::new("SYDNEY", "NSW", 2000, Some("Delivery Area"))]
        );
    }

    #[test]
    fn missing_or_null_payload_is_empty() {
        assert!(normalize(None).is_empty());
        assert!(extract_localities(&body(json!(null))).is_empty());
        assert!(extract_localities(&json!({ "localities": "" })).is_empty());
        assert!(extract_localities(&json!({})).is_empty());
    }

    #[test]
    fn coerces_string_postcodes() {
        let localities = extract_localities(&body(json!([
            { "location": "SYDNEY", "state": "NSW", "postcode": "2000" },
            { "location": "DARWIN", "state": "NT", "postcode": " 0800 " },
            { "location": "ODD", "state": "NSW", "postcode": "2000.0" }
        ])));
        let postcodes: Vec<u32> = localities.iter().map(|l| l.postcode).collect();
        assert_eq!(postcodes, vec![2000, 800, 2000]);
    }

    #[test]
    fn malformed_fields_degrade_to_defaults() {
        let localities = extract_localities(&body(json!([
            { "postcode": "abc", "latitude": "north", "longitude": -33.86 },
            { "location": "BAD", "state": "NSW", "postcode": -5, "category": null },
            { "location": "GOOD", "state": "VIC", "postcode": 3000, "category": "Delivery Area" }
        ])));
        assert_eq!(localities.len(), 3);

        let first = &localities[0];
        assert_eq!(first.location, "");
        assert_eq!(first.state, "");
        assert_eq!(first.postcode, 0);
        assert_eq!(first.category, None);
        assert_eq!(first.latitude, Some(0.0));
        assert_eq!(first.longitude, Some(-33.86));

        assert_eq!(localities[1].postcode, 0);
        assert_eq!(localities[1].category, None);
        assert_eq!(localities[2].postcode, 3000);
    }

    #[test]
    fn non_object_entries_are_dropped() {
        let localities = extract_localities(&body(json!([
            "garbage",
            42,
            { "location": "HOBART", "state": "TAS", "postcode": 7000 }
        ])));
        assert_eq!(localities.len(), 1);
        assert_eq!(localities[0].location, "HOBART");
    }

    #[test]
    fn carries_id_and_coordinates() {
        let localities = extract_localities(&body(json!({
            "id": "345",
            "location": "PERTH",
            "state": "WA",
            "postcode": 6000,
            "latitude": "-31.95",
            "longitude": 115.86
        })));
        assert_eq!(localities[0].id, Some(345));
        assert_eq!(localities[0].latitude, Some(-31.95));
        assert_eq!(localities[0].longitude, Some(115.86));
    }

    #[test]
    fn serde_accepts_object_or_list() {
        let one: RawLocalities =
            serde_json::from_value(json!({ "location": "SYDNEY" })).unwrap();
        assert!(matches!(one, RawLocalities::One(_)));
        let many: RawLocalities =
            serde_json::from_value(json!([{ "location": "SYDNEY" }])).unwrap();
        assert!(matches!(many, RawLocalities::Many(ref records) if records.len() == 1));
        assert_eq!(normalize(Some(many)).len(), 1);
    }

    #[test]
    fn normalizing_normalized_output_is_a_no_op() {
        let first = extract_localities(&body(json!([
            { "id": 1, "location": "SYDNEY", "state": "NSW", "postcode": "2000", "category": "Delivery Area", "latitude": -33.86, "longitude": 151.2 },
            { "location": "SYDNEY", "state": "NSW", "postcode": 2001, "category": "Post Office Boxes" },
            { "location": "NOWHERE", "postcode": "n/a" }
        ])));
        let reencoded = serde_json::to_value(&first).unwrap();
        let second = extract_localities(&body(reencoded));
        assert_eq!(first, second);
    }
}
