use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    pub location: String,
    pub state: String,
    pub postcode: u32,
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Locality {
    pub fn new(location: &str, state: &str, postcode: u32, category: Option<&str>) -> Self {
        Self {
            location: location.to_string(),
            state: state.to_string(),
            postcode,
            category: category.map(str::to_string),
            id: None,
            latitude: None,
            longitude: None,
        }
    }
}
