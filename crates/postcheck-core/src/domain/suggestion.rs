use crate::domain::locality::Locality;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    pub suburb: String,
    pub postcode: u32,
    pub state: String,
}

impl From<&Locality> for AddressSuggestion {
    fn from(locality: &Locality) -> Self {
        Self {
            suburb: locality.location.clone(),
            postcode: locality.postcode,
            state: locality.state.clone(),
        }
    }
}
