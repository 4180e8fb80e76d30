use crate::Result;
use postcheck_core::{AustralianState, SubmittedAddress};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityQuery {
    pub q: String,
    pub state: Option<AustralianState>,
}

impl LocalityQuery {
    pub fn new(q: &str, state: Option<AustralianState>) -> Self {
        Self {
            q: q.trim().to_string(),
            state,
        }
    }

    pub fn for_address(address: &SubmittedAddress) -> Self {
        Self::new(address.suburb(), Some(address.state()))
    }
}

pub trait LocalitySource {
    fn source_name(&self) -> &'static str;
    fn search(&self, query: &LocalityQuery) -> Result<Value>;
}
