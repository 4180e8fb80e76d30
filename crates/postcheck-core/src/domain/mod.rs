pub mod address;
pub mod locality;
pub mod state;
pub mod suggestion;

pub use address::{normalize_suburb, Postcode, SubmittedAddress, MAX_SUBURB_LEN, MIN_SUBURB_LEN};
pub use locality::Locality;
pub use state::AustralianState;
pub use suggestion::AddressSuggestion;
