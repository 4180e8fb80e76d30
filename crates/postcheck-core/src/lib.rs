pub mod domain;
pub mod error;
pub mod normalize;
pub mod outcome;
pub mod rules;

pub use domain::*;
pub use error::CoreError;
pub use normalize::{extract_localities, normalize, RawLocalities, RawLocalityRecord};
pub use outcome::{ErrorReason, ValidationResult, SUCCESS_DISPLAY_DURATION};
pub use rules::*;
