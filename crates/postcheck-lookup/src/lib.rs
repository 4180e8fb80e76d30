pub mod error;
pub mod fixture;
pub mod http;
pub mod pipeline;
pub mod source;

pub use error::{LookupError, Result};
pub use fixture::FileLocalitySource;
pub use http::HttpLocalitySource;
pub use pipeline::{search_localities, validate_submission};
pub use source::{LocalityQuery, LocalitySource};
