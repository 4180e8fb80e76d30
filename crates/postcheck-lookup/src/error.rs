use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("lookup unavailable: {0}")]
    Unavailable(String),
    #[error("API request failed with status {0}")]
    Status(u16),
    #[cfg(feature = "http")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "http")]
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, LookupError>;
