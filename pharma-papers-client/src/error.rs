use std::result;

use pharma_papers_parser::ParseError;
use thiserror::Error;

/// Error types for E-utilities client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The fetched record could not be extracted
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid PMID format
    #[error("Invalid PMID format: {pmid}")]
    InvalidPmid { pmid: String },

    /// API rate limit exceeded
    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The search asked for more results than ESearch can return
    #[error("Search limit exceeded: requested {requested}, maximum is {maximum}")]
    SearchLimitExceeded { requested: usize, maximum: usize },
}

impl ClientError {
    /// Whether the error means the record itself had no article body
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, ClientError::Parse(ParseError::MalformedRecord { .. }))
    }
}

pub type Result<T> = result::Result<T, ClientError>;
