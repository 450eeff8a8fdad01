use std::result;

use thiserror::Error;

/// Error types for PubMed record extraction
#[derive(Error, Debug)]
pub enum ParseError {
    /// XML could not be deserialized into the record schema
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// The record carries no article body
    ///
    /// Raised for an EFetch response with no `PubmedArticle` element, or a
    /// `PubmedArticle` without a `MedlineCitation/Article`.
    #[error("Malformed record: no article data found for PMID {pmid}")]
    MalformedRecord { pmid: String },
}

pub type Result<T> = result::Result<T, ParseError>;
