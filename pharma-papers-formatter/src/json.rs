//! JSON output

use pharma_papers_parser::Paper;

use crate::error::Result;

/// Serialize papers as a pretty-printed JSON array
pub fn papers_to_json(papers: &[Paper]) -> Result<String> {
    Ok(serde_json::to_string_pretty(papers)?)
}
