//! Parsing of multi-record EFetch responses

use super::{deserialize_article_set, extract_paper};
use crate::error::Result;
use crate::models::Paper;
use tracing::{info, instrument, warn};

/// Parse every `PubmedArticle` in an EFetch response
///
/// Each paper is keyed by the record's own `MedlineCitation/PMID`. Records without a
/// PMID or without an article body are logged and skipped so one bad record does not
/// lose the rest of the response.
///
/// # Errors
///
/// Returns [`ParseError::XmlError`](crate::ParseError::XmlError) only when the
/// response as a whole cannot be deserialized.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_papers_from_xml(xml: &str) -> Result<Vec<Paper>> {
    if xml.trim().is_empty() {
        return Ok(Vec::new());
    }

    let article_set = deserialize_article_set(xml)?;
    let total = article_set.articles.len();

    let papers: Vec<Paper> = article_set
        .articles
        .into_iter()
        .filter_map(|record| {
            let Some(pmid) = record.pmid().map(str::to_string) else {
                warn!("Record has no PMID, skipping");
                return None;
            };

            match extract_paper(record, &pmid) {
                Ok(paper) => Some(paper),
                Err(e) => {
                    warn!(pmid = %pmid, error = %e, "Failed to extract record, skipping");
                    None
                }
            }
        })
        .collect();

    info!(records = total, parsed = papers.len(), "Batch extraction completed");

    Ok(papers)
}
