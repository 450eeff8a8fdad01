//! Metadata extraction from PubMed EFetch XML
//!
//! - `preprocessing` - XML cleaning before deserialization
//! - `batch` - Multi-record responses keyed by each record's own PMID
//!
//! The main entry point is [`parse_paper_from_xml`], which takes the EFetch response
//! for one identifier and returns a fully populated [`Paper`]. Missing fields never
//! fail extraction; they fall back to the defaults documented on each helper.

mod batch;
mod preprocessing;

pub use batch::parse_papers_from_xml;

use crate::error::{ParseError, Result};
use crate::models::{Author, NO_TITLE, Paper, UNKNOWN_DATE};
use crate::record::{AuthorRecord, PubDate, PubmedArticleRecord, PubmedArticleSet};
use preprocessing::strip_text_field_markup;
use quick_xml::de::from_str;
use tracing::{debug, instrument, trace};

/// Parse the EFetch response for a single identifier
///
/// The first `PubmedArticle` in the response is used and the resulting [`Paper`] is
/// keyed by `pubmed_id`, the identifier that was requested.
///
/// # Errors
///
/// * [`ParseError::XmlError`] - the XML does not match the record schema
/// * [`ParseError::MalformedRecord`] - the response holds no article body
#[instrument(skip(xml), fields(pmid = %pubmed_id, xml_size = xml.len()))]
pub fn parse_paper_from_xml(xml: &str, pubmed_id: &str) -> Result<Paper> {
    if xml.trim().is_empty() {
        return Err(ParseError::MalformedRecord {
            pmid: pubmed_id.to_string(),
        });
    }

    let article_set = deserialize_article_set(xml)?;

    let record = article_set
        .articles
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::MalformedRecord {
            pmid: pubmed_id.to_string(),
        })?;

    extract_paper(record, pubmed_id)
}

pub(crate) fn deserialize_article_set(xml: &str) -> Result<PubmedArticleSet> {
    // Child elements inside titles and affiliations break quick-xml's serde mapping
    let cleaned_xml = strip_text_field_markup(xml);

    from_str(&cleaned_xml)
        .map_err(|e| ParseError::XmlError(format!("Failed to deserialize XML: {}", e)))
}

/// Map one deserialized record onto a [`Paper`]
///
/// * Title: `ArticleTitle`, else [`NO_TITLE`]
/// * Publication date: `PubDate/Year`, else `PubDate/MedlineDate`, else [`UNKNOWN_DATE`]
/// * Authors: kept only when the name or the affiliation is non-empty
///
/// # Errors
///
/// Returns [`ParseError::MalformedRecord`] when the record has no
/// `MedlineCitation/Article`.
pub fn extract_paper(record: PubmedArticleRecord, pubmed_id: &str) -> Result<Paper> {
    let article = record
        .medline_citation
        .and_then(|m| m.article)
        .ok_or_else(|| ParseError::MalformedRecord {
            pmid: pubmed_id.to_string(),
        })?;

    let publication_date = article
        .pub_date()
        .and_then(resolve_pub_date)
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    let title = non_empty(article.article_title).unwrap_or_else(|| NO_TITLE.to_string());

    let mut paper = Paper::new(pubmed_id, title, publication_date);

    let author_records = article.author_list.map(|l| l.authors).unwrap_or_default();
    for record in author_records {
        match extract_author(record) {
            Some(author) => paper.push_author(author),
            None => trace!("Dropping author entry with no name and no affiliation"),
        }
    }

    debug!(
        authors = paper.authors.len(),
        has_email = paper.corresponding_author_email.is_some(),
        "Extracted paper"
    );

    Ok(paper)
}

/// Find the email in an affiliation string
///
/// Returns the first whitespace-delimited token containing `@`, as is. Trailing
/// punctuation stays attached and the address is not validated.
///
/// # Example
///
/// ```
/// use pharma_papers_parser::extract_email;
///
/// let email = extract_email("Acme Pharma Inc., contact: j.doe@acmepharma.com");
/// assert_eq!(email.as_deref(), Some("j.doe@acmepharma.com"));
/// assert_eq!(extract_email("Harvard University"), None);
/// ```
pub fn extract_email(affiliation: &str) -> Option<String> {
    affiliation
        .split_whitespace()
        .find(|part| part.contains('@'))
        .map(str::to_string)
}

fn extract_author(record: AuthorRecord) -> Option<Author> {
    let name = format!(
        "{} {}",
        record.fore_name.as_deref().unwrap_or_default(),
        record.last_name.as_deref().unwrap_or_default()
    )
    .trim()
    .to_string();

    // First AffiliationInfo that carries an Affiliation element
    let affiliation = record
        .affiliation_info
        .into_iter()
        .find_map(|info| info.affiliation)
        .unwrap_or_default();

    if name.is_empty() && affiliation.is_empty() {
        return None;
    }

    let email = extract_email(&affiliation);

    Some(Author {
        name,
        affiliation: (!affiliation.is_empty()).then_some(affiliation),
        email,
    })
}

fn resolve_pub_date(pub_date: &PubDate) -> Option<String> {
    non_empty(pub_date.year.clone()).or_else(|| non_empty(pub_date.medline_date.clone()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
