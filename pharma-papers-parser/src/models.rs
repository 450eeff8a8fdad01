//! Entity model for extracted papers

use serde::{Deserialize, Serialize};

/// Title used when a record has no usable `ArticleTitle`
pub const NO_TITLE: &str = "No Title";

/// Publication date used when a record has neither `Year` nor `MedlineDate`
pub const UNKNOWN_DATE: &str = "Unknown";

/// An author as listed on a PubMed record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Fore name and last name joined by a space; may be empty
    pub name: String,
    /// First listed affiliation, raw free text
    pub affiliation: Option<String>,
    /// Email found in the affiliation text, if any
    pub email: Option<String>,
}

impl Author {
    /// Affiliation text, or an empty string when the author has none
    pub fn affiliation_text(&self) -> &str {
        self.affiliation.as_deref().unwrap_or_default()
    }
}

/// A paper extracted from one PubMed record
///
/// Extraction fills `authors` and sets `non_academic_authors` to the same list, with
/// `company_affiliations` index-aligned to it. The author filter later narrows both
/// lists to the non-academic subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub pubmed_id: String,
    pub title: String,
    pub publication_date: String,
    /// Every author kept at extraction time, in document order
    pub authors: Vec<Author>,
    pub non_academic_authors: Vec<Author>,
    pub company_affiliations: Vec<String>,
    /// First email found while walking the author list
    pub corresponding_author_email: Option<String>,
}

impl Paper {
    /// Create a paper with no authors
    pub fn new(
        pubmed_id: impl Into<String>,
        title: impl Into<String>,
        publication_date: impl Into<String>,
    ) -> Self {
        Self {
            pubmed_id: pubmed_id.into(),
            title: title.into(),
            publication_date: publication_date.into(),
            authors: Vec::new(),
            non_academic_authors: Vec::new(),
            company_affiliations: Vec::new(),
            corresponding_author_email: None,
        }
    }

    /// Append an author, keeping `company_affiliations` aligned with `authors`
    ///
    /// The first email seen becomes the corresponding author email and is never
    /// replaced afterwards.
    pub fn push_author(&mut self, author: Author) {
        if self.corresponding_author_email.is_none() {
            self.corresponding_author_email = author.email.clone();
        }
        self.company_affiliations
            .push(author.affiliation_text().to_string());
        self.non_academic_authors.push(author.clone());
        self.authors.push(author);
    }

    /// Names of the non-academic authors, in order
    pub fn non_academic_author_names(&self) -> Vec<&str> {
        self.non_academic_authors
            .iter()
            .map(|a| a.name.as_str())
            .collect()
    }
}
