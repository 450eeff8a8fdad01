//! Schema types for PubMed EFetch XML
//!
//! Only the elements the extractor reads are modelled; everything else in a record is
//! ignored during deserialization. Every field is optional because PubMed omits
//! elements freely.

use serde::Deserialize;

/// Root of an EFetch response
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "PubmedArticleSet")]
pub struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleRecord>,
}

/// One `PubmedArticle` element
#[derive(Debug, Default, Deserialize)]
pub struct PubmedArticleRecord {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: Option<MedlineCitation>,
}

impl PubmedArticleRecord {
    /// The record's own PMID, if present and non-empty
    pub fn pmid(&self) -> Option<&str> {
        self.medline_citation
            .as_ref()
            .and_then(|m| m.pmid.as_ref())
            .map(|p| p.value.trim())
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MedlineCitation {
    #[serde(rename = "PMID")]
    pub pmid: Option<Pmid>,
    #[serde(rename = "Article")]
    pub article: Option<ArticleRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Pmid {
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleRecord {
    #[serde(rename = "ArticleTitle")]
    pub article_title: Option<String>,
    #[serde(rename = "Journal")]
    pub journal: Option<Journal>,
    #[serde(rename = "AuthorList")]
    pub author_list: Option<AuthorList>,
}

impl ArticleRecord {
    /// `Journal/JournalIssue/PubDate`, if the record has one
    pub fn pub_date(&self) -> Option<&PubDate> {
        self.journal
            .as_ref()
            .and_then(|j| j.journal_issue.as_ref())
            .and_then(|ji| ji.pub_date.as_ref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Journal {
    #[serde(rename = "JournalIssue")]
    pub journal_issue: Option<JournalIssue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JournalIssue {
    #[serde(rename = "PubDate")]
    pub pub_date: Option<PubDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PubDate {
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "MedlineDate")]
    pub medline_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthorList {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthorRecord {
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "ForeName")]
    pub fore_name: Option<String>,
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AffiliationInfo {
    #[serde(rename = "Affiliation")]
    pub affiliation: Option<String>,
}
