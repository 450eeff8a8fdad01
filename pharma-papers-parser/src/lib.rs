#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Pharma Papers Parser
//!
//! Extraction and classification pipeline for PubMed article records.
//!
//! This crate turns a PubMed EFetch XML record into a [`Paper`], then narrows the
//! paper's authors to those affiliated with commercial organizations. It is pure and
//! synchronous: it has no network dependencies and keeps no state between calls.
//!
//! ```
//! use pharma_papers_parser::{filter_non_academic_authors, parse_paper_from_xml};
//!
//! let xml = r#"<PubmedArticleSet>
//!   <PubmedArticle>
//!     <MedlineCitation>
//!       <PMID>11111111</PMID>
//!       <Article>
//!         <ArticleTitle>Kinase inhibitors in practice</ArticleTitle>
//!         <AuthorList>
//!           <Author>
//!             <LastName>Doe</LastName>
//!             <ForeName>Jane</ForeName>
//!             <AffiliationInfo><Affiliation>Acme Pharma Inc., Basel</Affiliation></AffiliationInfo>
//!           </Author>
//!         </AuthorList>
//!       </Article>
//!     </MedlineCitation>
//!   </PubmedArticle>
//! </PubmedArticleSet>"#;
//!
//! let mut paper = parse_paper_from_xml(xml, "11111111")?;
//! filter_non_academic_authors(&mut paper);
//! assert_eq!(paper.non_academic_authors[0].name, "Jane Doe");
//! assert_eq!(paper.company_affiliations, vec!["Acme Pharma Inc., Basel"]);
//! # Ok::<(), pharma_papers_parser::ParseError>(())
//! ```

pub mod classifier;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod models;
pub mod record;

// Re-export main types for convenience
pub use classifier::{
    ACADEMIC_MARKERS, AffiliationKind, NON_ACADEMIC_MARKERS, classify_affiliation,
    is_non_academic,
};
pub use error::{ParseError, Result};
pub use extractor::{extract_email, extract_paper, parse_paper_from_xml, parse_papers_from_xml};
pub use filter::filter_non_academic_authors;
pub use models::{Author, NO_TITLE, Paper, UNKNOWN_DATE};
