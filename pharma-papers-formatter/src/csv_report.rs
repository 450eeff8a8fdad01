//! CSV report of non-academic authors

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use pharma_papers_parser::Paper;
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::Result;

/// Column headers, in order
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Separator for multi-valued cells
pub const LIST_SEPARATOR: &str = "; ";

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    pubmed_id: &'a str,
    title: &'a str,
    publication_date: &'a str,
    non_academic_authors: String,
    company_affiliations: String,
    corresponding_author_email: &'a str,
}

impl<'a> From<&'a Paper> for ReportRow<'a> {
    fn from(paper: &'a Paper) -> Self {
        Self {
            pubmed_id: &paper.pubmed_id,
            title: &paper.title,
            publication_date: &paper.publication_date,
            non_academic_authors: paper.non_academic_author_names().join(LIST_SEPARATOR),
            company_affiliations: paper.company_affiliations.join(LIST_SEPARATOR),
            corresponding_author_email: paper
                .corresponding_author_email
                .as_deref()
                .unwrap_or_default(),
        }
    }
}

/// Write the report to any writer
///
/// The header row is always written, even when `papers` is empty. Company
/// affiliations are joined as they are, without deduplication.
pub fn write_csv<W: Write>(papers: &[Paper], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for paper in papers {
        wtr.serialize(ReportRow::from(paper))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the report to a file, replacing any existing content
#[instrument(skip(papers), fields(papers = papers.len(), path = %path.display()))]
pub fn write_csv_file(papers: &[Paper], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(papers, BufWriter::new(file))?;

    info!("CSV report written");
    Ok(())
}
