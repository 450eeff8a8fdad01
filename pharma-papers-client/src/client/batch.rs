//! Fetching many identifiers where each one may fail on its own

use pharma_papers_parser::Paper;
use tracing::{info, instrument, warn};

use super::PapersClient;
use crate::error::ClientError;

/// A failed identifier and why it failed
#[derive(Debug)]
pub struct FetchFailure {
    pub pmid: String,
    pub error: ClientError,
}

/// Outcome of fetching a list of identifiers
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Extracted papers, in request order
    pub papers: Vec<Paper>,
    pub failures: Vec<FetchFailure>,
}

impl BatchReport {
    /// Number of identifiers attempted
    pub fn total(&self) -> usize {
        self.papers.len() + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// PMIDs that failed, in request order
    pub fn failed_pmids(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.pmid.as_str()).collect()
    }
}

impl PapersClient {
    /// Fetch each identifier in turn
    ///
    /// A failure for one identifier is recorded in the report and does not stop the
    /// others. Requests are sent one at a time.
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_papers<S: AsRef<str>>(&self, pmids: &[S]) -> BatchReport {
        let mut report = BatchReport::default();

        for pmid in pmids {
            let pmid = pmid.as_ref();
            match self.fetch_paper(pmid).await {
                Ok(paper) => report.papers.push(paper),
                Err(error) => {
                    warn!(pmid = %pmid, error = %error, "Failed to fetch paper, skipping");
                    report.failures.push(FetchFailure {
                        pmid: pmid.to_string(),
                        error,
                    });
                }
            }
        }

        info!(
            requested = report.total(),
            fetched = report.papers.len(),
            failed = report.failures.len(),
            "Batch fetch completed"
        );

        report
    }
}
