use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use pharma_papers_client::PapersClient;
use pharma_papers_formatter::{papers_to_json, render_console, write_csv_file};
use pharma_papers_parser::Paper;
use serde::Serialize;
use tracing::{debug, error, info};

#[derive(Args, Debug)]
pub struct Fetch {
    /// PubMed search query
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// CSV filename to write output
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Maximum number of PubMed IDs to fetch
    #[arg(short = 'n', long, default_value = "10")]
    pub max_results: usize,

    /// Output format when no CSV file is given
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Only report papers with at least one non-academic author
    #[arg(long)]
    pub non_academic_only: bool,

    /// Path to save failed PubMed IDs as JSON (if not specified, failures are logged only)
    #[arg(long)]
    pub failed_output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per paper
    Console,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Debug, Serialize)]
struct FailedPmid {
    pmid: String,
    reason: String,
}

impl Fetch {
    pub async fn execute(&self, client: &PapersClient) -> Result<()> {
        debug!(query = %self.query, "Fetching results for query");

        let pmids = client
            .search_ids(&self.query, self.max_results)
            .await
            .context("PubMed search failed")?;
        info!(count = pmids.len(), "Search completed");

        let (papers, failed) = self.fetch_all(client, &pmids).await?;

        if let Some(ref path) = self.file {
            write_csv_file(&papers, path)
                .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
            println!("Saved results to {}", path.display());
        } else {
            let output = self.render(&papers)?;
            if !output.is_empty() {
                println!("{}", output);
            }
        }

        self.report_failures(&failed).await;

        Ok(())
    }

    async fn fetch_all(
        &self,
        client: &PapersClient,
        pmids: &[String],
    ) -> Result<(Vec<Paper>, Vec<FailedPmid>)> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .context("Failed to set progress bar style")?,
        );
        pb.set_message(format!("Fetching {} papers", pmids.len()));
        pb.enable_steady_tick(Duration::from_millis(120));

        let report = client.fetch_papers(pmids).await;
        pb.finish_and_clear();

        let papers: Vec<Paper> = report
            .papers
            .into_iter()
            .map(Paper::into_filtered)
            .inspect(|paper| {
                debug!(
                    pmid = %paper.pubmed_id,
                    non_academic = paper.non_academic_authors.len(),
                    "Processed"
                );
            })
            .filter(|paper| self.keep(paper))
            .collect();

        let failed: Vec<FailedPmid> = report
            .failures
            .into_iter()
            .map(|failure| FailedPmid {
                pmid: failure.pmid,
                reason: failure.error.to_string(),
            })
            .collect();

        info!(
            requested = pmids.len(),
            reported = papers.len(),
            failed = failed.len(),
            "Processed papers"
        );

        Ok((papers, failed))
    }

    fn keep(&self, paper: &Paper) -> bool {
        !self.non_academic_only || !paper.non_academic_authors.is_empty()
    }

    fn render(&self, papers: &[Paper]) -> Result<String> {
        match self.format {
            OutputFormat::Console => Ok(render_console(papers)),
            OutputFormat::Json => papers_to_json(papers).context("Failed to serialize papers"),
        }
    }

    async fn report_failures(&self, failed: &[FailedPmid]) {
        if failed.is_empty() {
            return;
        }

        let Some(ref path) = self.failed_output else {
            error!(
                failed_count = failed.len(),
                failed_pmids = ?failed.iter().map(|f| f.pmid.as_str()).collect::<Vec<_>>(),
                "Failed to process some PubMed IDs"
            );
            return;
        };

        match save_failed_pmids(failed, path).await {
            Ok(()) => info!(
                path = %path.display(),
                count = failed.len(),
                "Saved failed PubMed IDs to JSON file"
            ),
            Err(e) => error!(
                path = %path.display(),
                error = %e,
                "Failed to save failed PubMed IDs to JSON file"
            ),
        }
    }
}

async fn save_failed_pmids(failed: &[FailedPmid], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(failed).context("Failed to serialize failed IDs")?;
    tokio::fs::write(path, json)
        .await
        .context("Failed to write failed IDs file")?;
    Ok(())
}
