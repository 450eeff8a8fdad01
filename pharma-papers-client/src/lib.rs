//! # Pharma Papers Client
//!
//! Async client for the NCBI E-utilities that searches PubMed and fetches each hit as
//! an extracted [`Paper`](pharma_papers_parser::Paper).
//!
//! ```no_run
//! use pharma_papers_client::PapersClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PapersClient::new()?;
//!     let report = client.search_and_fetch("kinase inhibitor pharma", 10).await?;
//!
//!     for paper in report.papers {
//!         let paper = paper.into_filtered();
//!         println!("{}: {:?}", paper.pubmed_id, paper.company_affiliations);
//!     }
//!     for failure in &report.failures {
//!         eprintln!("{}: {}", failure.pmid, failure.error);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod ids;
pub mod rate_limit;
mod responses;

// Re-export main types for convenience
pub use client::{BatchReport, FetchFailure, PapersClient};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use ids::PubMedId;
pub use rate_limit::RateLimiter;
