//! E-utilities client
//!
//! - `mod.rs` - client struct, constructors, ESearch and EFetch
//! - `batch` - per-identifier fetching with isolated failures

mod batch;

pub use batch::{BatchReport, FetchFailure};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::ids::PubMedId;
use crate::rate_limit::RateLimiter;
use crate::responses::ESearchResult;
use pharma_papers_parser::{Paper, parse_paper_from_xml};
use reqwest::{Client, Response};
use tracing::{debug, instrument, warn};

/// ESearch cannot page past this many results
const MAX_RETRIEVABLE: usize = 9999;

/// Client for the PubMed E-utilities
#[derive(Clone)]
pub struct PapersClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    config: ClientConfig,
}

impl PapersClient {
    /// Create a client with default configuration
    ///
    /// Uses the NCBI default of 3 requests per second and no API key.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestError`] if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers_client::{ClientConfig, PapersClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@example.com");
    ///
    /// let client = PapersClient::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.effective_base_url().to_string(),
            rate_limiter: config.create_rate_limiter(),
            config,
        })
    }

    /// Search PubMed and return matching PMIDs
    ///
    /// An empty or blank query returns no results without contacting the API.
    ///
    /// # Errors
    ///
    /// * [`ClientError::SearchLimitExceeded`] - `max_results` is above 9999
    /// * [`ClientError::ApiError`] - non-success status, or an `ERROR` field in the response
    /// * [`ClientError::RequestError`] / [`ClientError::JsonError`] - transport or decoding failure
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn search_ids(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        if max_results > MAX_RETRIEVABLE {
            return Err(ClientError::SearchLimitExceeded {
                requested: max_results,
                maximum: MAX_RETRIEVABLE,
            });
        }

        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        // NCBI sometimes reports errors inside a 200 OK response
        if let Some(error_msg) = search_result.esearchresult.error {
            return Err(ClientError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let ids = search_result.esearchresult.idlist;
        debug!(
            total = search_result.esearchresult.count.as_deref().unwrap_or("0"),
            returned = ids.len(),
            "ESearch completed"
        );

        Ok(ids)
    }

    /// Fetch one record and extract it into a [`Paper`]
    ///
    /// The paper is returned as extracted; apply
    /// [`filter_non_academic_authors`](pharma_papers_parser::filter_non_academic_authors)
    /// to narrow it.
    ///
    /// # Errors
    ///
    /// * [`ClientError::InvalidPmid`] - the identifier is not a positive integer
    /// * [`ClientError::Parse`] - the response holds no article body, or is not valid XML
    /// * [`ClientError::ApiError`] / [`ClientError::RequestError`] - HTTP failure
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_paper(&self, pmid: &str) -> Result<Paper> {
        let id = PubMedId::parse(pmid)?;

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url, id
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml = response.text().await?;

        Ok(parse_paper_from_xml(&xml, &id.to_string())?)
    }

    /// Search PubMed, then fetch every hit
    ///
    /// # Errors
    ///
    /// Fails only if the search fails; per-record failures are collected in the report.
    pub async fn search_and_fetch(&self, query: &str, max_results: usize) -> Result<BatchReport> {
        let pmids = self.search_ids(query, max_results).await?;
        Ok(self.fetch_papers(&pmids).await)
    }

    /// Send a GET request, appending the identification parameters
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        self.rate_limiter.acquire().await?;
        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(ClientError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}
