pub mod fetch;

use anyhow::{Context as _, Result};
use pharma_papers_client::{ClientConfig, PapersClient};

pub fn create_client(
    api_key: Option<&str>,
    email: Option<&str>,
    tool: &str,
) -> Result<PapersClient> {
    let mut config = ClientConfig::new().with_tool(tool);

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    if let Some(email) = email {
        config = config.with_email(email);
    }

    PapersClient::with_config(config).context("Failed to create PubMed client")
}
