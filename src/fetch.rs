use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

// Bulbapedia rejects the default reqwest agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(BROWSER_USER_AGENT);
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder.build().context("Unable to create HTTP client")
}

/// GET the move page and return its body. Non-2xx statuses are errors.
pub fn fetch_move_page(client: &Client, url: &str) -> Result<String> {
    let body = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch {url}"))?
        .error_for_status()
        .context("Move page request returned error status")?
        .text()
        .context("Failed to read move page body")?;

    Ok(body)
}
