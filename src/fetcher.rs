use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::Client;

/// A fetched page body plus the request round-trip time.
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: String,
    pub html: String,
    pub response_time: Duration,
}

/// Prepend `https://` when the target carries no explicit scheme.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Fetch a single page. Non-2xx statuses are errors; redirects are followed
/// and the final URL is recorded.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage> {
    let url = normalize_url(url);
    let start = Instant::now();

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?
        .error_for_status()?;

    let final_url = response.url().to_string();
    let html = response.text().await?;

    Ok(FetchedPage {
        url: final_url,
        html,
        response_time: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_adds_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(
            normalize_url("example.com/path?q=1"),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_normalize_url_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }
}
