use crate::domain::model::{Envelope, Table};
use crate::domain::ports::StatsSource;
use crate::utils::error::{OnCourtError, Result};
use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION,
    HOST, REFERER, UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::Client;
use url::Url;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/66.0.3359.181 Safari/537.36";
pub const BROWSER_REFERER: &str = "stats.nba.com";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8";

/// The stats service rejects requests that do not look like a desktop browser.
pub fn browser_headers(base_url: &str) -> Result<HeaderMap> {
    let url = Url::parse(base_url).map_err(|e| OnCourtError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason: e.to_string(),
    })?;
    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => {
            return Err(OnCourtError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL has no host".to_string(),
            })
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        HOST,
        HeaderValue::from_str(&host).map_err(|e| OnCourtError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?,
    );
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(REFERER, HeaderValue::from_static(BROWSER_REFERER));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    Ok(headers)
}

/// reqwest-backed [`StatsSource`]. One client per run; dropped with the pipeline.
pub struct StatsClient {
    client: Client,
}

impl StatsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(browser_headers(base_url)?)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl StatsSource for StatsClient {
    async fn fetch_table(&self, url: &str) -> Result<Table> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(OnCourtError::HttpStatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&body)?;
        let result_set = envelope.first()?;
        tracing::debug!(
            "Result set {} with {} columns, {} rows",
            result_set.name.as_deref().unwrap_or("<unnamed>"),
            result_set.headers.len(),
            result_set.row_set.len()
        );

        Table::try_from(result_set)
    }
}
