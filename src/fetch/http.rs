use reqwest::Client;
use std::{collections::BTreeMap, time::Duration};
use tracing::{debug, info, instrument};
use url::Url;

use super::{parse::parse_csv, CsvSource};
use crate::error::{ConnectorError, Result};
use crate::process::RawTable;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches CSV content over HTTP(S) with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpCsvSource {
    client: Client,
}

impl HttpCsvSource {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// `timeout` bounds the whole request, body included.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    async fn get_text(&self, url: &Url, headers: &BTreeMap<String, String>) -> Result<String> {
        let mut req = self.client.get(url.clone());
        for (name, value) in headers {
            req = req.header(name.as_str(), value.as_str());
        }
        let text = req.send().await?.error_for_status()?.text().await?;
        Ok(text)
    }
}

impl CsvSource for HttpCsvSource {
    #[instrument(level = "info", skip(self, headers), fields(url = %url))]
    async fn fetch(
        &self,
        url: &Url,
        headers: &BTreeMap<String, String>,
        delimiter: u8,
    ) -> Result<RawTable> {
        debug!(headers = headers.len(), "fetching csv");
        let content = self.get_text(url, headers).await?;
        if content.is_empty() {
            return Err(ConnectorError::EmptyContent);
        }
        info!(bytes = content.len(), "fetched csv");
        parse_csv(&content, delimiter)
    }
}
