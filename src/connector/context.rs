use tracing::debug;

use super::config::ConnectorConfig;
use crate::error::Result;
use crate::fetch::{validate_url, CsvSource};
use crate::process::RawTable;

/// State for a single host request.
///
/// The CSV is fetched at most once per context: the schema and data steps of
/// the same request share the parsed table. A new request gets a new context.
#[derive(Debug)]
pub struct RequestContext {
    config: ConnectorConfig,
    table: Option<RawTable>,
}

impl RequestContext {
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            config,
            table: None,
        }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// The parsed CSV, fetched through `source` on first use.
    pub async fn table<S: CsvSource>(&mut self, source: &S) -> Result<&RawTable> {
        let table = match self.table.take() {
            Some(table) => table,
            None => {
                let url = validate_url(self.config.url.as_deref())?;
                let table = source
                    .fetch(&url, &self.config.http_headers, self.config.delimiter.as_byte())
                    .await?;
                debug!(rows = table.len(), columns = table.column_count(), "loaded table");
                table
            }
        };
        let table: &RawTable = self.table.insert(table);
        Ok(table)
    }
}
