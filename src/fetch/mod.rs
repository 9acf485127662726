// src/fetch/mod.rs
//
// The CSV source: URL validation, HTTP download and CSV parsing.

use std::collections::BTreeMap;
use url::Url;

use crate::error::Result;
use crate::process::RawTable;

pub mod http;
pub mod parse;
pub mod urls;

pub use http::HttpCsvSource;
pub use parse::parse_csv;
pub use urls::validate_url;

/// Anything that can turn a CSV location into a [`RawTable`].
///
/// Implementations fail with `EmptyContent` when the body is empty.
#[allow(async_fn_in_trait)]
pub trait CsvSource {
    async fn fetch(
        &self,
        url: &Url,
        headers: &BTreeMap<String, String>,
        delimiter: u8,
    ) -> Result<RawTable>;
}
