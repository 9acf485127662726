// src/fetch/urls.rs
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::{ConnectorError, Result};

static HTTP_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+$").expect("URL pattern should compile"));

/// Check the configured CSV location and parse it.
///
/// Missing values, anything that is not `http://` or `https://`, and strings
/// the URL parser rejects all fail with [`ConnectorError::InvalidUrl`].
pub fn validate_url(raw: Option<&str>) -> Result<Url> {
    let raw = raw.ok_or(ConnectorError::InvalidUrl)?;
    if !HTTP_URL.is_match(raw) {
        return Err(ConnectorError::InvalidUrl);
    }
    Url::parse(raw).map_err(|_| ConnectorError::InvalidUrl)
}
