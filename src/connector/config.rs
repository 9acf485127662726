// src/connector/config.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConnectorError, Result};

/// Field separator offered in the connector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Delimiter {
    #[default]
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = ";")]
    Semicolon,
    #[serde(rename = "\t")]
    Tab,
}

impl Delimiter {
    pub const ALL: [Delimiter; 3] = [Delimiter::Comma, Delimiter::Semicolon, Delimiter::Tab];

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Tab => b'\t',
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
            Delimiter::Tab => "\t",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Delimiter::Comma => "Comma",
            Delimiter::Semicolon => "Semicolon",
            Delimiter::Tab => "Tabulation",
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.value() == raw)
            .ok_or_else(|| ConnectorError::InvalidConfig(format!("unsupported delimiter {:?}", raw)))
    }
}

/// The raw `configParams` object the host sends with every request.
/// Every value arrives as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(
        rename = "containsHeader",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub contains_header: Option<String>,
    /// JSON object of extra request headers, e.g. `{"Authorization": "..."}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<String>,
}

/// A field the host asks for in a data request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedField {
    pub name: String,
}

/// A request as the host sends it: the configuration plus, for data
/// requests, the fields to return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRequest {
    #[serde(rename = "configParams", default)]
    pub config_params: ConfigParams,
    #[serde(default)]
    pub fields: Vec<RequestedField>,
}

impl HostRequest {
    pub fn requested_keys(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }
}

/// Validated connector configuration for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Left unchecked here; the fetch step reports a missing or bad URL.
    pub url: Option<String>,
    pub delimiter: Delimiter,
    pub contains_header: bool,
    pub http_headers: BTreeMap<String, String>,
}

impl TryFrom<ConfigParams> for ConnectorConfig {
    type Error = ConnectorError;

    fn try_from(params: ConfigParams) -> Result<Self> {
        let delimiter = match params.delimiter.as_deref() {
            None | Some("") => Delimiter::default(),
            Some(raw) => Delimiter::parse(raw)?,
        };

        let http_headers = match params.http_headers.as_deref().map(str::trim) {
            None | Some("") => BTreeMap::new(),
            Some(raw) => serde_json::from_str(raw).map_err(|e| {
                ConnectorError::InvalidConfig(format!("http_headers is not a JSON object of strings: {}", e))
            })?,
        };

        Ok(Self {
            url: params.url,
            delimiter,
            contains_header: params.contains_header.as_deref() == Some("true"),
            http_headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_params() {
        let params: ConfigParams = serde_json::from_value(serde_json::json!({
            "url": "https://example.com/a.csv",
            "delimiter": "\t",
            "containsHeader": "true",
            "http_headers": "{\"Authorization\": \"Bearer t\"}"
        }))
        .unwrap();

        let cfg = ConnectorConfig::try_from(params).unwrap();
        assert_eq!(cfg.url.as_deref(), Some("https://example.com/a.csv"));
        assert_eq!(cfg.delimiter, Delimiter::Tab);
        assert!(cfg.contains_header);
        assert_eq!(cfg.http_headers["Authorization"], "Bearer t");
    }

    #[test]
    fn parses_data_request() {
        let req: HostRequest = serde_json::from_str(
            r#"{"configParams": {"url": "https://x.io/a.csv"}, "fields": [{"name": "b"}, {"name": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(req.requested_keys(), vec!["b", "a"]);
        assert_eq!(req.config_params.url.as_deref(), Some("https://x.io/a.csv"));

        let bare: HostRequest = serde_json::from_str("{}").unwrap();
        assert!(bare.fields.is_empty());
    }

    #[test]
    fn defaults_when_params_missing() {
        let cfg = ConnectorConfig::try_from(ConfigParams::default()).unwrap();
        assert_eq!(cfg.delimiter, Delimiter::Comma);
        assert!(!cfg.contains_header);
        assert!(cfg.http_headers.is_empty());
    }

    #[test]
    fn only_literal_true_enables_header() {
        let params = ConfigParams {
            contains_header: Some("TRUE".into()),
            ..Default::default()
        };
        assert!(!ConnectorConfig::try_from(params).unwrap().contains_header);
    }

    #[test]
    fn rejects_bad_delimiter_and_headers() {
        let params = ConfigParams {
            delimiter: Some("|".into()),
            ..Default::default()
        };
        assert!(matches!(
            ConnectorConfig::try_from(params),
            Err(ConnectorError::InvalidConfig(_))
        ));

        let params = ConfigParams {
            http_headers: Some("[1, 2]".into()),
            ..Default::default()
        };
        assert!(matches!(
            ConnectorConfig::try_from(params),
            Err(ConnectorError::InvalidConfig(_))
        ));
    }
}
