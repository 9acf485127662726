// src/error.rs

/// Every way a connector request can fail.
///
/// None of these are retried: the first error aborts the request and no
/// partial schema or rows are returned.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("Input error: Invalid URL")]
    InvalidUrl,

    #[error("Error during parsing content: Empty content")]
    EmptyContent,

    #[error(
        "Error during parsing content: row {row} has {found} columns, expected {expected}"
    )]
    RowColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Input error: {0}")]
    InvalidConfig(String),

    #[error("Unknown field requested: {0}")]
    UnknownField(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConnectorError {
    /// Errors caused by the connector configuration or the remote content,
    /// which the host should surface to the end user as-is.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConnectorError::InvalidUrl
                | ConnectorError::EmptyContent
                | ConnectorError::RowColumnMismatch { .. }
                | ConnectorError::InvalidConfig(_)
                | ConnectorError::UnknownField(_)
        )
    }
}

pub type Result<T, E = ConnectorError> = std::result::Result<T, E>;
