// src/connector/mod.rs

use std::path::Path;
use tracing::{info, instrument};

use crate::error::Result;
use crate::fetch::CsvSource;
use crate::process::{project_rows, Projection};
use crate::schema::{build_record_batch, infer_fields, write_parquet, FieldDescriptor};

pub mod config;
pub mod context;
pub mod response;

pub use config::{ConfigParams, ConnectorConfig, Delimiter, HostRequest, RequestedField};
pub use context::RequestContext;
pub use response::{
    host_fields, AuthType, AuthTypeResponse, ConfigDescription, DataResponse, DataRow, HostField,
    SchemaResponse, UserErrorResponse,
};

/// Requested fields projected out of the CSV, still as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedTable {
    pub fields: Vec<FieldDescriptor>,
    pub rows: Vec<Vec<String>>,
}

/// The connector entry points the host calls, backed by a [`CsvSource`].
#[derive(Debug, Clone)]
pub struct Connector<S> {
    source: S,
}

impl<S: CsvSource> Connector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn auth_type(&self) -> AuthTypeResponse {
        AuthTypeResponse {
            auth_type: AuthType::None,
        }
    }

    pub fn describe_config(&self) -> ConfigDescription {
        ConfigDescription::csv_source()
    }

    /// Fetch (once per context) and infer the typed fields.
    pub async fn fields(&self, ctx: &mut RequestContext) -> Result<Vec<FieldDescriptor>> {
        let has_header = ctx.config().contains_header;
        let table = ctx.table(&self.source).await?;
        Ok(infer_fields(table, has_header))
    }

    #[instrument(level = "info", skip_all)]
    pub async fn describe_schema(&self, ctx: &mut RequestContext) -> Result<SchemaResponse> {
        let fields = self.fields(ctx).await?;
        info!(fields = fields.len(), "described schema");
        Ok(SchemaResponse {
            schema: host_fields(&fields),
        })
    }

    /// Infer the schema and project the data rows onto `requested` keys.
    pub async fn project<K: AsRef<str>>(
        &self,
        ctx: &mut RequestContext,
        requested: &[K],
    ) -> Result<ProjectedTable> {
        let fields = self.fields(ctx).await?;
        let projection = Projection::resolve(&fields, requested)?;

        let has_header = ctx.config().contains_header;
        let table = ctx.table(&self.source).await?;
        let rows = project_rows(table, fields.len(), &projection, has_header)?;

        Ok(ProjectedTable {
            fields: projection.fields(&fields),
            rows,
        })
    }

    #[instrument(level = "info", skip_all, fields(requested = requested.len()))]
    pub async fn fetch_data<K: AsRef<str>>(
        &self,
        ctx: &mut RequestContext,
        requested: &[K],
    ) -> Result<DataResponse> {
        let ProjectedTable { fields, rows } = self.project(ctx, requested).await?;
        let rows: Vec<DataRow> = rows
            .into_iter()
            .map(|cells| DataRow::typed(&fields, cells))
            .collect();

        info!(rows = rows.len(), "fetched data");
        Ok(DataResponse {
            schema: host_fields(&fields),
            rows,
        })
    }

    /// Project `requested` keys and write them as a typed Parquet file.
    /// Returns the number of bytes written.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn export_parquet<K: AsRef<str>, P: AsRef<Path>>(
        &self,
        ctx: &mut RequestContext,
        requested: &[K],
        path: P,
    ) -> Result<u64> {
        let projected = self.project(ctx, requested).await?;
        let batch = build_record_batch(&projected.fields, &projected.rows)?;
        write_parquet(&batch, path)
    }
}
