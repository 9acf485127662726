use anyhow::{bail, Context, Result};
use csv_connector::{
    connector::{HostRequest, UserErrorResponse},
    fetch::HttpCsvSource,
    Connector, ConnectorConfig, ConnectorError, RequestContext,
};
use serde_json::Value;
use std::{
    env, fs,
    io::{self, Read},
    path::PathBuf,
    time::Duration,
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: csv-connector <auth|config|schema|data|export> [REQUEST_JSON|-] [OUT_PARQUET]";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Auth,
    Config,
    Schema,
    Data,
    Export,
}

impl Command {
    fn parse(raw: &str) -> Result<Self> {
        Ok(match raw {
            "auth" => Command::Auth,
            "config" => Command::Config,
            "schema" => Command::Schema,
            "data" => Command::Data,
            "export" => Command::Export,
            other => bail!("unknown command {:?}\n{}", other, USAGE),
        })
    }

    fn needs_request(self) -> bool {
        matches!(self, Command::Schema | Command::Data | Command::Export)
    }
}

/// Read the host request from `path`, or from stdin when absent or `-`.
fn read_request(path: Option<&str>) -> Result<HostRequest> {
    let raw = match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading request {}", p))?,
    };
    serde_json::from_str(&raw).context("parsing request JSON")
}

fn timeout_from_env() -> Result<Duration> {
    match env::var("CSV_CONNECTOR_TIMEOUT_SECS") {
        Ok(v) => {
            let secs: u64 = v
                .trim()
                .parse()
                .with_context(|| format!("CSV_CONNECTOR_TIMEOUT_SECS={:?} is not a number", v))?;
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

async fn run(
    connector: &Connector<HttpCsvSource>,
    command: Command,
    request: HostRequest,
    out_path: Option<PathBuf>,
) -> Result<Value, ConnectorError> {
    let to_json = |v: serde_json::Result<Value>| v.map_err(|e| ConnectorError::Io(e.into()));

    match command {
        Command::Auth => to_json(serde_json::to_value(connector.auth_type())),
        Command::Config => to_json(serde_json::to_value(connector.describe_config())),
        Command::Schema | Command::Data | Command::Export => {
            let mut keys = request.requested_keys();
            let config = ConnectorConfig::try_from(request.config_params)?;
            let mut ctx = RequestContext::new(config);

            if command == Command::Schema {
                return to_json(serde_json::to_value(connector.describe_schema(&mut ctx).await?));
            }

            // no explicit field list: every column, in file order
            if keys.is_empty() {
                keys = connector
                    .fields(&mut ctx)
                    .await?
                    .into_iter()
                    .map(|f| f.key)
                    .collect();
            }

            if let Some(path) = out_path {
                let bytes = connector.export_parquet(&mut ctx, keys.as_slice(), &path).await?;
                return Ok(serde_json::json!({
                    "path": path.display().to_string(),
                    "bytes": bytes,
                }));
            }
            to_json(serde_json::to_value(connector.fetch_data(&mut ctx, keys.as_slice()).await?))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout carries the response) ───────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // ─── 2) parse arguments ──────────────────────────────────────────
    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(args.first().map(String::as_str).unwrap_or_default())?;
    let request = if command.needs_request() {
        read_request(args.get(1).map(String::as_str))?
    } else {
        HostRequest::default()
    };
    let out_path = match command {
        Command::Export => Some(PathBuf::from(
            args.get(2).context(format!("export needs an output path\n{}", USAGE))?,
        )),
        _ => None,
    };

    // ─── 3) run ──────────────────────────────────────────────────────
    let connector = Connector::new(HttpCsvSource::with_timeout(timeout_from_env()?)?);
    info!(?command, "handling request");

    match run(&connector, command, request, out_path).await {
        Ok(response) => {
            println!("{}", serde_json::to_string(&response)?);
            Ok(())
        }
        Err(e) if e.is_user_error() => {
            warn!(error = %e, "user error");
            println!("{}", serde_json::to_string(&UserErrorResponse::new(e.to_string()))?);
            std::process::exit(1);
        }
        Err(e) => {
            error!(error = %e, "request failed");
            Err(e).context("connector request failed")
        }
    }
}
