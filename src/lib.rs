pub mod connector;
pub mod error;
pub mod fetch;
pub mod process;
pub mod schema;

pub use connector::{Connector, ConnectorConfig, RequestContext};
pub use error::{ConnectorError, Result};
