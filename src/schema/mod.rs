pub mod arrow;
pub mod infer;
pub mod numeric;
pub mod types;
pub mod write;

pub use self::arrow::{build_arrow_schema, build_record_batch, map_to_arrow_type};
pub use infer::infer_fields;
pub use numeric::is_numeric;
pub use types::{FieldDescriptor, FieldType};
pub use write::write_parquet;
