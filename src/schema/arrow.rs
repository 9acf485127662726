// src/schema/arrow.rs

use arrow::array::{ArrayRef, Float64Builder, StringArray};
use arrow::datatypes::{DataType, Field as ArrowField, Schema as ArrowSchema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

use super::numeric::parse_number;
use super::types::{FieldDescriptor, FieldType};
use crate::error::Result;

/// Map an inferred field type into an Arrow DataType.
///
/// - NUMBER → Float64
/// - TEXT   → Utf8
pub fn map_to_arrow_type(ty: FieldType) -> DataType {
    match ty {
        FieldType::Number => DataType::Float64,
        FieldType::Text => DataType::Utf8,
    }
}

/// Build an ArrowSchema (inside an Arc) from inferred descriptors, keyed by `key`.
pub fn build_arrow_schema(fields: &[FieldDescriptor]) -> Arc<ArrowSchema> {
    let fields: Vec<ArrowField> = fields
        .iter()
        .map(|f| ArrowField::new(&f.key, map_to_arrow_type(f.field_type), /* nullable = */ true))
        .collect();

    Arc::new(ArrowSchema::new(fields))
}

/// Turn projected string rows into a typed RecordBatch.
///
/// `rows` must already be projected onto `fields` (same width and order).
/// NUMBER cells that do not parse become null; a missing cell is null.
pub fn build_record_batch(fields: &[FieldDescriptor], rows: &[Vec<String>]) -> Result<RecordBatch> {
    let schema = build_arrow_schema(fields);
    let mut columns = Vec::with_capacity(fields.len());

    for (idx, field) in fields.iter().enumerate() {
        let cells = rows.iter().map(|row| row.get(idx).map(String::as_str));
        let col: ArrayRef = match field.field_type {
            FieldType::Number => {
                let mut b = Float64Builder::with_capacity(rows.len());
                for cell in cells {
                    b.append_option(cell.and_then(parse_number));
                }
                Arc::new(b.finish())
            }
            FieldType::Text => Arc::new(cells.collect::<StringArray>()),
        };
        columns.push(col);
    }

    Ok(RecordBatch::try_new(schema, columns)?)
}
