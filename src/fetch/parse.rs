use csv::ReaderBuilder;
use std::io::Cursor;
use tracing::debug;

use crate::error::Result;
use crate::process::RawTable;

/// Parse CSV `content` into a [`RawTable`], keeping every record (including a
/// header line, if any) as plain strings.
///
/// Records may differ in length; that is reported later, when rows are
/// projected onto the inferred schema.
pub fn parse_csv(content: &str, delimiter: u8) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(Cursor::new(content.as_bytes()));

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    debug!(rows = rows.len(), "parsed csv content");
    Ok(RawTable::new(rows))
}
