use std::collections::HashMap;
use tracing::{debug, warn};

use super::RawTable;
use crate::error::{ConnectorError, Result};
use crate::schema::FieldDescriptor;

/// Column positions of the requested fields, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub indices: Vec<usize>,
}

impl Projection {
    /// Resolve `requested` keys against the inferred `fields`.
    pub fn resolve<S: AsRef<str>>(fields: &[FieldDescriptor], requested: &[S]) -> Result<Self> {
        let by_key: HashMap<&str, usize> = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.key.as_str(), i))
            .collect();

        let indices = requested
            .iter()
            .map(|key| {
                let key = key.as_ref();
                by_key
                    .get(key)
                    .copied()
                    .ok_or_else(|| ConnectorError::UnknownField(key.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { indices })
    }

    /// The requested descriptors, in request order.
    pub fn fields(&self, fields: &[FieldDescriptor]) -> Vec<FieldDescriptor> {
        self.indices.iter().map(|&i| fields[i].clone()).collect()
    }
}

/// Project every data row of `table` onto `projection`.
///
/// All rows, header included, must have exactly `column_count` cells;
/// the first one that doesn't aborts the projection with
/// [`ConnectorError::RowColumnMismatch`] (`row` is its 0-based position in
/// `table`). The header row is dropped from the output.
pub fn project_rows(
    table: &RawTable,
    column_count: usize,
    projection: &Projection,
    has_header: bool,
) -> Result<Vec<Vec<String>>> {
    if let Some((row, found)) = table
        .rows
        .iter()
        .enumerate()
        .find_map(|(i, r)| (r.len() != column_count).then_some((i, r.len())))
    {
        warn!(row, expected = column_count, found, "column count mismatch");
        return Err(ConnectorError::RowColumnMismatch {
            row,
            expected: column_count,
            found,
        });
    }

    let rows: Vec<Vec<String>> = table
        .data_rows(has_header)
        .iter()
        .map(|row| projection.indices.iter().map(|&i| row[i].clone()).collect())
        .collect();

    debug!(
        rows = rows.len(),
        columns = projection.indices.len(),
        "projected rows"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::infer_fields;

    fn table(rows: &[&[&str]]) -> RawTable {
        rows.iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn projects_in_requested_order_and_skips_header() {
        let t = table(&[&["a", "b", "c"], &["1", "2", "3"], &["4", "5", "6"]]);
        let fields = infer_fields(&t, true);
        let proj = Projection::resolve(&fields, &["c", "a"]).unwrap();
        assert_eq!(proj.indices, vec![2, 0]);
        assert_eq!(
            proj.fields(&fields)
                .iter()
                .map(|f| f.key.as_str())
                .collect::<Vec<_>>(),
            vec!["c", "a"]
        );

        let rows = project_rows(&t, fields.len(), &proj, true).unwrap();
        assert_eq!(rows, vec![vec!["3", "1"], vec!["6", "4"]]);
    }

    #[test]
    fn keeps_first_row_without_header() {
        let t = table(&[&["1", "2"], &["3", "4"]]);
        let fields = infer_fields(&t, false);
        let proj = Projection::resolve(&fields, &["column_2"]).unwrap();
        let rows = project_rows(&t, fields.len(), &proj, false).unwrap();
        assert_eq!(rows, vec![vec!["2"], vec!["4"]]);
    }

    #[test]
    fn ragged_row_aborts_whole_projection() {
        let t = table(&[&["a", "b"], &["1", "2"], &["3", "4", "5"]]);
        let fields = infer_fields(&t, true);
        let proj = Projection::resolve(&fields, &["a", "b"]).unwrap();
        let err = project_rows(&t, fields.len(), &proj, true).unwrap_err();
        assert!(matches!(
            err,
            ConnectorError::RowColumnMismatch {
                row: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn duplicate_key_resolves_to_last_column() {
        let t = table(&[&["a b", "a_b"], &["1", "2"]]);
        let fields = infer_fields(&t, true);
        let proj = Projection::resolve(&fields, &["a_b"]).unwrap();
        assert_eq!(proj.indices, vec![1]);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let t = table(&[&["a"], &["1"]]);
        let fields = infer_fields(&t, true);
        let err = Projection::resolve(&fields, &["nope"]).unwrap_err();
        assert!(matches!(err, ConnectorError::UnknownField(k) if k == "nope"));
    }
}
