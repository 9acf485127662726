// src/schema/infer.rs

use std::collections::HashSet;
use tracing::{debug, warn};

use super::numeric::is_numeric;
use super::types::{FieldDescriptor, FieldType};
use crate::process::RawTable;

/// Infer one [`FieldDescriptor`] per column of `table`.
///
/// The first data row seeds the types: every numeric cell promotes its
/// column to `NUMBER`. All later rows can only demote a column back to
/// `TEXT`, never promote it, so a single non-numeric cell anywhere keeps the
/// whole column textual. A table with fewer than two data rows stays
/// all-`TEXT`.
///
/// The column count comes from row 0. Row length uniformity is checked at
/// projection time, not here; a short row counts as non-numeric for the
/// missing columns.
pub fn infer_fields(table: &RawTable, has_header: bool) -> Vec<FieldDescriptor> {
    let Some(first) = table.rows.first() else {
        return Vec::new();
    };

    // 1) keys + display names
    let mut fields: Vec<FieldDescriptor> = if has_header {
        first.iter().map(|label| FieldDescriptor::from_header(label)).collect()
    } else {
        (0..first.len()).map(FieldDescriptor::from_position).collect()
    };

    let mut seen = HashSet::with_capacity(fields.len());
    for (idx, field) in fields.iter().enumerate() {
        if !seen.insert(field.key.as_str()) {
            warn!(key = %field.key, column = idx, "duplicate field key, later column shadows earlier one");
        }
    }

    let data = table.data_rows(has_header);
    let Some((sample, rest)) = data.split_first() else {
        return fields;
    };
    if rest.is_empty() {
        debug!(
            columns = fields.len(),
            "single data row, keeping every column as TEXT"
        );
        return fields;
    }

    // 2) the sample row is the only place a column can become NUMBER
    for (field, cell) in fields.iter_mut().zip(sample) {
        if is_numeric(cell) {
            field.field_type = FieldType::Number;
        }
    }

    // 3) demotion pass over the remaining rows
    for row in rest {
        for (idx, field) in fields.iter_mut().enumerate() {
            if field.is_number() && !row.get(idx).is_some_and(|cell| is_numeric(cell)) {
                field.field_type = FieldType::Text;
            }
        }
    }

    debug!(
        columns = fields.len(),
        numeric = fields.iter().filter(|f| f.is_number()).count(),
        "inferred field types"
    );
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> RawTable {
        rows.iter().map(|r| r.to_vec()).collect()
    }

    fn types(fields: &[FieldDescriptor]) -> Vec<FieldType> {
        fields.iter().map(|f| f.field_type).collect()
    }

    #[test]
    fn outlier_demotes_whole_column() {
        let t = table(&[&["id", "score"], &["1", "10"], &["2", "oops"], &["3", "30"]]);
        let fields = infer_fields(&t, true);
        assert_eq!(
            fields,
            vec![
                FieldDescriptor {
                    key: "id".into(),
                    field_type: FieldType::Number,
                    display_name: Some("id".into()),
                },
                FieldDescriptor {
                    key: "score".into(),
                    field_type: FieldType::Text,
                    display_name: Some("score".into()),
                },
            ]
        );
    }

    #[test]
    fn headerless_numeric_columns() {
        let t = table(&[&["1", "10"], &["2", "20"]]);
        let fields = infer_fields(&t, false);
        assert_eq!(fields[0].key, "column_1");
        assert_eq!(fields[1].key, "column_2");
        assert_eq!(types(&fields), vec![FieldType::Number, FieldType::Number]);
        assert!(fields.iter().all(|f| f.display_name.is_none()));
    }

    #[test]
    fn non_numeric_sample_stays_text() {
        let t = table(&[&["abc", "1", ""], &["2", "2", "3"], &["3", "3", "4"]]);
        let fields = infer_fields(&t, false);
        assert_eq!(
            types(&fields),
            vec![FieldType::Text, FieldType::Number, FieldType::Text]
        );
    }

    #[test]
    fn demoted_column_is_never_promoted_again() {
        let t = table(&[&["n"], &["1"], &["x"], &["2"], &["3"]]);
        assert_eq!(types(&infer_fields(&t, true)), vec![FieldType::Text]);
    }

    #[test]
    fn header_keys_replace_whitespace() {
        let t = table(&[&["First Name", "Total Sales"], &["ann", "1.5"], &["bob", "2e3"]]);
        let fields = infer_fields(&t, true);
        assert_eq!(fields[0].key, "First_Name");
        assert_eq!(fields[0].display_name.as_deref(), Some("First Name"));
        assert_eq!(fields[1].key, "Total_Sales");
        assert_eq!(types(&fields), vec![FieldType::Text, FieldType::Number]);
    }

    #[test]
    fn too_few_data_rows_stay_text() {
        assert!(infer_fields(&RawTable::default(), true).is_empty());

        let header_only = table(&[&["a", "b"]]);
        assert_eq!(
            types(&infer_fields(&header_only, true)),
            vec![FieldType::Text, FieldType::Text]
        );

        let one_data_row = table(&[&["a", "b"], &["1", "2"]]);
        assert_eq!(
            types(&infer_fields(&one_data_row, true)),
            vec![FieldType::Text, FieldType::Text]
        );

        let single_row = table(&[&["1", "2"]]);
        assert_eq!(
            types(&infer_fields(&single_row, false)),
            vec![FieldType::Text, FieldType::Text]
        );
    }

    #[test]
    fn short_row_demotes_missing_columns() {
        let t = table(&[&["1", "2"], &["3", "4"], &["5"]]);
        assert_eq!(
            types(&infer_fields(&t, false)),
            vec![FieldType::Number, FieldType::Text]
        );
    }

    #[test]
    fn non_ascii_digits_stay_text() {
        let t = table(&[&["n"], &["١٢"], &["３"]]);
        assert_eq!(types(&infer_fields(&t, true)), vec![FieldType::Text]);
    }

    #[test]
    fn overflowing_literal_demotes_column() {
        let t = table(&[&["1", "1e400"], &["2", "1"], &["3", "2"]]);
        assert_eq!(
            types(&infer_fields(&t, false)),
            vec![FieldType::Number, FieldType::Text]
        );

        let t = table(&[&["1"], &["1e400"]]);
        assert_eq!(types(&infer_fields(&t, false)), vec![FieldType::Text]);
    }

    #[test]
    fn duplicate_keys_are_kept_in_order() {
        let t = table(&[&["a b", "a_b"], &["1", "x"], &["2", "y"]]);
        let fields = infer_fields(&t, true);
        assert_eq!(fields[0].key, "a_b");
        assert_eq!(fields[1].key, "a_b");
        assert_eq!(fields[0].display_name.as_deref(), Some("a b"));
        assert_eq!(types(&fields), vec![FieldType::Number, FieldType::Text]);
    }

    #[test]
    fn inference_is_idempotent() {
        let t = table(&[&["a b", "c"], &["1", "x"], &["2", "y"]]);
        assert_eq!(infer_fields(&t, true), infer_fields(&t, true));
    }
}
