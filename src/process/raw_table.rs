/// The string grid produced by parsing fetched CSV content.
///
/// Row 0 is the header when the connector is configured with
/// `containsHeader`; nothing here knows which.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Every record, one `Vec` of cells per CSV line, in file order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Column count as claimed by the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows after the header, if there is one.
    pub fn data_rows(&self, has_header: bool) -> &[Vec<String>] {
        let skip = usize::from(has_header).min(self.rows.len());
        &self.rows[skip..]
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for RawTable {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}
