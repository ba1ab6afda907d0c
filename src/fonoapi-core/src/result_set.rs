use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::attributes::default_columns;
use crate::models::AttributeMap;
use crate::query::Query;

/// ResultSet wraps the devices returned by one lookup.
///
/// It is built once per query and never changes afterwards. An empty set is a
/// normal value, not an error; check [`ResultSet::is_empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    query: Query,
    rows: Vec<AttributeMap>,
}

/// Row-major view where every row has one slot per column, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedRows {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

/// Column-oriented table built from [`AlignedRows`]. Missing attributes stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    data: Vec<Vec<Option<String>>>,
    num_rows: usize,
}

impl ResultSet {
    pub fn new(query: Query, rows: Vec<AttributeMap>) -> Self {
        Self { query, rows }
    }

    pub fn empty(query: Query) -> Self {
        Self::new(query, Vec::new())
    }

    /// Parameters of the lookup that produced this set
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn row_count(&self) -> usize {
        self.len()
    }

    /// Rows exactly as the service returned them
    pub fn as_raw_rows(&self) -> &[AttributeMap] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<AttributeMap> {
        self.rows
    }

    /// One fixed-width row per device.
    ///
    /// With `columns` unset the 69 [`DEFAULT_ATTRIBUTES`](crate::DEFAULT_ATTRIBUTES)
    /// are used. Attributes a device does not have become `None`.
    pub fn as_aligned_rows(&self, columns: Option<&[&str]>) -> AlignedRows {
        let columns = match columns {
            Some(cols) => cols.iter().map(|c| c.to_string()).collect(),
            None => default_columns(),
        };

        let rows = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| row.get(col).map(str::to_string))
                    .collect()
            })
            .collect();

        AlignedRows { columns, rows }
    }

    /// Same as [`as_aligned_rows`](Self::as_aligned_rows), transposed into columns.
    pub fn as_table(&self, columns: Option<&[&str]>) -> Table {
        Table::from(self.as_aligned_rows(columns))
    }

    /// Every key seen in any row, sorted ascending.
    pub fn union_of_keys(&self) -> Vec<String> {
        let keys: BTreeSet<&str> = self.rows.iter().flat_map(|row| row.keys()).collect();
        keys.into_iter().map(str::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a AttributeMap;
    type IntoIter = std::slice::Iter<'a, AttributeMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Phones Object: mobile device data|")?;
        writeln!(f, "------------------------------------")?;
        writeln!(f, "Number of phones : {}", self.rows.len())?;
        write!(f, "Input parameters : {}", self.query)
    }
}

impl AlignedRows {
    /// Rows are padded with `None` or truncated to the number of columns.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Option<String>>>) {
        (self.columns, self.rows)
    }
}

impl From<AlignedRows> for Table {
    fn from(aligned: AlignedRows) -> Self {
        let (columns, rows) = aligned.into_parts();
        let num_rows = rows.len();

        let mut data: Vec<Vec<Option<String>>> = columns
            .iter()
            .map(|_| Vec::with_capacity(num_rows))
            .collect();
        for row in rows {
            let mut values = row.into_iter();
            // Every column gets exactly one cell per row
            for column in data.iter_mut() {
                column.push(values.next().flatten());
            }
        }

        Self {
            columns,
            data,
            num_rows,
        }
    }
}

impl Table {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Values of one column, top to bottom. `None` if the column is not in the table.
    pub fn column(&self, name: &str) -> Option<&[Option<String>]> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(&self.data[idx])
    }

    /// One row across all columns
    pub fn row(&self, index: usize) -> Option<Vec<Option<&str>>> {
        if index >= self.num_rows {
            return None;
        }
        Some(self.data.iter().map(|col| col[index].as_deref()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{BrandQuery, DeviceQuery};
    use crate::DEFAULT_ATTRIBUTES;

    fn device_query() -> Query {
        DeviceQuery::new("LG Stylo 3 Plus").unwrap().into()
    }

    fn sample_rows() -> Vec<AttributeMap> {
        vec![
            [("Brand", Some("LG")), ("DeviceName", Some("LG Stylo 3 Plus"))]
                .into_iter()
                .collect(),
            [
                ("Brand", Some("LG")),
                ("DeviceName", Some("LG G6")),
                ("os", Some("Android 7.0")),
                ("nfc", None),
                ("extra_field", Some("x")),
            ]
            .into_iter()
            .collect(),
        ]
    }

    #[test]
    fn test_empty_flag_tracks_row_count() {
        let empty = ResultSet::empty(device_query());
        assert!(empty.is_empty());
        assert_eq!(empty.row_count(), 0);

        let full = ResultSet::new(device_query(), sample_rows());
        assert!(!full.is_empty());
        assert_eq!(full.row_count(), 2);
        assert_eq!(full.is_empty(), full.row_count() == 0);
    }

    #[test]
    fn test_raw_rows_identity() {
        let rows = sample_rows();
        let set = ResultSet::new(device_query(), rows.clone());
        assert_eq!(set.as_raw_rows(), rows.as_slice());
        assert_eq!(set.into_rows(), rows);
    }

    #[test]
    fn test_aligned_rows_with_explicit_columns() {
        let set = ResultSet::new(device_query(), sample_rows()[..1].to_vec());
        let aligned = set.as_aligned_rows(Some(&["Brand", "DeviceName", "os"]));

        assert_eq!(aligned.columns(), ["Brand", "DeviceName", "os"]);
        assert_eq!(
            aligned.rows(),
            [vec![
                Some("LG".to_string()),
                Some("LG Stylo 3 Plus".to_string()),
                None
            ]]
        );
    }

    #[test]
    fn test_aligned_rows_width_matches_columns() {
        let set = ResultSet::new(device_query(), sample_rows());

        let aligned = set.as_aligned_rows(None);
        assert_eq!(aligned.columns().len(), DEFAULT_ATTRIBUTES.len());
        assert!(aligned.rows().iter().all(|r| r.len() == DEFAULT_ATTRIBUTES.len()));

        let columns = ["os", "nope", "extra_field"];
        let aligned = set.as_aligned_rows(Some(&columns));
        assert!(aligned.rows().iter().all(|r| r.len() == 3));
        assert_eq!(aligned.rows()[1], vec![Some("Android 7.0".to_string()), None, Some("x".to_string())]);
    }

    #[test]
    fn test_empty_set_keeps_requested_columns() {
        let set = ResultSet::empty(BrandQuery::new("madeupbrand").into());

        let aligned = set.as_aligned_rows(Some(&["Brand", "os"]));
        assert_eq!(aligned.columns(), ["Brand", "os"]);
        assert!(aligned.rows().is_empty());

        let table = set.as_table(None);
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.num_columns(), 69);
        assert_eq!(table.column("Brand"), Some(&[][..]));
    }

    #[test]
    fn test_uneven_rows_are_squared_to_columns() {
        let columns = vec!["Brand".to_string(), "os".to_string()];
        let aligned = AlignedRows::new(
            columns,
            vec![
                vec![Some("LG".to_string())],
                vec![
                    Some("HTC".to_string()),
                    Some("Android 7.0".to_string()),
                    Some("extra".to_string()),
                ],
            ],
        );
        assert!(aligned.rows().iter().all(|r| r.len() == 2));

        let table = Table::from(aligned);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.column("os").map(<[_]>::len), Some(2));
        assert_eq!(table.row(0), Some(vec![Some("LG"), None]));
        assert_eq!(table.row(1), Some(vec![Some("HTC"), Some("Android 7.0")]));
    }

    #[test]
    fn test_table_is_column_oriented() {
        let set = ResultSet::new(device_query(), sample_rows());
        let table = set.as_table(Some(&["DeviceName", "os"]));

        assert_eq!(table.columns(), &["DeviceName".to_string(), "os".to_string()]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(
            table.column("os"),
            Some(&[None, Some("Android 7.0".to_string())][..])
        );
        assert_eq!(table.row(0), Some(vec![Some("LG Stylo 3 Plus"), None]));
        assert_eq!(table.row(2), None);
        assert_eq!(table.column("Brand"), None);
    }

    #[test]
    fn test_union_of_keys() {
        assert!(ResultSet::empty(device_query()).union_of_keys().is_empty());

        let set = ResultSet::new(device_query(), sample_rows());
        assert_eq!(
            set.union_of_keys(),
            vec!["Brand", "DeviceName", "extra_field", "nfc", "os"]
        );
    }

    #[test]
    fn test_display_summary() {
        let set = ResultSet::new(device_query(), sample_rows());
        let text = set.to_string();
        assert!(text.contains("Number of phones : 2"));
        assert!(text.contains("LG Stylo 3 Plus"));
    }
}
