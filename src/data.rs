//! Tabular data for visualization.
//!
//! A simple columnar data frame owned by the caller. The coordinator borrows
//! it and never copies or mutates it.

use std::collections::HashMap;

/// A value in a data frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// A numeric value.
    Number(f32),
    /// A text value.
    Text(String),
    /// A missing value.
    Null,
}

impl DataValue {
    /// Get as f32, or None if not a number.
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            DataValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Render this value as a grouping key.
    ///
    /// Numbers and text bucket by their printed form; missing values share a
    /// single bucket.
    #[must_use]
    pub fn group_key(&self) -> String {
        match self {
            DataValue::Number(n) => n.to_string(),
            DataValue::Text(s) => s.clone(),
            DataValue::Null => String::from("<null>"),
        }
    }
}

impl From<f32> for DataValue {
    fn from(v: f32) -> Self {
        DataValue::Number(v)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

/// A simple columnar data frame.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    /// Column data keyed by column name.
    columns: HashMap<String, Vec<DataValue>>,
    /// Number of rows.
    n_rows: usize,
}

impl DataFrame {
    /// Create a new empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a numeric column.
    pub fn add_column_f32(&mut self, name: &str, data: &[f32]) {
        let values: Vec<DataValue> = data.iter().map(|&v| DataValue::Number(v)).collect();
        self.n_rows = self.n_rows.max(values.len());
        self.columns.insert(name.to_string(), values);
    }

    /// Add a text column.
    pub fn add_column_str(&mut self, name: &str, data: &[&str]) {
        let values: Vec<DataValue> = data.iter().map(|&s| DataValue::Text(s.to_string())).collect();
        self.n_rows = self.n_rows.max(values.len());
        self.columns.insert(name.to_string(), values);
    }

    /// Get a column as f32 values, skipping non-numeric cells.
    #[must_use]
    pub fn get_f32(&self, name: &str) -> Option<Vec<f32>> {
        self.columns.get(name).map(|col| col.iter().filter_map(DataValue::as_f32).collect())
    }

    /// Get a column.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[DataValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Get number of rows.
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.n_rows
    }

    /// Get number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get column names.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataframe_columns() {
        let mut df = DataFrame::new();
        df.add_column_f32("value", &[1.0, 2.0, 3.0]);
        df.add_column_str("category", &["a", "b", "a"]);

        assert_eq!(df.nrow(), 3);
        assert_eq!(df.ncol(), 2);
        assert!(df.has_column("value"));
        assert!(df.has_column("category"));
        assert!(!df.has_column("missing"));
    }

    #[test]
    fn test_dataframe_get_f32() {
        let mut df = DataFrame::new();
        df.add_column_f32("value", &[1.0, 2.0]);

        let values = df.get_f32("value").unwrap();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_dataframe_get() {
        let mut df = DataFrame::new();
        df.add_column_str("category", &["a", "b"]);

        let col = df.get("category").unwrap();
        assert_eq!(col.len(), 2);
        assert_eq!(col[0].as_str(), Some("a"));
    }

    #[test]
    fn test_dataframe_get_missing() {
        let df = DataFrame::new();
        assert!(df.get("missing").is_none());
        assert!(df.get_f32("missing").is_none());
    }

    #[test]
    fn test_dataframe_column_names() {
        let mut df = DataFrame::new();
        df.add_column_f32("value", &[1.0]);
        df.add_column_str("category", &["a"]);

        let cols = df.columns();
        assert_eq!(cols.len(), 2);
        assert!(cols.contains(&"value"));
        assert!(cols.contains(&"category"));
    }

    #[test]
    fn test_dataframe_empty() {
        let df = DataFrame::new();
        assert_eq!(df.nrow(), 0);
        assert_eq!(df.ncol(), 0);
    }

    #[test]
    fn test_data_value_conversions() {
        let num: DataValue = 42.0f32.into();
        assert_eq!(num.as_f32(), Some(42.0));

        let text: DataValue = "hello".into();
        assert_eq!(text.as_str(), Some("hello"));

        let owned: DataValue = String::from("world").into();
        assert_eq!(owned.as_str(), Some("world"));
    }

    #[test]
    fn test_data_value_null() {
        let null = DataValue::Null;
        assert_eq!(null.as_f32(), None);
        assert_eq!(null.as_str(), None);
    }

    #[test]
    fn test_group_key() {
        assert_eq!(DataValue::Text("a".to_string()).group_key(), "a");
        assert_eq!(DataValue::Number(2.0).group_key(), "2");
        assert_eq!(DataValue::Null.group_key(), "<null>");
    }

    #[test]
    fn test_dataframe_debug_clone() {
        let mut df = DataFrame::new();
        df.add_column_f32("value", &[1.0]);
        let df2 = df.clone();
        assert_eq!(df2.nrow(), 1);
        let _ = format!("{df2:?}");
    }
}
