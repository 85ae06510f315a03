//! In-memory table of patient records
//!
//! A [`Dataset`] is a list of named [`Column`]s of equal length. Cells keep
//! the shape they had in the source file ([`Value`]), so the preprocessing
//! step can decide explicitly how each column is coerced.
//!
//! ```text
//! Dataset
//! └─ columns: Vec<Column>
//!     ├─ name ("age", "chol", ...)
//!     └─ values: Vec<Value>   (Missing | Int | Float | Text)
//! ```
//!
//! The column type is not stored; it is derived from the cells (see
//! [`Column::column_type`]).

use std::fmt;

/// A single cell of the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Empty field or an explicit missing marker (`NA`, `NaN`, `null`).
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
}

/// Field contents treated as missing values (compared case-insensitively
/// after trimming).
const MISSING_MARKERS: &[&str] = &["", "na", "n/a", "nan", "null", "none"];

impl Value {
    /// Parses a raw CSV field.
    ///
    /// Integers become [`Value::Int`], other finite numbers become
    /// [`Value::Float`] and anything else that is not a missing marker is kept
    /// as [`Value::Text`].
    ///
    /// ```
    /// use heartstat_dataset::dataset::Value;
    ///
    /// assert_eq!(Value::parse("63"), Value::Int(63));
    /// assert_eq!(Value::parse(" 2.3 "), Value::Float(2.3));
    /// assert_eq!(Value::parse("NA"), Value::Missing);
    /// assert_eq!(Value::parse("fixed"), Value::Text("fixed".to_owned()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if MISSING_MARKERS
            .iter()
            .any(|marker| raw.eq_ignore_ascii_case(marker))
        {
            return Value::Missing;
        }
        if let Ok(v) = raw.parse::<i64>() {
            return Value::Int(v);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Value::Float(v),
            _ => Value::Text(raw.to_owned()),
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric view of the cell; `None` for missing and text cells.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Missing | Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => f.pad("NaN"),
            Value::Int(v) => f.pad(&v.to_string()),
            Value::Float(v) => f.pad(&format!("{v:?}")),
            Value::Text(s) => f.pad(s),
        }
    }
}

/// Storage type of a column, derived from its non-missing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ColumnType {
    #[display("int64")]
    Integer,
    #[display("float64")]
    Float,
    #[display("text")]
    Text,
}

impl ColumnType {
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut Vec<Value> {
        &mut self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Type of the column, ignoring missing cells.
    ///
    /// - `Integer` if every present cell is an integer,
    /// - `Float` if every present cell is numeric (or no cell is present),
    /// - `Text` otherwise.
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        let mut ty = ColumnType::Integer;
        let mut any_present = false;
        for value in &self.values {
            match value {
                Value::Missing => {}
                Value::Int(_) => any_present = true,
                Value::Float(_) => {
                    any_present = true;
                    ty = ColumnType::Float;
                }
                Value::Text(_) => return ColumnType::Text,
            }
        }
        if any_present { ty } else { ColumnType::Float }
    }

    /// Numeric view of the column with `None` for missing cells.
    ///
    /// Returns `None` if the column holds text.
    #[must_use]
    pub fn numeric_values(&self) -> Option<Vec<Option<f64>>> {
        if !self.column_type().is_numeric() {
            return None;
        }
        Some(self.values.iter().map(Value::as_f64).collect())
    }

    /// Number of missing cells.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }
}

/// Table of equally long, uniquely named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Creates a dataset from columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns differ in length.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "all columns must have the same length"
        );
        Self { columns }
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(Column::name)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Cells of row `index`, in column order.
    pub fn row(&self, index: usize) -> impl Iterator<Item = &Value> + '_ {
        self.columns.iter().map(move |c| &c.values[index])
    }

    /// The first `n` rows as a new dataset.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name.clone(), c.values.iter().take(n).cloned().collect()))
            .collect();
        Self { columns }
    }

    /// Keeps only the rows for which `keep` is `true`.
    pub(crate) fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.num_rows());
        for column in &mut self.columns {
            let mut keep = keep.iter();
            column.values.retain(|_| keep.next().copied().unwrap_or(false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Column::new("age", vec![Value::Int(63), Value::Int(37), Value::Int(41)]),
            Column::new(
                "oldpeak",
                vec![Value::Float(2.3), Value::Missing, Value::Int(1)],
            ),
            Column::new(
                "thal",
                vec![Value::Int(1), Value::Text("fixed".into()), Value::Int(2)],
            ),
        ])
    }

    #[test]
    fn test_column_types() {
        let ds = sample();
        assert_eq!(ds.column("age").unwrap().column_type(), ColumnType::Integer);
        assert_eq!(
            ds.column("oldpeak").unwrap().column_type(),
            ColumnType::Float
        );
        assert_eq!(ds.column("thal").unwrap().column_type(), ColumnType::Text);
        assert_eq!(
            Column::new("x", vec![Value::Missing]).column_type(),
            ColumnType::Float
        );
    }

    #[test]
    fn test_numeric_values() {
        let ds = sample();
        assert_eq!(
            ds.column("oldpeak").unwrap().numeric_values(),
            Some(vec![Some(2.3), None, Some(1.0)])
        );
        assert_eq!(ds.column("thal").unwrap().numeric_values(), None);
    }

    #[test]
    fn test_head_and_row() {
        let ds = sample();
        let head = ds.head(2);
        assert_eq!(head.num_rows(), 2);
        assert_eq!(head.num_columns(), 3);
        assert_eq!(ds.head(10).num_rows(), 3);

        let row = ds.row(1).cloned().collect::<Vec<_>>();
        assert_eq!(
            row,
            [Value::Int(37), Value::Missing, Value::Text("fixed".into())]
        );
    }

    #[test]
    fn test_retain_rows() {
        let mut ds = sample();
        ds.retain_rows(&[true, false, true]);
        assert_eq!(ds.num_rows(), 2);
        assert_eq!(
            ds.column("age").unwrap().values(),
            [Value::Int(63), Value::Int(41)]
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Missing.to_string(), "NaN");
        assert_eq!(format!("{:>5}", Value::Int(7)), "    7");
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_ragged_columns_panic() {
        let _ = Dataset::new(vec![
            Column::new("a", vec![Value::Int(1)]),
            Column::new("b", vec![]),
        ]);
    }
}
