//! In-memory table built from a CSV file.

use crate::error::PlotError;
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// String columns with at most this many distinct values count as categorical.
pub const CATEGORICAL_MAX_DISTINCT: usize = 20;

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Integer or floating point values.
    Numeric,
    /// Booleans and low-cardinality strings.
    Categorical,
    /// Free-form strings.
    Text,
}

impl ColumnKind {
    /// Short label for the preview header.
    pub fn name(self) -> &'static str {
        match self {
            ColumnKind::Numeric => "num",
            ColumnKind::Categorical => "cat",
            ColumnKind::Text => "text",
        }
    }
}

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value.
    Null,
    /// Numeric value.
    Number(f64),
    /// Any other value, rendered as text.
    Text(String),
}

impl Value {
    /// Whether the cell is missing.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric content, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Total order used for sorting group keys: numbers before text, nulls last.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Number(_), _) => Ordering::Less,
            (_, Value::Number(_)) => Ordering::Greater,
            (Value::Text(_), Value::Null) => Ordering::Less,
            (Value::Null, Value::Text(_)) => Ordering::Greater,
            (Value::Null, Value::Null) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NaN"),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A named column of values.
#[derive(Debug, Clone)]
pub struct Column {
    /// Header name.
    pub name: String,
    /// Inferred type.
    pub kind: ColumnKind,
    /// Cells in row order.
    pub values: Vec<Value>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, kind: ColumnKind, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Whether the column holds numbers.
    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }

    /// Non-null values as `f64`, failing for non-numeric columns.
    pub fn numbers(&self) -> Result<Vec<f64>, PlotError> {
        if !self.is_numeric() {
            return Err(PlotError::non_numeric(&self.name));
        }
        Ok(self.values.iter().filter_map(Value::as_f64).collect())
    }
}

/// A loaded CSV file.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Source file.
    pub path: PathBuf,
    /// Columns in header order.
    pub columns: Vec<Column>,
    /// Number of data rows.
    pub rows: usize,
}

impl Dataset {
    /// Create a dataset from columns of equal length.
    pub fn new(path: PathBuf, columns: Vec<Column>) -> Self {
        let rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
        Self {
            path,
            columns,
            rows,
        }
    }

    /// File name for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string())
    }

    /// Column names in header order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Look a column up by name.
    pub fn column(&self, name: &str) -> Result<&Column, PlotError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| PlotError::missing_column(name))
    }

    /// First `n` rows as display rows.
    pub fn head(&self, n: usize) -> Vec<Vec<Value>> {
        (0..self.rows.min(n))
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| c.values.get(row).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect()
    }
}
