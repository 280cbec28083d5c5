//! Two-way count table behind the heatmap.

use super::group::Categories;
use crate::data::{Column, Value};
use ndarray::Array2;

/// Occurrence counts keyed by the values of two columns.
///
/// Rows follow the sorted distinct values of the y column and columns the
/// sorted distinct values of the x column. Combinations that never occur
/// hold 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    /// Name of the column that labels the rows.
    pub row_name: String,
    /// Name of the column that labels the columns.
    pub col_name: String,
    /// Row labels (y values).
    pub row_keys: Vec<Value>,
    /// Column labels (x values).
    pub col_keys: Vec<Value>,
    /// Counts, indexed `[row, col]`.
    pub counts: Array2<u64>,
}

impl PivotTable {
    /// Count rows by (`y`, `x`); rows with a null in either column are skipped.
    pub fn count(x: &Column, y: &Column) -> Self {
        let cols = Categories::sorted(x);
        let rows = Categories::sorted(y);
        let mut counts = Array2::<u64>::zeros((rows.len(), cols.len()));

        for (xv, yv) in x.values.iter().zip(&y.values) {
            if let (Some(r), Some(c)) = (rows.position(yv), cols.position(xv)) {
                counts[[r, c]] += 1;
            }
        }

        Self {
            row_name: y.name.clone(),
            col_name: x.name.clone(),
            row_keys: rows.keys().to_vec(),
            col_keys: cols.keys().to_vec(),
            counts,
        }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.counts.nrows()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.counts.ncols()
    }

    /// Whether the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count at (`row`, `col`), 0 when out of range.
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.counts.get((row, col)).copied().unwrap_or(0)
    }

    /// Count for the (y, x) value pair, 0 for an unseen combination.
    pub fn count_for(&self, y: &Value, x: &Value) -> u64 {
        let row = self.row_keys.iter().position(|k| k == y);
        let col = self.col_keys.iter().position(|k| k == x);
        match (row, col) {
            (Some(r), Some(c)) => self.get(r, c),
            _ => 0,
        }
    }

    /// Smallest and largest cell count.
    pub fn range(&self) -> (u64, u64) {
        let min = self.counts.iter().copied().min().unwrap_or(0);
        let max = self.counts.iter().copied().max().unwrap_or(0);
        (min, max)
    }
}
