//! CSV file reader.

use super::{Column, ColumnKind, Dataset, Value, CATEGORICAL_MAX_DISTINCT};
use crate::error::{Result, VisualizerError};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// CSV data reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a comma-separated file with a header row.
    pub fn read_csv(path: &Path) -> Result<Dataset> {
        let file = File::open(path).map_err(|e| VisualizerError::file_open(path.to_path_buf(), e))?;

        let frame = CsvReader::new(file)
            .has_header(true)
            .infer_schema(None)
            .finish()?;

        let columns = frame
            .get_columns()
            .iter()
            .map(Self::read_column)
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            "Loaded {} ({} rows, {} columns)",
            path.display(),
            frame.height(),
            columns.len()
        );

        Ok(Dataset::new(path.to_path_buf(), columns))
    }

    fn read_column(series: &Series) -> Result<Column> {
        let name = series.name().to_string();
        let dtype = series.dtype().clone();

        if dtype.is_numeric() {
            let cast = series.cast(&DataType::Float64)?;
            let values = cast
                .f64()?
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::Number))
                .collect();
            return Ok(Column::new(name, ColumnKind::Numeric, values));
        }

        if dtype == DataType::Boolean {
            let values = series
                .bool()?
                .into_iter()
                .map(|v| match v {
                    Some(true) => Value::Text("True".to_string()),
                    Some(false) => Value::Text("False".to_string()),
                    None => Value::Null,
                })
                .collect();
            return Ok(Column::new(name, ColumnKind::Categorical, values));
        }

        let cast = series.cast(&DataType::Utf8)?;
        let distinct = cast.drop_nulls().n_unique()?;
        let kind = if distinct <= CATEGORICAL_MAX_DISTINCT {
            ColumnKind::Categorical
        } else {
            ColumnKind::Text
        };
        let values: Vec<Value> = cast
            .utf8()?
            .into_iter()
            .map(|v| v.map_or(Value::Null, |s| Value::Text(s.to_string())))
            .collect();

        tracing::debug!("Column {} has {} distinct values, inferred as {:?}", name, distinct, kind);
        Ok(Column::new(name, kind, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn head_matches_file_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "ab.csv", "a,b\n1,2\n3,4\n");

        let ds = DataReader::read_csv(&path).unwrap();
        assert_eq!(ds.column_names(), vec!["a", "b"]);
        assert_eq!(ds.rows, 2);

        let head = ds.head(5);
        assert_eq!(head[0], vec![Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(head[1], vec![Value::Number(3.0), Value::Number(4.0)]);
    }

    #[test]
    fn infers_column_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let mut contents = String::from("price,day,comment\n");
        for i in 0..30 {
            let day = if i % 2 == 0 { "Sat" } else { "Sun" };
            contents.push_str(&format!("{}.5,{},note number {}\n", i, day, i));
        }
        let path = write_csv(&dir, "tips.csv", &contents);

        let ds = DataReader::read_csv(&path).unwrap();
        assert_eq!(ds.column("price").unwrap().kind, ColumnKind::Numeric);
        assert_eq!(ds.column("day").unwrap().kind, ColumnKind::Categorical);
        assert_eq!(ds.column("comment").unwrap().kind, ColumnKind::Text);
    }

    #[test]
    fn categorical_limit_counts_non_null_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut contents = String::from("id,label\n");
        for i in 0..CATEGORICAL_MAX_DISTINCT {
            contents.push_str(&format!("{},k{}\n", i, i));
        }
        contents.push_str(&format!("{},\n", CATEGORICAL_MAX_DISTINCT));
        let path = write_csv(&dir, "edge.csv", &contents);
        let ds = DataReader::read_csv(&path).unwrap();
        assert_eq!(ds.column("label").unwrap().kind, ColumnKind::Categorical);

        contents.push_str(&format!("{},k{}\n", CATEGORICAL_MAX_DISTINCT + 1, CATEGORICAL_MAX_DISTINCT));
        let path = write_csv(&dir, "over.csv", &contents);
        let ds = DataReader::read_csv(&path).unwrap();
        assert_eq!(ds.column("label").unwrap().kind, ColumnKind::Text);
    }

    #[test]
    fn many_distinct_strings_load_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let mut contents = String::from("name\n");
        for i in 0..40_000 {
            contents.push_str(&format!("row-{}\n", i));
        }
        let path = write_csv(&dir, "wide.csv", &contents);
        let ds = DataReader::read_csv(&path).unwrap();
        assert_eq!(ds.rows, 40_000);
        assert_eq!(ds.column("name").unwrap().kind, ColumnKind::Text);
    }

    #[test]
    fn empty_fields_become_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "gaps.csv", "a,b\n1,x\n,y\n3,\n");

        let ds = DataReader::read_csv(&path).unwrap();
        assert_eq!(ds.column("a").unwrap().values[1], Value::Null);
        assert_eq!(ds.column("b").unwrap().values[2], Value::Null);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataReader::read_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, VisualizerError::FileOpen { .. }));
    }
}
