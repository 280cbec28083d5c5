//! Data loading and representation.
//!
//! This module lists the CSV files of the data folder and parses a selected
//! file into an in-memory [`Dataset`].

mod dataset;
mod lister;
mod reader;

pub use dataset::{Column, ColumnKind, Dataset, Value, CATEGORICAL_MAX_DISTINCT};
pub use lister::{default_data_dir, list_csv_files, CSV_EXTENSION, DATA_DIR_NAME};
pub use reader::DataReader;
