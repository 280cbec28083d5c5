//! Datavis - a terminal dashboard for plotting CSV files.
//!
//! Datavis lists the CSV files of a data folder, previews the chosen one and
//! draws one of eight chart kinds from a pair of its columns.
//!
//! # Features
//!
//! - CSV loading with per-column type inference
//! - Line, bar, scatter, distribution, count, box, heatmap and violin plots
//! - Keyboard driven pickers
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use datavis::data::DataReader;
//! use datavis::plot::{self, AxisChoice, PlotKind};
//! use std::path::Path;
//!
//! let dataset = DataReader::read_csv(Path::new("data/tips.csv"))?;
//! let x = AxisChoice::Column("day".into());
//! let figure = plot::generate(&dataset, &x, &AxisChoice::None, Some(PlotKind::Count))?;
//! println!("{}", figure.title);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod plot;
pub mod selector;
pub mod shared;
pub mod ui;
pub mod util;
pub mod viewer;

pub use error::{Result, VisualizerError};
