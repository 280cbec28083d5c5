//! Plot dispatch - maps a (plot kind, x column, y column) triple to a chart.
//!
//! Each [`PlotKind`] owns exactly one primitive. Only the heatmap checks its
//! axes up front; every other primitive is called as is and its own
//! [`PlotError`](crate::error::PlotError) is passed through.

pub mod figure;
mod group;
pub mod pivot;
mod primitives;
pub mod stats;

use crate::data::{Column, Dataset};
use crate::error::{GenerateError, PlotError};
use primitives::Primitive;
use std::fmt;

pub use figure::{Bar, BoxGlyph, Figure, FigureBody, Histogram, Series, ViolinGlyph};
pub use pivot::PivotTable;

/// Label of the "no column" axis option.
pub const NONE_LABEL: &str = "None";

/// Value axis label of the charts that ignore y.
pub const COUNT_LABEL: &str = "count";

/// Message shown when a heatmap is requested without both axes.
pub const HEATMAP_AXES_REQUIRED: &str = "Heatmap requires both X-axis and Y-axis to be selected";

/// Supported chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    /// Mean of y per x, joined by a line.
    Line,
    /// Mean of y per x category.
    Bar,
    /// Raw (x, y) points.
    Scatter,
    /// Histogram of x with a density curve.
    Distribution,
    /// Occurrences of each x value.
    Count,
    /// Box plot of y per x category.
    Box,
    /// Pivot count matrix of y by x.
    Heatmap,
    /// Violin of y per x category.
    Violin,
}

impl PlotKind {
    /// Every kind, in menu order.
    pub const ALL: [PlotKind; 8] = [
        PlotKind::Line,
        PlotKind::Bar,
        PlotKind::Scatter,
        PlotKind::Distribution,
        PlotKind::Count,
        PlotKind::Box,
        PlotKind::Heatmap,
        PlotKind::Violin,
    ];

    /// Menu label, also used in the chart title.
    pub fn name(self) -> &'static str {
        match self {
            PlotKind::Line => "Line Plot",
            PlotKind::Bar => "Bar Chart",
            PlotKind::Scatter => "Scatter Plot",
            PlotKind::Distribution => "Distribution Plot",
            PlotKind::Count => "Count Plot",
            PlotKind::Box => "Box Plot",
            PlotKind::Heatmap => "Heatmap",
            PlotKind::Violin => "Violin Plot",
        }
    }

    /// The primitive that draws this kind.
    fn primitive(self) -> Primitive {
        match self {
            PlotKind::Line => primitives::line,
            PlotKind::Bar => primitives::bar,
            PlotKind::Scatter => primitives::scatter,
            PlotKind::Distribution => primitives::distribution,
            PlotKind::Count => primitives::count,
            PlotKind::Box => primitives::box_plot,
            PlotKind::Heatmap => primitives::heatmap,
            PlotKind::Violin => primitives::violin,
        }
    }

    /// Whether the y axis takes part in the chart.
    pub fn uses_y(self) -> bool {
        !matches!(self, PlotKind::Distribution | PlotKind::Count)
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An axis selection: a dataset column or the `None` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AxisChoice {
    /// A named column.
    Column(String),
    /// No column selected.
    #[default]
    None,
}

impl AxisChoice {
    /// Axis options for a dataset: every column, then the sentinel.
    pub fn options_for(ds: &Dataset) -> Vec<AxisChoice> {
        ds.column_names()
            .into_iter()
            .map(AxisChoice::Column)
            .chain(std::iter::once(AxisChoice::None))
            .collect()
    }

    /// Whether this is the sentinel.
    pub fn is_none(&self) -> bool {
        matches!(self, AxisChoice::None)
    }

    /// Label shown in menus and titles.
    pub fn label(&self) -> &str {
        match self {
            AxisChoice::Column(name) => name,
            AxisChoice::None => NONE_LABEL,
        }
    }

    /// Look the column up by label.
    ///
    /// The sentinel is looked up under its label too, so it only resolves
    /// when the file really has a column called `None`.
    pub fn resolve<'a>(&self, ds: &'a Dataset) -> Result<&'a Column, PlotError> {
        ds.column(self.label())
    }
}

impl fmt::Display for AxisChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chart title: `"<plot> of <y> vs <x>"`.
pub fn title(kind: Option<PlotKind>, x: &AxisChoice, y: &AxisChoice) -> String {
    let plot = kind.map(PlotKind::name).unwrap_or(NONE_LABEL);
    format!("{} of {} vs {}", plot, y, x)
}

/// Build the figure for the current selection.
///
/// With no plot kind the figure has axes and labels but nothing drawn.
pub fn generate(
    ds: &Dataset,
    x: &AxisChoice,
    y: &AxisChoice,
    kind: Option<PlotKind>,
) -> Result<Figure, GenerateError> {
    let body = match kind {
        None => FigureBody::Empty,
        Some(PlotKind::Heatmap) if x.is_none() || y.is_none() => {
            tracing::warn!("Heatmap requested with x={} y={}", x, y);
            return Err(GenerateError::Validation(HEATMAP_AXES_REQUIRED.to_string()));
        },
        Some(kind) => (kind.primitive())(ds, x, y).map_err(|e| {
            tracing::error!("{} failed: {}", kind, e);
            GenerateError::Render(e)
        })?,
    };

    tracing::debug!("Generated {:?} for x={} y={}", kind, x, y);
    let y_label = match kind {
        Some(kind) if !kind.uses_y() => COUNT_LABEL,
        _ => y.label(),
    };
    Ok(Figure {
        title: title(kind, x, y),
        x_label: x.label().to_string(),
        y_label: y_label.to_string(),
        body,
    })
}
