//! Chart descriptions produced by the plot primitives.

use super::pivot::PivotTable;
use super::stats::{BoxSummary, Quartiles};

/// One bar of a bar-style chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Category label.
    pub label: String,
    /// Bar height.
    pub value: f64,
}

/// Points joined by a line, or scattered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// (x, y) pairs; for categorical x the x value is the category position.
    pub points: Vec<(f64, f64)>,
    /// Category labels when x is categorical, empty otherwise.
    pub x_labels: Vec<String>,
}

/// Histogram with its density curve.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    /// Bin edges, one more than the number of bins.
    pub edges: Vec<f64>,
    /// Count per bin.
    pub counts: Vec<usize>,
    /// Density curve scaled to counts, empty when it cannot be estimated.
    pub kde: Vec<(f64, f64)>,
}

/// Box-and-whisker glyph for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGlyph {
    /// Category label.
    pub label: String,
    /// Summary, `None` for a category without numeric values.
    pub summary: Option<BoxSummary>,
}

/// Violin glyph for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinGlyph {
    /// Category label.
    pub label: String,
    /// (y, density) samples along the value axis.
    pub density: Vec<(f64, f64)>,
    /// Inner quartile marks.
    pub quartiles: Option<Quartiles>,
}

/// What a figure draws.
#[derive(Debug, Clone, PartialEq)]
pub enum FigureBody {
    /// Axes only.
    Empty,
    /// Line through per-x means.
    Line(Series),
    /// One point per row.
    Scatter(Series),
    /// Category bars.
    Bars(Vec<Bar>),
    /// Binned distribution.
    Histogram(Histogram),
    /// Box plots per category.
    Boxes(Vec<BoxGlyph>),
    /// Violins per category.
    Violins(Vec<ViolinGlyph>),
    /// Count matrix.
    Heatmap(PivotTable),
}

impl FigureBody {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            FigureBody::Empty => true,
            FigureBody::Line(s) | FigureBody::Scatter(s) => s.points.is_empty(),
            FigureBody::Bars(bars) => bars.is_empty(),
            FigureBody::Histogram(h) => h.counts.is_empty(),
            FigureBody::Boxes(b) => b.iter().all(|g| g.summary.is_none()),
            FigureBody::Violins(v) => v.is_empty(),
            FigureBody::Heatmap(p) => p.is_empty(),
        }
    }
}

/// A titled chart ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Chart contents.
    pub body: FigureBody,
}
