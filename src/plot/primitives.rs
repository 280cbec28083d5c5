//! Chart primitives, one per plot kind.
//!
//! Primitives resolve their own columns and fail with a [`PlotError`] when
//! the data does not fit; callers get that error as is.

use super::figure::{Bar, BoxGlyph, FigureBody, Histogram, Series, ViolinGlyph};
use super::group::{group_values, Categories};
use super::pivot::PivotTable;
use super::stats::{self, BoxSummary, Kde, Quartiles};
use super::AxisChoice;
use crate::data::{Column, Dataset};
use crate::error::PlotError;

/// Signature shared by every primitive.
pub(super) type Primitive = fn(&Dataset, &AxisChoice, &AxisChoice) -> Result<FigureBody, PlotError>;

/// Samples along each density curve.
const CURVE_POINTS: usize = 64;

/// Violins extend this many bandwidths past the extreme data points.
const VIOLIN_CUT: f64 = 3.0;

fn require_numeric(column: &Column) -> Result<(), PlotError> {
    if column.is_numeric() {
        Ok(())
    } else {
        Err(PlotError::non_numeric(&column.name))
    }
}

/// Mean of y for each x, joined by a line.
pub(super) fn line(ds: &Dataset, x: &AxisChoice, y: &AxisChoice) -> Result<FigureBody, PlotError> {
    let x_col = x.resolve(ds)?;
    let y_col = y.resolve(ds)?;
    require_numeric(y_col)?;

    let cats = Categories::of(x_col);
    let groups = group_values(&cats, x_col, y_col);
    let numeric_x = x_col.is_numeric();

    let points = cats
        .keys()
        .iter()
        .zip(&groups)
        .enumerate()
        .filter(|(_, (_, ys))| !ys.is_empty())
        .map(|(i, (key, ys))| {
            let xv = if numeric_x {
                key.as_f64().unwrap_or(i as f64)
            } else {
                i as f64
            };
            (xv, stats::mean(ys))
        })
        .collect();

    let x_labels = if numeric_x { Vec::new() } else { cats.labels() };
    Ok(FigureBody::Line(Series { points, x_labels }))
}

/// One bar per x category holding the mean of y.
pub(super) fn bar(ds: &Dataset, x: &AxisChoice, y: &AxisChoice) -> Result<FigureBody, PlotError> {
    let x_col = x.resolve(ds)?;
    let y_col = y.resolve(ds)?;
    require_numeric(y_col)?;

    let cats = Categories::of(x_col);
    let groups = group_values(&cats, x_col, y_col);
    let bars = cats
        .labels()
        .into_iter()
        .zip(&groups)
        .map(|(label, ys)| Bar {
            label,
            value: if ys.is_empty() { 0.0 } else { stats::mean(ys) },
        })
        .collect();
    Ok(FigureBody::Bars(bars))
}

/// One point per row where both x and y are present.
pub(super) fn scatter(ds: &Dataset, x: &AxisChoice, y: &AxisChoice) -> Result<FigureBody, PlotError> {
    let x_col = x.resolve(ds)?;
    let y_col = y.resolve(ds)?;
    require_numeric(x_col)?;
    require_numeric(y_col)?;

    let points = x_col
        .values
        .iter()
        .zip(&y_col.values)
        .filter_map(|(xv, yv)| Some((xv.as_f64()?, yv.as_f64()?)))
        .collect();
    Ok(FigureBody::Scatter(Series {
        points,
        x_labels: Vec::new(),
    }))
}

/// Histogram of x with a density curve; y is not used.
pub(super) fn distribution(ds: &Dataset, x: &AxisChoice, _y: &AxisChoice) -> Result<FigureBody, PlotError> {
    let x_col = x.resolve(ds)?;
    if !x_col.is_numeric() {
        return Ok(FigureBody::Bars(category_counts(x_col)));
    }

    let values: Vec<f64> = x_col
        .numbers()?
        .into_iter()
        .filter(|v| v.is_finite())
        .collect();
    let edges = stats::auto_bin_edges(&values);
    let counts = stats::histogram(&values, &edges);

    let kde = match (Kde::fit(&values), edges.first(), edges.last()) {
        (Some(kde), Some(&lo), Some(&hi)) => {
            let bin_width = (hi - lo) / counts.len().max(1) as f64;
            let scale = values.len() as f64 * bin_width;
            kde.curve(lo, hi, CURVE_POINTS)
                .into_iter()
                .map(|(xv, d)| (xv, d * scale))
                .collect()
        },
        _ => Vec::new(),
    };

    Ok(FigureBody::Histogram(Histogram { edges, counts, kde }))
}

/// Occurrences of each x category; y is not used.
pub(super) fn count(ds: &Dataset, x: &AxisChoice, _y: &AxisChoice) -> Result<FigureBody, PlotError> {
    let x_col = x.resolve(ds)?;
    Ok(FigureBody::Bars(category_counts(x_col)))
}

fn category_counts(column: &Column) -> Vec<Bar> {
    let cats = Categories::of(column);
    let mut counts = vec![0usize; cats.len()];
    for value in &column.values {
        if let Some(idx) = cats.position(value) {
            counts[idx] += 1;
        }
    }
    cats.labels()
        .into_iter()
        .zip(counts)
        .map(|(label, n)| Bar {
            label,
            value: n as f64,
        })
        .collect()
}

/// Box plot of y for each x category.
pub(super) fn box_plot(ds: &Dataset, x: &AxisChoice, y: &AxisChoice) -> Result<FigureBody, PlotError> {
    let x_col = x.resolve(ds)?;
    let y_col = y.resolve(ds)?;
    require_numeric(y_col)?;

    let cats = Categories::of(x_col);
    let groups = group_values(&cats, x_col, y_col);
    let glyphs = cats
        .labels()
        .into_iter()
        .zip(&groups)
        .map(|(label, ys)| BoxGlyph {
            label,
            summary: BoxSummary::of(ys),
        })
        .collect();
    Ok(FigureBody::Boxes(glyphs))
}

/// Violin of y for each x category.
pub(super) fn violin(ds: &Dataset, x: &AxisChoice, y: &AxisChoice) -> Result<FigureBody, PlotError> {
    let x_col = x.resolve(ds)?;
    let y_col = y.resolve(ds)?;
    require_numeric(y_col)?;

    let cats = Categories::of(x_col);
    let groups = group_values(&cats, x_col, y_col);
    let glyphs = cats
        .labels()
        .into_iter()
        .zip(&groups)
        .map(|(label, ys)| {
            let density = match Kde::fit(ys) {
                Some(kde) => {
                    let (min, max) = ys
                        .iter()
                        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                            (lo.min(v), hi.max(v))
                        });
                    let pad = VIOLIN_CUT * kde.bandwidth;
                    kde.curve(min - pad, max + pad, CURVE_POINTS)
                },
                None => Vec::new(),
            };
            ViolinGlyph {
                label,
                density,
                quartiles: Quartiles::of(ys),
            }
        })
        .collect();
    Ok(FigureBody::Violins(glyphs))
}

/// Count matrix of y rows by x columns.
pub(super) fn heatmap(ds: &Dataset, x: &AxisChoice, y: &AxisChoice) -> Result<FigureBody, PlotError> {
    let x_col = x.resolve(ds)?;
    let y_col = y.resolve(ds)?;
    Ok(FigureBody::Heatmap(PivotTable::count(x_col, y_col)))
}
