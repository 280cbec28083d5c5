//! Figure viewer - pure rendering layer.

use super::{ColorPalette, ViewerState};
use crate::error::GenerateError;
use crate::plot::{BoxGlyph, Figure, FigureBody, Histogram, PivotTable, Series, ViolinGlyph};
use crate::shared::{format_axis_label, truncate_to_width, ThemeColors};
use crate::util::layout_config::{ChartLayoutConfig, HeatmapLayoutConfig};
use crate::util::LayoutConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

/// Most strokes a single filled bar is drawn with.
const MAX_STROKES: usize = 4096;

/// Half-width of a bar, box or violin around its category position.
const GLYPH_HALF_WIDTH: f64 = 0.4;

/// Draw the viewer into `area`.
pub fn draw_viewer(
    f: &mut Frame<'_>,
    state: &ViewerState,
    area: Rect,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) {
    match &state.outcome {
        None => draw_hint(f, area, colors),
        Some(Err(err)) => draw_error(f, area, err, colors),
        Some(Ok(figure)) => {
            let figure_area = aspect_rect(area, layout.chart.cell_aspect());
            draw_figure(f, figure, figure_area, state.color_palette, layout, colors);
        },
    }
}

/// Largest rectangle of the given width:height ratio centered in `area`.
pub fn aspect_rect(area: Rect, aspect: f64) -> Rect {
    if area.width == 0 || area.height == 0 || aspect <= 0.0 {
        return area;
    }
    let w = area.width as f64;
    let h = area.height as f64;
    let (width, height) = if w / h > aspect {
        ((h * aspect).round() as u16, area.height)
    } else {
        (area.width, (w / aspect).round() as u16)
    };
    let width = width.clamp(1, area.width);
    let height = height.clamp(1, area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_hint(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new("Pick the axes and a plot, then press Generate Plot")
        .style(Style::default().fg(colors.gray))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_error(f: &mut Frame<'_>, area: Rect, err: &GenerateError, colors: &ThemeColors) {
    let (heading, color) = match err {
        GenerateError::Validation(_) => ("Error", colors.red),
        GenerateError::Render(_) => ("Plot failed", colors.orange),
    };

    let lines = vec![
        Line::from(Span::styled(
            heading,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(err.to_string(), Style::default().fg(colors.fg0))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(colors.bg0)),
        );

    f.render_widget(paragraph, area);
}

fn draw_figure(
    f: &mut Frame<'_>,
    figure: &Figure,
    area: Rect,
    palette: ColorPalette,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(Line::from(figure.title.as_str()).centered())
        .title_style(
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    if let FigureBody::Heatmap(pivot) = &figure.body {
        let inner = block.inner(area);
        f.render_widget(block, area);
        draw_heatmap(f, inner, figure, pivot, palette, &layout.heatmap, colors);
        return;
    }

    if figure.body.is_empty() && figure.body != FigureBody::Empty {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.fg0))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let resolution = (area.width.saturating_sub(10) as usize).max(1) * 2;
    let plot = build_plot(&figure.body, resolution, &layout.chart, colors);
    let slot = (area.width as usize / (plot.x_labels.len().max(1))).saturating_sub(1);
    let x_labels: Vec<String> = plot
        .x_labels
        .iter()
        .map(|l| truncate_to_width(l, slot.max(1)))
        .collect();

    let datasets: Vec<Dataset<'_>> = plot
        .layers
        .iter()
        .map(|layer| {
            Dataset::default()
                .marker(layer.marker)
                .graph_type(layer.graph)
                .style(Style::default().fg(layer.color))
                .data(&layer.points)
        })
        .collect();

    let x_axis = Axis::default()
        .title(figure.x_label.clone())
        .style(Style::default().fg(colors.fg0))
        .bounds(plot.x_bounds)
        .labels(x_labels);

    let y_axis = Axis::default()
        .title(figure.y_label.clone())
        .style(Style::default().fg(colors.fg0))
        .bounds(plot.y_bounds)
        .labels(numeric_labels(plot.y_bounds));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(None);

    f.render_widget(chart, area);
}

/// One drawable set of points.
#[derive(Debug, Clone)]
struct Layer {
    points: Vec<(f64, f64)>,
    graph: GraphType,
    marker: Marker,
    color: Color,
}

impl Layer {
    fn line(points: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            points,
            graph: GraphType::Line,
            marker: Marker::Braille,
            color,
        }
    }

    fn scatter(points: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            points,
            graph: GraphType::Scatter,
            marker: Marker::Braille,
            color,
        }
    }

    fn bars(points: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            points,
            graph: GraphType::Bar,
            marker: Marker::Braille,
            color,
        }
    }
}

/// Everything a chart needs besides its labels.
#[derive(Debug, Clone)]
struct Plot {
    layers: Vec<Layer>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    x_labels: Vec<String>,
}

fn build_plot(
    body: &FigureBody,
    resolution: usize,
    config: &ChartLayoutConfig,
    colors: &ThemeColors,
) -> Plot {
    let pad = config.y_axis_padding_factor;
    match body {
        FigureBody::Empty => Plot {
            layers: Vec::new(),
            x_bounds: [0.0, 1.0],
            y_bounds: [0.0, 1.0],
            x_labels: numeric_labels([0.0, 1.0]),
        },
        FigureBody::Line(series) => series_plot(series, Layer::line(series.points.clone(), colors.blue), pad),
        FigureBody::Scatter(series) => {
            series_plot(series, Layer::scatter(series.points.clone(), colors.blue), pad)
        },
        FigureBody::Bars(bars) => {
            let n = bars.len();
            let step = category_span(n) / resolution as f64;
            let layers = bars
                .iter()
                .enumerate()
                .map(|(i, bar)| {
                    let x = i as f64;
                    Layer::bars(
                        fill(x - GLYPH_HALF_WIDTH, x + GLYPH_HALF_WIDTH, bar.value, step),
                        colors.blue,
                    )
                })
                .collect();
            let values = bars.iter().map(|b| b.value).chain(std::iter::once(0.0));
            Plot {
                layers,
                x_bounds: category_bounds(n),
                y_bounds: padded_bounds(values, pad),
                x_labels: category_labels(bars.iter().map(|b| b.label.clone())),
            }
        },
        FigureBody::Histogram(hist) => histogram_plot(hist, resolution, pad, colors),
        FigureBody::Boxes(boxes) => box_plot(boxes, pad, colors),
        FigureBody::Violins(violins) => violin_plot(violins, pad, colors),
        FigureBody::Heatmap(_) => Plot {
            layers: Vec::new(),
            x_bounds: [0.0, 1.0],
            y_bounds: [0.0, 1.0],
            x_labels: Vec::new(),
        },
    }
}

fn series_plot(series: &Series, layer: Layer, pad: f64) -> Plot {
    let y_bounds = padded_bounds(series.points.iter().map(|p| p.1), pad);
    if series.x_labels.is_empty() {
        let x_bounds = padded_bounds(series.points.iter().map(|p| p.0), 0.0);
        Plot {
            layers: vec![layer],
            x_bounds,
            y_bounds,
            x_labels: numeric_labels(x_bounds),
        }
    } else {
        Plot {
            layers: vec![layer],
            x_bounds: category_bounds(series.x_labels.len()),
            y_bounds,
            x_labels: category_labels(series.x_labels.iter().cloned()),
        }
    }
}

fn histogram_plot(hist: &Histogram, resolution: usize, pad: f64, colors: &ThemeColors) -> Plot {
    let (Some(&lo), Some(&hi)) = (hist.edges.first(), hist.edges.last()) else {
        return build_plot(&FigureBody::Empty, resolution, &ChartLayoutConfig::default(), colors);
    };
    let step = (hi - lo) / resolution as f64;

    let mut layers: Vec<Layer> = hist
        .edges
        .windows(2)
        .zip(&hist.counts)
        .map(|(edge, &count)| Layer::bars(fill(edge[0], edge[1], count as f64, step), colors.blue))
        .collect();
    if !hist.kde.is_empty() {
        layers.push(Layer::line(hist.kde.clone(), colors.orange));
    }

    let values = hist
        .counts
        .iter()
        .map(|&c| c as f64)
        .chain(hist.kde.iter().map(|p| p.1))
        .chain(std::iter::once(0.0));
    let x_bounds = [lo, hi];
    Plot {
        layers,
        x_bounds,
        y_bounds: padded_bounds(values, pad),
        x_labels: numeric_labels(x_bounds),
    }
}

fn box_plot(boxes: &[BoxGlyph], pad: f64, colors: &ThemeColors) -> Plot {
    let mut layers = Vec::new();
    let mut values = Vec::new();

    for (i, glyph) in boxes.iter().enumerate() {
        let Some(summary) = &glyph.summary else {
            continue;
        };
        let x = i as f64;
        let (l, r) = (x - GLYPH_HALF_WIDTH, x + GLYPH_HALF_WIDTH);
        let q = summary.quartiles;

        layers.push(Layer::line(
            vec![(l, q.q1), (r, q.q1), (r, q.q3), (l, q.q3), (l, q.q1)],
            colors.blue,
        ));
        layers.push(Layer::line(vec![(l, q.median), (r, q.median)], colors.yellow));
        layers.push(Layer::line(vec![(x, q.q3), (x, summary.whisker_high)], colors.fg0));
        layers.push(Layer::line(vec![(x, q.q1), (x, summary.whisker_low)], colors.fg0));
        let cap = GLYPH_HALF_WIDTH / 2.0;
        for whisker in [summary.whisker_low, summary.whisker_high] {
            layers.push(Layer::line(vec![(x - cap, whisker), (x + cap, whisker)], colors.fg0));
        }
        if !summary.outliers.is_empty() {
            layers.push(Layer::scatter(
                summary.outliers.iter().map(|&v| (x, v)).collect(),
                colors.orange,
            ));
        }

        values.extend([summary.whisker_low, summary.whisker_high]);
        values.extend(summary.outliers.iter().copied());
    }

    Plot {
        layers,
        x_bounds: category_bounds(boxes.len()),
        y_bounds: padded_bounds(values.into_iter(), pad),
        x_labels: category_labels(boxes.iter().map(|b| b.label.clone())),
    }
}

fn violin_plot(violins: &[ViolinGlyph], pad: f64, colors: &ThemeColors) -> Plot {
    let max_density = violins
        .iter()
        .flat_map(|v| v.density.iter().map(|p| p.1))
        .fold(0.0, f64::max);
    let scale = if max_density > 0.0 {
        GLYPH_HALF_WIDTH / max_density
    } else {
        0.0
    };

    let mut layers = Vec::new();
    let mut values = Vec::new();
    for (i, glyph) in violins.iter().enumerate() {
        let x = i as f64;
        if !glyph.density.is_empty() {
            let left = glyph.density.iter().map(|&(y, d)| (x - d * scale, y)).collect();
            let right = glyph.density.iter().map(|&(y, d)| (x + d * scale, y)).collect();
            layers.push(Layer::line(left, colors.blue));
            layers.push(Layer::line(right, colors.blue));
            values.extend(glyph.density.iter().map(|p| p.0));
        }
        if let Some(q) = glyph.quartiles {
            layers.push(Layer::line(vec![(x, q.q1), (x, q.q3)], colors.fg0));
            layers.push(Layer::scatter(vec![(x, q.median)], colors.yellow));
            values.extend([q.q1, q.q3]);
        }
    }

    Plot {
        layers,
        x_bounds: category_bounds(violins.len()),
        y_bounds: padded_bounds(values.into_iter(), pad),
        x_labels: category_labels(violins.iter().map(|v| v.label.clone())),
    }
}

/// Vertical strokes covering `[x0, x1]` up to `height`, drawn as a filled bar.
fn fill(x0: f64, x1: f64, height: f64, step: f64) -> Vec<(f64, f64)> {
    let span = x1 - x0;
    let strokes = if step > 0.0 && span > 0.0 {
        ((span / step).floor() as usize).min(MAX_STROKES)
    } else {
        0
    };
    let step = if strokes > 0 { span / strokes as f64 } else { 0.0 };
    (0..=strokes).map(|i| (x0 + step * i as f64, height)).collect()
}

fn category_span(n: usize) -> f64 {
    n.max(1) as f64
}

/// Categories sit at 0..n, each with half a slot of margin.
fn category_bounds(n: usize) -> [f64; 2] {
    [-0.5, n.max(1) as f64 - 0.5]
}

/// Labels for evenly spread ticks: one under each category, blanks between.
fn category_labels(labels: impl Iterator<Item = String>) -> Vec<String> {
    let mut out = vec![String::new()];
    for label in labels {
        out.push(label);
        out.push(String::new());
    }
    out
}

fn numeric_labels(bounds: [f64; 2]) -> Vec<String> {
    vec![
        format_axis_label(bounds[0]),
        format_axis_label((bounds[0] + bounds[1]) / 2.0),
        format_axis_label(bounds[1]),
    ]
}

/// Min/max of finite values with a relative margin; `[0, 1]` when empty.
fn padded_bounds(values: impl Iterator<Item = f64>, pad: f64) -> [f64; 2] {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() {
        return [0.0, 1.0];
    }
    if (max - min).abs() < 1e-12 {
        let half = 0.5_f64.max(min.abs() * 1e-9);
        return [min - half, max + half];
    }
    let margin = (max - min) * pad;
    [min - margin, max + margin]
}

fn draw_heatmap(
    f: &mut Frame<'_>,
    inner: Rect,
    figure: &Figure,
    pivot: &PivotTable,
    palette: ColorPalette,
    config: &HeatmapLayoutConfig,
    colors: &ThemeColors,
) {
    if pivot.is_empty() {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.fg0))
            .alignment(Alignment::Center);
        f.render_widget(para, inner);
        return;
    }

    let row_labels: Vec<String> = pivot.row_keys.iter().map(|k| k.to_string()).collect();
    let col_labels: Vec<String> = pivot.col_keys.iter().map(|k| k.to_string()).collect();
    let label_width = row_labels
        .iter()
        .map(|l| l.chars().count() as u16 + 1)
        .max()
        .unwrap_or(1)
        .min(config.label_width);

    // Colorbar on top, then the grid, column labels and the x axis title
    let grid = Rect {
        x: inner.x + label_width,
        y: inner.y + config.colorbar_height,
        width: inner.width.saturating_sub(label_width),
        height: inner.height.saturating_sub(config.colorbar_height + 2),
    };
    if grid.width == 0 || grid.height == 0 {
        return;
    }

    let (min_count, max_count) = pivot.range();
    let range = (max_count - min_count).max(1) as f64;

    draw_colorbar(f, inner, grid, (min_count, max_count), palette, config, colors);

    let rows = pivot.n_rows();
    let cols = pivot.n_cols();
    let disp_rows = rows.min(grid.height as usize).max(1);
    let disp_cols = cols.min(grid.width as usize / config.pixel_width).max(1);
    let cell_h = (grid.height as usize / disp_rows).max(1);
    let cell_w = (grid.width as usize / disp_cols).max(1);

    for dy in 0..disp_rows {
        let row = dy * rows / disp_rows;
        for dx in 0..disp_cols {
            let col = dx * cols / disp_cols;
            let count = pivot.get(row, col);
            let color = palette.color((count - min_count) as f64 / range);
            for py in 0..cell_h {
                for px in 0..cell_w {
                    let x = grid.x + (dx * cell_w + px) as u16;
                    let y = grid.y + (dy * cell_h + py) as u16;
                    if x >= grid.x + grid.width || y >= grid.y + grid.height {
                        continue;
                    }
                    if let Some(cell) = f.buffer_mut().cell_mut((x, y)) {
                        cell.set_char('█').set_fg(color);
                    }
                }
            }
        }

        // Row label, right-aligned against the grid, on the row's middle line
        let label = truncate_to_width(&row_labels[row], label_width.saturating_sub(1) as usize);
        let y = grid.y + (dy * cell_h + cell_h / 2) as u16;
        let start = grid.x.saturating_sub(label.chars().count() as u16 + 1);
        write_text(f, start, y, &label, colors.green, grid.x);
    }

    // Column labels under the grid
    let label_y = grid.y + (disp_rows * cell_h) as u16;
    let every = if cell_w >= 3 { 1 } else { (4 / cell_w).max(1) };
    for dx in (0..disp_cols).step_by(every) {
        let col = dx * cols / disp_cols;
        let label = truncate_to_width(&col_labels[col], (cell_w * every).saturating_sub(1).max(1));
        let x = grid.x + (dx * cell_w) as u16;
        write_text(f, x, label_y, &label, colors.green, inner.x + inner.width);
    }

    // Axis titles
    let x_title = truncate_to_width(&figure.x_label, grid.width as usize);
    let x_title_x = grid.x + (grid.width.saturating_sub(x_title.chars().count() as u16)) / 2;
    write_text(f, x_title_x, label_y + 1, &x_title, colors.fg0, inner.x + inner.width);
    let y_title = truncate_to_width(&figure.y_label, label_width as usize);
    write_text(f, inner.x, inner.y, &y_title, colors.fg0, inner.x + label_width);
}

fn draw_colorbar(
    f: &mut Frame<'_>,
    inner: Rect,
    grid: Rect,
    (min_count, max_count): (u64, u64),
    palette: ColorPalette,
    config: &HeatmapLayoutConfig,
    colors: &ThemeColors,
) {
    let min_label = min_count.to_string();
    let max_label = max_count.to_string();
    let reserved = min_label.len() + max_label.len() + 2;
    let width = config
        .colorbar_width
        .min((grid.width as usize).saturating_sub(reserved));
    if width == 0 {
        return;
    }
    let start = grid.x + ((grid.width as usize - width) / 2) as u16;
    let right = inner.x + inner.width;

    for i in 0..width {
        let t = i as f64 / width.saturating_sub(1).max(1) as f64;
        let x = start + i as u16;
        if x < right {
            if let Some(cell) = f.buffer_mut().cell_mut((x, inner.y)) {
                cell.set_char('█').set_fg(palette.color(t));
            }
        }
    }

    let min_x = start.saturating_sub(min_label.len() as u16 + 1);
    write_text(f, min_x, inner.y, &min_label, colors.green, right);
    write_text(f, start + width as u16 + 1, inner.y, &max_label, colors.green, right);
}

/// Write `text` at (`x`, `y`) without crossing column `limit`.
fn write_text(f: &mut Frame<'_>, x: u16, y: u16, text: &str, color: Color, limit: u16) {
    for (i, ch) in text.chars().enumerate() {
        let cx = x + i as u16;
        if cx >= limit {
            break;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((cx, y)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::data::{Column, ColumnKind, Value};
    use crate::plot::Bar;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &ViewerState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        let layout = LayoutConfig::default();
        terminal
            .draw(|f| draw_viewer(f, state, f.area(), &layout, &colors))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn figure(body: FigureBody) -> Figure {
        Figure {
            title: "Count Plot of None vs day".into(),
            x_label: "day".into(),
            y_label: "None".into(),
            body,
        }
    }

    #[test]
    fn aspect_rect_fits_three_by_two() {
        let wide = aspect_rect(Rect::new(0, 0, 90, 20), 3.0);
        assert_eq!(wide, Rect::new(15, 0, 60, 20));
        let tall = aspect_rect(Rect::new(0, 0, 60, 40), 3.0);
        assert_eq!(tall, Rect::new(0, 10, 60, 20));
    }

    #[test]
    fn renders_title_and_bars() {
        let mut state = ViewerState::new();
        state.show(Ok(figure(FigureBody::Bars(vec![
            Bar { label: "Sun".into(), value: 3.0 },
            Bar { label: "Sat".into(), value: 2.0 },
        ]))));
        let text = render(&state, 120, 40);
        assert!(text.contains("Count Plot of None vs day"));
        assert!(text.contains("Sun"));
    }

    #[test]
    fn renders_validation_error() {
        let mut state = ViewerState::new();
        state.show(Err(GenerateError::Validation(
            crate::plot::HEATMAP_AXES_REQUIRED.to_string(),
        )));
        let text = render(&state, 120, 20);
        assert!(text.contains("Heatmap requires both X-axis and Y-axis to be selected"));
    }

    #[test]
    fn renders_heatmap_labels() {
        let day = Column::new(
            "day",
            ColumnKind::Categorical,
            vec![Value::Text("Sat".into()), Value::Text("Sun".into())],
        );
        let sex = Column::new(
            "sex",
            ColumnKind::Categorical,
            vec![Value::Text("F".into()), Value::Text("M".into())],
        );
        let mut state = ViewerState::new();
        state.show(Ok(Figure {
            title: "Heatmap of sex vs day".into(),
            x_label: "day".into(),
            y_label: "sex".into(),
            body: FigureBody::Heatmap(PivotTable::count(&day, &sex)),
        }));
        let text = render(&state, 120, 40);
        assert!(text.contains("Heatmap of sex vs day"));
        assert!(text.contains("Sat"));
        assert!(text.contains("Sun"));
        assert!(text.contains('█'));
    }

    #[test]
    fn empty_axes_still_show_title() {
        let mut state = ViewerState::new();
        state.show(Ok(figure(FigureBody::Empty)));
        let text = render(&state, 120, 40);
        assert!(text.contains("Count Plot of None vs day"));
    }

    #[test]
    fn padded_bounds_handle_flat_and_empty_data() {
        assert_eq!(padded_bounds([2.0, 2.0].into_iter(), 0.1), [1.5, 2.5]);
        assert_eq!(padded_bounds(std::iter::empty(), 0.1), [0.0, 1.0]);
        assert_eq!(padded_bounds([0.0, 10.0].into_iter(), 0.1), [-1.0, 11.0]);
    }

    #[test]
    fn flat_large_values_still_span_an_interval() {
        let [lo, hi] = padded_bounds([1e17, 1e17].into_iter(), 0.1);
        assert!(lo < 1e17 && 1e17 < hi);
    }

    #[test]
    fn fill_is_bounded_for_any_step() {
        assert_eq!(fill(0.0, 1.0, 2.0, 0.25).len(), 5);
        assert_eq!(fill(1e17, 1e17, 3.0, 0.0), vec![(1e17, 3.0)]);
        assert_eq!(fill(1e17, 1e17 + 1e8, 3.0, f64::EPSILON).len(), MAX_STROKES + 1);
        assert_eq!(fill(0.0, 1.0, 1.0, f64::NAN).len(), 1);
    }

    fn numbers(name: &str, values: &[f64]) -> Column {
        Column::new(
            name,
            ColumnKind::Numeric,
            values.iter().map(|v| Value::Number(*v)).collect(),
        )
    }

    fn tips() -> crate::data::Dataset {
        crate::data::Dataset::new(
            std::path::PathBuf::from("tips.csv"),
            vec![
                numbers("total_bill", &[16.99, 10.34, 21.01, 23.68, 24.59, 25.29, 8.77]),
                numbers("tip", &[1.01, 1.66, 3.5, 3.31, 3.61, 4.71, 2.0]),
                Column::new(
                    "sex",
                    ColumnKind::Categorical,
                    ["Female", "Male", "Male", "Male", "Female", "Male", "Male"]
                        .iter()
                        .map(|v| Value::Text(v.to_string()))
                        .collect(),
                ),
            ],
        )
    }

    fn render_generated(
        ds: &crate::data::Dataset,
        x: &str,
        y: &str,
        kind: crate::plot::PlotKind,
    ) -> (Figure, String) {
        let x = crate::plot::AxisChoice::Column(x.to_string());
        let y = crate::plot::AxisChoice::Column(y.to_string());
        let figure = crate::plot::generate(ds, &x, &y, Some(kind)).unwrap();
        let mut state = ViewerState::new();
        state.show(Ok(figure.clone()));
        (figure, render(&state, 120, 40))
    }

    #[test]
    fn renders_line_and_scatter() {
        use crate::plot::PlotKind;
        let ds = tips();
        let (fig, text) = render_generated(&ds, "total_bill", "tip", PlotKind::Line);
        assert!(matches!(fig.body, FigureBody::Line(_)));
        assert!(text.contains("Line Plot of tip vs total_bill"));
        assert!(text.contains("total_bill"));

        let (fig, text) = render_generated(&ds, "total_bill", "tip", PlotKind::Scatter);
        assert!(matches!(fig.body, FigureBody::Scatter(_)));
        assert!(text.contains("Scatter Plot of tip vs total_bill"));
    }

    #[test]
    fn renders_histogram_with_density() {
        let (fig, text) = render_generated(&tips(), "total_bill", "tip", crate::plot::PlotKind::Distribution);
        let FigureBody::Histogram(hist) = &fig.body else {
            panic!("expected histogram");
        };
        assert!(!hist.kde.is_empty());
        assert!(text.contains("Distribution Plot of tip vs total_bill"));
        assert!(!text.contains("No data to display"));
    }

    #[test]
    fn renders_distribution_of_constant_large_values() {
        let ds = crate::data::Dataset::new(
            std::path::PathBuf::from("ids.csv"),
            vec![numbers("id", &[1e17, 1e17, 1e17])],
        );
        let (fig, text) = render_generated(&ds, "id", "id", crate::plot::PlotKind::Distribution);
        let FigureBody::Histogram(hist) = &fig.body else {
            panic!("expected histogram");
        };
        assert_eq!(hist.counts, vec![3]);
        assert!(text.contains("Distribution Plot of id vs id"));
    }

    #[test]
    fn renders_distribution_with_far_outlier() {
        let mut values: Vec<f64> = (0..1000).map(|i| i as f64 / 1000.0).collect();
        values.push(1e12);
        let ds = crate::data::Dataset::new(
            std::path::PathBuf::from("skew.csv"),
            vec![numbers("v", &values)],
        );
        let (_, text) = render_generated(&ds, "v", "v", crate::plot::PlotKind::Distribution);
        assert!(text.contains("Distribution Plot of v vs v"));
    }

    #[test]
    fn renders_boxes_and_violins() {
        use crate::plot::PlotKind;
        let ds = tips();
        let (fig, text) = render_generated(&ds, "sex", "tip", PlotKind::Box);
        assert!(matches!(fig.body, FigureBody::Boxes(_)));
        assert!(text.contains("Box Plot of tip vs sex"));
        assert!(text.contains("Female"));

        let (fig, text) = render_generated(&ds, "sex", "tip", PlotKind::Violin);
        assert!(matches!(fig.body, FigureBody::Violins(_)));
        assert!(text.contains("Violin Plot of tip vs sex"));
        assert!(text.contains("Male"));
    }

    #[test]
    fn category_ticks_land_on_positions() {
        let labels = category_labels(["a".to_string(), "b".to_string()].into_iter());
        assert_eq!(labels, vec!["", "a", "", "b", ""]);
        assert_eq!(category_bounds(2), [-0.5, 1.5]);
    }
}
