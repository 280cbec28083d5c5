//! Layout configuration constants for the dashboard.

/// Configuration for the head preview table.
#[derive(Debug, Clone)]
pub struct PreviewLayoutConfig {
    /// Rows shown in the preview.
    pub rows: usize,
    /// Width of each column in characters.
    pub column_width: u16,
    /// Width of the row index column.
    pub index_width: u16,
}

impl Default for PreviewLayoutConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            column_width: 12,
            index_width: 4,
        }
    }
}

/// Configuration for the chart area.
#[derive(Debug, Clone)]
pub struct ChartLayoutConfig {
    /// Figure width in inches, as a plotting library would size it.
    pub figure_width: f64,
    /// Figure height in inches.
    pub figure_height: f64,
    /// Terminal cells are roughly twice as tall as they are wide.
    pub char_aspect_ratio: f64,
    /// Padding factor for the value axis (0.1 = 10% margin).
    pub y_axis_padding_factor: f64,
}

impl ChartLayoutConfig {
    /// Width to height ratio of the figure, in terminal cells.
    pub fn cell_aspect(&self) -> f64 {
        self.figure_width / self.figure_height * self.char_aspect_ratio
    }
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            figure_width: 6.0,
            figure_height: 4.0,
            char_aspect_ratio: 2.0,
            y_axis_padding_factor: 0.1,
        }
    }
}

/// Configuration for heatmap view layout.
#[derive(Debug, Clone)]
pub struct HeatmapLayoutConfig {
    /// Terminal characters per cell horizontally (for aspect ratio correction).
    pub pixel_width: usize,
    /// Height reserved for colorbar.
    pub colorbar_height: u16,
    /// Width of colorbar in characters.
    pub colorbar_width: usize,
    /// Width reserved for row labels.
    pub label_width: u16,
}

impl Default for HeatmapLayoutConfig {
    fn default() -> Self {
        Self {
            pixel_width: 2,
            colorbar_height: 1,
            colorbar_width: 40,
            label_width: 10,
        }
    }
}

/// Combined layout configuration for the dashboard.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the preview table.
    pub preview: PreviewLayoutConfig,
    /// Configuration for charts.
    pub chart: ChartLayoutConfig,
    /// Configuration for heatmaps.
    pub heatmap: HeatmapLayoutConfig,
}
