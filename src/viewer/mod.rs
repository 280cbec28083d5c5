//! Figure viewer - shows the outcome of the last "generate" action.
//!
//! This module holds the rendered figure (or the reason there is none) and
//! the color palette used for heatmaps. Nothing is cached: the state is
//! cleared whenever a selection changes.

pub mod ui;

use crate::error::GenerateError;
use crate::plot::Figure;

/// Color palette for heatmap visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Yellow-green-blue sequential colormap.
    #[default]
    YlGnBu,
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
}

impl ColorPalette {
    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::YlGnBu => Self::Viridis,
            Self::Viridis => Self::Plasma,
            Self::Plasma => Self::YlGnBu,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::YlGnBu => "YlGnBu",
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
        }
    }
}

/// State for the figure viewer.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    /// Result of the last generate action, if any.
    pub outcome: Option<Result<Figure, GenerateError>>,
    /// Color palette for heatmaps.
    pub color_palette: ColorPalette,
}

impl ViewerState {
    /// Create an empty viewer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a figure or the error that replaced it.
    pub fn show(&mut self, outcome: Result<Figure, GenerateError>) {
        self.outcome = Some(outcome);
    }

    /// Drop whatever is shown.
    pub fn clear(&mut self) {
        self.outcome = None;
    }

    /// The figure on display.
    pub fn figure(&self) -> Option<&Figure> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }

    /// The error on display.
    pub fn error(&self) -> Option<&GenerateError> {
        self.outcome.as_ref().and_then(|o| o.as_ref().err())
    }

    /// Cycle to next color palette.
    pub fn cycle_color_palette(&mut self) {
        self.color_palette = self.color_palette.next();
    }
}
