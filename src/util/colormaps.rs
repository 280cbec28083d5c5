//! Color mapping functions for data visualization.

use crate::viewer::ColorPalette;
use ratatui::style::Color;

/// ColorBrewer YlGnBu, light yellow to dark blue.
const YLGNBU: [(u8, u8, u8); 9] = [
    (255, 255, 217),
    (237, 248, 177),
    (199, 233, 180),
    (127, 205, 187),
    (65, 182, 196),
    (29, 145, 192),
    (34, 94, 168),
    (37, 52, 148),
    (8, 29, 88),
];

impl ColorPalette {
    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::YlGnBu => interpolate_stops(&YLGNBU, t),
            Self::Viridis => viridis_color(t),
            Self::Plasma => plasma_color(t),
        }
    }
}

/// Linear interpolation between evenly spaced color stops.
fn interpolate_stops(stops: &[(u8, u8, u8)], t: f64) -> Color {
    let last = stops.len() - 1;
    let pos = t * last as f64;
    let i = (pos.floor() as usize).min(last.saturating_sub(1));
    let frac = pos - i as f64;
    let (r0, g0, b0) = stops[i];
    let (r1, g1, b1) = stops[(i + 1).min(last)];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Viridis colormap approximation.
fn viridis_color(t: f64) -> Color {
    // Simplified viridis palette using piecewise linear interpolation
    interpolate_stops(&[(68, 1, 84), (33, 104, 109), (253, 231, 37)], t)
}

/// Plasma colormap approximation.
fn plasma_color(t: f64) -> Color {
    interpolate_stops(&[(13, 8, 135), (180, 54, 121), (240, 175, 12)], t)
}
