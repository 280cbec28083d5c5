//! Utility functions.
//!
//! This module provides color maps and layout configuration.

pub mod colormaps;
pub mod layout_config;

pub use layout_config::LayoutConfig;
