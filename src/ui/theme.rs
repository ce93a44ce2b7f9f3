//! Color theme constants for the Atlas UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row highlight
pub const COLOR_SELECTED: Color = Color::LightGreen;

/// Error/status warnings
pub const COLOR_ERROR: Color = Color::LightRed;
