//! Color theme constants for the Ayah Card UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Focused control row - bright green
pub const COLOR_FOCUS: Color = Color::LightGreen;

/// Active inline edit session - yellow
pub const COLOR_EDIT: Color = Color::Yellow;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error notices and out-of-range hints - red
pub const COLOR_ERROR: Color = Color::Red;

/// Success/info notices - green
pub const COLOR_INFO: Color = Color::LightGreen;

/// Spinner while a fetch or export is in flight
pub const COLOR_BUSY: Color = Color::Cyan;
