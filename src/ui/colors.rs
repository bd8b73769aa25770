//! Color palette for the form
//!
//! Muted colors shared by the row widgets and the terminal front end

use ratatui::style::Color;
use ratatui::widgets::BorderType;

// Chrome
/// Border of the form list
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Border of focused overlays
pub const SELECTED: Color = Color::Rgb(100, 180, 220);
/// Background behind the highlighted row
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);
/// Overlay background
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
/// Border style used everywhere
pub const BORDER_TYPE: BorderType = BorderType::Rounded;

// Text
/// Row titles
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Secondary text such as hints
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Key help
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Accents
/// Checked toggles
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
