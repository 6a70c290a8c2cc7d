//! Sizing, color, and styling constants for the pickers.

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Indicator ring radius on the 2D pickers
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on 1D sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for swatches
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Minimum edge length of a 2D picker
pub const MIN_PICKER_SIZE: f32 = 100.0;

/// Hue ring width as a fraction of the wheel diameter
pub const WHEEL_THICKNESS: f64 = 0.12;

/// Gap between the hue ring and the inner shape, in pixels
pub const WHEEL_INSET: f64 = 6.0;

/// Anti-alias feather width in raster pixels for round edges
pub const FEATHER: f64 = 2.0;

/// Input field width
pub const INPUT_WIDTH: f32 = 30.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 72.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Checkerboard cell size (for alpha backgrounds)
#[cfg(feature = "alpha")]
pub const CHECKER_CELL: f64 = 5.0;
