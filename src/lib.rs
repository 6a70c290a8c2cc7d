//! # floem-shape-picker
//!
//! Color pickers for [Floem](https://github.com/lapce/floem) built on a
//! small geometry core.
//!
//! The core maps pointer positions inside a shape (circle, rectangle,
//! triangle, hue ring) to colors and back, clamps drags onto the shape and
//! converts between RGB, HSL, HSB and CMYK. The widgets wire pointer events
//! into it and paint the result.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_shape_picker::{color_picker, ColorModel, PickerKind, Rgb};
//!
//! let color = RwSignal::new(ColorModel::from(Rgb::new(59, 130, 246)));
//! // Use `color_picker(color, PickerKind::WheelTriangle)` in your view tree.
//! ```
//!
//! The core can be used without any widget:
//!
//! ```rust
//! use floem_shape_picker::{Circle, NormalizedOffset};
//!
//! let circle = Circle::new(50.0).unwrap();
//! let hsb = circle.position_to_color(NormalizedOffset::new(1.0, 0.5).unwrap());
//! assert_eq!(hsb.hue(), 0.0);
//! assert_eq!(hsb.saturation(), 100.0);
//! ```

mod color;
mod drag;
mod error;
mod math;
mod offset;
mod shape;

#[cfg(feature = "alpha")]
mod checkerboard;
mod circular_picker;
mod constants;
mod editor;
mod inputs;
mod raster;
mod rectangular_picker;
mod slider;
mod wheel_picker;

pub use color::{Cmyk, ColorModel, ColorSpace, Hsb, Hsl, Rgb};
pub use drag::{map_pointer, DragState, Fallback};
pub use error::{GeometryError, PickerError, Result, ValidationError};
pub use offset::NormalizedOffset;
pub use shape::{
    hue_to_offset, offset_to_hue, Annulus, Circle, Constrain, FullRectangle, SvRectangle,
    SvTriangle, Triangle, Unconstrained, Wheel,
};

pub use circular_picker::{circular_picker, CircularPicker};
pub use editor::PickerKind;
pub use rectangular_picker::{rectangular_picker, RectangularPicker};
pub use slider::{channel_slider, slider_picker, Channel, ChannelSlider};
pub use wheel_picker::{wheel_rectangle_picker, wheel_triangle_picker, WheelPicker};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the full picker panel for `color` using the `kind` picker shape.
///
/// The panel reads from and writes to `color`, keeping whichever model the
/// signal holds. External changes to the signal are reflected in the UI.
pub fn color_picker(color: RwSignal<ColorModel>, kind: PickerKind) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    editor::color_editor(color, kind)
}
