//! Geometry-to-color mapping for each picker shape.
//!
//! Every shape maps a [`NormalizedOffset`](crate::NormalizedOffset) to a
//! color and back. Shapes that restrict where the indicator may sit also
//! implement [`Constrain`], which pulls a dragged pointer back onto the shape.

mod circle;
mod rectangle;
mod triangle;
mod wheel;

pub use circle::{Annulus, Circle};
pub use rectangle::{FullRectangle, SvRectangle};
pub use triangle::{SvTriangle, Triangle};
pub use wheel::{hue_to_offset, offset_to_hue, Wheel};

use floem::kurbo::Point;

use crate::error::GeometryError;

/// Keeps a pointer position on a shape while dragging.
pub trait Constrain {
    /// Project `position` onto the shape. Positions already on it pass through.
    fn constrain(&self, position: Point) -> Result<Point, GeometryError>;
}

/// Rectangular pickers accept any position; normalization clamps to the box.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl Constrain for Unconstrained {
    fn constrain(&self, position: Point) -> Result<Point, GeometryError> {
        Ok(position)
    }
}

/// Hue in degrees from the angle of `position` around `center`.
pub(crate) fn hue_around(position: Point, center: Point) -> f64 {
    let delta = position - center;
    crate::math::normalize_degrees(delta.y.atan2(delta.x).to_degrees())
}
