//! Normalized offsets: positions expressed as a fraction of a bounding box.

use floem::kurbo::{Point, Size};

use crate::error::{GeometryError, PickerError, ValidationError};

/// A position inside a shape's bounding box, both coordinates in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedOffset {
    x: f64,
    y: f64,
}

impl NormalizedOffset {
    pub const ZERO: NormalizedOffset = NormalizedOffset { x: 0.0, y: 0.0 };
    pub const CENTER: NormalizedOffset = NormalizedOffset { x: 0.5, y: 0.5 };

    pub fn new(x: f64, y: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            x: ValidationError::check("x", x, 0.0, 1.0)?,
            y: ValidationError::check("y", y, 0.0, 1.0)?,
        })
    }

    /// Clamp computed coordinates into the unit square.
    ///
    /// Only for values derived by the mappers, where the result lies in range
    /// up to rounding. NaN still fails.
    pub(crate) fn clamped(x: f64, y: f64) -> Result<Self, ValidationError> {
        Self::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0))
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// The offset as a point in unit space.
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Scale back into a box of `size`.
    pub fn to_position(self, size: Size) -> Point {
        Point::new(self.x * size.width, self.y * size.height)
    }

    /// Normalize a widget-local position by `size`, clamping into the box.
    pub fn from_position(position: Point, size: Size) -> Result<Self, PickerError> {
        let position = checked_position(position)?;
        let size = checked_size(size)?;
        Ok(Self::clamped(
            position.x / size.width,
            position.y / size.height,
        )?)
    }
}

impl Default for NormalizedOffset {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A size with a positive, finite width and height.
pub(crate) fn checked_size(size: Size) -> Result<Size, GeometryError> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if usable(size.width) && usable(size.height) {
        Ok(size)
    } else {
        Err(GeometryError::UnspecifiedSize {
            width: size.width,
            height: size.height,
        })
    }
}

pub(crate) fn checked_position(position: Point) -> Result<Point, GeometryError> {
    if position.x.is_finite() && position.y.is_finite() {
        Ok(position)
    } else {
        Err(GeometryError::NonFinitePosition {
            x: position.x,
            y: position.y,
        })
    }
}
