use floem::kurbo::{Point, Size};

use super::{hue_around, Annulus, Constrain};
use crate::error::{GeometryError, ValidationError};
use crate::offset::{checked_size, NormalizedOffset};

/// Hue ring filling the largest square that fits in `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    size: Size,
    thickness: f64,
}

impl Wheel {
    /// `thickness` is the ring width as a fraction of the outer diameter.
    pub fn new(size: Size, thickness: f64) -> Result<Self, GeometryError> {
        let size = checked_size(size)?;
        if !(thickness > 0.0 && thickness <= 0.5) {
            return Err(GeometryError::InvalidThickness(thickness));
        }
        Ok(Self { size, thickness })
    }

    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    pub fn outer_radius(&self) -> f64 {
        self.size.width.min(self.size.height) / 2.0
    }

    /// Ring width in pixels.
    pub fn ring_width(&self) -> f64 {
        self.outer_radius() * 2.0 * self.thickness
    }

    pub fn inner_radius(&self) -> f64 {
        (self.outer_radius() - self.ring_width()).max(0.0)
    }

    /// Radius of the circle the indicator travels on, midway through the ring.
    pub fn track_radius(&self) -> f64 {
        self.outer_radius() - self.ring_width() / 2.0
    }

    pub fn annulus(&self) -> Result<Annulus, GeometryError> {
        Annulus::new(self.center(), self.outer_radius(), self.inner_radius())
    }

    /// Hue of a widget-local pointer position.
    pub fn hue_at(&self, position: Point) -> f64 {
        hue_around(position, self.center())
    }

    /// Indicator position for `hue` on the middle of the ring.
    pub fn position_for(&self, hue: f64) -> Result<Point, ValidationError> {
        let offset = hue_to_offset(hue)?;
        let diameter = self.track_radius() * 2.0;
        let center = self.center();
        Ok(Point::new(
            center.x + (offset.x() - 0.5) * diameter,
            center.y + (offset.y() - 0.5) * diameter,
        ))
    }
}

impl Constrain for Wheel {
    fn constrain(&self, position: Point) -> Result<Point, GeometryError> {
        self.annulus()?.constrain(position)
    }
}

/// Point on the unit-box circle (center `(0.5, 0.5)`, radius 0.5) at `hue`.
pub fn hue_to_offset(hue: f64) -> Result<NormalizedOffset, ValidationError> {
    let angle = ValidationError::check("hue", hue, 0.0, 360.0)?.to_radians();
    NormalizedOffset::clamped(0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin())
}

/// Hue in `[0, 360)` of `position` seen from `center`.
pub fn offset_to_hue(position: Point, center: Point) -> f64 {
    hue_around(position, center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns() {
        let right = hue_to_offset(0.0).unwrap();
        assert_eq!((right.x(), right.y()), (1.0, 0.5));
        let down = hue_to_offset(90.0).unwrap();
        assert!((down.x() - 0.5).abs() < 1e-12 && (down.y() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_out_of_range_hue() {
        assert_eq!(hue_to_offset(360.1).unwrap_err().field, "hue");
        assert!(hue_to_offset(-0.1).is_err());
    }

    #[test]
    fn geometry_from_size() {
        let wheel = Wheel::new(Size::new(200.0, 300.0), 0.1).unwrap();
        assert_eq!(wheel.center(), Point::new(100.0, 150.0));
        assert_eq!(wheel.outer_radius(), 100.0);
        assert!((wheel.ring_width() - 20.0).abs() < 1e-12);
        assert!((wheel.inner_radius() - 80.0).abs() < 1e-12);
        assert!((wheel.track_radius() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn thickness_is_validated() {
        let size = Size::new(10.0, 10.0);
        assert_eq!(Wheel::new(size, 0.0), Err(GeometryError::InvalidThickness(0.0)));
        assert!(Wheel::new(size, 0.6).is_err());
        assert!(Wheel::new(size, 0.5).is_ok());
        assert!(Wheel::new(Size::ZERO, 0.2).is_err());
    }

    #[test]
    fn indicator_follows_hue() {
        let wheel = Wheel::new(Size::new(100.0, 100.0), 0.2).unwrap();
        let p = wheel.position_for(180.0).unwrap();
        assert!((p.x - 10.0).abs() < 1e-9 && (p.y - 50.0).abs() < 1e-9);
        assert!((wheel.hue_at(p) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn constrain_keeps_pointer_on_ring() {
        let wheel = Wheel::new(Size::new(100.0, 100.0), 0.2).unwrap();
        let p = wheel.constrain(Point::new(50.0, 55.0)).unwrap();
        assert!((p.distance(wheel.center()) - wheel.inner_radius()).abs() < 1e-9);
    }
}
