use floem::kurbo::Point;

use super::{hue_around, Constrain};
use crate::color::Hsb;
use crate::error::{GeometryError, ValidationError};
use crate::offset::{checked_position, NormalizedOffset};

/// Hue/saturation disc at full brightness.
///
/// Offsets are relative to the disc's bounding square (side `2 * radius`).
/// Angle maps to hue, distance from the center to saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, GeometryError> {
        if radius.is_finite() && radius > 0.0 {
            Ok(Self { radius })
        } else {
            Err(GeometryError::NonPositiveRadius(radius))
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        Point::new(self.radius, self.radius)
    }

    /// Color under `offset`. Value is always 1.
    pub fn position_to_color(&self, offset: NormalizedOffset) -> Hsb {
        let diameter = self.radius * 2.0;
        let position = Point::new(offset.x() * diameter, offset.y() * diameter);
        let distance = (position - self.center()).hypot().clamp(0.0, self.radius);
        let hue = hue_around(position, self.center());
        Hsb::from_unit(hue, distance / self.radius, 1.0)
    }

    /// Where `color` sits on the disc.
    ///
    /// The distance from the center is `saturation * value * radius`, so darker
    /// colors are drawn closer to the middle.
    pub fn color_to_offset(&self, color: &Hsb) -> Result<NormalizedOffset, ValidationError> {
        let angle = color.hue().to_radians();
        let distance = color.saturation() / 100.0 * color.brightness() / 100.0 * self.radius;
        let dx = distance * angle.cos();
        let dy = distance * angle.sin();
        let diameter = 2.0 * self.radius;
        NormalizedOffset::clamped((dx + self.radius) / diameter, (dy + self.radius) / diameter)
    }

    /// The disc as an annulus without a hole, centered in its bounding square.
    pub fn annulus(&self) -> Annulus {
        Annulus {
            center: self.center(),
            outer_radius: self.radius,
            inner_radius: 0.0,
        }
    }
}

/// Ring between two radii, in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
}

impl Annulus {
    pub fn new(center: Point, outer_radius: f64, inner_radius: f64) -> Result<Self, GeometryError> {
        let center = checked_position(center)?;
        if !(outer_radius.is_finite() && outer_radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius(outer_radius));
        }
        if !(0.0..=outer_radius).contains(&inner_radius) {
            return Err(GeometryError::InvalidAnnulus {
                outer: outer_radius,
                inner: inner_radius,
            });
        }
        Ok(Self {
            center,
            outer_radius,
            inner_radius,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn contains(&self, position: Point) -> bool {
        let distance = position.distance(self.center);
        (self.inner_radius..=self.outer_radius).contains(&distance)
    }

    /// Project `position` radially onto the ring, keeping its angle.
    ///
    /// The angle of the exact center is undefined; such a point lands on the
    /// inner boundary at angle 0.
    pub fn clamp(&self, position: Point) -> Point {
        let delta = position - self.center;
        let distance = delta.hypot();
        if (self.inner_radius..=self.outer_radius).contains(&distance) {
            return position;
        }
        let radius = distance.clamp(self.inner_radius, self.outer_radius);
        let angle = delta.y.atan2(delta.x);
        Point::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }
}

impl Constrain for Annulus {
    fn constrain(&self, position: Point) -> Result<Point, GeometryError> {
        Ok(self.clamp(checked_position(position)?))
    }
}

impl Constrain for Circle {
    fn constrain(&self, position: Point) -> Result<Point, GeometryError> {
        self.annulus().constrain(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(Circle::new(0.0), Err(GeometryError::NonPositiveRadius(0.0)));
        assert!(Circle::new(-3.0).is_err());
        assert!(Circle::new(f64::INFINITY).is_err());
    }

    #[test]
    fn center_is_white() {
        let circle = Circle::new(50.0).unwrap();
        let color = circle.position_to_color(NormalizedOffset::CENTER);
        assert_eq!(color.saturation(), 0.0);
        assert_eq!(color.brightness(), 100.0);
    }

    #[test]
    fn right_edge_is_saturated_red() {
        let circle = Circle::new(10.0).unwrap();
        let color = circle.position_to_color(NormalizedOffset::new(1.0, 0.5).unwrap());
        assert_eq!(color.hue(), 0.0);
        assert!((color.saturation() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn corner_saturation_is_capped() {
        let circle = Circle::new(10.0).unwrap();
        let color = circle.position_to_color(NormalizedOffset::new(1.0, 1.0).unwrap());
        assert!((color.hue() - 45.0).abs() < 1e-9);
        assert_eq!(color.saturation(), 100.0);
    }

    #[test]
    fn inverse_law_over_several_radii() {
        for radius in [0.5, 1.0, 37.0, 480.0] {
            let circle = Circle::new(radius).unwrap();
            for hue in [0.0, 1.0, 89.5, 180.0, 271.0, 359.9] {
                for saturation in [0.1, 0.5, 1.0] {
                    let color = Hsb::new(hue, saturation * 100.0, 100.0).unwrap();
                    let offset = circle.color_to_offset(&color).unwrap();
                    let back = circle.position_to_color(offset);
                    assert!(circular_distance(back.hue(), hue) < 1e-3, "hue {hue} at r={radius}");
                    assert!((back.saturation() / 100.0 - saturation).abs() < 1e-3);
                }
            }
        }
    }

    #[test]
    fn annulus_rejects_inverted_radii() {
        assert!(matches!(
            Annulus::new(Point::ORIGIN, 10.0, 12.0),
            Err(GeometryError::InvalidAnnulus { .. })
        ));
        assert!(Annulus::new(Point::ORIGIN, 0.0, 0.0).is_err());
    }

    #[test]
    fn annulus_clamp_projects_onto_nearest_boundary() {
        let ring = Annulus::new(Point::new(50.0, 50.0), 40.0, 30.0).unwrap();
        assert_eq!(ring.clamp(Point::new(85.0, 50.0)), Point::new(85.0, 50.0));
        let outside = ring.clamp(Point::new(150.0, 50.0));
        assert!((outside.x - 90.0).abs() < 1e-9 && (outside.y - 50.0).abs() < 1e-9);
        let inside = ring.clamp(Point::new(50.0, 60.0));
        assert!((inside.x - 50.0).abs() < 1e-9 && (inside.y - 80.0).abs() < 1e-9);
    }

    #[test]
    fn annulus_center_lands_on_inner_boundary() {
        let ring = Annulus::new(Point::new(50.0, 50.0), 40.0, 30.0).unwrap();
        let clamped = ring.clamp(ring.center());
        assert!((clamped.distance(ring.center()) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn constrain_rejects_nan() {
        let ring = Circle::new(10.0).unwrap().annulus();
        assert!(ring.constrain(Point::new(f64::NAN, 1.0)).is_err());
    }
}
