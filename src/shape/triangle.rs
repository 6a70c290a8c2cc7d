use floem::kurbo::{Point, Size};

use super::Constrain;
use crate::color::Hsb;
use crate::error::{GeometryError, PickerError, ValidationError};
use crate::offset::{checked_position, checked_size, NormalizedOffset};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Below this the triangle is treated as collinear.
const MIN_AREA: f64 = 1e-9;

/// Saturation is undefined where `sqrt(3) * x - y + 2` vanishes (the black corner).
const MIN_DENOMINATOR: f64 = 1e-9;

/// A triangle in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    pub fn new(vertices: [Point; 3]) -> Result<Self, GeometryError> {
        for vertex in vertices {
            checked_position(vertex)?;
        }
        let triangle = Self { vertices };
        if triangle.signed_area().abs() < MIN_AREA {
            return Err(GeometryError::DegenerateTriangle);
        }
        Ok(triangle)
    }

    /// Equilateral triangle inscribed in the circle of diameter
    /// `min(width, height)`, centered in `size`, apex pointing up.
    pub fn inscribed(size: Size) -> Result<Self, GeometryError> {
        let size = checked_size(size)?;
        let radius = size.width.min(size.height) / 2.0;
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let vertex = |index: u32| {
            let angle = (120.0 * index as f64 - 90.0).to_radians();
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };
        Self::new([vertex(0), vertex(1), vertex(2)])
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        0.5 * (-b.y * c.x + a.y * (-b.x + c.x) + a.x * (b.y - c.y) + b.x * c.y)
    }

    /// Barycentric inside test; points on an edge count as inside.
    pub fn contains(&self, point: Point) -> bool {
        let [a, b, c] = self.vertices;
        let scale = 1.0 / (2.0 * self.signed_area());
        let s = scale * (a.y * c.x - a.x * c.y + (c.y - a.y) * point.x + (a.x - c.x) * point.y);
        let t = scale * (a.x * b.y - a.y * b.x + (a.y - b.y) * point.x + (b.x - a.x) * point.y);
        s >= 0.0 && t >= 0.0 && s + t <= 1.0
    }

    /// Identity inside; otherwise the nearest point on the perimeter.
    pub fn clamp(&self, point: Point) -> Point {
        if self.contains(point) {
            return point;
        }
        let [a, b, c] = self.vertices;
        [
            closest_on_segment(point, a, b),
            closest_on_segment(point, b, c),
            closest_on_segment(point, c, a),
        ]
        .into_iter()
        .min_by(|p, q| point.distance(*p).total_cmp(&point.distance(*q)))
        .unwrap_or(point)
    }
}

impl Constrain for Triangle {
    fn constrain(&self, position: Point) -> Result<Point, GeometryError> {
        Ok(self.clamp(checked_position(position)?))
    }
}

fn closest_on_segment(p: Point, v: Point, w: Point) -> Point {
    let edge = w - v;
    let length_squared = edge.hypot2();
    if length_squared == 0.0 {
        return v;
    }
    let t = ((p - v).dot(edge) / length_squared).clamp(0.0, 1.0);
    v + edge * t
}

/// Saturation/value triangle for a hue chosen elsewhere.
///
/// The apex is the pure hue, the lower right corner white and the lower left
/// corner black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvTriangle {
    size: Size,
    triangle: Triangle,
}

impl SvTriangle {
    pub fn new(size: Size) -> Result<Self, GeometryError> {
        Ok(Self {
            size,
            triangle: Triangle::inscribed(size)?,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    fn radius(&self) -> f64 {
        self.size.width.min(self.size.height) / 2.0
    }

    /// Saturation and value are computed first and clamped afterwards. At
    /// the black corner the saturation denominator vanishes; the color there
    /// is black and saturation is reported as 0.
    pub fn position_to_color(
        &self,
        hue: f64,
        offset: NormalizedOffset,
    ) -> Result<Hsb, PickerError> {
        let hue = ValidationError::check("hue", hue, 0.0, 360.0)?;
        let position = offset.to_position(self.size);
        let radius = self.radius();
        let nx = (position.x - self.size.width / 2.0) / radius;
        let ny = (position.y - self.size.height / 2.0) / radius;

        let denominator = SQRT_3 * nx - ny + 2.0;
        let value = (denominator / 3.0).clamp(0.0, 1.0);
        let saturation = if denominator.abs() < MIN_DENOMINATOR {
            0.0
        } else {
            ((1.0 - 2.0 * ny) / denominator).clamp(0.0, 1.0)
        };
        Ok(Hsb::from_unit(hue, saturation, value))
    }

    /// Saturation and value are fractions in `[0, 1]`.
    pub fn color_to_offset(
        &self,
        saturation: f64,
        value: f64,
    ) -> Result<NormalizedOffset, ValidationError> {
        let s = ValidationError::check("saturation", saturation, 0.0, 1.0)?;
        let v = ValidationError::check("value", value, 0.0, 1.0)?;
        let radius = self.radius();
        let x = radius * (2.0 * v - s * v - 1.0) * SQRT_3 / 2.0;
        let y = radius * (1.0 - 3.0 * s * v) / 2.0;
        NormalizedOffset::clamped(
            (self.size.width / 2.0 + x) / self.size.width,
            (self.size.height / 2.0 + y) / self.size.height,
        )
    }
}

impl Constrain for SvTriangle {
    fn constrain(&self, position: Point) -> Result<Point, GeometryError> {
        self.triangle.constrain(position)
    }
}
