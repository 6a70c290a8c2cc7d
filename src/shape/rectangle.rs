use crate::color::{Hsb, Hsl};
use crate::error::ValidationError;
use crate::offset::NormalizedOffset;

/// Hue across x, lightness down y, saturation peaking at mid-height.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullRectangle;

impl FullRectangle {
    pub fn position_to_color(&self, offset: NormalizedOffset) -> Hsl {
        let hue = offset.x() * 360.0;
        let y = offset.y();
        let saturation = if y <= 0.0 || y >= 1.0 {
            0.0
        } else {
            1.0 - (0.5 - y).abs() * 2.0
        };
        Hsl::from_unit(hue, saturation, 1.0 - y)
    }

    pub fn color_to_offset(&self, color: &Hsl) -> Result<NormalizedOffset, ValidationError> {
        NormalizedOffset::new(color.hue() / 360.0, 1.0 - color.lightness() / 100.0)
    }
}

/// Saturation across x, value down y, for a hue chosen elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvRectangle;

impl SvRectangle {
    pub fn position_to_color(
        &self,
        hue: f64,
        offset: NormalizedOffset,
    ) -> Result<Hsb, ValidationError> {
        let hue = ValidationError::check("hue", hue, 0.0, 360.0)?;
        Ok(Hsb::from_unit(hue, offset.x(), 1.0 - offset.y()))
    }

    /// Saturation and value are fractions in `[0, 1]`.
    pub fn color_to_offset(
        &self,
        saturation: f64,
        value: f64,
    ) -> Result<NormalizedOffset, ValidationError> {
        let saturation = ValidationError::check("saturation", saturation, 0.0, 1.0)?;
        let value = ValidationError::check("value", value, 0.0, 1.0)?;
        NormalizedOffset::new(saturation, 1.0 - value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(x: f64, y: f64) -> NormalizedOffset {
        NormalizedOffset::new(x, y).unwrap()
    }

    #[test]
    fn full_rectangle_edges_are_unsaturated() {
        for x in [0.0, 0.3, 1.0] {
            assert_eq!(FullRectangle.position_to_color(offset(x, 0.0)).saturation(), 0.0);
            assert_eq!(FullRectangle.position_to_color(offset(x, 1.0)).saturation(), 0.0);
            assert_eq!(FullRectangle.position_to_color(offset(x, 0.5)).saturation(), 100.0);
        }
    }

    #[test]
    fn full_rectangle_top_is_white_bottom_is_black() {
        assert_eq!(FullRectangle.position_to_color(offset(0.2, 0.0)).lightness(), 100.0);
        assert_eq!(FullRectangle.position_to_color(offset(0.2, 1.0)).lightness(), 0.0);
    }

    #[test]
    fn full_rectangle_inverse() {
        let color = FullRectangle.position_to_color(offset(0.25, 0.75));
        assert_eq!(color.hue(), 90.0);
        let back = FullRectangle.color_to_offset(&color).unwrap();
        assert!((back.x() - 0.25).abs() < 1e-12);
        assert!((back.y() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn sv_rectangle_maps_axes() {
        let color = SvRectangle.position_to_color(200.0, offset(0.3, 0.2)).unwrap();
        assert_eq!(color.hue(), 200.0);
        assert!((color.saturation() - 30.0).abs() < 1e-9);
        assert!((color.brightness() - 80.0).abs() < 1e-9);
        assert_eq!(SvRectangle.color_to_offset(0.3, 0.8).unwrap(), offset(0.3, 1.0 - 0.8));
    }

    #[test]
    fn sv_rectangle_validates_inputs() {
        assert_eq!(
            SvRectangle.position_to_color(360.5, NormalizedOffset::ZERO).unwrap_err().field,
            "hue"
        );
        assert_eq!(SvRectangle.color_to_offset(1.2, 0.0).unwrap_err().field, "saturation");
        assert_eq!(SvRectangle.color_to_offset(0.0, -0.1).unwrap_err().field, "value");
    }
}
