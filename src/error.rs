//! Error types shared by the color model and the shape mappers.

use thiserror::Error;

/// A value was constructed outside of its declared numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{field} must be within {min}..={max}, got {value}")]
pub struct ValidationError {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl ValidationError {
    /// Check that `value` lies in `min..=max`. NaN never does.
    pub(crate) fn check(
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> std::result::Result<f64, Self> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Self {
                field,
                min,
                max,
                value,
            })
        }
    }

    pub(crate) fn check_int(
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    ) -> std::result::Result<u8, Self> {
        if (min..=max).contains(&value) {
            Ok(value as u8)
        } else {
            Err(Self {
                field,
                min: min as f64,
                max: max as f64,
                value: value as f64,
            })
        }
    }
}

/// Shape parameters are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("inner radius {inner} must lie within 0..={outer}")]
    InvalidAnnulus { outer: f64, inner: f64 },

    #[error("wheel thickness must be within (0, 0.5], got {0}")]
    InvalidThickness(f64),

    #[error("size must have a positive width and height, got {width}x{height}")]
    UnspecifiedSize { width: f64, height: f64 },

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    #[error("position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f64, y: f64 },
}

/// Either kind of failure, for operations that validate input and geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PickerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field_and_range() {
        let err = ValidationError::check("hue", 400.0, 0.0, 360.0).unwrap_err();
        assert_eq!(err.field, "hue");
        assert_eq!(err.to_string(), "hue must be within 0..=360, got 400");
    }

    #[test]
    fn nan_is_rejected() {
        assert!(ValidationError::check("x", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn int_check_narrows_to_u8() {
        assert_eq!(ValidationError::check_int("red", 255, 0, 255), Ok(255));
        let err = ValidationError::check_int("cyan", 101, 0, 100).unwrap_err();
        assert_eq!(err.to_string(), "cyan must be within 0..=100, got 101");
    }

    #[test]
    fn checks_return_their_own_error_type() {
        let checked: std::result::Result<f64, ValidationError> =
            ValidationError::check("value", 0.5, 0.0, 1.0);
        assert_eq!(checked, Ok(0.5));
        let narrowed: std::result::Result<u8, ValidationError> =
            ValidationError::check_int("alpha", -1, 0, 255);
        assert_eq!(narrowed.unwrap_err().field, "alpha");
    }

    #[test]
    fn picker_error_is_transparent() {
        let err: PickerError = GeometryError::NonPositiveRadius(0.0).into();
        assert_eq!(err.to_string(), "radius must be positive, got 0");
    }
}
