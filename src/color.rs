//! Color values for the pickers: RGB, HSL, HSB and CMYK.
//!
//! Each model is a small `Copy` struct whose constructor validates its
//! components. [`ColorModel`] tags one of the four, and the [`ColorSpace`]
//! trait gives every model (and the tagged union) all four conversions.
//! Cross-model conversions pivot through RGB.

use crate::error::ValidationError;
use crate::math;

/// Conversions shared by every color model.
pub trait ColorSpace: Copy {
    /// Alpha (0–255).
    fn alpha(&self) -> u8;

    fn to_rgb(&self) -> Rgb;

    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    fn to_hsb(&self) -> Hsb {
        self.to_rgb().to_hsb()
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }
}

/// 8-bit RGB with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Opaque color from 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    /// Validate untyped integer channels (0–255 each).
    pub fn checked(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self, ValidationError> {
        Ok(Self {
            red: ValidationError::check_int("red", red, 0, 255)?,
            green: ValidationError::check_int("green", green, 0, 255)?,
            blue: ValidationError::check_int("blue", blue, 0, 255)?,
            alpha: ValidationError::check_int("alpha", alpha, 0, 255)?,
        })
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Channels as 0.0–1.0.
    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            self.red as f64 / 255.0,
            self.green as f64 / 255.0,
            self.blue as f64 / 255.0,
        )
    }

    pub(crate) fn from_unit(r: f64, g: f64, b: f64, alpha: u8) -> Self {
        Self {
            red: math::to_channel(r),
            green: math::to_channel(g),
            blue: math::to_channel(b),
            alpha,
        }
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 digits).
    ///
    /// 8 digits are read as RRGGBBAA; 3 and 6 digits are opaque.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let pair = |i: usize| u8::from_str_radix(stripped.get(i..i + 2)?, 16).ok();
        match stripped.len() {
            3 => {
                let mut digits = stripped
                    .chars()
                    .filter_map(|c| c.to_digit(16))
                    .map(|d| d as u8 * 17);
                Some(Self::new(digits.next()?, digits.next()?, digits.next()?))
            }
            6 => Some(Self::new(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::new(pair(0)?, pair(2)?, pair(4)?).with_alpha(pair(6)?)),
            _ => None,
        }
    }

    /// Format as uppercase hex without `#`.
    ///
    /// Six digits when opaque, eight (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        if self.alpha == 255 {
            format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            format!(
                "{:02X}{:02X}{:02X}{:02X}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }

    /// WCAG relative luminance (0.0–1.0) of the sRGB channels.
    pub fn relative_luminance(&self) -> f64 {
        fn linear(c: f64) -> f64 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let (r, g, b) = self.to_unit();
        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }

    /// Black on light colors, white on dark ones.
    pub fn contrasting_indicator(&self) -> Rgb {
        if self.relative_luminance() > 0.5 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(128, 128, 128)
    }
}

impl ColorSpace for Rgb {
    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.to_unit();
        let (h, s, l) = math::rgb_to_hsl(r, g, b);
        Hsl {
            hue: h,
            saturation: (s * 100.0).clamp(0.0, 100.0),
            lightness: (l * 100.0).clamp(0.0, 100.0),
            alpha: self.alpha,
        }
    }

    fn to_hsb(&self) -> Hsb {
        let (r, g, b) = self.to_unit();
        let (h, s, v) = math::rgb_to_hsb(r, g, b);
        Hsb {
            hue: h,
            saturation: (s * 100.0).clamp(0.0, 100.0),
            brightness: (v * 100.0).clamp(0.0, 100.0),
            alpha: self.alpha,
        }
    }

    fn to_cmyk(&self) -> Cmyk {
        let (r, g, b) = self.to_unit();
        let (c, m, y, k) = math::rgb_to_cmyk(r, g, b);
        let percent = |v: f64| (v * 100.0).round().clamp(0.0, 100.0) as u8;
        Cmyk {
            cyan: percent(c),
            magenta: percent(m),
            yellow: percent(y),
            black: percent(k),
            alpha: self.alpha,
        }
    }
}

/// Hue in degrees (0–360), saturation and lightness in percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: u8,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            hue: ValidationError::check("hue", hue, 0.0, 360.0)?,
            saturation: ValidationError::check("saturation", saturation, 0.0, 100.0)?,
            lightness: ValidationError::check("lightness", lightness, 0.0, 100.0)?,
            alpha: 255,
        })
    }

    #[must_use]
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Build from fractions computed by a shape mapper; clamps rounding drift.
    pub(crate) fn from_unit(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue.clamp(0.0, 360.0),
            saturation: (saturation * 100.0).clamp(0.0, 100.0),
            lightness: (lightness * 100.0).clamp(0.0, 100.0),
            alpha: 255,
        }
    }
}

impl ColorSpace for Hsl {
    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn to_rgb(&self) -> Rgb {
        let (r, g, b) = math::hsl_to_rgb(self.hue, self.saturation / 100.0, self.lightness / 100.0);
        Rgb::from_unit(r, g, b, self.alpha)
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }
}

/// Hue in degrees (0–360), saturation and brightness in percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: u8,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            hue: ValidationError::check("hue", hue, 0.0, 360.0)?,
            saturation: ValidationError::check("saturation", saturation, 0.0, 100.0)?,
            brightness: ValidationError::check("brightness", brightness, 0.0, 100.0)?,
            alpha: 255,
        })
    }

    #[must_use]
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub(crate) fn from_unit(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: hue.clamp(0.0, 360.0),
            saturation: (saturation * 100.0).clamp(0.0, 100.0),
            brightness: (value * 100.0).clamp(0.0, 100.0),
            alpha: 255,
        }
    }
}

impl ColorSpace for Hsb {
    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn to_rgb(&self) -> Rgb {
        let (r, g, b) =
            math::hsb_to_rgb(self.hue, self.saturation / 100.0, self.brightness / 100.0);
        Rgb::from_unit(r, g, b, self.alpha)
    }

    fn to_hsb(&self) -> Hsb {
        *self
    }
}

/// Ink percentages (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cmyk {
    cyan: u8,
    magenta: u8,
    yellow: u8,
    black: u8,
    alpha: u8,
}

impl Cmyk {
    pub fn new(cyan: i32, magenta: i32, yellow: i32, black: i32) -> Result<Self, ValidationError> {
        Ok(Self {
            cyan: ValidationError::check_int("cyan", cyan, 0, 100)?,
            magenta: ValidationError::check_int("magenta", magenta, 0, 100)?,
            yellow: ValidationError::check_int("yellow", yellow, 0, 100)?,
            black: ValidationError::check_int("black", black, 0, 100)?,
            alpha: 255,
        })
    }

    #[must_use]
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    pub fn cyan(&self) -> u8 {
        self.cyan
    }

    pub fn magenta(&self) -> u8 {
        self.magenta
    }

    pub fn yellow(&self) -> u8 {
        self.yellow
    }

    pub fn black(&self) -> u8 {
        self.black
    }
}

impl ColorSpace for Cmyk {
    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn to_rgb(&self) -> Rgb {
        let ink = |v: u8| v as f64 / 100.0;
        let (r, g, b) = math::cmyk_to_rgb(
            ink(self.cyan),
            ink(self.magenta),
            ink(self.yellow),
            ink(self.black),
        );
        Rgb::from_unit(r, g, b, self.alpha)
    }

    fn to_cmyk(&self) -> Cmyk {
        *self
    }
}

/// One color in any of the supported models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorModel {
    Rgb(Rgb),
    Hsl(Hsl),
    Hsb(Hsb),
    Cmyk(Cmyk),
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::Rgb(Rgb::default())
    }
}

impl ColorSpace for ColorModel {
    fn alpha(&self) -> u8 {
        match self {
            Self::Rgb(c) => c.alpha(),
            Self::Hsl(c) => c.alpha(),
            Self::Hsb(c) => c.alpha(),
            Self::Cmyk(c) => c.alpha(),
        }
    }

    fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb(c) => c.to_rgb(),
            Self::Hsl(c) => c.to_rgb(),
            Self::Hsb(c) => c.to_rgb(),
            Self::Cmyk(c) => c.to_rgb(),
        }
    }

    fn to_hsl(&self) -> Hsl {
        match self {
            Self::Rgb(c) => c.to_hsl(),
            Self::Hsl(c) => c.to_hsl(),
            Self::Hsb(c) => c.to_hsl(),
            Self::Cmyk(c) => c.to_hsl(),
        }
    }

    fn to_hsb(&self) -> Hsb {
        match self {
            Self::Rgb(c) => c.to_hsb(),
            Self::Hsl(c) => c.to_hsb(),
            Self::Hsb(c) => c.to_hsb(),
            Self::Cmyk(c) => c.to_hsb(),
        }
    }

    fn to_cmyk(&self) -> Cmyk {
        match self {
            Self::Rgb(c) => c.to_cmyk(),
            Self::Hsl(c) => c.to_cmyk(),
            Self::Hsb(c) => c.to_cmyk(),
            Self::Cmyk(c) => c.to_cmyk(),
        }
    }
}

impl From<Rgb> for ColorModel {
    fn from(c: Rgb) -> Self {
        Self::Rgb(c)
    }
}

impl From<Hsl> for ColorModel {
    fn from(c: Hsl) -> Self {
        Self::Hsl(c)
    }
}

impl From<Hsb> for ColorModel {
    fn from(c: Hsb) -> Self {
        Self::Hsb(c)
    }
}

impl From<Cmyk> for ColorModel {
    fn from(c: Cmyk) -> Self {
        Self::Cmyk(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgb::from_hex("#3B82F6"), Some(Rgb::new(0x3B, 0x82, 0xF6)));
        assert_eq!(Rgb::from_hex("fff"), Some(Rgb::WHITE));
        assert_eq!(
            Rgb::from_hex("00000080"),
            Some(Rgb::BLACK.with_alpha(0x80))
        );
        assert_eq!(Rgb::from_hex("12345"), None);
        assert_eq!(Rgb::from_hex("ggg"), None);
    }

    #[test]
    fn hex_formatting_drops_opaque_alpha() {
        assert_eq!(Rgb::new(255, 0, 16).to_hex(), "FF0010");
        assert_eq!(Rgb::new(255, 0, 16).with_alpha(0).to_hex(), "FF001000");
    }

    #[test]
    fn checked_rejects_out_of_range_channels() {
        let err = Rgb::checked(0, 256, 0, 255).unwrap_err();
        assert_eq!(err.field, "green");
        assert_eq!(err.max, 255.0);
        assert!(Rgb::checked(0, 0, 0, -1).is_err());
    }

    #[test]
    fn hsl_and_hsb_reject_bad_components() {
        assert_eq!(Hsl::new(361.0, 0.0, 0.0).unwrap_err().field, "hue");
        assert_eq!(Hsl::new(0.0, 100.5, 0.0).unwrap_err().field, "saturation");
        assert_eq!(Hsb::new(0.0, 0.0, -1.0).unwrap_err().field, "brightness");
        assert!(Hsb::new(f64::NAN, 0.0, 0.0).is_err());
        assert_eq!(Cmyk::new(0, 0, 0, 101).unwrap_err().field, "black");
    }

    #[test]
    fn alpha_survives_conversion() {
        let rgb = Rgb::new(10, 20, 30).with_alpha(99);
        assert_eq!(rgb.to_hsl().alpha(), 99);
        assert_eq!(rgb.to_cmyk().to_hsb().alpha(), 99);
    }

    #[test]
    fn luminance_threshold_picks_indicator() {
        assert_eq!(Rgb::WHITE.contrasting_indicator(), Rgb::BLACK);
        assert_eq!(Rgb::new(0, 0, 128).contrasting_indicator(), Rgb::WHITE);
        assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        let hsl = Rgb::new(128, 128, 128).to_hsl();
        assert_eq!(hsl.hue(), 0.0);
        assert_eq!(hsl.saturation(), 0.0);
    }
}
