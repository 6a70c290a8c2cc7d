//! Color math: direct conversions on normalized channels.
//! Channels, saturation, lightness and brightness are 0.0–1.0; hue is in degrees.

/// Wrap an angle in degrees into `[0, 360)`.
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unit channel → 8-bit channel, rounded and clamped.
pub(crate) fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Hue in degrees from normalized RGB, 0 for achromatic input.
fn hue_of(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    }
}

/// Place chroma `c` and the secondary component `x` by 60° sector.
fn sector(hue: f64, c: f64, x: f64) -> (f64, f64, f64) {
    match (hue / 60.0).floor() as i64 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    }
}

fn secondary(hue: f64, c: f64) -> f64 {
    c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs())
}

/// HSB/HSV → RGB.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let x = secondary(h, c);
    let m = v - c;
    let (r, g, b) = sector(h, c, x);
    (r + m, g + m, b + m)
}

/// HSL → RGB.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = secondary(h, c);
    let m = l - c / 2.0;
    let (r, g, b) = sector(h, c, x);
    (r + m, g + m, b + m)
}

/// RGB → HSB/HSV.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    (hue_of(r, g, b, max, delta), s, max)
}

/// RGB → HSL.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    (hue_of(r, g, b, max, delta), s, l)
}

/// RGB → CMYK. Returns (c, m, y, k).
pub(crate) fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return (0.0, 0.0, 0.0, 1.0);
    }
    let ink = |ch: f64| (1.0 - ch - k) / (1.0 - k);
    (ink(r), ink(g), ink(b), k)
}

/// CMYK → RGB.
pub(crate) fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> (f64, f64, f64) {
    (
        (1.0 - c) * (1.0 - k),
        (1.0 - m) * (1.0 - k),
        (1.0 - y) * (1.0 - k),
    )
}

/// HSL → HSB. Hue passes through.
pub(crate) fn hsl_to_hsb(s_hsl: f64, l: f64) -> (f64, f64) {
    let v = l + s_hsl * l.min(1.0 - l);
    let s_hsb = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    (s_hsb, v)
}

/// HSB → HSL. Hue passes through.
pub(crate) fn hsb_to_hsl(s_hsb: f64, v: f64) -> (f64, f64) {
    let l = v * (1.0 - s_hsb / 2.0);
    let s_hsl = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    (s_hsl, l)
}
