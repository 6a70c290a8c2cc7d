//! Pixel buffers and indicator painting shared by the picker views.
//!
//! Gradients are rasterized to RGBA8 images and only rebuilt when the
//! widget size or the key (usually the hue) changes.

use std::sync::Arc;

use floem::context::PaintCx;
use floem::kurbo::{Circle, Point, Rect, Stroke};
use floem::peniko::{self, Blob, Color};
use floem_renderer::Renderer;

use crate::color::{ColorSpace, Rgb};
use crate::constants;

/// Sample `pixel` at the center of every raster pixel. `None` is transparent.
pub(crate) fn rasterize(
    width: u32,
    height: u32,
    pixel: impl Fn(Point) -> Option<[u8; 4]>,
) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for py in 0..height {
        let row_offset = (py * width * 4) as usize;
        for px in 0..width {
            let sample = Point::new(px as f64 + 0.5, py as f64 + 0.5);
            if let Some(rgba) = pixel(sample) {
                let offset = row_offset + (px * 4) as usize;
                buf[offset..offset + 4].copy_from_slice(&rgba);
            }
        }
    }
    buf
}

/// Unit RGB plus coverage → RGBA8.
pub(crate) fn rgba8((r, g, b): (f64, f64, f64), coverage: f64) -> [u8; 4] {
    let channel = |v: f64| (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8;
    [channel(r), channel(g), channel(b), channel(coverage)]
}

/// Coverage of a pixel `distance` away from a round edge at `radius`.
pub(crate) fn edge_coverage(distance: f64, radius: f64) -> f64 {
    ((radius + constants::FEATHER - distance) / constants::FEATHER).clamp(0.0, 1.0)
}

pub(crate) fn to_color(rgb: Rgb) -> Color {
    Color::rgba8(rgb.red(), rgb.green(), rgb.blue(), rgb.alpha())
}

/// A rasterized gradient cached by pixel size and a caller-chosen key.
#[derive(Default)]
pub(crate) struct CachedImage {
    img: Option<peniko::Image>,
    hash: Vec<u8>,
    dims: (u32, u32),
    key: u64,
}

impl CachedImage {
    /// Rebuild the image when `dims` or `key` changed since the last call.
    pub(crate) fn ensure(&mut self, dims: (u32, u32), key: u64, build: impl FnOnce() -> Vec<u8>) {
        let (w, h) = dims;
        if w == 0 || h == 0 {
            return;
        }
        if self.img.is_some() && self.dims == dims && self.key == key {
            return;
        }
        tracing::trace!(width = w, height = h, key, "rasterizing gradient");
        let blob = Blob::new(Arc::new(build()));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, w, h);
        self.hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(img);
        self.dims = dims;
        self.key = key;
    }

    pub(crate) fn draw(&self, cx: &mut PaintCx, rect: Rect) {
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.hash,
                },
                rect,
            );
        }
    }
}

/// Raster dimensions for a logical size at `scale`.
pub(crate) fn physical_dims(width: f64, height: f64, scale: f64) -> (u32, u32) {
    let s = scale.max(1.0);
    (
        (width * s).round().max(0.0) as u32,
        (height * s).round().max(0.0) as u32,
    )
}

/// Indicator ring, drawn in black or white depending on the color below it.
pub(crate) fn paint_indicator(cx: &mut PaintCx, center: Point, under: Rgb) {
    let ring = to_color(under.contrasting_indicator());
    let outer = Circle::new(center, constants::CURSOR_RADIUS + 1.0);
    cx.stroke(&outer, Color::rgba8(0, 0, 0, 60), &Stroke::new(1.0));
    let cursor = Circle::new(center, constants::CURSOR_RADIUS);
    cx.stroke(&cursor, ring, &Stroke::new(2.0));
}
