//! Circular hue/saturation picker.
//!
//! Angle maps to hue and distance from the center to saturation. The disc is
//! painted at full brightness; a translucent black overlay shows the current
//! brightness, which is picked elsewhere.

use floem::kurbo::{Circle as CircleShape, Point, Rect, Size, Vec2};
use floem::peniko::Color;

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::{ColorSpace, Hsb};
use crate::constants;
use crate::drag::{DragState, Fallback};
use crate::error::GeometryError;
use crate::offset::NormalizedOffset;
use crate::raster::{self, CachedImage};
use crate::shape::Circle;

enum CircularUpdate {
    HueSat(f64, f64),
    Brightness(f64),
}

pub struct CircularPicker {
    id: ViewId,
    drag: DragState,
    hue: f64,
    saturation: f64,
    brightness: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64, f64)>>,
    disc: CachedImage,
}

/// Creates a circular hue/saturation picker.
///
/// - `hue`: degrees, 0.0–360.0
/// - `saturation`: 0.0 (center) to 1.0 (edge)
/// - `brightness`: read-only, used for the darkening overlay
pub fn circular_picker(
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    brightness: RwSignal<f64>,
) -> CircularPicker {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = hue.get();
        let s = saturation.get();
        id.update_state(CircularUpdate::HueSat(h, s));
    });

    create_effect(move |_| {
        let b = brightness.get();
        id.update_state(CircularUpdate::Brightness(b));
    });

    CircularPicker {
        id,
        drag: DragState::default(),
        hue: hue.get_untracked(),
        saturation: saturation.get_untracked(),
        brightness: brightness.get_untracked(),
        size: Default::default(),
        on_change: Some(Box::new(move |h, s| {
            hue.set(h);
            saturation.set(s);
        })),
        disc: CachedImage::default(),
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(constants::MIN_PICKER_SIZE)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl CircularPicker {
    fn side(&self) -> f64 {
        (self.size.width as f64).min(self.size.height as f64)
    }

    fn circle(&self) -> Result<Circle, GeometryError> {
        Circle::new(self.side() / 2.0)
    }

    /// Top-left corner of the square the disc is drawn in.
    fn origin(&self) -> Vec2 {
        let side = self.side();
        Vec2::new(
            (self.size.width as f64 - side) / 2.0,
            (self.size.height as f64 - side) / 2.0,
        )
    }

    fn disc_rect(&self) -> Rect {
        let side = self.side();
        Rect::from_origin_size(self.origin().to_point(), (side, side))
    }

    fn update_from_pointer(&mut self, pos: Point) {
        let Ok(circle) = self.circle() else {
            return;
        };
        let side = circle.radius() * 2.0;
        let local = pos - self.origin();
        let offset = self.drag.pointer_moved(
            local,
            Size::new(side, side),
            &circle,
            Fallback::RawPosition,
        );
        let color = circle.position_to_color(offset);
        self.hue = color.hue();
        self.saturation = color.saturation() / 100.0;
    }

    /// Offset of the current color on the disc; value is fixed at 1 there.
    fn current_offset(&self) -> Option<NormalizedOffset> {
        let circle = self.circle().ok()?;
        let color = Hsb::new(self.hue, self.saturation * 100.0, 100.0).ok()?;
        circle.color_to_offset(&color).ok()
    }

    fn ensure_disc_image(&mut self, scale: f64) {
        let side = self.side();
        let dims = raster::physical_dims(side, side, scale);
        self.disc.ensure(dims, 0, || {
            let px = dims.0.min(dims.1) as f64;
            let radius = px / 2.0 - constants::FEATHER;
            let Ok(circle) = Circle::new(radius) else {
                return vec![0; (dims.0 * dims.1 * 4) as usize];
            };
            let inset = Vec2::new(constants::FEATHER, constants::FEATHER);
            let square = Size::new(radius * 2.0, radius * 2.0);
            raster::rasterize(dims.0, dims.1, |p| {
                let local = p - inset;
                let coverage =
                    raster::edge_coverage(local.distance(circle.center()), radius);
                if coverage <= 0.0 {
                    return None;
                }
                let offset = NormalizedOffset::from_position(local, square).ok()?;
                let rgb = circle.position_to_color(offset).to_rgb();
                Some(raster::rgba8(rgb.to_unit(), coverage))
            })
        });
    }
}

impl View for CircularPicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<CircularUpdate>() {
            match *update {
                CircularUpdate::HueSat(h, s) => {
                    self.hue = h;
                    self.saturation = s;
                    if !self.drag.is_active() {
                        if let Some(offset) = self.current_offset() {
                            self.drag.reset(offset);
                        }
                    }
                }
                CircularUpdate::Brightness(b) => {
                    self.brightness = b;
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.drag.begin();
                self.update_from_pointer(e.pos);
                if let Some(cb) = &self.on_change {
                    cb(self.hue, self.saturation);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.drag.is_active() {
                    self.update_from_pointer(e.pos);
                    if let Some(cb) = &self.on_change {
                        cb(self.hue, self.saturation);
                    }
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.drag.end();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let Ok(circle) = self.circle() else {
            return;
        };
        let rect = self.disc_rect();
        let center = rect.center();

        let scale = cx.scale();
        self.ensure_disc_image(scale);
        self.disc.draw(cx, rect);

        let overlay_alpha = 1.0 - self.brightness;
        if overlay_alpha > 0.001 {
            let overlay = CircleShape::new(center, circle.radius());
            cx.fill(&overlay, Color::rgba(0.0, 0.0, 0.0, overlay_alpha), 0.0);
        }

        let Some(offset) = self.current_offset() else {
            return;
        };
        let side = circle.radius() * 2.0;
        let cursor = offset.to_position(Size::new(side, side)) + self.origin();
        let under = Hsb::new(
            self.hue,
            self.saturation * 100.0,
            (self.brightness * 100.0).clamp(0.0, 100.0),
        )
        .map(|c| c.to_rgb())
        .unwrap_or_default();
        raster::paint_indicator(cx, cursor, under);
    }
}
