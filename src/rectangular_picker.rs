//! Full-spectrum rectangle: hue runs left to right, lightness top to bottom.
//!
//! The picker speaks HSB like the rest of the crate; the rectangle itself is
//! an HSL surface, so values are converted on the way in and out.

use floem::kurbo::{Point, Rect, Size};
use floem::peniko::Color;

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::{ColorSpace, Hsl};
use crate::constants;
use crate::drag::{DragState, Fallback};
use crate::math;
use crate::offset::NormalizedOffset;
use crate::raster::{self, CachedImage};
use crate::shape::{FullRectangle, Unconstrained};

struct RectUpdate(f64, f64, f64);

pub struct RectangularPicker {
    id: ViewId,
    drag: DragState,
    hue: f64,
    saturation: f64,
    value: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64, f64, f64)>>,
    surface: CachedImage,
}

/// Creates the full-spectrum rectangle.
///
/// `hue` is in degrees; `saturation` and `value` are HSB fractions.
pub fn rectangular_picker(
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    value: RwSignal<f64>,
) -> RectangularPicker {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(RectUpdate(hue.get(), saturation.get(), value.get()));
    });

    RectangularPicker {
        id,
        drag: DragState::default(),
        hue: hue.get_untracked(),
        saturation: saturation.get_untracked(),
        value: value.get_untracked(),
        size: Default::default(),
        on_change: Some(Box::new(move |h, s, v| {
            hue.set(h);
            saturation.set(s);
            value.set(v);
        })),
        surface: CachedImage::default(),
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(constants::MIN_PICKER_SIZE)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl RectangularPicker {
    fn bounds(&self) -> Size {
        Size::new(self.size.width as f64, self.size.height as f64)
    }

    fn update_from_pointer(&mut self, pos: Point) {
        let offset =
            self.drag
                .pointer_moved(pos, self.bounds(), &Unconstrained, Fallback::RawPosition);
        let hsl = FullRectangle.position_to_color(offset);
        let (s, v) = math::hsl_to_hsb(hsl.saturation() / 100.0, hsl.lightness() / 100.0);
        self.hue = hsl.hue();
        self.saturation = s;
        self.value = v;
    }

    fn current_hsl(&self) -> Option<Hsl> {
        let (s, l) = math::hsb_to_hsl(self.saturation, self.value);
        let percent = |v: f64| (v * 100.0).clamp(0.0, 100.0);
        Hsl::new(self.hue, percent(s), percent(l)).ok()
    }

    fn current_offset(&self) -> Option<NormalizedOffset> {
        FullRectangle.color_to_offset(&self.current_hsl()?).ok()
    }

    fn ensure_surface_image(&mut self, scale: f64) {
        let bounds = self.bounds();
        let dims = raster::physical_dims(bounds.width, bounds.height, scale);
        self.surface.ensure(dims, 0, || {
            let px = Size::new(dims.0 as f64, dims.1 as f64);
            raster::rasterize(dims.0, dims.1, |p| {
                let offset = NormalizedOffset::from_position(p, px).ok()?;
                let rgb = FullRectangle.position_to_color(offset).to_rgb();
                Some(raster::rgba8(rgb.to_unit(), 1.0))
            })
        });
    }
}

impl View for RectangularPicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<RectUpdate>() {
            let RectUpdate(h, s, v) = *update;
            self.hue = h;
            self.saturation = s;
            self.value = v;
            if !self.drag.is_active() {
                if let Some(offset) = self.current_offset() {
                    self.drag.reset(offset);
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
                    cb(self.hue, self.saturation, self.value);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.drag.is_active() {
                    self.update_from_pointer(e.pos);
                    if let Some(cb) = &self.on_change {
                        cb(self.hue, self.saturation, self.value);
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
        let bounds = self.bounds();
        if bounds.width == 0.0 || bounds.height == 0.0 {
            return;
        }
        let rect = bounds.to_rect();
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_surface_image(scale);
        self.surface.draw(cx, rect);
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        if let (Some(hsl), Some(offset)) = (self.current_hsl(), self.current_offset()) {
            raster::paint_indicator(cx, offset.to_position(bounds), hsl.to_rgb());
        }
    }
}
