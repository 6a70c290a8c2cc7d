//! Hue ring around a saturation/value surface.
//!
//! The outer ring picks the hue; the inner triangle or square picks
//! saturation and value for that hue. Where the pointer goes down decides
//! which of the two a drag moves.

use std::f64::consts::SQRT_2;

use floem::kurbo::{Point, Rect, Size};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};

use crate::color::{ColorSpace, Hsb};
use crate::constants;
use crate::drag::{DragState, Fallback};
use crate::error::{GeometryError, PickerError, ValidationError};
use crate::math;
use crate::offset::{checked_size, NormalizedOffset};
use crate::raster::{self, CachedImage};
use crate::shape::{offset_to_hue, Constrain, SvRectangle, SvTriangle, Wheel};

/// Shape inside the hue ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InnerShape {
    Triangle,
    Rectangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Ring,
    Inner,
}

/// Saturation/value mapper for the inner shape, sized to its bounding box.
#[derive(Debug, Clone, Copy)]
enum Surface {
    Triangle(SvTriangle),
    Rectangle(SvRectangle),
}

impl Surface {
    fn new(shape: InnerShape, size: Size) -> Result<Self, GeometryError> {
        match shape {
            InnerShape::Triangle => Ok(Self::Triangle(SvTriangle::new(size)?)),
            InnerShape::Rectangle => {
                checked_size(size)?;
                Ok(Self::Rectangle(SvRectangle))
            }
        }
    }

    fn contains(&self, position: Point) -> bool {
        match self {
            Self::Triangle(sv) => sv.triangle().contains(position),
            Self::Rectangle(_) => true,
        }
    }

    fn position_to_color(&self, hue: f64, offset: NormalizedOffset) -> Result<Hsb, PickerError> {
        match self {
            Self::Triangle(sv) => sv.position_to_color(hue, offset),
            Self::Rectangle(sv) => Ok(sv.position_to_color(hue, offset)?),
        }
    }

    fn color_to_offset(
        &self,
        saturation: f64,
        value: f64,
    ) -> Result<NormalizedOffset, ValidationError> {
        match self {
            Self::Triangle(sv) => sv.color_to_offset(saturation, value),
            Self::Rectangle(sv) => sv.color_to_offset(saturation, value),
        }
    }
}

impl Constrain for Surface {
    fn constrain(&self, position: Point) -> Result<Point, GeometryError> {
        match self {
            Self::Triangle(sv) => sv.constrain(position),
            Self::Rectangle(_) => Ok(position),
        }
    }
}

struct WheelUpdate(f64, f64, f64);

pub struct WheelPicker {
    id: ViewId,
    shape: InnerShape,
    target: Option<Target>,
    ring_drag: DragState,
    inner_drag: DragState,
    hue: f64,
    saturation: f64,
    value: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64, f64, f64)>>,
    ring: CachedImage,
    surface: CachedImage,
}

/// Hue ring with an inscribed saturation/value triangle.
///
/// The triangle's apex is the pure hue, its lower corners white and black.
pub fn wheel_triangle_picker(
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    value: RwSignal<f64>,
) -> WheelPicker {
    wheel_picker(InnerShape::Triangle, hue, saturation, value)
}

/// Hue ring with an inscribed saturation (x) / value (y) square.
pub fn wheel_rectangle_picker(
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    value: RwSignal<f64>,
) -> WheelPicker {
    wheel_picker(InnerShape::Rectangle, hue, saturation, value)
}

fn wheel_picker(
    shape: InnerShape,
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    value: RwSignal<f64>,
) -> WheelPicker {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(WheelUpdate(hue.get(), saturation.get(), value.get()));
    });

    WheelPicker {
        id,
        shape,
        target: None,
        ring_drag: DragState::default(),
        inner_drag: DragState::default(),
        hue: hue.get_untracked(),
        saturation: saturation.get_untracked(),
        value: value.get_untracked(),
        size: Default::default(),
        on_change: Some(Box::new(move |h, s, v| {
            hue.set(h);
            saturation.set(s);
            value.set(v);
        })),
        ring: CachedImage::default(),
        surface: CachedImage::default(),
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(constants::MIN_PICKER_SIZE)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl WheelPicker {
    fn bounds(&self) -> Size {
        Size::new(self.size.width as f64, self.size.height as f64)
    }

    fn wheel(&self) -> Result<Wheel, GeometryError> {
        Wheel::new(self.bounds(), constants::WHEEL_THICKNESS)
    }

    /// Bounding box of the inner shape, centered in the ring's hole.
    fn inner_rect(&self, wheel: &Wheel) -> Rect {
        let radius = (wheel.inner_radius() - constants::WHEEL_INSET).max(0.0);
        let side = match self.shape {
            InnerShape::Triangle => radius * 2.0,
            InnerShape::Rectangle => radius * SQRT_2,
        };
        Rect::from_center_size(wheel.center(), (side, side))
    }

    fn pick_target(&self, pos: Point) -> Option<Target> {
        let wheel = self.wheel().ok()?;
        if pos.distance(wheel.center()) >= wheel.inner_radius() {
            Some(Target::Ring)
        } else {
            Some(Target::Inner)
        }
    }

    fn update_from_pointer(&mut self, pos: Point) {
        let Ok(wheel) = self.wheel() else {
            return;
        };
        match self.target {
            Some(Target::Ring) => {
                let bounds = self.bounds();
                let offset = self
                    .ring_drag
                    .pointer_moved(pos, bounds, &wheel, Fallback::RawPosition);
                self.hue = offset_to_hue(offset.to_position(bounds), wheel.center());
            }
            Some(Target::Inner) => {
                let rect = self.inner_rect(&wheel);
                let Ok(surface) = Surface::new(self.shape, rect.size()) else {
                    return;
                };
                let local = pos - rect.origin().to_vec2();
                let offset = self.inner_drag.pointer_moved(
                    local,
                    rect.size(),
                    &surface,
                    Fallback::RawPosition,
                );
                match surface.position_to_color(self.hue, offset) {
                    Ok(color) => {
                        self.saturation = color.saturation() / 100.0;
                        self.value = color.brightness() / 100.0;
                    }
                    Err(err) => tracing::debug!(%err, hue = self.hue, "inner surface not mapped"),
                }
            }
            None => {}
        }
    }

    fn sync_drag_states(&mut self) {
        let Ok(wheel) = self.wheel() else {
            return;
        };
        if self.target != Some(Target::Ring) {
            if let Ok(p) = wheel.position_for(self.hue) {
                if let Ok(offset) = NormalizedOffset::from_position(p, self.bounds()) {
                    self.ring_drag.reset(offset);
                }
            }
        }
        if self.target != Some(Target::Inner) {
            let rect = self.inner_rect(&wheel);
            if let Ok(surface) = Surface::new(self.shape, rect.size()) {
                if let Ok(offset) = surface.color_to_offset(self.saturation, self.value) {
                    self.inner_drag.reset(offset);
                }
            }
        }
    }

    fn ensure_ring_image(&mut self, scale: f64) {
        let bounds = self.bounds();
        let dims = raster::physical_dims(bounds.width, bounds.height, scale);
        self.ring.ensure(dims, 0, || {
            let px = Size::new(dims.0 as f64, dims.1 as f64);
            let Ok(wheel) = Wheel::new(px, constants::WHEEL_THICKNESS) else {
                return vec![0; (dims.0 * dims.1 * 4) as usize];
            };
            let outer = wheel.outer_radius() - constants::FEATHER;
            let inner = wheel.inner_radius();
            raster::rasterize(dims.0, dims.1, |p| {
                let distance = p.distance(wheel.center());
                let coverage = raster::edge_coverage(distance, outer)
                    .min(((distance - inner) / constants::FEATHER + 1.0).clamp(0.0, 1.0));
                if coverage <= 0.0 {
                    return None;
                }
                let rgb = math::hsb_to_rgb(wheel.hue_at(p), 1.0, 1.0);
                Some(raster::rgba8(rgb, coverage))
            })
        });
    }

    fn ensure_surface_image(&mut self, rect: Rect, scale: f64) {
        let dims = raster::physical_dims(rect.width(), rect.height(), scale);
        let hue = self.hue;
        let shape = self.shape;
        self.surface.ensure(dims, hue.to_bits(), || {
            let px = Size::new(dims.0 as f64, dims.1 as f64);
            let Ok(surface) = Surface::new(shape, px) else {
                return vec![0; (dims.0 * dims.1 * 4) as usize];
            };
            raster::rasterize(dims.0, dims.1, |p| {
                if !surface.contains(p) {
                    return None;
                }
                let offset = NormalizedOffset::from_position(p, px).ok()?;
                let rgb = surface.position_to_color(hue, offset).ok()?.to_rgb();
                Some(raster::rgba8(rgb.to_unit(), 1.0))
            })
        });
    }
}

impl View for WheelPicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            let WheelUpdate(h, s, v) = *update;
            self.hue = h;
            self.saturation = s;
            self.value = v;
            self.sync_drag_states();
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.target = self.pick_target(e.pos);
                match self.target {
                    Some(Target::Ring) => self.ring_drag.begin(),
                    Some(Target::Inner) => self.inner_drag.begin(),
                    None => {}
                }
                self.update_from_pointer(e.pos);
                if let Some(cb) = &self.on_change {
                    cb(self.hue, self.saturation, self.value);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.target.is_some() {
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
                self.target = None;
                self.ring_drag.end();
                self.inner_drag.end();
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
        let Ok(wheel) = self.wheel() else {
            return;
        };
        let scale = cx.scale();
        self.ensure_ring_image(scale);
        self.ring.draw(cx, self.bounds().to_rect());

        let rect = self.inner_rect(&wheel);
        self.ensure_surface_image(rect, scale);
        self.surface.draw(cx, rect);

        let pure = Hsb::new(self.hue, 100.0, 100.0).map(|c| c.to_rgb());
        if let (Ok(p), Ok(rgb)) = (wheel.position_for(self.hue), pure) {
            raster::paint_indicator(cx, p, rgb);
        }

        let Ok(surface) = Surface::new(self.shape, rect.size()) else {
            return;
        };
        if let Ok(offset) = surface.color_to_offset(self.saturation, self.value) {
            let cursor = offset.to_position(rect.size()) + rect.origin().to_vec2();
            let under = Hsb::new(self.hue, self.saturation * 100.0, self.value * 100.0)
                .map(|c| c.to_rgb())
                .unwrap_or_default();
            raster::paint_indicator(cx, cursor, under);
        }
    }
}
