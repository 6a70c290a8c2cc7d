//! One-dimensional channel sliders.
//!
//! Each slider edits one HSB channel (or alpha) and paints the gradient that
//! channel sweeps through given the other two. The track runs from 0 on the
//! left to the channel maximum on the right.

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::Color;
#[cfg(feature = "alpha")]
use floem::{kurbo::Shape, peniko::Gradient};

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

#[cfg(feature = "alpha")]
use crate::checkerboard;
use crate::constants;
use crate::math;
use crate::raster::{self, CachedImage};

/// The value a [`ChannelSlider`] edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Degrees, 0 to 360.
    Hue,
    Saturation,
    Value,
    #[cfg(feature = "alpha")]
    Alpha,
}

impl Channel {
    /// Largest value on the track; the smallest is always 0.
    pub fn max(self) -> f64 {
        match self {
            Channel::Hue => 360.0,
            _ => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "H",
            Channel::Saturation => "S",
            Channel::Value => "B",
            #[cfg(feature = "alpha")]
            Channel::Alpha => "A",
        }
    }

    /// Unit RGB at fraction `t` of the track, the other channels held at
    /// `(hue, saturation, value)`.
    pub(crate) fn gradient_color(
        self,
        t: f64,
        hue: f64,
        saturation: f64,
        value: f64,
    ) -> (f64, f64, f64) {
        let t = t.clamp(0.0, 1.0);
        match self {
            Channel::Hue => math::hsb_to_rgb(t * 360.0, 1.0, 1.0),
            Channel::Saturation => math::hsb_to_rgb(hue, t, value),
            Channel::Value => math::hsb_to_rgb(hue, saturation, t),
            #[cfg(feature = "alpha")]
            Channel::Alpha => math::hsb_to_rgb(hue, saturation, value),
        }
    }

    /// Cache key for the rasterized track: it only depends on the two ends.
    fn track_key(self, hue: f64, saturation: f64, value: f64) -> u64 {
        let pack = |(r, g, b): (f64, f64, f64)| {
            let ch = |v: f64| (v * 255.0 + 0.5) as u64;
            (ch(r) << 16) | (ch(g) << 8) | ch(b)
        };
        let start = pack(self.gradient_color(0.0, hue, saturation, value));
        let end = pack(self.gradient_color(1.0, hue, saturation, value));
        (start << 24) | end
    }
}

enum SliderUpdate {
    Value(f64),
    Base(f64, f64, f64),
}

pub struct ChannelSlider {
    id: ViewId,
    channel: Channel,
    held: bool,
    value: f64,
    base: (f64, f64, f64),
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    track: CachedImage,
}

/// Creates a slider for `channel` writing to `target`.
///
/// `hue` is in degrees; `saturation` and `value` are fractions. They are
/// read to paint the gradient; `target` is one of them unless the channel is
/// alpha.
pub fn channel_slider(
    channel: Channel,
    target: RwSignal<f64>,
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    value: RwSignal<f64>,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(SliderUpdate::Value(target.get()));
    });

    create_effect(move |_| {
        id.update_state(SliderUpdate::Base(hue.get(), saturation.get(), value.get()));
    });

    ChannelSlider {
        id,
        channel,
        held: false,
        value: target.get_untracked(),
        base: (
            hue.get_untracked(),
            saturation.get_untracked(),
            value.get_untracked(),
        ),
        size: Default::default(),
        on_change: Some(Box::new(move |v| target.set(v))),
        track: CachedImage::default(),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .flex_grow(1.0)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

/// Thumb x position for `fraction` along a track `width` wide.
pub(crate) fn thumb_x(fraction: f64, width: f64) -> f64 {
    let r = constants::THUMB_RADIUS;
    r + fraction.clamp(0.0, 1.0) * (width - 2.0 * r).max(0.0)
}

/// Inverse of [`thumb_x`]; `None` when the track is narrower than the thumb.
pub(crate) fn fraction_at(x: f64, width: f64) -> Option<f64> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    (usable > 0.0).then(|| ((x - r) / usable).clamp(0.0, 1.0))
}

fn paint_thumb(cx: &mut PaintCx, x: f64, cy: f64) {
    let radius = constants::THUMB_RADIUS;
    let shadow = Color::rgba8(0, 0, 0, 80);
    cx.stroke(&Circle::new((x, cy), radius), shadow, &Stroke::new(1.0));
    cx.stroke(&Circle::new((x, cy), radius - 1.5), Color::WHITE, &Stroke::new(2.0));
    cx.stroke(&Circle::new((x, cy), radius - 3.0), shadow, &Stroke::new(1.0));
}

impl ChannelSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(t) = fraction_at(x, self.size.width as f64) {
            self.value = t * self.channel.max();
        }
    }

    fn ensure_track_image(&mut self, scale: f64) {
        let (w, h) = (self.size.width as f64, self.size.height as f64);
        let dims = raster::physical_dims(w, h, scale);
        let (hue, saturation, value) = self.base;
        let channel = self.channel;
        let key = channel.track_key(hue, saturation, value);
        self.track.ensure(dims, key, || {
            let last = dims.0.saturating_sub(1).max(1) as f64;
            raster::rasterize(dims.0, dims.1, |p| {
                let t = (p.x - 0.5) / last;
                Some(raster::rgba8(
                    channel.gradient_color(t, hue, saturation, value),
                    1.0,
                ))
            })
        });
    }

    #[cfg(feature = "alpha")]
    fn paint_alpha_track(&self, cx: &mut PaintCx, rect: Rect) {
        checkerboard::paint_checkerboard(cx, rect, constants::CHECKER_CELL);
        let (hue, saturation, value) = self.base;
        let (r, g, b) = math::hsb_to_rgb(hue, saturation, value);
        let h = rect.height();
        let gradient = Gradient::new_linear((0.0, h / 2.0), (rect.width(), h / 2.0))
            .with_stops([Color::rgba(r, g, b, 0.0), Color::rgba(r, g, b, 1.0)]);
        // The renderer's rect fast path only takes solid brushes.
        cx.fill(&rect.to_path(0.1), &gradient, 0.0);
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Value(v) => self.value = v,
                SliderUpdate::Base(h, s, v) => self.base = (h, s, v),
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                if let Some(cb) = &self.on_change {
                    cb(self.value);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    if let Some(cb) = &self.on_change {
                        cb(self.value);
                    }
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
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
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        match self.channel {
            #[cfg(feature = "alpha")]
            Channel::Alpha => self.paint_alpha_track(cx, rect),
            _ => {
                let scale = cx.scale();
                self.ensure_track_image(scale);
                self.track.draw(cx, rect);
            }
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        paint_thumb(cx, thumb_x(self.value / self.channel.max(), w), h / 2.0);
    }
}

/// Stack of channel sliders, one per HSB channel plus alpha when the
/// `alpha` feature is on.
pub fn slider_picker(
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    value: RwSignal<f64>,
    alpha: RwSignal<f64>,
) -> impl IntoView {
    #[cfg(not(feature = "alpha"))]
    let _ = alpha;

    let row = move |channel: Channel, target: RwSignal<f64>| {
        h_stack((
            label(move || channel.label()).style(|s| {
                s.width(12.0)
                    .font_size(constants::LABEL_FONT)
                    .color(Color::rgb8(120, 120, 120))
            }),
            channel_slider(channel, target, hue, saturation, value),
        ))
        .style(|s| s.items_center().gap(constants::GAP / 2.0).width_full())
    };

    v_stack((
        row(Channel::Hue, hue),
        row(Channel::Saturation, saturation),
        row(Channel::Value, value),
        #[cfg(feature = "alpha")]
        row(Channel::Alpha, alpha),
    ))
    .style(|s| s.gap(constants::GAP).width_full())
}
