//! The picker panel: one picker shape plus swatch, hex field and component
//! rows for every color model.
//!
//! HSB signals are the panel's ground truth. They are written back to the
//! caller's color signal in whatever model that signal currently holds, and
//! external writes to the color signal flow back into them.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::AnyView;

use crate::circular_picker::circular_picker;
use crate::color::{ColorModel, ColorSpace, Cmyk, Hsb, Hsl, Rgb};
use crate::constants;
use crate::error::ValidationError;
use crate::inputs::{copy_button, hex_input, number_input};
use crate::math;
use crate::raster;
use crate::rectangular_picker::rectangular_picker;
use crate::slider::{channel_slider, slider_picker, Channel};
use crate::wheel_picker::{wheel_rectangle_picker, wheel_triangle_picker};

/// Which picker shape the panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerKind {
    /// Hue/saturation disc with a brightness slider below it.
    #[default]
    Circular,
    /// Full-spectrum HSL rectangle.
    Rectangular,
    WheelTriangle,
    WheelRectangle,
    /// One slider per channel.
    Sliders,
}

/// HSB state of the panel: hue in degrees, the rest as fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelHsb {
    pub(crate) hue: f64,
    pub(crate) saturation: f64,
    pub(crate) value: f64,
    pub(crate) alpha: f64,
}

/// Below this saturation or brightness (percent) a color's hue is noise.
const ACHROMATIC: f64 = 0.1;

impl PanelHsb {
    /// HSB of `color`. Gray and near-black colors keep `previous_hue` so the
    /// hue does not jump while dragging through them.
    pub(crate) fn from_color(color: &impl ColorSpace, previous_hue: f64) -> Self {
        let hsb = color.to_hsb();
        let achromatic = hsb.saturation() < ACHROMATIC || hsb.brightness() < ACHROMATIC;
        Self {
            hue: if achromatic { previous_hue } else { hsb.hue() },
            saturation: hsb.saturation() / 100.0,
            value: hsb.brightness() / 100.0,
            alpha: color.alpha() as f64 / 255.0,
        }
    }

    pub(crate) fn to_hsb(self) -> Hsb {
        Hsb::from_unit(self.hue, self.saturation, self.value)
            .with_alpha(math::to_channel(self.alpha))
    }
}

/// `color` expressed in the same model as `template`.
pub(crate) fn convert_like(template: &ColorModel, color: &impl ColorSpace) -> ColorModel {
    match template {
        ColorModel::Rgb(_) => color.to_rgb().into(),
        ColorModel::Hsl(_) => color.to_hsl().into(),
        ColorModel::Hsb(_) => color.to_hsb().into(),
        ColorModel::Cmyk(_) => color.to_cmyk().into(),
    }
}

/// The four HSB signals the picker views bind to.
#[derive(Clone, Copy)]
pub(crate) struct HsbSignals {
    pub(crate) hue: RwSignal<f64>,
    pub(crate) saturation: RwSignal<f64>,
    pub(crate) value: RwSignal<f64>,
    pub(crate) alpha: RwSignal<f64>,
}

impl HsbSignals {
    fn new(initial: PanelHsb) -> Self {
        Self {
            hue: RwSignal::new(initial.hue),
            saturation: RwSignal::new(initial.saturation),
            value: RwSignal::new(initial.value),
            alpha: RwSignal::new(initial.alpha),
        }
    }

    fn get(&self) -> PanelHsb {
        PanelHsb {
            hue: self.hue.get(),
            saturation: self.saturation.get(),
            value: self.value.get(),
            alpha: self.alpha.get(),
        }
    }

    fn get_untracked(&self) -> PanelHsb {
        PanelHsb {
            hue: self.hue.get_untracked(),
            saturation: self.saturation.get_untracked(),
            value: self.value.get_untracked(),
            alpha: self.alpha.get_untracked(),
        }
    }

    /// Write only the components that changed.
    fn set(&self, next: PanelHsb) {
        let current = self.get_untracked();
        if current.hue != next.hue {
            self.hue.set(next.hue);
        }
        if current.saturation != next.saturation {
            self.saturation.set(next.saturation);
        }
        if current.value != next.value {
            self.value.set(next.value);
        }
        if current.alpha != next.alpha {
            self.alpha.set(next.alpha);
        }
    }
}

fn picker_view(kind: PickerKind, hsb: HsbSignals) -> AnyView {
    let HsbSignals {
        hue,
        saturation,
        value,
        alpha,
    } = hsb;
    match kind {
        PickerKind::Circular => v_stack((
            circular_picker(hue, saturation, value),
            channel_slider(Channel::Value, value, hue, saturation, value),
        ))
        .style(|s| s.gap(constants::GAP))
        .into_any(),
        PickerKind::Rectangular => rectangular_picker(hue, saturation, value).into_any(),
        PickerKind::WheelTriangle => wheel_triangle_picker(hue, saturation, value).into_any(),
        PickerKind::WheelRectangle => wheel_rectangle_picker(hue, saturation, value).into_any(),
        PickerKind::Sliders => slider_picker(hue, saturation, value, alpha).into_any(),
    }
}

type Read = fn(&ColorModel) -> f64;
type Write = fn(&ColorModel, f64) -> Result<ColorModel, ValidationError>;

/// Numeric field for one component of a derived model. Edits are validated
/// by that model's constructor and written back in the caller's model.
fn component_input(
    lbl: &'static str,
    max: f64,
    color: RwSignal<ColorModel>,
    read: Read,
    write: Write,
) -> impl IntoView {
    number_input(lbl, move || read(&color.get()), max, move |v| {
        let current = color.get_untracked();
        match write(&current, v) {
            Ok(next) => color.set(convert_like(&current, &next)),
            Err(err) => tracing::warn!(%err, "component edit rejected"),
        }
    })
}

fn hsl_row(color: RwSignal<ColorModel>) -> impl IntoView {
    fn with(
        c: &ColorModel,
        f: impl FnOnce(Hsl) -> (f64, f64, f64),
    ) -> Result<ColorModel, ValidationError> {
        let (h, s, l) = f(c.to_hsl());
        Ok(Hsl::new(h, s, l)?.with_alpha(c.alpha()).into())
    }
    h_stack((
        component_input("H", 360.0, color, |c| c.to_hsl().hue(), |c, v| {
            with(c, |hsl| (v, hsl.saturation(), hsl.lightness()))
        }),
        component_input("S", 100.0, color, |c| c.to_hsl().saturation(), |c, v| {
            with(c, |hsl| (hsl.hue(), v, hsl.lightness()))
        }),
        component_input("L", 100.0, color, |c| c.to_hsl().lightness(), |c, v| {
            with(c, |hsl| (hsl.hue(), hsl.saturation(), v))
        }),
        copy_button(move || {
            let hsl = color.get().to_hsl();
            format!(
                "hsl({}, {}%, {}%)",
                hsl.hue().round(),
                hsl.saturation().round(),
                hsl.lightness().round()
            )
        }),
    ))
    .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center())
}

fn rgb_row(color: RwSignal<ColorModel>) -> impl IntoView {
    fn with(
        c: &ColorModel,
        f: impl FnOnce(Rgb) -> (i32, i32, i32),
    ) -> Result<ColorModel, ValidationError> {
        let (r, g, b) = f(c.to_rgb());
        Ok(Rgb::checked(r, g, b, c.alpha() as i32)?.into())
    }
    h_stack((
        component_input("R", 255.0, color, |c| c.to_rgb().red() as f64, |c, v| {
            with(c, |rgb| (v as i32, rgb.green() as i32, rgb.blue() as i32))
        }),
        component_input("G", 255.0, color, |c| c.to_rgb().green() as f64, |c, v| {
            with(c, |rgb| (rgb.red() as i32, v as i32, rgb.blue() as i32))
        }),
        component_input("B", 255.0, color, |c| c.to_rgb().blue() as f64, |c, v| {
            with(c, |rgb| (rgb.red() as i32, rgb.green() as i32, v as i32))
        }),
        copy_button(move || {
            let rgb = color.get().to_rgb();
            format!("rgb({}, {}, {})", rgb.red(), rgb.green(), rgb.blue())
        }),
    ))
    .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center())
}

fn cmyk_row(color: RwSignal<ColorModel>) -> impl IntoView {
    fn with(
        c: &ColorModel,
        f: impl FnOnce([i32; 4]) -> [i32; 4],
    ) -> Result<ColorModel, ValidationError> {
        let cmyk = c.to_cmyk();
        let inks = [cmyk.cyan(), cmyk.magenta(), cmyk.yellow(), cmyk.black()].map(i32::from);
        let [cy, m, y, k] = f(inks);
        Ok(Cmyk::new(cy, m, y, k)?.with_alpha(c.alpha()).into())
    }
    h_stack((
        component_input("C", 100.0, color, |c| c.to_cmyk().cyan() as f64, |c, v| {
            with(c, |[_, m, y, k]| [v as i32, m, y, k])
        }),
        component_input("M", 100.0, color, |c| c.to_cmyk().magenta() as f64, |c, v| {
            with(c, |[cy, _, y, k]| [cy, v as i32, y, k])
        }),
        component_input("Y", 100.0, color, |c| c.to_cmyk().yellow() as f64, |c, v| {
            with(c, |[cy, m, _, k]| [cy, m, v as i32, k])
        }),
        component_input("K", 100.0, color, |c| c.to_cmyk().black() as f64, |c, v| {
            with(c, |[cy, m, y, _]| [cy, m, y, v as i32])
        }),
        copy_button(move || {
            let cmyk = color.get().to_cmyk();
            format!(
                "cmyk({}%, {}%, {}%, {}%)",
                cmyk.cyan(),
                cmyk.magenta(),
                cmyk.yellow(),
                cmyk.black()
            )
        }),
    ))
    .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center())
}

fn hsb_row(hsb: HsbSignals) -> impl IntoView {
    let HsbSignals {
        hue,
        saturation,
        value,
        ..
    } = hsb;
    h_stack((
        number_input("H", move || hue.get(), 360.0, move |v| hue.set(v)),
        number_input(
            "S",
            move || saturation.get() * 100.0,
            100.0,
            move |v| saturation.set(v / 100.0),
        ),
        number_input(
            "B",
            move || value.get() * 100.0,
            100.0,
            move |v| value.set(v / 100.0),
        ),
        copy_button(move || {
            format!(
                "hsb({}, {}%, {}%)",
                hue.get().round(),
                (saturation.get() * 100.0).round(),
                (value.get() * 100.0).round(),
            )
        }),
    ))
    .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center())
}

/// Builds the panel around `color`.
pub(crate) fn color_editor(color: RwSignal<ColorModel>, kind: PickerKind) -> impl IntoView {
    let initial = color.get_untracked();
    let hsb = HsbSignals::new(PanelHsb::from_color(&initial, 0.0));
    let hex = RwSignal::new(initial.to_rgb().to_hex());

    let sync_hex = move |rgb: Rgb| {
        let formatted = rgb.to_hex();
        if hex.get_untracked() != formatted {
            hex.set(formatted);
        }
    };

    // HSB -> color
    create_effect(move |_| {
        let next = hsb.get().to_hsb();
        let current = color.get_untracked();
        if next.to_rgb() != current.to_rgb() {
            color.set(convert_like(&current, &next));
            sync_hex(next.to_rgb());
        }
    });

    // External color -> HSB
    create_effect(move |prev: Option<Rgb>| {
        let c = color.get();
        let rgb = c.to_rgb();
        if prev == Some(rgb) {
            return rgb;
        }
        sync_hex(rgb);
        let current = hsb.get_untracked();
        if current.to_hsb().to_rgb() != rgb {
            tracing::debug!(hex = %rgb.to_hex(), "color changed outside the picker");
            hsb.set(PanelHsb::from_color(&c, current.hue));
        }
        rgb
    });

    // Hex -> color
    create_effect(move |_| {
        let Some(rgb) = Rgb::from_hex(&hex.get()) else {
            return;
        };
        let current = color.get_untracked();
        if rgb != current.to_rgb() {
            color.set(convert_like(&current, &rgb));
        }
    });

    let swatch = empty().style(move |st| {
        st.width(32.0)
            .height(32.0)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180))
            .background(raster::to_color(color.get().to_rgb()))
    });

    v_stack((
        picker_view(kind, hsb).style(|s| s.margin_top(12.0)),
        #[cfg(feature = "alpha")]
        h_stack((
            channel_slider(Channel::Alpha, hsb.alpha, hsb.hue, hsb.saturation, hsb.value),
            number_input(
                "A",
                move || hsb.alpha.get() * 100.0,
                100.0,
                move |v| hsb.alpha.set(v / 100.0),
            ),
        ))
        .style(move |s| {
            s.gap(4.0)
                .items_center()
                .apply_if(kind == PickerKind::Sliders, |s| s.hide())
        }),
        h_stack((
            hex_input(hex),
            copy_button(move || hex.get()),
            empty().style(|s| s.flex_grow(1.0)),
            swatch,
        ))
        .style(|st| st.gap(constants::GAP).items_center()),
        hsb_row(hsb),
        hsl_row(color),
        rgb_row(color),
        cmyk_row(color),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(2.0)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_keeps_the_previous_hue() {
        let gray = Rgb::new(90, 90, 90);
        let panel = PanelHsb::from_color(&gray, 210.0);
        assert_eq!(panel.hue, 210.0);
        assert_eq!(panel.saturation, 0.0);
        assert!((panel.value - 90.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn chromatic_colors_take_their_own_hue() {
        let panel = PanelHsb::from_color(&Rgb::new(0, 255, 0), 10.0);
        assert!((panel.hue - 120.0).abs() < 1e-9);
        assert_eq!(panel.alpha, 1.0);
    }

    #[test]
    fn panel_state_survives_a_trip_through_hsb() {
        let panel = PanelHsb {
            hue: 200.0,
            saturation: 0.4,
            value: 0.8,
            alpha: 0.5,
        };
        let hsb = panel.to_hsb();
        assert_eq!(hsb.hue(), 200.0);
        assert!((hsb.saturation() - 40.0).abs() < 1e-9);
        assert_eq!(hsb.alpha(), 128);
    }

    #[test]
    fn convert_like_keeps_the_callers_model() {
        let red = Rgb::new(255, 0, 0);
        let template = ColorModel::Cmyk(Cmyk::new(0, 0, 0, 0).unwrap());
        match convert_like(&template, &red) {
            ColorModel::Cmyk(c) => {
                assert_eq!((c.cyan(), c.magenta(), c.yellow(), c.black()), (0, 100, 100, 0));
            }
            other => panic!("expected cmyk, got {other:?}"),
        }
        let template = ColorModel::Rgb(Rgb::default());
        assert_eq!(convert_like(&template, &red), ColorModel::Rgb(red));
    }
}
