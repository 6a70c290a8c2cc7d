//! Text inputs and the copy button used by the picker panel.

use std::rc::Rc;

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::style::Style;

use crate::color::Rgb;
use crate::constants;

fn field_style(s: Style, width: f32) -> Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

fn is_enter(event: &Event) -> bool {
    match event {
        Event::KeyDown(ke) => ke.key.logical_key == Key::Named(NamedKey::Enter),
        _ => false,
    }
}

/// Whole-number text for a displayed channel value.
pub(crate) fn format_display(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Parse typed text into a display value within `0..=max`.
pub(crate) fn parse_display(raw: &str, max: f64) -> Option<f64> {
    let num = raw.trim().parse::<f64>().ok()?;
    num.is_finite().then(|| num.clamp(0.0, max).round())
}

/// A labelled numeric field.
///
/// `value` yields the number to display; `commit` receives the typed number,
/// clamped to `0..=max`, on Enter or focus loss. Unparseable text snaps back.
pub(crate) fn number_input(
    lbl: &'static str,
    value: impl Fn() -> f64 + 'static,
    max: f64,
    commit: impl Fn(f64) + 'static,
) -> impl IntoView {
    let value = Rc::new(value);
    let text = RwSignal::new(String::new());

    let shown = value.clone();
    create_effect(move |_| {
        let display = format_display(shown());
        if text.get_untracked() != display {
            text.set(display);
        }
    });

    let on_commit = Rc::new(move || {
        let raw = text.get_untracked();
        let current = format_display(value());
        match parse_display(&raw, max) {
            Some(num) => {
                if format_display(num) != current {
                    commit(num);
                }
                let formatted = format_display(num);
                if raw != formatted {
                    text.set(formatted);
                }
            }
            None => {
                tracing::debug!(field = lbl, input = %raw, "not a number");
                text.set(current);
            }
        }
    });
    let on_enter = on_commit.clone();

    v_stack((
        text_input(text)
            .style(|s| field_style(s, constants::INPUT_WIDTH))
            .on_event_stop(EventListener::FocusLost, move |_| on_commit())
            .on_event(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_enter();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// Hex field bound to `hex`, which always holds [`Rgb::to_hex`] output.
///
/// Complete 6- or 8-digit values apply while typing; anything else is
/// checked on commit and reverted if it does not parse.
pub(crate) fn hex_input(hex: RwSignal<String>) -> impl IntoView {
    let text = RwSignal::new(hex.get_untracked());

    create_effect(move |_| {
        let val = hex.get();
        let typed = text.get_untracked();
        let same = Rgb::from_hex(&typed).map(|rgb| rgb.to_hex()) == Some(val.clone());
        if !same {
            text.set(val);
        }
    });

    create_effect(move |_| {
        let raw = text.get();
        let digits = raw.trim().trim_start_matches('#').len();
        if digits != 6 && digits != 8 {
            return;
        }
        if let Some(rgb) = Rgb::from_hex(&raw) {
            let formatted = rgb.to_hex();
            if hex.get_untracked() != formatted {
                hex.set(formatted);
            }
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match Rgb::from_hex(&raw) {
            Some(rgb) => {
                let formatted = rgb.to_hex();
                if raw != formatted {
                    text.set(formatted.clone());
                }
                if hex.get_untracked() != formatted {
                    hex.set(formatted);
                }
            }
            None => {
                tracing::warn!(input = %raw, "rejected hex color");
                text.set(hex.get_untracked());
            }
        }
    };

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| field_style(s, constants::HEX_INPUT_WIDTH))
            .on_event_stop(EventListener::FocusLost, move |_| on_commit())
            .on_event_stop(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_commit();
                }
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small button that copies `get_text()` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(EventListener::PointerDown, move |_| pressed.set(true))
    .on_event_stop(EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    match result {
        Ok(()) => tracing::debug!(%text, "copied to clipboard"),
        Err(err) => tracing::warn!(%err, "clipboard unavailable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_values_are_whole_numbers() {
        assert_eq!(format_display(42.4), "42");
        assert_eq!(format_display(42.5), "43");
        assert_eq!(format_display(0.0), "0");
    }

    #[test]
    fn parsed_values_are_clamped_and_rounded() {
        assert_eq!(parse_display(" 12.6 ", 100.0), Some(13.0));
        assert_eq!(parse_display("400", 360.0), Some(360.0));
        assert_eq!(parse_display("-3", 255.0), Some(0.0));
        assert_eq!(parse_display("abc", 100.0), None);
        assert_eq!(parse_display("NaN", 100.0), None);
    }
}
