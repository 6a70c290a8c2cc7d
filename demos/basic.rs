//! Standalone demo: opens a window with the picker panel.
//!
//! `cargo run --example basic -- wheel-triangle` picks the shape; the
//! default is the circular picker. Set `RUST_LOG=floem_shape_picker=debug`
//! to watch drags and edits.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_shape_picker::{color_picker, ColorModel, PickerKind, Rgb};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn kind_from_arg(arg: Option<&str>) -> PickerKind {
    match arg {
        Some("rectangular") => PickerKind::Rectangular,
        Some("wheel-triangle") => PickerKind::WheelTriangle,
        Some("wheel-rectangle") => PickerKind::WheelRectangle,
        Some("sliders") => PickerKind::Sliders,
        _ => PickerKind::Circular,
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "floem_shape_picker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let arg = std::env::args().nth(1);
    let kind = kind_from_arg(arg.as_deref());
    tracing::info!(?kind, "starting demo");

    let color = RwSignal::new(ColorModel::from(Rgb::new(59, 130, 246)));

    floem::Application::new()
        .window(
            move |_| {
                color_picker(color, kind).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 560.0))
                    .title("floem-shape-picker"),
            ),
        )
        .run();
}
