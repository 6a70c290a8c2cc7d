//! Conversions between the four color models through the public API.

use floem_shape_picker::{Cmyk, ColorModel, ColorSpace, Hsb, Hsl, Rgb};

const PRIMARIES: [(Rgb, f64); 3] = [
    (Rgb::new(255, 0, 0), 0.0),
    (Rgb::new(0, 255, 0), 120.0),
    (Rgb::new(0, 0, 255), 240.0),
];

#[test]
fn primaries_to_hsl() {
    for (rgb, hue) in PRIMARIES {
        assert_eq!(rgb.to_hsl(), Hsl::new(hue, 100.0, 50.0).unwrap(), "{rgb:?}");
    }
}

#[test]
fn primaries_to_hsb() {
    for (rgb, hue) in PRIMARIES {
        assert_eq!(rgb.to_hsb(), Hsb::new(hue, 100.0, 100.0).unwrap(), "{rgb:?}");
    }
}

#[test]
fn primaries_to_cmyk() {
    assert_eq!(Rgb::new(255, 0, 0).to_cmyk(), Cmyk::new(0, 100, 100, 0).unwrap());
    assert_eq!(Rgb::new(0, 255, 0).to_cmyk(), Cmyk::new(100, 0, 100, 0).unwrap());
    assert_eq!(Rgb::new(0, 0, 255).to_cmyk(), Cmyk::new(100, 100, 0, 0).unwrap());
}

#[test]
fn primaries_back_to_rgb() {
    for (rgb, hue) in PRIMARIES {
        assert_eq!(Hsl::new(hue, 100.0, 50.0).unwrap().to_rgb(), rgb);
        assert_eq!(Hsb::new(hue, 100.0, 100.0).unwrap().to_rgb(), rgb);
        assert_eq!(rgb.to_cmyk().to_rgb(), rgb);
    }
}

#[test]
fn secondaries_survive_every_model() {
    let secondaries = [
        Rgb::new(255, 255, 0),
        Rgb::new(0, 255, 255),
        Rgb::new(255, 0, 255),
    ];
    for rgb in secondaries {
        assert_eq!(rgb.to_hsl().to_rgb(), rgb);
        assert_eq!(rgb.to_hsb().to_rgb(), rgb);
        assert_eq!(rgb.to_cmyk().to_rgb(), rgb);
    }
}

#[test]
fn same_model_conversion_is_identity() {
    let rgb = Rgb::new(12, 200, 77).with_alpha(40);
    let hsl = Hsl::new(210.0, 35.5, 61.0).unwrap();
    let hsb = Hsb::new(33.0, 80.0, 12.5).unwrap();
    let cmyk = Cmyk::new(10, 20, 30, 40).unwrap();

    assert_eq!(rgb.to_rgb(), rgb);
    assert_eq!(hsl.to_hsl(), hsl);
    assert_eq!(hsb.to_hsb(), hsb);
    assert_eq!(cmyk.to_cmyk(), cmyk);

    for model in [
        ColorModel::from(rgb),
        ColorModel::from(hsl),
        ColorModel::from(hsb),
        ColorModel::from(cmyk),
    ] {
        match model {
            ColorModel::Rgb(c) => assert_eq!(model.to_rgb(), c),
            ColorModel::Hsl(c) => assert_eq!(model.to_hsl(), c),
            ColorModel::Hsb(c) => assert_eq!(model.to_hsb(), c),
            ColorModel::Cmyk(c) => assert_eq!(model.to_cmyk(), c),
        }
    }
}

#[test]
fn alpha_is_carried_across_models() {
    let rgb = Rgb::new(10, 20, 30).with_alpha(99);
    assert_eq!(rgb.to_hsl().alpha(), 99);
    assert_eq!(rgb.to_hsb().alpha(), 99);
    assert_eq!(rgb.to_cmyk().alpha(), 99);
    assert_eq!(rgb.to_cmyk().to_rgb().alpha(), 99);
}

#[test]
fn out_of_range_components_are_rejected() {
    assert!(Rgb::checked(256, 0, 0, 255).is_err());
    assert!(Rgb::checked(0, -1, 0, 255).is_err());
    assert!(Hsl::new(361.0, 50.0, 50.0).is_err());
    assert!(Hsb::new(0.0, 100.5, 50.0).is_err());
    assert!(Cmyk::new(0, 0, 0, 101).is_err());

    let err = Hsl::new(0.0, 0.0, -5.0).unwrap_err();
    assert!(err.to_string().contains("lightness"), "{err}");
}

#[test]
fn hex_formats() {
    let rgb = Rgb::from_hex("#3b82f6").unwrap();
    assert_eq!(rgb, Rgb::new(0x3B, 0x82, 0xF6));
    assert_eq!(rgb.to_hex(), "3B82F6");
    assert_eq!(Rgb::from_hex("fff").unwrap(), Rgb::WHITE);
    assert_eq!(Rgb::from_hex("00000080").unwrap().to_hex(), "00000080");
    assert!(Rgb::from_hex("12345").is_none());
    assert!(Rgb::from_hex("gg0000").is_none());
}

#[test]
fn indicator_contrasts_with_the_color_below() {
    assert_eq!(Rgb::WHITE.contrasting_indicator(), Rgb::BLACK);
    assert_eq!(Rgb::new(255, 255, 0).contrasting_indicator(), Rgb::BLACK);
    assert_eq!(Rgb::BLACK.contrasting_indicator(), Rgb::WHITE);
    assert_eq!(Rgb::new(0, 0, 255).contrasting_indicator(), Rgb::WHITE);
}
