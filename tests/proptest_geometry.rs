//! Property-based tests for the shape mappers and drag clamping.

use floem::kurbo::{Point, Size};
use floem_shape_picker::{
    hue_to_offset, map_pointer, offset_to_hue, Annulus, Circle, FullRectangle, Hsb,
    NormalizedOffset, SvRectangle, SvTriangle, Triangle, Wheel,
};
use proptest::prelude::*;

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

fn closest_on_segment(p: Point, v: Point, w: Point) -> Point {
    // Coarse scan, then a fine scan around the best coarse sample.
    const STEPS: usize = 2000;
    let nearest = |from: f64, to: f64| {
        (0..=STEPS)
            .map(|i| from + (to - from) * i as f64 / STEPS as f64)
            .min_by(|s, t| v.lerp(w, *s).distance(p).total_cmp(&v.lerp(w, *t).distance(p)))
            .unwrap_or(from)
    };
    let step = 1.0 / STEPS as f64;
    let coarse = nearest(0.0, 1.0);
    let fine = nearest((coarse - step).max(0.0), (coarse + step).min(1.0));
    v.lerp(w, fine)
}

fn point_strategy(range: f64) -> impl Strategy<Value = Point> {
    (-range..range, -range..range).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn circle_color_round_trips(
        radius in 1.0f64..1000.0,
        hue in 0.0f64..360.0,
        saturation in 1.0f64..=100.0,
    ) {
        let circle = Circle::new(radius).unwrap();
        let color = Hsb::new(hue, saturation, 100.0).unwrap();
        let offset = circle.color_to_offset(&color).unwrap();
        let back = circle.position_to_color(offset);
        prop_assert!(hue_distance(back.hue(), hue) < 1e-3, "{} vs {}", back.hue(), hue);
        prop_assert!((back.saturation() - saturation).abs() < 1e-3);
        prop_assert_eq!(back.brightness(), 100.0);
    }

    #[test]
    fn circle_output_stays_in_range(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
        let circle = Circle::new(50.0).unwrap();
        let color = circle.position_to_color(NormalizedOffset::new(x, y).unwrap());
        prop_assert!((0.0..360.0).contains(&color.hue()));
        prop_assert!((0.0..=100.0).contains(&color.saturation()));
    }

    #[test]
    fn triangle_clamp_is_identity_inside_and_nearest_outside(p in point_strategy(300.0)) {
        let triangle = Triangle::inscribed(Size::new(200.0, 200.0)).unwrap();
        let clamped = triangle.clamp(p);
        if triangle.contains(p) {
            prop_assert_eq!(clamped, p);
        } else {
            let [a, b, c] = triangle.vertices();
            let edges = [(a, b), (b, c), (c, a)];
            let brute = edges
                .iter()
                .map(|&(v, w)| closest_on_segment(p, v, w).distance(p))
                .fold(f64::INFINITY, f64::min);
            let off_edge = edges
                .iter()
                .map(|&(v, w)| closest_on_segment(clamped, v, w).distance(clamped))
                .fold(f64::INFINITY, f64::min);
            prop_assert!(off_edge < 1e-3, "{clamped:?} is {off_edge} from every edge");
            prop_assert!(
                (clamped.distance(p) - brute).abs() < 1e-3,
                "clamped {} vs nearest {}",
                clamped.distance(p),
                brute
            );
        }
    }

    #[test]
    fn sv_triangle_round_trips(
        width in 20.0f64..600.0,
        height in 20.0f64..600.0,
        saturation in 0.0f64..=1.0,
        value in 0.01f64..=1.0,
    ) {
        let sv = SvTriangle::new(Size::new(width, height)).unwrap();
        let offset = sv.color_to_offset(saturation, value).unwrap();
        let back = sv.position_to_color(75.0, offset).unwrap();
        prop_assert!((back.brightness() / 100.0 - value).abs() < 1e-6);
        prop_assert!((back.saturation() / 100.0 - saturation).abs() < 1e-4);
        prop_assert_eq!(back.hue(), 75.0);
    }

    #[test]
    fn sv_rectangle_round_trips(saturation in 0.0f64..=1.0, value in 0.0f64..=1.0) {
        let offset = SvRectangle.color_to_offset(saturation, value).unwrap();
        let back = SvRectangle.position_to_color(300.0, offset).unwrap();
        prop_assert!((back.saturation() / 100.0 - saturation).abs() < 1e-9);
        prop_assert!((back.brightness() / 100.0 - value).abs() < 1e-9);
    }

    #[test]
    fn wheel_hue_survives_offset_round_trip(hue in 0.0f64..360.0) {
        let offset = hue_to_offset(hue).unwrap();
        let back = offset_to_hue(offset.to_point(), Point::new(0.5, 0.5));
        prop_assert!(hue_distance(back, hue) < 1e-9);
        prop_assert!((0.0..360.0).contains(&back));
    }

    #[test]
    fn wheel_indicator_sits_on_its_hue(
        side in 50.0f64..800.0,
        hue in 0.0f64..360.0,
    ) {
        let wheel = Wheel::new(Size::new(side, side), 0.12).unwrap();
        let p = wheel.position_for(hue).unwrap();
        prop_assert!(hue_distance(wheel.hue_at(p), hue) < 1e-6);
        prop_assert!(wheel.annulus().unwrap().contains(p));
    }

    #[test]
    fn annulus_clamp_lands_in_the_ring(p in point_strategy(200.0)) {
        let center = Point::new(10.0, -20.0);
        let annulus = Annulus::new(center, 80.0, 50.0).unwrap();
        let clamped = annulus.clamp(p);
        let distance = clamped.distance(center);
        prop_assert!(distance >= 50.0 - 1e-9 && distance <= 80.0 + 1e-9);
        if p.distance(center) > 1e-6 {
            let before = (p - center).atan2();
            let after = (clamped - center).atan2();
            prop_assert!((before - after).abs() < 1e-9);
        }
    }

    #[test]
    fn mapped_pointers_are_normalized(p in point_strategy(1000.0)) {
        let size = Size::new(240.0, 160.0);
        let sv = SvTriangle::new(size).unwrap();
        let offset = map_pointer(p, size, &sv).unwrap();
        prop_assert!((0.0..=1.0).contains(&offset.x()));
        prop_assert!((0.0..=1.0).contains(&offset.y()));
    }

    #[test]
    fn offsets_validate_their_range(x in -2.0f64..3.0, y in -2.0f64..3.0) {
        let inside = (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y);
        prop_assert_eq!(NormalizedOffset::new(x, y).is_ok(), inside);
    }
}

#[test]
fn offset_range_edges() {
    assert!(NormalizedOffset::new(0.0, 0.0).is_ok());
    assert!(NormalizedOffset::new(1.0, 1.0).is_ok());
    assert!(NormalizedOffset::new(-0.01, 0.5).is_err());
    assert!(NormalizedOffset::new(0.5, 1.5).is_err());
}

#[test]
fn wheel_recovers_listed_hues() {
    for hue in [0.0, 45.0, 90.0, 180.0, 270.0, 359.0] {
        let offset = hue_to_offset(hue).unwrap();
        let back = offset_to_hue(offset.to_point(), Point::new(0.5, 0.5));
        assert!(hue_distance(back, hue) < 1e-9, "{hue} came back as {back}");
    }
    let zero = hue_to_offset(0.0).unwrap();
    let full = hue_to_offset(360.0).unwrap();
    assert!((zero.x() - full.x()).abs() < 1e-12);
    assert!((zero.y() - full.y()).abs() < 1e-12);
}

#[test]
fn full_rectangle_saturation_profile() {
    let at = |y: f64| {
        FullRectangle
            .position_to_color(NormalizedOffset::new(0.3, y).unwrap())
            .saturation()
    };
    assert_eq!(at(0.0), 0.0);
    assert_eq!(at(1.0), 0.0);
    assert_eq!(at(0.5), 100.0);
}

#[test]
fn annulus_center_goes_to_inner_boundary() {
    let center = Point::new(50.0, 50.0);
    let annulus = Annulus::new(center, 50.0, 30.0).unwrap();
    let clamped = annulus.clamp(center);
    assert!((clamped.distance(center) - 30.0).abs() < 1e-9);
}

#[test]
fn degenerate_geometry_is_rejected() {
    assert!(Circle::new(0.0).is_err());
    assert!(Circle::new(-3.0).is_err());
    assert!(SvTriangle::new(Size::new(0.0, 100.0)).is_err());
    assert!(Wheel::new(Size::new(100.0, 100.0), 0.0).is_err());
    assert!(Wheel::new(Size::new(100.0, 100.0), 0.7).is_err());
    let collinear = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    assert!(Triangle::new(collinear).is_err());
}
